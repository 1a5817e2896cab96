//! Core library for `weather-watch`.
//!
//! This crate defines:
//! - The weather view state machine and its renderer
//! - The OpenWeather provider behind the `WeatherProvider` trait
//! - Configuration & credentials handling
//!
//! The terminal front end lives in `weather-watch`; nothing here prints.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod view;
pub mod view_state;

pub use config::Config;
pub use coordinator::FetchCoordinator;
pub use error::FetchError;
pub use icon::{Glyph, glyph_for_icon};
pub use model::{CityQuery, RequestState, WeatherSummary};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use view::{Panel, Screen, render};
pub use view_state::{Completion, Ticket, WeatherView};
