//! Presentation derived from a [`WeatherView`]. Nothing here touches state.

use std::fmt;

use crate::{
    RequestState, WeatherSummary,
    icon::{Glyph, glyph_for_icon},
    view_state::WeatherView,
};

pub const TITLE: &str = "Weather Watch";
pub const PLACEHOLDER: &str = "Enter city name (e.g., London)";
pub const LOADING_TEXT: &str = "Fetching weather data...";

const BUTTON_IDLE: &str = "Get Weather";
const BUTTON_BUSY: &str = "Searching...";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub heading: String,
    pub glyph: Glyph,
    pub description: String,
    pub temperature: String,
    pub humidity: String,
}

impl From<&WeatherSummary> for ResultPanel {
    fn from(summary: &WeatherSummary) -> Self {
        Self {
            heading: format!("{}, {}", summary.name, summary.country),
            glyph: glyph_for_icon(&summary.icon),
            description: summary.description.clone(),
            temperature: format!("Temperature: {:.1}°C", summary.temperature_c),
            humidity: format!("Humidity: {}%", summary.humidity_pct),
        }
    }
}

/// The one status area below the input. Being a single enum, the loading
/// line, the error and the result can never be shown together.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Empty,
    Loading(&'static str),
    Error(String),
    Result(ResultPanel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub input: String,
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub panel: Panel,
}

pub fn render(view: &WeatherView) -> Screen {
    let loading = view.state().is_loading();

    let panel = match view.state() {
        RequestState::Idle => Panel::Empty,
        RequestState::Loading => Panel::Loading(LOADING_TEXT),
        RequestState::Error(err) => Panel::Error(err.to_string()),
        RequestState::Success(summary) => Panel::Result(ResultPanel::from(summary)),
    };

    Screen {
        title: TITLE,
        placeholder: PLACEHOLDER,
        input: view.city().to_string(),
        button_label: if loading { BUTTON_BUSY } else { BUTTON_IDLE },
        button_enabled: !loading,
        panel,
    }
}

impl ResultPanel {
    /// Multi-line text of the panel; the glyph is coloured when `colors` is set.
    pub fn render_text(&self, colors: bool) -> String {
        format!(
            "{}\n{}  {}\n{}\n{}",
            self.heading,
            self.glyph.paint(colors),
            self.description,
            self.temperature,
            self.humidity
        )
    }
}

/// Colours follow the terminal's capabilities.
impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text(console::colors_enabled()))
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Empty => Ok(()),
            Panel::Loading(text) => f.write_str(text),
            Panel::Error(msg) => f.write_str(msg),
            Panel::Result(result) => fmt::Display::fmt(result, f),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.panel, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FetchError,
        icon::{Shape, Tint},
        view_state::Completion,
    };

    fn london() -> WeatherSummary {
        WeatherSummary {
            name: "London".into(),
            country: "GB".into(),
            temperature_c: 15.3,
            humidity_pct: 72,
            description: "clear sky".into(),
            icon: "01d".into(),
        }
    }

    fn finished(outcome: Result<WeatherSummary, FetchError>) -> WeatherView {
        let mut view = WeatherView::new();
        view.set_city("London");
        let ticket = view.submit().unwrap();
        view.apply(Completion { ticket, outcome });
        view
    }

    #[test]
    fn idle_screen() {
        let screen = render(&WeatherView::new());
        assert_eq!(screen.title, "Weather Watch");
        assert_eq!(screen.placeholder, "Enter city name (e.g., London)");
        assert_eq!(screen.button_label, "Get Weather");
        assert!(screen.button_enabled);
        assert_eq!(screen.panel, Panel::Empty);
        assert_eq!(screen.to_string(), "");
    }

    #[test]
    fn loading_disables_button() {
        let mut view = WeatherView::new();
        view.set_city("London");
        view.submit();

        let screen = render(&view);
        assert_eq!(screen.button_label, "Searching...");
        assert!(!screen.button_enabled);
        assert_eq!(screen.panel, Panel::Loading("Fetching weather data..."));
        assert_eq!(screen.input, "London");
    }

    #[test]
    fn london_result() {
        let screen = render(&finished(Ok(london())));
        let Panel::Result(result) = &screen.panel else {
            panic!("expected a result panel, got {:?}", screen.panel);
        };

        assert_eq!(result.heading, "London, GB");
        assert_eq!(result.glyph, Glyph { shape: Shape::Sun, tint: Tint::Yellow });
        assert_eq!(result.description, "clear sky");
        assert_eq!(result.temperature, "Temperature: 15.3°C");
        assert_eq!(result.humidity, "Humidity: 72%");
        assert!(screen.button_enabled);

        assert_eq!(
            result.render_text(false),
            "London, GB\n☀  clear sky\nTemperature: 15.3°C\nHumidity: 72%"
        );
    }

    #[test]
    fn rain_and_thunderstorm_render_differently() {
        let panel = |icon: &str| {
            let mut summary = london();
            summary.icon = icon.into();
            ResultPanel::from(&summary).render_text(true)
        };

        assert_ne!(panel("10d"), panel("11d"));
        assert_ne!(panel("13d"), panel("03d"));
        assert_ne!(panel("01d"), panel("99d"));
        assert!(panel("11d").contains("🌧"));
    }

    #[test]
    fn temperature_has_one_decimal() {
        let mut summary = london();
        summary.temperature_c = -3.0;
        assert_eq!(ResultPanel::from(&summary).temperature, "Temperature: -3.0°C");

        summary.temperature_c = 21.46;
        assert_eq!(ResultPanel::from(&summary).temperature, "Temperature: 21.5°C");
    }

    #[test]
    fn error_panel_shows_message() {
        let screen = render(&finished(Err(FetchError::provider(Some("city not found")))));
        assert_eq!(screen.panel, Panel::Error("Error: city not found".into()));
        assert_eq!(screen.to_string(), "Error: city not found");
    }

    #[test]
    fn validation_error_panel() {
        let mut view = WeatherView::new();
        view.set_city("  ");
        view.submit();

        assert_eq!(render(&view).panel, Panel::Error("Please enter a city name.".into()));
    }
}
