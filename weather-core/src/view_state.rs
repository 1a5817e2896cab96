//! The single weather view: city input plus the state of the latest lookup.
//!
//! Updates are unidirectional. [`WeatherView::submit`] hands out a [`Ticket`]
//! describing the lookup to run; whoever runs it feeds the outcome back via
//! [`WeatherView::apply`]. Only the most recent ticket can change the state,
//! so when submissions overlap the latest one wins and earlier responses are
//! dropped on arrival.

use tracing::debug;

use crate::{CityQuery, FetchError, RequestState, WeatherSummary};

/// One issued lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub city: CityQuery,
}

/// Outcome of the lookup described by `ticket`.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub ticket: Ticket,
    pub outcome: Result<WeatherSummary, FetchError>,
}

#[derive(Debug, Default)]
pub struct WeatherView {
    city: String,
    state: RequestState,
    latest: u64,
}

impl WeatherView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Replace the input text verbatim.
    pub fn set_city(&mut self, text: impl Into<String>) {
        self.city = text.into();
    }

    /// Start a lookup for the current input.
    ///
    /// Blank input moves straight to the validation error and returns `None`.
    /// Either way any outstanding ticket is superseded.
    pub fn submit(&mut self) -> Option<Ticket> {
        self.latest += 1;

        match CityQuery::parse(&self.city) {
            Ok(city) => {
                debug!(ticket = self.latest, %city, "lookup submitted");
                self.state = RequestState::Loading;
                Some(Ticket { id: self.latest, city })
            }
            Err(err) => {
                self.state = RequestState::Error(err);
                None
            }
        }
    }

    /// Apply a finished lookup. Returns `false` when the completion was stale
    /// and left the state untouched.
    pub fn apply(&mut self, completion: Completion) -> bool {
        if completion.ticket.id != self.latest || !self.state.is_loading() {
            debug!(
                ticket = completion.ticket.id,
                latest = self.latest,
                "discarding stale lookup result"
            );
            return false;
        }

        self.state = match completion.outcome {
            Ok(summary) => RequestState::Success(summary),
            Err(err) => RequestState::Error(err),
        };
        true
    }
}
