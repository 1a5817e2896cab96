use std::fmt;

use crate::error::FetchError;

/// A city name that is safe to send: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FetchError::EmptyCity);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current conditions for one location, as reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    pub name: String,
    pub country: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub description: String,
    /// Provider icon id, e.g. "01d".
    pub icon: String,
}

/// Lifecycle of the most recent lookup. Exactly one variant holds at a time,
/// so a result and an error can never be shown together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(WeatherSummary),
    Error(FetchError),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn summary(&self) -> Option<&WeatherSummary> {
        match self {
            RequestState::Success(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            RequestState::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_query_trims() {
        let q = CityQuery::parse("  London \t").unwrap();
        assert_eq!(q.as_str(), "London");
    }

    #[test]
    fn city_query_rejects_blank() {
        for input in ["", "   ", "\t\n"] {
            assert_eq!(CityQuery::parse(input), Err(FetchError::EmptyCity));
        }
    }

    #[test]
    fn city_query_keeps_inner_whitespace() {
        let q = CityQuery::parse(" New York ").unwrap();
        assert_eq!(q.to_string(), "New York");
    }

    #[test]
    fn request_state_accessors() {
        assert!(RequestState::Loading.is_loading());
        assert!(RequestState::Idle.summary().is_none());

        let err = RequestState::Error(FetchError::EmptyCity);
        assert_eq!(err.error(), Some(&FetchError::EmptyCity));
        assert!(!err.is_loading());
    }
}
