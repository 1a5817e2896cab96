use thiserror::Error;

/// Shown when the provider rejects a request without a usable `message`.
pub const FALLBACK_MESSAGE: &str = "Could not fetch weather data. Please try again.";

/// Everything that can end a lookup without a result.
///
/// The `Display` output is the exact text the view shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Blank city input; never reaches the network.
    #[error("Please enter a city name.")]
    EmptyCity,

    /// Non-2xx response from the provider.
    #[error("Error: {0}")]
    Provider(String),

    /// The request could not be sent or the body could not be read.
    #[error("Error: {0}")]
    Transport(String),

    /// A 2xx body that does not have the expected shape.
    #[error("Error: {0}")]
    Malformed(String),

    /// The lookup task died before producing an outcome.
    #[error("Error: {0}")]
    Unexpected(String),
}

impl FetchError {
    /// Provider error carrying `message`, or the generic fallback when the
    /// provider did not supply one.
    pub fn provider(message: Option<&str>) -> Self {
        match message {
            Some(msg) if !msg.trim().is_empty() => FetchError::Provider(msg.to_string()),
            _ => FetchError::Provider(FALLBACK_MESSAGE.to_string()),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // The URL carries the credential.
        FetchError::Transport(error_chain(&err.without_url()))
    }
}

/// `err` followed by each of its sources, joined with `": "`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
