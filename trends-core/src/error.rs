use thiserror::Error;

/// Failure taxonomy for everything the core library does on behalf of the CLI.
///
/// Fetch errors are values, never panics: the CLI decides whether a failure
/// aborts the report (forecast) or is absorbed (per-month history).
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport-level problem: timeout, DNS, connection refused.
    #[error("network error talking to the weather provider: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    /// The provider answered 200 but the payload was missing required fields.
    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot render a trend chart from an empty forecast series")]
    EmptySeries,

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl WeatherError {
    /// Message suitable for the end of a report, preferring the provider's
    /// own wording when it gave one.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            WeatherError::Provider { message, .. } => Some(message),
            _ => None,
        }
    }
}
