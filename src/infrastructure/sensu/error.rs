use thiserror::Error;

/// Failures talking to the Sensu API.
///
/// Non-success HTTP statuses are not errors at the adapter level; handlers
/// branch on them. `RequestFailed` exists for the one command that treats a
/// bad status as fatal.
#[derive(Debug, Error)]
pub enum SensuError {
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status the command cannot recover from.
    #[error("Sensu request to {url} failed with HTTP {status}")]
    RequestFailed { url: String, status: u16 },

    /// A success body that did not have the expected shape.
    #[error("Unexpected response body from {url}: {message}")]
    Decode { url: String, message: String },
}

impl SensuError {
    /// Returns `true` if this is a timeout rather than a refused/unreachable host.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}
