// Error types shared by the GUI and the headless client
use thiserror::Error;

/// Everything that can go wrong between pressing submit and rendering a result.
///
/// The `Display` output is exactly what the form shows after its `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// No response was received (connection refused, reset, DNS...).
    #[error("{0}")]
    Transport(String),
    /// 2xx status but the body is not JSON.
    #[error("{0}")]
    Malformed(String),
}

/// Renders `e` followed by every `source()` below it, joined with `": "`.
///
/// reqwest keeps the actual cause (e.g. "Connection refused") in the source chain,
/// its own `Display` only names the request. Segments repeated verbatim are skipped.
pub fn error_chain(e: &dyn std::error::Error) -> String {
    let mut parts = vec![e.to_string()];
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !parts.contains(&text) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return SubmitError::Malformed(error_chain(&e));
        }
        SubmitError::Transport(error_chain(&e))
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        SubmitError::Malformed(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
