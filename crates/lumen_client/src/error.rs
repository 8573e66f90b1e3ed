use reqwest::StatusCode;
use thiserror::Error;

/// Why a request to the Lumen service produced no usable response.
///
/// Pollers and commands catch every variant at their own boundary; none of
/// them reaches the caller of the agent.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error! status: {status} for {endpoint}")]
    Status { endpoint: String, status: StatusCode },
    #[error("malformed response body from {endpoint}: {source}")]
    Format {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot build request url for {endpoint}: {reason}")]
    InvalidUrl { endpoint: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Status,
    Format,
    InvalidUrl,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::Transport => "transport",
            FetchErrorKind::Status => "status",
            FetchErrorKind::Format => "format",
            FetchErrorKind::InvalidUrl => "invalid_url",
        }
    }
}

impl FetchError {
    pub fn endpoint(&self) -> &str {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Format { endpoint, .. }
            | FetchError::InvalidUrl { endpoint, .. } => endpoint,
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Status { .. } => FetchErrorKind::Status,
            FetchError::Format { .. } => FetchErrorKind::Format,
            FetchError::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
        }
    }
}
