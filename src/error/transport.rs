use thiserror::Error;

/// Per-attempt HTTP failures. Counted into the run statistics, never
/// propagated past the worker loop.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("Connection failed: {source}")]
    Connect {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to read response body: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request failed: {message}")]
    Other { message: String },
}

impl TransportError {
    #[must_use]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout { source: err }
        } else if err.is_connect() {
            TransportError::Connect { source: err }
        } else if err.is_body() || err.is_decode() {
            TransportError::Body { source: err }
        } else {
            TransportError::Request { source: err }
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }
}
