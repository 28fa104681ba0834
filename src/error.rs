use thiserror::Error;

/// The one failure the page knows about. Both variants are logged and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("content fetch failed: request error: {0}")]
    Request(String),

    #[error("content fetch failed: could not decode body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}
