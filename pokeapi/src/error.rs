use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("network is unreachable")]
    NetworkUnavailable,
    #[error("request failed: {0}")]
    FetchFailed(Arc<reqwest::Error>),
    #[error("storage failed: {0}")]
    StorageFailed(Arc<std::io::Error>),
    #[error("damage relations are unavailable")]
    DataUnavailable,
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::FetchFailed(Arc::new(error))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::StorageFailed(Arc::new(error))
    }
}
