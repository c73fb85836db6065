use thiserror::Error;

/// Fatal startup problems. Nothing has been scanned or queried yet when
/// one of these is raised.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set; export it or add it to a .env file")]
    MissingApiKey(&'static str),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Problems with the scan directory itself. Per-file read failures are
/// not represented here; they degrade to an unreadable row for that file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan path does not exist: {0}")]
    Missing(String),
    #[error("scan path is not a directory: {0}")]
    NotADirectory(String),
    #[error("failed to read scan directory {0}: {1}")]
    Unreadable(String, String),
    #[error("hashing worker failed: {0}")]
    Worker(String),
}

/// A failed catalog batch lookup. Any variant empties that catalog's
/// contribution for the whole run; the other catalog is unaffected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected status: HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Protocol(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            CatalogError::Timeout
        } else if error.is_decode() {
            CatalogError::Protocol(error.to_string())
        } else {
            CatalogError::Network(error.to_string())
        }
    }
}
