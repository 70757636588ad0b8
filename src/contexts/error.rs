/// Errors raised while fetching autocomplete suggestions.
///
/// All variants mean the same thing to the widget ("the fetch failed"). They
/// only differ in the message handed to the owner through `on_error`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// The provider answered with a non-success status
    #[error("Geocoder returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The body was not a list of features
    #[error("Invalid autocomplete response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            SearchError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            SearchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Parse(err.to_string())
    }
}

/// Result type for autocomplete operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors raised while loading the geocoder settings file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}
