use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned status {status}: {message}")]
    Status { status: String, message: String },

    #[error("No travel time from {origin} to {destination}: {status}")]
    Element {
        origin: String,
        destination: String,
        status: String,
    },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Expected a {expected_rows}x{expected_cols} matrix, got {rows}x{cols}")]
    Shape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid location {0:?}, expected \"lat,lng\"")]
    InvalidLocation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Whether the failure is transient and the request may be sent again.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Request(err) => !err.is_builder(),
            ProviderError::Api { status, .. } => *status >= 500 || *status == 429,
            ProviderError::Status { status, .. } => {
                matches!(status.as_str(), "OVER_QUERY_LIMIT" | "UNKNOWN_ERROR")
            }
            ProviderError::Malformed(_) => true,
            ProviderError::Element { .. }
            | ProviderError::Shape { .. }
            | ProviderError::InvalidLocation(_)
            | ProviderError::Configuration(_) => false,
        }
    }
}
