use thiserror::Error;

use crate::search::SearchRegion;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Subregion {name:?} not found in {region}")]
    SubregionNotFound { region: SearchRegion, name: String },

    #[error("Malformed response: {0}")]
    Malformed(String),
}
