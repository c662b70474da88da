//! Error types for fetching and applying catalog data

use crate::state::Resource;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Offer not found: {0}")]
    NotFound(String),

    /// A newer request for the same resource was issued before this one resolved
    #[error("Stale response for {0} discarded")]
    StaleResponse(Resource),

    #[error("Review rejected: {0}")]
    Validation(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DataError {
    /// Stale responses are dropped silently rather than shown to the user
    pub fn is_stale(&self) -> bool {
        matches!(self, DataError::StaleResponse(_))
    }
}
