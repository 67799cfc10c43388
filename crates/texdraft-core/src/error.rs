use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum TexdraftError {
    // Resolution errors
    #[error("RESOURCE_UNAVAILABLE: '{resource}' cannot be resolved: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    #[error("DECODE_ERROR: '{resource}' is not valid UTF-8: {reason}")]
    DecodeError { resource: String, reason: String },
}

impl From<StoreError> for TexdraftError {
    fn from(err: StoreError) -> Self {
        TexdraftError::ResourceUnavailable {
            resource: err.id().to_string(),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TexdraftError>;
