//! Response-set construction errors.

use super::error_code::{self, VeritasErrorCode};

/// Contract violations in the raw response set.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Duplicate response for item {item_id}")]
    DuplicateResponse { item_id: String },
}

impl VeritasErrorCode for ResponseError {
    fn error_code(&self) -> &'static str {
        error_code::RESPONSE_ERROR
    }
}
