//! Item catalog construction errors.

use super::error_code::{self, VeritasErrorCode};

/// Errors raised while validating an item catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate item id: {item_id}")]
    DuplicateItemId { item_id: String },

    #[error("Item {item_id} pairs with unknown item {paired_item_id}")]
    DanglingPair {
        item_id: String,
        paired_item_id: String,
    },

    #[error("Likert item {item_id} declares no dimension")]
    MissingDimension { item_id: String },

    #[error("Forced-choice item {item_id} has no options")]
    NoOptions { item_id: String },

    #[error("Distortion item {item_id} declares no distortion type")]
    MissingDistortionType { item_id: String },

    #[error("Random-check item {item_id} has no valid answer key")]
    MissingAnswerKey { item_id: String },
}

impl VeritasErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
