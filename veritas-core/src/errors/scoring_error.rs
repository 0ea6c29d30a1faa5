//! Dimension scoring errors.

use super::error_code::{self, VeritasErrorCode};

/// Contract violations detected while scoring one attempt.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("Response references unknown item {item_id}")]
    UnknownItem { item_id: String },

    #[error("Likert value {value} for item {item_id} outside scale {min}..={max}")]
    ValueOutOfScale {
        item_id: String,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("Choice index {index} for item {item_id} out of range ({options} options)")]
    ChoiceOutOfRange {
        item_id: String,
        index: usize,
        options: usize,
    },

    #[error("Item {item_id} answered with the wrong response format")]
    ValueTypeMismatch { item_id: String },
}

impl VeritasErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        error_code::SCORING_ERROR
    }
}
