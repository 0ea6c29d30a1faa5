//! Aggregate (bias/fairness) analysis errors.

use super::error_code::{self, VeritasErrorCode};

/// Contract violations in a population-level analysis request.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("No attempts for {assessment_type} within the requested timeframe")]
    EmptyPopulation { assessment_type: String },

    #[error("Invalid timeframe: start {start} is not before end {end}")]
    InvalidTimeframe { start: String, end: String },
}

impl VeritasErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYSIS_ERROR
    }
}
