//! Per-subsystem error enums.
//!
//! Missing data is never an error in Veritas — it surfaces as status
//! flags (`insufficient_data`, `insufficient_sample`) on derived
//! records. Errors here are input-contract violations: they indicate a
//! caller bug and fail one computation loudly. Nothing is retried
//! internally; the engine is deterministic.

pub mod analysis_error;
pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod response_error;
pub mod scoring_error;

pub use analysis_error::AnalysisError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::VeritasErrorCode;
pub use response_error::ResponseError;
pub use scoring_error::ScoringError;
