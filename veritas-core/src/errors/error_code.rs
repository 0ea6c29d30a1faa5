//! VeritasErrorCode trait for host-boundary conversion.

/// Trait for converting Veritas errors to stable error-code strings.
/// Every error enum implements this so the platform's API layer can
/// surface a structured code alongside the human-readable message.
pub trait VeritasErrorCode {
    /// Returns the stable error code string (e.g., "CATALOG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the host boundary.
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const SCORING_ERROR: &str = "SCORING_ERROR";
pub const RESPONSE_ERROR: &str = "RESPONSE_ERROR";
pub const ANALYSIS_ERROR: &str = "ANALYSIS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
