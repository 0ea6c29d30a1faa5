//! Validity analyzer thresholds.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Thresholds for distortion and attention checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidityConfig {
    /// Added to social desirability bias per endorsed fake-good item.
    pub fake_good_increment: u8,
    /// Added to impression management per endorsed fake-bad item.
    pub fake_bad_increment: u8,
    /// Distortion score forcing a `low` verdict.
    pub distortion_high: u8,
    /// Distortion score capping the verdict at `medium`.
    pub distortion_moderate: u8,
    /// Consistency below this caps the verdict at `medium`.
    pub consistency_low: u8,
    /// Consecutive Likert responses per straight-lining window.
    pub straightline_window: usize,
    /// Minimum window population variance counting as engaged.
    pub straightline_min_variance: f64,
    /// Median per-item latency below this raises the speed warning.
    pub min_item_response_ms: u32,
}

impl Default for ValidityConfig {
    fn default() -> Self {
        Self {
            fake_good_increment: constants::FAKE_GOOD_INCREMENT,
            fake_bad_increment: constants::FAKE_BAD_INCREMENT,
            distortion_high: constants::DISTORTION_HIGH,
            distortion_moderate: constants::DISTORTION_MODERATE,
            consistency_low: constants::CONSISTENCY_LOW,
            straightline_window: constants::STRAIGHTLINE_WINDOW,
            straightline_min_variance: constants::STRAIGHTLINE_MIN_VARIANCE,
            min_item_response_ms: constants::MIN_ITEM_RESPONSE_MS,
        }
    }
}

impl ValidityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.straightline_window < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "straightline_window".into(),
                message: "window must cover at least 2 responses".into(),
            });
        }
        if self.straightline_min_variance < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "straightline_min_variance".into(),
                message: "variance floor cannot be negative".into(),
            });
        }
        if self.distortion_moderate >= self.distortion_high {
            return Err(ConfigError::ValidationFailed {
                field: "distortion_moderate".into(),
                message: format!(
                    "moderate threshold {} must be below high threshold {}",
                    self.distortion_moderate, self.distortion_high
                ),
            });
        }
        Ok(())
    }
}
