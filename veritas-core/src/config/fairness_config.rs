//! Fairness analyzer thresholds.
//!
//! Jurisdictions tune these: the severity bands and the sample floor
//! are deliberately configuration, never business logic.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;
use crate::types::BiasSeverity;

/// One step of the severity table: ratio at or above `floor` maps to
/// `severity`. Bands are ordered descending by floor; a ratio below
/// every floor is `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityBand {
    pub floor: u8,
    pub severity: BiasSeverity,
}

/// Thresholds for adverse-impact analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FairnessConfig {
    /// Four-fifths rule threshold. Ratio >= this passes (boundary inclusive).
    pub four_fifths_threshold: u8,
    /// Minimum respondents per demographic group.
    pub min_group_size: usize,
    /// Ordered step function from ratio to severity.
    pub severity_bands: Vec<SeverityBand>,
    /// EEO check: minimum adverse-impact ratio.
    pub eeo_min_ratio: u8,
    /// ADA check: minimum absolute pass rate of the lowest group.
    pub ada_min_pass_rate: u8,
}

impl Default for FairnessConfig {
    fn default() -> Self {
        Self {
            four_fifths_threshold: constants::FOUR_FIFTHS_THRESHOLD,
            min_group_size: constants::MIN_GROUP_SIZE,
            severity_bands: vec![
                SeverityBand {
                    floor: 90,
                    severity: BiasSeverity::Low,
                },
                SeverityBand {
                    floor: 80,
                    severity: BiasSeverity::Medium,
                },
                SeverityBand {
                    floor: 50,
                    severity: BiasSeverity::High,
                },
            ],
            eeo_min_ratio: constants::EEO_MIN_RATIO,
            ada_min_pass_rate: constants::ADA_MIN_PASS_RATE,
        }
    }
}

impl FairnessConfig {
    /// Band a ratio through the severity table, first match wins.
    pub fn severity_for(&self, ratio: u8) -> BiasSeverity {
        for band in &self.severity_bands {
            if ratio >= band.floor {
                return band.severity;
            }
        }
        BiasSeverity::Critical
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_group_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "min_group_size".into(),
                message: "sample floor of 0 would permit empty groups".into(),
            });
        }
        if self.severity_bands.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "severity_bands".into(),
                message: "at least one band is required".into(),
            });
        }
        for pair in self.severity_bands.windows(2) {
            if pair[0].floor <= pair[1].floor {
                return Err(ConfigError::ValidationFailed {
                    field: "severity_bands".into(),
                    message: format!(
                        "floors must strictly descend, got {} then {}",
                        pair[0].floor, pair[1].floor
                    ),
                });
            }
        }
        Ok(())
    }
}
