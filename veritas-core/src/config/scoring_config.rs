//! Level and risk banding tables.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;
use crate::types::{RiskLevel, ScoreLevel};

/// Level banding cut points for dimension percentages.
///
/// Below `moderate` is low/developing. Every assessment type ships its
/// own table; these defaults match the platform's most common one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelThresholds {
    pub moderate: u8,
    pub high: u8,
    pub exceptional: u8,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            moderate: constants::LEVEL_MODERATE,
            high: constants::LEVEL_HIGH,
            exceptional: constants::LEVEL_EXCEPTIONAL,
        }
    }
}

impl LevelThresholds {
    /// Band a percentage. Ordered guard clauses, highest first.
    pub fn level_for(&self, percentage: u8) -> ScoreLevel {
        if percentage >= self.exceptional {
            ScoreLevel::Exceptional
        } else if percentage >= self.high {
            ScoreLevel::High
        } else if percentage >= self.moderate {
            ScoreLevel::Moderate
        } else {
            ScoreLevel::Low
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.moderate >= self.high || self.high >= self.exceptional {
            return Err(ConfigError::ValidationFailed {
                field: "level_thresholds".into(),
                message: format!(
                    "cut points must ascend: moderate {} < high {} < exceptional {}",
                    self.moderate, self.high, self.exceptional
                ),
            });
        }
        Ok(())
    }
}

/// Risk banding over the lowest risk-relevant dimension percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBands {
    pub low_min: u8,
    pub moderate_min: u8,
    pub high_min: u8,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            low_min: constants::RISK_LOW_MIN,
            moderate_min: constants::RISK_MODERATE_MIN,
            high_min: constants::RISK_HIGH_MIN,
        }
    }
}

impl RiskBands {
    /// Band the lowest risk-relevant percentage. Monotonic: a lower
    /// score never yields a lower risk.
    pub fn risk_for(&self, lowest_percentage: u8) -> RiskLevel {
        if lowest_percentage >= self.low_min {
            RiskLevel::Low
        } else if lowest_percentage >= self.moderate_min {
            RiskLevel::Moderate
        } else if lowest_percentage >= self.high_min {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.high_min >= self.moderate_min || self.moderate_min >= self.low_min {
            return Err(ConfigError::ValidationFailed {
                field: "risk_bands".into(),
                message: format!(
                    "cut points must ascend: high {} < moderate {} < low {}",
                    self.high_min, self.moderate_min, self.low_min
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_banding_boundaries() {
        let t = LevelThresholds::default();
        assert_eq!(t.level_for(54), ScoreLevel::Low);
        assert_eq!(t.level_for(55), ScoreLevel::Moderate);
        assert_eq!(t.level_for(69), ScoreLevel::Moderate);
        assert_eq!(t.level_for(70), ScoreLevel::High);
        assert_eq!(t.level_for(84), ScoreLevel::High);
        assert_eq!(t.level_for(85), ScoreLevel::Exceptional);
        assert_eq!(t.level_for(100), ScoreLevel::Exceptional);
    }

    #[test]
    fn risk_banding_monotonic() {
        let b = RiskBands::default();
        assert_eq!(b.risk_for(70), RiskLevel::Low);
        assert_eq!(b.risk_for(55), RiskLevel::Moderate);
        assert_eq!(b.risk_for(40), RiskLevel::High);
        assert_eq!(b.risk_for(39), RiskLevel::Critical);
        let mut prev = b.risk_for(0);
        for pct in 0..=100u8 {
            let r = b.risk_for(pct);
            assert!(r <= prev, "risk must not increase as score rises");
            prev = r;
        }
    }

    #[test]
    fn non_ascending_thresholds_rejected() {
        let t = LevelThresholds {
            moderate: 70,
            high: 70,
            exceptional: 85,
        };
        assert!(t.validate().is_err());
    }
}
