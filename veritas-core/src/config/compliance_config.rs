//! Compliance status banding.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;
use crate::types::ComplianceStatus;

/// Banding of the met-requirements percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    /// Score at or above this is compliant.
    pub compliant_min: u8,
    /// Score at or above this (but below `compliant_min`) is partial.
    pub partial_min: u8,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            compliant_min: constants::COMPLIANT_MIN,
            partial_min: constants::PARTIAL_MIN,
        }
    }
}

impl ComplianceConfig {
    pub fn status_for(&self, score: u8) -> ComplianceStatus {
        if score >= self.compliant_min {
            ComplianceStatus::Compliant
        } else if score >= self.partial_min {
            ComplianceStatus::Partial
        } else {
            ComplianceStatus::NonCompliant
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.partial_min >= self.compliant_min {
            return Err(ConfigError::ValidationFailed {
                field: "compliance".into(),
                message: format!(
                    "partial_min {} must be below compliant_min {}",
                    self.partial_min, self.compliant_min
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
    fn banding_boundaries() {
        let cfg = ComplianceConfig::default();
        assert_eq!(cfg.status_for(80), ComplianceStatus::Compliant);
        assert_eq!(cfg.status_for(79), ComplianceStatus::Partial);
        assert_eq!(cfg.status_for(50), ComplianceStatus::Partial);
        assert_eq!(cfg.status_for(49), ComplianceStatus::NonCompliant);
    }
}
