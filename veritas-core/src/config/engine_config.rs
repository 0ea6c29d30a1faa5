//! Aggregate engine configuration and the TOML loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;
use crate::types::LikertScale;

use super::{ComplianceConfig, FairnessConfig, LevelThresholds, RiskBands, ValidityConfig};

/// Result assembler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Strengths/challenges list length.
    pub top_n: usize,
    /// Dimensions whose low scores drive the risk level. Empty means
    /// risk is not applicable to this assessment.
    pub risk_dimensions: Vec<String>,
    pub risk_bands: RiskBands,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            top_n: constants::TOP_N,
            risk_dimensions: Vec::new(),
            risk_bands: RiskBands::default(),
        }
    }
}

/// Everything one assessment type needs to run the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scale: LikertScale,
    pub level_thresholds: LevelThresholds,
    pub validity: ValidityConfig,
    pub fairness: FairnessConfig,
    pub compliance: ComplianceConfig,
    pub assembler: AssemblerConfig,
}

impl EngineConfig {
    /// Load and validate a TOML config file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        ::tracing::debug!(path = %path.display(), "engine config loaded");
        Ok(config)
    }

    /// Validate every threshold table for internal coherence.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale.min >= self.scale.max {
            return Err(ConfigError::ValidationFailed {
                field: "scale".into(),
                message: format!("min {} must be below max {}", self.scale.min, self.scale.max),
            });
        }
        self.level_thresholds.validate()?;
        self.validity.validate()?;
        self.fairness.validate()?;
        self.compliance.validate()?;
        self.assembler.risk_bands.validate()?;
        if self.assembler.top_n == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "assembler.top_n".into(),
                message: "strengths/challenges length cannot be 0".into(),
            });
        }
        Ok(())
    }
}
