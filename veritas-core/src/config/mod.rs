//! Threshold-table configuration.
//!
//! Every cut point in the engine lives here rather than in logic:
//! assessments use different level bands, jurisdictions tune fairness
//! thresholds, and auditability requires the tables to be inspectable.

pub mod compliance_config;
pub mod engine_config;
pub mod fairness_config;
pub mod scoring_config;
pub mod validity_config;

pub use compliance_config::ComplianceConfig;
pub use engine_config::{AssemblerConfig, EngineConfig};
pub use fairness_config::{FairnessConfig, SeverityBand};
pub use scoring_config::{LevelThresholds, RiskBands};
pub use validity_config::ValidityConfig;
