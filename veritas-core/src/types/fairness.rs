//! Aggregate fairness records: adverse impact over a population of
//! completed assessments grouped by demographic label.
//!
//! These are ephemeral view-models, recomputed per analysis request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Demographic group label. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemographicGroup(pub String);

impl DemographicGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One completed assessment reduced to what fairness analysis needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAttempt {
    pub session_id: String,
    pub group: DemographicGroup,
    /// Selection/pass decision for this candidate, made by the caller.
    pub passed: bool,
    pub completed_at: DateTime<Utc>,
}

/// Half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeframe {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Timeframe {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AnalysisError> {
        if start >= end {
            return Err(AnalysisError::InvalidTimeframe {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.end
    }
}

/// Step-function severity of an adverse-impact finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasSeverity {
    Low,
    Medium,
    High,
    Critical,
}

/// Whether a ratio could be defensibly computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BiasAnalysisStatus {
    Analyzed,
    /// At least one group is below the configured respondent floor.
    /// A ratio over too few cases must not be presented as valid.
    InsufficientSample {
        floor: usize,
        undersized_groups: Vec<DemographicGroup>,
    },
    /// Fewer than two demographic groups; no comparison possible.
    InsufficientGroups { groups: usize },
}

/// Independent regulatory checks over the same rate data.
///
/// Each has its own pass rule; none is inferred from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceChecks {
    pub four_fifths: bool,
    pub eeo: bool,
    pub ada: bool,
}

/// Per-group pass rate, percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPassRate {
    pub group: DemographicGroup,
    pub respondents: usize,
    pub passed: usize,
    pub pass_rate_pct: u8,
}

/// Output of one bias analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAnalysisResult {
    pub assessment_type: String,
    pub timeframe: Timeframe,
    pub sample_size: usize,
    pub status: BiasAnalysisStatus,
    /// Four-fifths ratio, percent. `None` unless `status` is `Analyzed`.
    pub adverse_impact_ratio: Option<u8>,
    pub bias_severity: Option<BiasSeverity>,
    pub group_pass_rates: Vec<GroupPassRate>,
    pub compliance: Option<ComplianceChecks>,
    /// Lookup-derived remediation actions keyed by which checks failed.
    pub recommended_actions: Vec<String>,
}
