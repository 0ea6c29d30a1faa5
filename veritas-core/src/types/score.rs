//! Derived per-candidate records: dimension scores, validity metrics,
//! and the assembled assessment result.
//!
//! All of these are recomputed wholesale when inputs change, never
//! mutated in place. A retake produces a new `AssessmentResult`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Interpretive band of a dimension percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Low,
    Moderate,
    High,
    Exceptional,
}

/// Whether a dimension score is numerically meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Scored,
    /// Zero answered items for the dimension. Presented as a distinct
    /// state, never collapsed into a numeric 0%.
    InsufficientData,
}

/// Aggregated, normalized score for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: String,
    pub raw_total: f64,
    pub max_possible: f64,
    pub answered_items: usize,
    pub status: ScoreStatus,
    /// `None` iff `status` is `InsufficientData`.
    pub percentage: Option<u8>,
    pub level: Option<ScoreLevel>,
}

impl DimensionScore {
    pub fn insufficient_data(dimension: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            raw_total: 0.0,
            max_possible: 0.0,
            answered_items: 0,
            status: ScoreStatus::InsufficientData,
            percentage: None,
            level: None,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.status == ScoreStatus::Scored
    }
}

/// Overall response-validity verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallValidity {
    Low,
    Medium,
    High,
}

/// A specific rule that fired while deriving the validity verdict.
///
/// Verdicts must be explainable by naming their triggers; a verdict
/// with no triggers is always `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityTrigger {
    RandomCheckFailed,
    StraightLining,
    SpeedWarning,
    HighSocialDesirability,
    HighImpressionManagement,
    ModerateSocialDesirability,
    ModerateImpressionManagement,
    LowConsistency,
}

/// A validity check that could not be evaluated for missing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityCheck {
    FakeGood,
    FakeBad,
    Consistency,
    RandomCheck,
    StraightLining,
    Speed,
}

/// Distortion and attention indices for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidityMetrics {
    /// 100 minus the strongest distortion signal, floored at 0.
    pub response_authenticity: u8,
    /// Fake-good endorsement index.
    pub social_desirability_bias: u8,
    /// Fake-bad endorsement index.
    pub impression_management: u8,
    /// Agreement rate across inconsistency pairs.
    pub response_consistency: u8,
    pub straight_lining: bool,
    pub speed_warning: bool,
    pub random_check_failed: bool,
    pub overall: OverallValidity,
    /// Why the verdict was reached, in rule order.
    pub triggers: Vec<ValidityTrigger>,
    /// Checks that could not run. Degrades confidence, never blocks scoring.
    pub unevaluated: Vec<ValidityCheck>,
}

/// Wellness risk banding, derived from the lowest risk-relevant dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// A selected recommendation key resolved to its content-table text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub dimension: String,
    pub level: ScoreLevel,
    pub text: String,
}

/// The candidate-facing result for one completed attempt.
///
/// Immutable after assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub session_id: String,
    pub assessment_type: String,
    pub dimension_scores: Vec<DimensionScore>,
    pub validity: ValidityMetrics,
    /// Top dimensions by percentage, declaration-order tie-break.
    pub strengths: Vec<String>,
    /// Bottom dimensions by percentage, declaration-order tie-break.
    pub challenges: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    /// `None` for assessments with no risk-relevant dimensions.
    pub risk_level: Option<RiskLevel>,
    pub completed_at: Option<DateTime<Utc>>,
}
