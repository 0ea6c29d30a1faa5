//! Data contracts crossing the engine boundary.

pub mod compliance;
pub mod fairness;
pub mod item;
pub mod response;
pub mod score;

pub use compliance::{ComplianceStandard, ComplianceStatus, Requirement, RequirementChecklist};
pub use fairness::{
    BiasAnalysisResult, BiasAnalysisStatus, BiasSeverity, ComplianceChecks, DemographicGroup,
    GroupPassRate, ScoredAttempt, Timeframe,
};
pub use item::{
    DimensionWeight, DistortionType, Item, ItemCatalog, ItemType, LikertScale, WeightedOption,
};
pub use response::{Response, ResponseSet, ResponseValue};
pub use score::{
    AssessmentResult, DimensionScore, OverallValidity, Recommendation, RiskLevel, ScoreLevel,
    ScoreStatus, ValidityCheck, ValidityMetrics, ValidityTrigger,
};
