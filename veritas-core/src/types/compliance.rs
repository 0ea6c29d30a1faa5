//! Standards-tracking records for compliance dashboards.

use serde::{Deserialize, Serialize};

/// One requirement of a documented standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    pub description: String,
    /// Critical requirements are flagged separately when missing,
    /// regardless of the overall percentage.
    pub critical: bool,
}

impl Requirement {
    pub fn new(id: impl Into<String>, description: impl Into<String>, critical: bool) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            critical,
        }
    }
}

/// Static per-standard checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementChecklist {
    pub standard_type: String,
    pub requirements: Vec<Requirement>,
}

/// Compliance banding over the met-requirements percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
}

/// Derived standards-tracking record. Purely aggregative, no lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStandard {
    pub standard_type: String,
    pub assessment_type: String,
    pub requirements_met: Vec<String>,
    pub requirements_missing: Vec<String>,
    /// Missing requirements marked critical. A high score must not
    /// mask the absence of these.
    pub missing_critical: Vec<String>,
    pub compliance_score: u8,
    pub status: ComplianceStatus,
}
