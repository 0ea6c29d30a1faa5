//! Built-in requirement checklists.
//!
//! Static tables: the requirements of a documented standard, with the
//! critical ones marked. Evidence mapping happens in the aggregator.

use veritas_core::types::{Requirement, RequirementChecklist};

/// Requirement ids shared with the evidence mapping.
pub(crate) mod ids {
    pub const VALIDITY_EVIDENCE: &str = "validity-evidence";
    pub const RELIABILITY_EVIDENCE: &str = "reliability-evidence";
    pub const BIAS_FAIRNESS_EVIDENCE: &str = "bias-fairness-evidence";
    pub const ADVERSE_IMPACT_MONITORING: &str = "adverse-impact-monitoring";
    pub const JOB_RELATEDNESS: &str = "job-relatedness";
    pub const DOCUMENTATION: &str = "documentation";
    pub const ALTERNATIVE_REVIEW: &str = "alternative-selection-review";
    pub const ACCOMMODATION_PROCESS: &str = "accommodation-process";
    pub const ACCESSIBLE_FORMATS: &str = "accessible-formats";
    pub const EXTENDED_TIME_POLICY: &str = "extended-time-policy";
}

/// EEOC-style employment selection standard.
pub fn eeoc_employment_checklist() -> RequirementChecklist {
    RequirementChecklist {
        standard_type: "eeoc-employment".into(),
        requirements: vec![
            Requirement::new(
                ids::VALIDITY_EVIDENCE,
                "Documented criterion or construct validity evidence",
                true,
            ),
            Requirement::new(
                ids::RELIABILITY_EVIDENCE,
                "Documented internal-consistency reliability evidence",
                true,
            ),
            Requirement::new(
                ids::BIAS_FAIRNESS_EVIDENCE,
                "Differential item functioning / fairness review",
                true,
            ),
            Requirement::new(
                ids::ADVERSE_IMPACT_MONITORING,
                "Ongoing adverse-impact monitoring with passing four-fifths ratio",
                true,
            ),
            Requirement::new(
                ids::JOB_RELATEDNESS,
                "Job-analysis linkage for each measured dimension",
                false,
            ),
            Requirement::new(
                ids::DOCUMENTATION,
                "Technical manual and scoring documentation",
                false,
            ),
            Requirement::new(
                ids::ALTERNATIVE_REVIEW,
                "Review of alternative selection procedures",
                false,
            ),
        ],
    }
}

/// ADA accommodation standard.
pub fn ada_accommodation_checklist() -> RequirementChecklist {
    RequirementChecklist {
        standard_type: "ada-accommodation".into(),
        requirements: vec![
            Requirement::new(
                ids::ACCOMMODATION_PROCESS,
                "Documented reasonable-accommodation request process",
                true,
            ),
            Requirement::new(
                ids::ACCESSIBLE_FORMATS,
                "Assessment available in accessible formats",
                false,
            ),
            Requirement::new(
                ids::EXTENDED_TIME_POLICY,
                "Extended-time policy that does not distort speed-based validity checks",
                false,
            ),
            Requirement::new(
                ids::DOCUMENTATION,
                "Accommodation decisions recorded per candidate",
                false,
            ),
        ],
    }
}
