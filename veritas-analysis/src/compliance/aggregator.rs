//! Rolls checklists and evidence into `ComplianceStandard` records.

use rustc_hash::FxHashSet;
use tracing::debug;

use veritas_core::config::ComplianceConfig;
use veritas_core::types::{
    BiasAnalysisResult, BiasAnalysisStatus, ComplianceStandard, RequirementChecklist,
};

use super::checklist::ids;

/// Which requirement ids are evidenced, gathered by the caller.
#[derive(Debug, Clone, Default)]
pub struct EvidenceSet {
    evidenced: FxHashSet<String>,
}

impl EvidenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a requirement as evidenced.
    pub fn with_requirement(mut self, requirement_id: impl Into<String>) -> Self {
        self.evidenced.insert(requirement_id.into());
        self
    }

    /// Fold a bias analysis outcome into the evidence.
    ///
    /// A completed analysis evidences adverse-impact monitoring; a
    /// passing four-fifths check additionally evidences the
    /// bias/fairness requirement. An insufficient-sample result
    /// evidences neither.
    pub fn with_bias_analysis(mut self, analysis: &BiasAnalysisResult) -> Self {
        if analysis.status == BiasAnalysisStatus::Analyzed {
            if let Some(checks) = &analysis.compliance {
                if checks.four_fifths {
                    self.evidenced.insert(ids::ADVERSE_IMPACT_MONITORING.into());
                    self.evidenced.insert(ids::BIAS_FAIRNESS_EVIDENCE.into());
                }
            }
        }
        self
    }

    pub fn contains(&self, requirement_id: &str) -> bool {
        self.evidenced.contains(requirement_id)
    }
}

/// Derives a standards-tracking record from a checklist and evidence.
pub struct ComplianceAggregator {
    config: ComplianceConfig,
}

impl ComplianceAggregator {
    pub fn new(config: ComplianceConfig) -> Self {
        Self { config }
    }

    /// `score = met / total * 100`, banded by config. Missing critical
    /// requirements are listed separately: a high score built on
    /// non-critical items must not mask their absence.
    pub fn aggregate(
        &self,
        assessment_type: &str,
        checklist: &RequirementChecklist,
        evidence: &EvidenceSet,
    ) -> ComplianceStandard {
        let mut met = Vec::new();
        let mut missing = Vec::new();
        let mut missing_critical = Vec::new();

        for requirement in &checklist.requirements {
            if evidence.contains(&requirement.id) {
                met.push(requirement.id.clone());
            } else {
                if requirement.critical {
                    missing_critical.push(requirement.id.clone());
                }
                missing.push(requirement.id.clone());
            }
        }

        let total = checklist.requirements.len().max(1);
        let score = ((met.len() as f64 / total as f64) * 100.0).round() as u8;
        let status = self.config.status_for(score);

        debug!(
            standard = %checklist.standard_type,
            assessment_type,
            score,
            missing_critical = missing_critical.len(),
            "compliance aggregated"
        );

        ComplianceStandard {
            standard_type: checklist.standard_type.clone(),
            assessment_type: assessment_type.to_string(),
            requirements_met: met,
            requirements_missing: missing,
            missing_critical,
            compliance_score: score,
            status,
        }
    }
}
