//! Pure assembly of the candidate-facing result.

use chrono::{DateTime, Utc};
use tracing::debug;

use veritas_core::config::AssemblerConfig;
use veritas_core::types::{
    AssessmentResult, DimensionScore, Recommendation, RiskLevel, ValidityMetrics,
};

use super::InterpretationTable;

/// Merges dimension scores, the validity verdict, and static
/// interpretation tables into one immutable `AssessmentResult`.
///
/// Validity affects how much confidence is attached to the result; it
/// never changes a score or the risk level.
pub struct ResultAssembler {
    table: InterpretationTable,
    config: AssemblerConfig,
}

impl ResultAssembler {
    pub fn new(table: InterpretationTable, config: AssemblerConfig) -> Self {
        Self { table, config }
    }

    pub fn assemble(
        &self,
        session_id: &str,
        assessment_type: &str,
        completed_at: Option<DateTime<Utc>>,
        dimension_scores: Vec<DimensionScore>,
        validity: ValidityMetrics,
    ) -> AssessmentResult {
        // Scored dimensions only; input arrives in catalog declaration
        // order and the sorts are stable, so ties break by declaration.
        let mut ranked: Vec<&DimensionScore> =
            dimension_scores.iter().filter(|s| s.is_scored()).collect();

        ranked.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        let strengths: Vec<String> = ranked
            .iter()
            .take(self.config.top_n)
            .map(|s| s.dimension.clone())
            .collect();

        ranked.sort_by(|a, b| a.percentage.cmp(&b.percentage));
        let challenges: Vec<String> = ranked
            .iter()
            .take(self.config.top_n)
            .map(|s| s.dimension.clone())
            .collect();

        let recommendations = self.select_recommendations(&dimension_scores);
        let risk_level = self.risk_level(&dimension_scores);

        debug!(
            session = session_id,
            strengths = strengths.len(),
            challenges = challenges.len(),
            ?risk_level,
            "result assembled"
        );

        AssessmentResult {
            session_id: session_id.to_string(),
            assessment_type: assessment_type.to_string(),
            dimension_scores,
            validity,
            strengths,
            challenges,
            recommendations,
            risk_level,
            completed_at,
        }
    }

    /// Key lookup only — the assembler selects `(dimension, level)`
    /// keys and never generates prose.
    fn select_recommendations(&self, scores: &[DimensionScore]) -> Vec<Recommendation> {
        scores
            .iter()
            .filter_map(|s| {
                let level = s.level?;
                let text = self.table.get(&s.dimension, level)?;
                Some(Recommendation {
                    dimension: s.dimension.clone(),
                    level,
                    text: text.to_string(),
                })
            })
            .collect()
    }

    /// Monotonic function of the lowest risk-relevant percentage.
    fn risk_level(&self, scores: &[DimensionScore]) -> Option<RiskLevel> {
        if self.config.risk_dimensions.is_empty() {
            return None;
        }
        let lowest = scores
            .iter()
            .filter(|s| self.config.risk_dimensions.contains(&s.dimension))
            .filter_map(|s| s.percentage)
            .min();
        match lowest {
            Some(pct) => Some(self.config.risk_bands.risk_for(pct)),
            // Risk dimensions configured but none scored: no evidence
            // either way, so report the neutral band.
            None => Some(RiskLevel::Moderate),
        }
    }
}
