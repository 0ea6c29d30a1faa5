//! Top-level facade: one attempt in, one `AssessmentResult` out.

use tracing::info;

use veritas_core::config::EngineConfig;
use veritas_core::errors::ScoringError;
use veritas_core::types::{AssessmentResult, ItemCatalog, ResponseSet};

use crate::assemble::{InterpretationTable, ResultAssembler};
use crate::scoring::DimensionScorer;
use crate::validity::ValidityAnalyzer;

/// Wires scorer → validity analyzer → assembler for one assessment type.
///
/// Deterministic and pure: evaluating the same responses against the
/// same catalog twice yields identical output. Timing enters only
/// through supplied `response_time_ms`, never the wall clock.
pub struct AssessmentEngine {
    catalog: ItemCatalog,
    config: EngineConfig,
    assembler: ResultAssembler,
}

impl AssessmentEngine {
    pub fn new(catalog: ItemCatalog, config: EngineConfig, table: InterpretationTable) -> Self {
        let assembler = ResultAssembler::new(table, config.assembler.clone());
        Self {
            catalog,
            config,
            assembler,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Evaluate one completed attempt.
    pub fn evaluate(&self, responses: &ResponseSet) -> Result<AssessmentResult, ScoringError> {
        let scorer = DimensionScorer::new(
            &self.catalog,
            self.config.level_thresholds,
            self.config.scale,
        );
        let scores = scorer.score(responses)?;

        let analyzer =
            ValidityAnalyzer::new(&self.catalog, self.config.validity, self.config.scale);
        let validity = analyzer.analyze(responses);

        let result = self.assembler.assemble(
            responses.session_id(),
            responses.assessment_type(),
            responses.completed_at(),
            scores,
            validity,
        );

        info!(
            session = responses.session_id(),
            assessment_type = responses.assessment_type(),
            overall_validity = ?result.validity.overall,
            "attempt evaluated"
        );
        Ok(result)
    }
}
