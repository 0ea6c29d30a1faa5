//! The bias & fairness analyzer.
//!
//! Operates across many completed assessments grouped by demographic
//! label, for one `(assessment_type, timeframe)` pair per call. Results
//! are ephemeral view-models recomputed per request. Cost is bounded by
//! pre-filtering to the timeframe before any computation.

use rayon::prelude::*;
use tracing::{debug, warn};

use veritas_core::config::FairnessConfig;
use veritas_core::errors::AnalysisError;
use veritas_core::types::{
    BiasAnalysisResult, BiasAnalysisStatus, ComplianceChecks, ScoredAttempt, Timeframe,
};

use super::actions;
use super::adverse_impact::{adverse_impact_ratio, group_pass_rates};

/// Computes adverse-impact and compliance findings for a population.
pub struct BiasAnalyzer {
    config: FairnessConfig,
}

impl BiasAnalyzer {
    pub fn new(config: FairnessConfig) -> Self {
        Self { config }
    }

    /// Analyze one assessment type over one timeframe.
    ///
    /// An empty population after filtering is a contract-level error;
    /// an undersized group is a reported status, never an error.
    pub fn analyze(
        &self,
        assessment_type: &str,
        attempts: &[ScoredAttempt],
        timeframe: Timeframe,
    ) -> Result<BiasAnalysisResult, AnalysisError> {
        let in_frame: Vec<&ScoredAttempt> = attempts
            .iter()
            .filter(|a| timeframe.contains(a.completed_at))
            .collect();
        if in_frame.is_empty() {
            return Err(AnalysisError::EmptyPopulation {
                assessment_type: assessment_type.to_string(),
            });
        }

        let owned: Vec<ScoredAttempt> = in_frame.into_iter().cloned().collect();
        let rates = group_pass_rates(&owned);
        let sample_size = owned.len();

        if rates.len() < 2 {
            warn!(
                assessment_type,
                groups = rates.len(),
                "bias analysis needs at least two demographic groups"
            );
            return Ok(BiasAnalysisResult {
                assessment_type: assessment_type.to_string(),
                timeframe,
                sample_size,
                status: BiasAnalysisStatus::InsufficientGroups { groups: rates.len() },
                adverse_impact_ratio: None,
                bias_severity: None,
                group_pass_rates: rates,
                compliance: None,
                recommended_actions: vec![actions::insufficient_sample_action(
                    self.config.min_group_size,
                )],
            });
        }

        let undersized: Vec<_> = rates
            .iter()
            .filter(|r| r.respondents < self.config.min_group_size)
            .map(|r| r.group.clone())
            .collect();
        if !undersized.is_empty() {
            debug!(
                assessment_type,
                undersized = undersized.len(),
                floor = self.config.min_group_size,
                "sample floor not met, no ratio reported"
            );
            return Ok(BiasAnalysisResult {
                assessment_type: assessment_type.to_string(),
                timeframe,
                sample_size,
                status: BiasAnalysisStatus::InsufficientSample {
                    floor: self.config.min_group_size,
                    undersized_groups: undersized,
                },
                adverse_impact_ratio: None,
                bias_severity: None,
                group_pass_rates: rates,
                compliance: None,
                recommended_actions: vec![actions::insufficient_sample_action(
                    self.config.min_group_size,
                )],
            });
        }

        let ratio = adverse_impact_ratio(&rates);
        let severity = self.config.severity_for(ratio);
        let lowest_rate = rates.iter().map(|r| r.pass_rate_pct).min().unwrap_or(0);

        // Independent checks over the same rate data; none inferred
        // from another.
        let compliance = ComplianceChecks {
            four_fifths: ratio >= self.config.four_fifths_threshold,
            eeo: ratio >= self.config.eeo_min_ratio,
            ada: lowest_rate >= self.config.ada_min_pass_rate,
        };

        let recommended = actions::recommended_actions(&compliance, severity);

        debug!(
            assessment_type,
            sample_size, ratio, ?severity, "bias analysis complete"
        );

        Ok(BiasAnalysisResult {
            assessment_type: assessment_type.to_string(),
            timeframe,
            sample_size,
            status: BiasAnalysisStatus::Analyzed,
            adverse_impact_ratio: Some(ratio),
            bias_severity: Some(severity),
            group_pass_rates: rates,
            compliance: Some(compliance),
            recommended_actions: recommended,
        })
    }

    /// Analyze several assessment types at once.
    ///
    /// Each entry is an independent pure computation; they run in
    /// parallel with no shared state. The dashboard composes the
    /// returned records itself.
    pub fn analyze_many<'a>(
        &self,
        requests: &'a [(&'a str, &'a [ScoredAttempt])],
        timeframe: Timeframe,
    ) -> Vec<(&'a str, Result<BiasAnalysisResult, AnalysisError>)> {
        requests
            .par_iter()
            .map(|(assessment_type, attempts)| {
                (
                    *assessment_type,
                    self.analyze(assessment_type, attempts, timeframe),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use veritas_core::types::{BiasSeverity, DemographicGroup};

    fn frame() -> Timeframe {
        Timeframe::new(
            Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn population(spec: &[(&str, usize, usize)]) -> Vec<ScoredAttempt> {
        let at = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let mut out = Vec::new();
        for (group, total, passed) in spec {
            for i in 0..*total {
                out.push(ScoredAttempt {
                    session_id: format!("{group}-{i}"),
                    group: DemographicGroup::new(*group),
                    passed: i < *passed,
                    completed_at: at,
                });
            }
        }
        out
    }

    #[test]
    fn boundary_ratio_passes_four_fifths() {
        let analyzer = BiasAnalyzer::new(FairnessConfig::default());
        let attempts = population(&[("a", 50, 20), ("b", 50, 25)]);

        let result = analyzer.analyze("cairplus", &attempts, frame()).unwrap();
        assert_eq!(result.status, BiasAnalysisStatus::Analyzed);
        assert_eq!(result.adverse_impact_ratio, Some(80));
        assert_eq!(result.bias_severity, Some(BiasSeverity::Medium));
        assert!(result.compliance.unwrap().four_fifths);
    }

    #[test]
    fn undersized_group_blocks_the_ratio() {
        let analyzer = BiasAnalyzer::new(FairnessConfig::default());
        let attempts = population(&[("a", 50, 20), ("b", 10, 6)]);

        let result = analyzer.analyze("cairplus", &attempts, frame()).unwrap();
        assert!(matches!(
            result.status,
            BiasAnalysisStatus::InsufficientSample { floor: 30, .. }
        ));
        assert_eq!(result.adverse_impact_ratio, None);
        assert_eq!(result.bias_severity, None);
        assert!(!result.recommended_actions.is_empty());
    }

    #[test]
    fn empty_timeframe_is_an_error() {
        let analyzer = BiasAnalyzer::new(FairnessConfig::default());
        let mut attempts = population(&[("a", 50, 20), ("b", 50, 25)]);
        for a in &mut attempts {
            a.completed_at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        }

        let err = analyzer.analyze("cairplus", &attempts, frame()).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyPopulation { .. }));
    }

    #[test]
    fn single_group_reports_insufficient_groups() {
        let analyzer = BiasAnalyzer::new(FairnessConfig::default());
        let attempts = population(&[("a", 60, 30)]);

        let result = analyzer.analyze("cairplus", &attempts, frame()).unwrap();
        assert_eq!(
            result.status,
            BiasAnalysisStatus::InsufficientGroups { groups: 1 }
        );
        assert_eq!(result.adverse_impact_ratio, None);
    }

    #[test]
    fn severe_disparity_fails_checks_and_recommends() {
        let analyzer = BiasAnalyzer::new(FairnessConfig::default());
        // 10% vs 60% pass rates: ratio ~17, critical.
        let attempts = population(&[("a", 50, 5), ("b", 50, 30)]);

        let result = analyzer.analyze("cairplus", &attempts, frame()).unwrap();
        assert_eq!(result.bias_severity, Some(BiasSeverity::Critical));
        let compliance = result.compliance.unwrap();
        assert!(!compliance.four_fifths);
        assert!(!compliance.eeo);
        assert!(!compliance.ada);
        assert!(result.recommended_actions.len() >= 3);
    }

    #[test]
    fn analyze_many_runs_each_type_independently() {
        let analyzer = BiasAnalyzer::new(FairnessConfig::default());
        let ok = population(&[("a", 50, 25), ("b", 50, 25)]);
        let small = population(&[("a", 5, 2), ("b", 5, 3)]);
        let requests: Vec<(&str, &[ScoredAttempt])> =
            vec![("cairplus", &ok), ("burnout", &small)];

        let results = analyzer.analyze_many(&requests, frame());
        assert_eq!(results.len(), 2);
        let cair = &results.iter().find(|(t, _)| *t == "cairplus").unwrap().1;
        let burnout = &results.iter().find(|(t, _)| *t == "burnout").unwrap().1;
        assert_eq!(
            cair.as_ref().unwrap().status,
            BiasAnalysisStatus::Analyzed
        );
        assert!(matches!(
            burnout.as_ref().unwrap().status,
            BiasAnalysisStatus::InsufficientSample { .. }
        ));
    }
}
