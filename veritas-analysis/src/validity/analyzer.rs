//! Orchestrates the validity checks into one `ValidityMetrics`.

use tracing::debug;

use veritas_core::config::ValidityConfig;
use veritas_core::types::{
    DistortionType, ItemCatalog, LikertScale, ResponseSet, ValidityCheck, ValidityMetrics,
};

use super::attention::{self, has_answerable_random_checks};
use super::consistency;
use super::distortion;
use super::verdict::{self, VerdictInput};

/// Derives authenticity and attention indices for one attempt.
///
/// Never errors: every check that cannot run for missing data is
/// listed in `ValidityMetrics::unevaluated` instead.
pub struct ValidityAnalyzer<'a> {
    catalog: &'a ItemCatalog,
    config: ValidityConfig,
    scale: LikertScale,
}

impl<'a> ValidityAnalyzer<'a> {
    pub fn new(catalog: &'a ItemCatalog, config: ValidityConfig, scale: LikertScale) -> Self {
        Self {
            catalog,
            config,
            scale,
        }
    }

    pub fn analyze(&self, responses: &ResponseSet) -> ValidityMetrics {
        let mut unevaluated = Vec::new();

        let fake_good_items = self.catalog.distortion_items(DistortionType::FakeGood);
        let fake_good = distortion::endorsement_index(
            &fake_good_items,
            responses,
            self.scale,
            self.config.fake_good_increment,
        );
        if !fake_good.evaluated {
            unevaluated.push(ValidityCheck::FakeGood);
        }

        let fake_bad_items = self.catalog.distortion_items(DistortionType::FakeBad);
        let fake_bad = distortion::endorsement_index(
            &fake_bad_items,
            responses,
            self.scale,
            self.config.fake_bad_increment,
        );
        if !fake_bad.evaluated {
            unevaluated.push(ValidityCheck::FakeBad);
        }

        let consistency = consistency::consistency(self.catalog, responses, self.scale);
        if consistency.evaluable_pairs == 0 {
            unevaluated.push(ValidityCheck::Consistency);
        }

        let random = attention::random_checks(self.catalog, responses);
        if !random.evaluated && has_answerable_random_checks(self.catalog) {
            unevaluated.push(ValidityCheck::RandomCheck);
        }

        let straight_lining = attention::straight_lining(responses, &self.config);
        if straight_lining.is_none() {
            unevaluated.push(ValidityCheck::StraightLining);
        }

        let speed = attention::speed_warning(responses, &self.config);
        if speed.is_none() {
            unevaluated.push(ValidityCheck::Speed);
        }

        let input = VerdictInput {
            social_desirability_bias: fake_good.score,
            impression_management: fake_bad.score,
            consistency: (consistency.evaluable_pairs > 0).then_some(consistency.percent),
            random_check_failed: random.failed,
            straight_lining: straight_lining.unwrap_or(false),
            speed_warning: speed.unwrap_or(false),
        };
        let (overall, triggers) = verdict::verdict(&input, &self.config);

        debug!(
            session = responses.session_id(),
            ?overall,
            triggers = triggers.len(),
            unevaluated = unevaluated.len(),
            "validity analyzed"
        );

        ValidityMetrics {
            response_authenticity: 100u8.saturating_sub(fake_good.score.max(fake_bad.score)),
            social_desirability_bias: fake_good.score,
            impression_management: fake_bad.score,
            response_consistency: consistency.percent,
            straight_lining: straight_lining.unwrap_or(false),
            speed_warning: speed.unwrap_or(false),
            random_check_failed: random.failed,
            overall,
            triggers,
            unevaluated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::types::{Item, OverallValidity, Response};

    fn analyzer_catalog() -> ItemCatalog {
        ItemCatalog::new(vec![
            Item::likert("q1", "drive", false),
            Item::distortion("fg1", DistortionType::FakeGood),
            Item::distortion("fb1", DistortionType::FakeBad),
        ])
        .unwrap()
    }

    #[test]
    fn missing_checks_degrade_not_fail() {
        let catalog = analyzer_catalog();
        let analyzer =
            ValidityAnalyzer::new(&catalog, ValidityConfig::default(), LikertScale::default());
        // Nothing answered at all.
        let responses = ResponseSet::new("s1", "t", vec![]).unwrap();

        let metrics = analyzer.analyze(&responses);
        assert_eq!(metrics.overall, OverallValidity::High);
        assert!(metrics.unevaluated.contains(&ValidityCheck::FakeGood));
        assert!(metrics.unevaluated.contains(&ValidityCheck::FakeBad));
        assert!(metrics.unevaluated.contains(&ValidityCheck::Consistency));
        assert!(metrics.unevaluated.contains(&ValidityCheck::StraightLining));
        assert!(metrics.unevaluated.contains(&ValidityCheck::Speed));
        // No random-check items exist, so that check is not reported.
        assert!(!metrics.unevaluated.contains(&ValidityCheck::RandomCheck));
    }

    #[test]
    fn authenticity_mirrors_strongest_distortion() {
        let catalog = analyzer_catalog();
        let analyzer =
            ValidityAnalyzer::new(&catalog, ValidityConfig::default(), LikertScale::default());
        let responses = ResponseSet::new(
            "s1",
            "t",
            vec![Response::likert("fg1", 5), Response::likert("fb1", 1)],
        )
        .unwrap();

        let metrics = analyzer.analyze(&responses);
        assert_eq!(metrics.social_desirability_bias, 25);
        assert_eq!(metrics.impression_management, 0);
        assert_eq!(metrics.response_authenticity, 75);
    }
}
