//! Attention checks: random-check items, straight-lining, and speed.

use veritas_core::config::ValidityConfig;
use veritas_core::types::{
    DistortionType, Item, ItemCatalog, ItemType, ResponseSet, ResponseValue,
};

/// Outcome of the random-check scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RandomCheckOutcome {
    /// Any incorrect factual answer. Strong evidence of inattentive or
    /// random responding; a flag, not a graded score.
    pub failed: bool,
    pub evaluated: bool,
}

pub(crate) fn random_checks(catalog: &ItemCatalog, responses: &ResponseSet) -> RandomCheckOutcome {
    let mut evaluated = false;
    let mut failed = false;

    for item in catalog.distortion_items(DistortionType::RandomCheck) {
        let (Some(correct), Some(response)) = (item.correct_option, responses.get(&item.id)) else {
            continue;
        };
        let ResponseValue::Choice(chosen) = response.value else {
            continue;
        };
        evaluated = true;
        if chosen != correct {
            failed = true;
        }
    }

    RandomCheckOutcome { failed, evaluated }
}

/// Straight-lining: near-identical answers across a window of
/// consecutive items regardless of content.
///
/// Returns `Some(true)` when any window's population variance falls
/// below the configured floor, `None` when no run of Likert responses
/// is long enough to evaluate. Choice-format responses reset the run;
/// variance across response formats is meaningless.
pub(crate) fn straight_lining(responses: &ResponseSet, config: &ValidityConfig) -> Option<bool> {
    let window = config.straightline_window;
    let mut runs: Vec<Vec<f64>> = Vec::new();
    let mut current: Vec<f64> = Vec::new();

    for response in responses.responses() {
        match response.value {
            ResponseValue::Likert(v) => current.push(f64::from(v)),
            ResponseValue::Choice(_) => runs.push(std::mem::take(&mut current)),
        }
    }
    runs.push(current);

    let mut evaluated = false;
    for run in &runs {
        if run.len() < window {
            continue;
        }
        evaluated = true;
        for slice in run.windows(window) {
            if population_variance(slice) < config.straightline_min_variance {
                return Some(true);
            }
        }
    }

    evaluated.then_some(false)
}

/// Speed check over supplied per-item latencies.
///
/// Median latency below the plausible minimum reading time raises the
/// warning. With no timing data the check is unevaluated, never a flag.
pub(crate) fn speed_warning(responses: &ResponseSet, config: &ValidityConfig) -> Option<bool> {
    let mut times: Vec<u32> = responses
        .responses()
        .iter()
        .filter_map(|r| r.response_time_ms)
        .collect();
    if times.is_empty() {
        return None;
    }
    times.sort_unstable();
    let median = if times.len() % 2 == 1 {
        f64::from(times[times.len() / 2])
    } else {
        f64::from(times[times.len() / 2 - 1] + times[times.len() / 2]) / 2.0
    };
    Some(median < f64::from(config.min_item_response_ms))
}

fn population_variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Items helper: random-check items need an answer key to be evaluable.
pub(crate) fn has_answerable_random_checks(catalog: &ItemCatalog) -> bool {
    catalog
        .items()
        .iter()
        .any(|i: &Item| {
            i.item_type == ItemType::Distortion
                && i.distortion_type == Some(DistortionType::RandomCheck)
                && i.correct_option.is_some()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::types::{Item, Response, WeightedOption};

    fn true_false(id: &str, correct: usize) -> Item {
        let options = vec![
            WeightedOption {
                label: "true".into(),
                weights: Default::default(),
            },
            WeightedOption {
                label: "false".into(),
                weights: Default::default(),
            },
        ];
        Item::random_check(id, options, correct)
    }

    #[test]
    fn all_correct_random_checks_pass() {
        let catalog = ItemCatalog::new(vec![true_false("rc1", 0), true_false("rc2", 1)]).unwrap();
        let responses = ResponseSet::new(
            "s1",
            "t",
            vec![Response::choice("rc1", 0), Response::choice("rc2", 1)],
        )
        .unwrap();

        let out = random_checks(&catalog, &responses);
        assert!(out.evaluated);
        assert!(!out.failed);
    }

    #[test]
    fn single_wrong_answer_fails() {
        let catalog = ItemCatalog::new(vec![true_false("rc1", 0), true_false("rc2", 1)]).unwrap();
        let responses = ResponseSet::new(
            "s1",
            "t",
            vec![Response::choice("rc1", 0), Response::choice("rc2", 0)],
        )
        .unwrap();

        assert!(random_checks(&catalog, &responses).failed);
    }

    #[test]
    fn constant_run_is_straight_lining() {
        let responses = ResponseSet::new(
            "s1",
            "t",
            (0..12).map(|i| Response::likert(format!("q{i}"), 4)).collect(),
        )
        .unwrap();

        assert_eq!(
            straight_lining(&responses, &ValidityConfig::default()),
            Some(true)
        );
    }

    #[test]
    fn varied_run_is_not_straight_lining() {
        let values = [1u8, 5, 2, 4, 1, 5, 3, 2, 5, 1, 4, 2];
        let responses = ResponseSet::new(
            "s1",
            "t",
            values
                .iter()
                .enumerate()
                .map(|(i, v)| Response::likert(format!("q{i}"), *v))
                .collect(),
        )
        .unwrap();

        assert_eq!(
            straight_lining(&responses, &ValidityConfig::default()),
            Some(false)
        );
    }

    #[test]
    fn short_attempt_is_unevaluated() {
        let responses = ResponseSet::new(
            "s1",
            "t",
            (0..5).map(|i| Response::likert(format!("q{i}"), 3)).collect(),
        )
        .unwrap();

        assert_eq!(straight_lining(&responses, &ValidityConfig::default()), None);
    }

    #[test]
    fn choice_responses_reset_the_run() {
        // Nine 3s, a choice, nine more 3s: no Likert run reaches the
        // window of 10, so the check cannot fire.
        let mut rs: Vec<Response> = (0..9).map(|i| Response::likert(format!("a{i}"), 3)).collect();
        rs.push(Response::choice("c0", 0));
        rs.extend((0..9).map(|i| Response::likert(format!("b{i}"), 3)));
        let responses = ResponseSet::new("s1", "t", rs).unwrap();

        assert_eq!(straight_lining(&responses, &ValidityConfig::default()), None);
    }

    #[test]
    fn fast_median_raises_speed_warning() {
        let responses = ResponseSet::new(
            "s1",
            "t",
            (0..5)
                .map(|i| Response::likert(format!("q{i}"), 3).with_time(400))
                .collect(),
        )
        .unwrap();

        assert_eq!(
            speed_warning(&responses, &ValidityConfig::default()),
            Some(true)
        );
    }

    #[test]
    fn missing_timing_is_unevaluated() {
        let responses = ResponseSet::new(
            "s1",
            "t",
            (0..5).map(|i| Response::likert(format!("q{i}"), 3)).collect(),
        )
        .unwrap();

        assert_eq!(speed_warning(&responses, &ValidityConfig::default()), None);
    }
}
