//! Adverse-impact arithmetic.
//!
//! The four-fifths rule compares the lowest-performing group's
//! selection rate against the highest-performing group's. The boundary
//! is inclusive: a ratio of exactly 80% passes.

use rustc_hash::FxHashMap;

use veritas_core::types::{DemographicGroup, GroupPassRate, ScoredAttempt};

/// Per-group pass rates, ordered by group label for determinism.
pub fn group_pass_rates(attempts: &[ScoredAttempt]) -> Vec<GroupPassRate> {
    let mut counts: FxHashMap<&DemographicGroup, (usize, usize)> = FxHashMap::default();
    for attempt in attempts {
        let entry = counts.entry(&attempt.group).or_insert((0, 0));
        entry.0 += 1;
        if attempt.passed {
            entry.1 += 1;
        }
    }

    let mut rates: Vec<GroupPassRate> = counts
        .into_iter()
        .map(|(group, (respondents, passed))| GroupPassRate {
            group: group.clone(),
            respondents,
            passed,
            pass_rate_pct: ((passed as f64 / respondents as f64) * 100.0).round() as u8,
        })
        .collect();
    rates.sort_by(|a, b| a.group.cmp(&b.group));
    rates
}

/// Four-fifths ratio, percent: lowest pass rate over highest.
///
/// When the highest rate is zero no disparity is computable; 100 is
/// reported so the rule passes vacuously rather than dividing by zero.
pub fn adverse_impact_ratio(rates: &[GroupPassRate]) -> u8 {
    let exact_rate =
        |r: &GroupPassRate| -> f64 { r.passed as f64 / r.respondents.max(1) as f64 };

    let lowest = rates.iter().map(exact_rate).fold(f64::INFINITY, f64::min);
    let highest = rates.iter().map(exact_rate).fold(0.0, f64::max);

    if highest == 0.0 {
        return 100;
    }
    ((lowest / highest) * 100.0).round().clamp(0.0, 100.0) as u8
}
