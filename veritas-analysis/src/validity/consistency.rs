//! Paired-item consistency.
//!
//! Inconsistency items pair with a logically opposite phrasing of the
//! same trait. A consistent candidate answers the pair in complementary
//! positions: `value(b) ≈ reverse(value(a))`, within one scale step.

use rustc_hash::FxHashSet;

use veritas_core::types::{
    DistortionType, ItemCatalog, ItemType, LikertScale, ResponseSet, ResponseValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConsistencyOutcome {
    /// Agreement rate across evaluable pairs, percent. 100 when no
    /// pair was evaluable (the check then reports as unevaluated).
    pub percent: u8,
    pub evaluable_pairs: usize,
}

/// Tolerance, in scale steps, for the complementary pattern.
const PAIR_TOLERANCE: i16 = 1;

pub(crate) fn consistency(
    catalog: &ItemCatalog,
    responses: &ResponseSet,
    scale: LikertScale,
) -> ConsistencyOutcome {
    let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
    let mut evaluable = 0usize;
    let mut consistent = 0usize;

    for item in catalog.items() {
        if item.item_type != ItemType::Distortion
            || item.distortion_type != Some(DistortionType::Inconsistency)
        {
            continue;
        }
        let Some(pair_id) = item.paired_item_id.as_deref() else {
            continue;
        };
        // Each unordered pair counts once even if both halves declare it.
        let key = if item.id.as_str() <= pair_id {
            (item.id.as_str(), pair_id)
        } else {
            (pair_id, item.id.as_str())
        };
        if !seen.insert(key) {
            continue;
        }

        let (Some(a), Some(b)) = (responses.get(&item.id), responses.get(pair_id)) else {
            continue;
        };
        let (ResponseValue::Likert(va), ResponseValue::Likert(vb)) = (a.value, b.value) else {
            continue;
        };

        evaluable += 1;
        let expected = scale.reverse(va);
        if (i16::from(vb) - i16::from(expected)).abs() <= PAIR_TOLERANCE {
            consistent += 1;
        }
    }

    let percent = if evaluable == 0 {
        100
    } else {
        ((consistent as f64 / evaluable as f64) * 100.0).round() as u8
    };

    ConsistencyOutcome {
        percent,
        evaluable_pairs: evaluable,
    }
}
