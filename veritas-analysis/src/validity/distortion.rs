//! Fake-good / fake-bad endorsement indices.
//!
//! Each endorsed implausible claim contributes a fixed increment,
//! capped at 100. Implausibly self-deprecating answers are distortion
//! too, not just "faking good"; the two directions feed separate
//! indices.

use veritas_core::types::{Item, LikertScale, ResponseSet, ResponseValue};

/// Result of one endorsement scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EndorsementIndex {
    /// Capped distortion score, 0–100.
    pub score: u8,
    /// False when no item of this sub-type could be evaluated.
    pub evaluated: bool,
}

/// Count endorsements of implausible claims across `items`.
///
/// A Likert answer endorses the statement when it reaches the scale's
/// agreement threshold. Items answered in a non-Likert format (or not
/// answered at all) are skipped.
pub(crate) fn endorsement_index(
    items: &[&Item],
    responses: &ResponseSet,
    scale: LikertScale,
    increment: u8,
) -> EndorsementIndex {
    let mut evaluated = false;
    let mut endorsed: u32 = 0;

    for item in items {
        let Some(response) = responses.get(&item.id) else {
            continue;
        };
        let ResponseValue::Likert(value) = response.value else {
            continue;
        };
        evaluated = true;
        if value >= scale.endorse_threshold() {
            endorsed += 1;
        }
    }

    EndorsementIndex {
        score: (endorsed * u32::from(increment)).min(100) as u8,
        evaluated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veritas_core::types::{DistortionType, Response};

    fn fake_good_items() -> Vec<Item> {
        (0..4)
            .map(|i| Item::distortion(format!("fg{i}"), DistortionType::FakeGood))
            .collect()
    }

    #[test]
    fn each_endorsement_adds_increment() {
        let items = fake_good_items();
        let refs: Vec<&Item> = items.iter().collect();
        let responses = ResponseSet::new(
            "s1",
            "t",
            vec![
                Response::likert("fg0", 5),
                Response::likert("fg1", 4),
                Response::likert("fg2", 2),
                Response::likert("fg3", 1),
            ],
        )
        .unwrap();

        let idx = endorsement_index(&refs, &responses, LikertScale::default(), 25);
        assert!(idx.evaluated);
        assert_eq!(idx.score, 50);
    }

    #[test]
    fn score_caps_at_100() {
        let items = fake_good_items();
        let refs: Vec<&Item> = items.iter().collect();
        let responses = ResponseSet::new(
            "s1",
            "t",
            items.iter().map(|i| Response::likert(&i.id, 5)).collect(),
        )
        .unwrap();

        let idx = endorsement_index(&refs, &responses, LikertScale::default(), 40);
        assert_eq!(idx.score, 100);
    }

    #[test]
    fn unanswered_items_leave_check_unevaluated() {
        let items = fake_good_items();
        let refs: Vec<&Item> = items.iter().collect();
        let responses = ResponseSet::new("s1", "t", vec![]).unwrap();

        let idx = endorsement_index(&refs, &responses, LikertScale::default(), 25);
        assert!(!idx.evaluated);
        assert_eq!(idx.score, 0);
    }
}
