//! Item catalog: immutable question metadata.
//!
//! The catalog is loaded once per assessment and validated at
//! construction. Content (wording, translations) lives outside the
//! engine; an `Item` carries only what scoring and validity need.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::CatalogError;

/// How an item is answered and scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Rated on a bounded integer agreement scale.
    Likert,
    /// Pick one of several statements, each carrying a weight map.
    ForcedChoice,
    /// Measures response distortion, never a trait.
    Distortion,
}

/// Sub-type of a distortion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistortionType {
    /// Implausibly absolute positive self-claim.
    FakeGood,
    /// Implausibly absolute negative self-claim.
    FakeBad,
    /// One half of a logically opposite item pair.
    Inconsistency,
    /// Has an objectively correct factual answer.
    RandomCheck,
}

/// Bounds of the Likert agreement scale (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikertScale {
    pub min: u8,
    pub max: u8,
}

impl Default for LikertScale {
    fn default() -> Self {
        Self {
            min: crate::constants::LIKERT_MIN,
            max: crate::constants::LIKERT_MAX,
        }
    }
}

impl LikertScale {
    /// Whether `value` lies within the scale bounds.
    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reverse-score a value: `min + max - value` (e.g. 2 → 4 on 1–5).
    pub fn reverse(&self, value: u8) -> u8 {
        self.min + self.max - value
    }

    /// Smallest value counting as agreement with the statement.
    ///
    /// Strictly above the midpoint: 4 on a 1–5 scale.
    pub fn endorse_threshold(&self) -> u8 {
        (self.min + self.max) / 2 + 1
    }
}

/// Per-dimension weight contributed by a forced-choice option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeight {
    pub dimension: String,
    pub weight: f64,
}

/// One selectable option of a forced-choice item.
///
/// A single option may move several dimensions at once; the weight map
/// is explicit rather than a scalar for that reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedOption {
    pub label: String,
    pub weights: SmallVec<[DimensionWeight; 4]>,
}

/// One question's scoring metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    /// Dimension this item measures. Empty for distortion items.
    #[serde(default)]
    pub dimension: Option<String>,
    #[serde(default)]
    pub subdimension: Option<String>,
    pub item_type: ItemType,
    #[serde(default)]
    pub reverse_scored: bool,
    #[serde(default)]
    pub distortion_type: Option<DistortionType>,
    /// Other half of an inconsistency pair.
    #[serde(default)]
    pub paired_item_id: Option<String>,
    /// Options for forced-choice items (and choice-format random checks).
    #[serde(default)]
    pub options: Vec<WeightedOption>,
    /// Index of the factually correct option, random-check items only.
    #[serde(default)]
    pub correct_option: Option<usize>,
}

impl Item {
    /// Shorthand for a Likert trait item.
    pub fn likert(id: impl Into<String>, dimension: impl Into<String>, reverse: bool) -> Self {
        Self {
            id: id.into(),
            dimension: Some(dimension.into()),
            subdimension: None,
            item_type: ItemType::Likert,
            reverse_scored: reverse,
            distortion_type: None,
            paired_item_id: None,
            options: Vec::new(),
            correct_option: None,
        }
    }

    /// Shorthand for a forced-choice item.
    pub fn forced_choice(id: impl Into<String>, options: Vec<WeightedOption>) -> Self {
        Self {
            id: id.into(),
            dimension: None,
            subdimension: None,
            item_type: ItemType::ForcedChoice,
            reverse_scored: false,
            distortion_type: None,
            paired_item_id: None,
            options,
            correct_option: None,
        }
    }

    /// Shorthand for a Likert-format distortion item.
    pub fn distortion(id: impl Into<String>, distortion_type: DistortionType) -> Self {
        Self {
            id: id.into(),
            dimension: None,
            subdimension: None,
            item_type: ItemType::Distortion,
            reverse_scored: false,
            distortion_type: Some(distortion_type),
            paired_item_id: None,
            options: Vec::new(),
            correct_option: None,
        }
    }

    /// Shorthand for a choice-format random-check item.
    pub fn random_check(
        id: impl Into<String>,
        options: Vec<WeightedOption>,
        correct_option: usize,
    ) -> Self {
        Self {
            id: id.into(),
            dimension: None,
            subdimension: None,
            item_type: ItemType::Distortion,
            reverse_scored: false,
            distortion_type: Some(DistortionType::RandomCheck),
            paired_item_id: None,
            options,
            correct_option: Some(correct_option),
        }
    }

    /// Attach the paired item id for an inconsistency item.
    pub fn with_pair(mut self, paired_item_id: impl Into<String>) -> Self {
        self.paired_item_id = Some(paired_item_id.into());
        self
    }
}

/// Immutable, validated item collection for one assessment.
///
/// Validation happens once, at construction; an `ItemCatalog` in hand
/// is referentially sound (no duplicate ids, paired ids resolve,
/// forced-choice items have options, random checks have an answer key).
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: Vec<Item>,
    by_id: FxHashMap<String, usize>,
    /// Dimensions in first-seen declaration order. Drives deterministic
    /// ordering and tie-breaks downstream.
    dimensions: Vec<String>,
}

impl ItemCatalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut by_id = FxHashMap::default();
        let mut dimensions: Vec<String> = Vec::new();

        for (idx, item) in items.iter().enumerate() {
            if by_id.insert(item.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateItemId {
                    item_id: item.id.clone(),
                });
            }

            match item.item_type {
                ItemType::Likert => {
                    let Some(dim) = &item.dimension else {
                        return Err(CatalogError::MissingDimension {
                            item_id: item.id.clone(),
                        });
                    };
                    if !dimensions.contains(dim) {
                        dimensions.push(dim.clone());
                    }
                }
                ItemType::ForcedChoice => {
                    if item.options.is_empty() {
                        return Err(CatalogError::NoOptions {
                            item_id: item.id.clone(),
                        });
                    }
                    for opt in &item.options {
                        for w in &opt.weights {
                            if !dimensions.contains(&w.dimension) {
                                dimensions.push(w.dimension.clone());
                            }
                        }
                    }
                }
                ItemType::Distortion => {
                    if item.distortion_type.is_none() {
                        return Err(CatalogError::MissingDistortionType {
                            item_id: item.id.clone(),
                        });
                    }
                    if item.distortion_type == Some(DistortionType::RandomCheck)
                        && !item.options.is_empty()
                    {
                        match item.correct_option {
                            Some(i) if i < item.options.len() => {}
                            _ => {
                                return Err(CatalogError::MissingAnswerKey {
                                    item_id: item.id.clone(),
                                });
                            }
                        }
                    }
                }
            }
        }

        // Paired ids must resolve to catalog items.
        for item in &items {
            if let Some(pair) = &item.paired_item_id {
                if !by_id.contains_key(pair) {
                    return Err(CatalogError::DanglingPair {
                        item_id: item.id.clone(),
                        paired_item_id: pair.clone(),
                    });
                }
            }
        }

        Ok(Self {
            items,
            by_id,
            dimensions,
        })
    }

    pub fn get(&self, item_id: &str) -> Option<&Item> {
        self.by_id.get(item_id).map(|&i| &self.items[i])
    }

    /// Items in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Distinct trait dimensions in first-seen order.
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distortion items of the given sub-type, declaration order.
    pub fn distortion_items(&self, distortion_type: DistortionType) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|i| {
                i.item_type == ItemType::Distortion && i.distortion_type == Some(distortion_type)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn opt(label: &str, dim: &str, weight: f64) -> WeightedOption {
        WeightedOption {
            label: label.into(),
            weights: smallvec![DimensionWeight {
                dimension: dim.into(),
                weight,
            }],
        }
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = ItemCatalog::new(vec![
            Item::likert("q1", "empathy", false),
            Item::likert("q1", "empathy", false),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItemId { .. }));
    }

    #[test]
    fn dangling_pair_rejected() {
        let item = Item::distortion("q1", DistortionType::Inconsistency).with_pair("nope");
        let err = ItemCatalog::new(vec![item]).unwrap_err();
        assert!(matches!(err, CatalogError::DanglingPair { .. }));
    }

    #[test]
    fn random_check_needs_answer_key() {
        let mut item = Item::random_check(
            "rc1",
            vec![opt("true", "", 0.0), opt("false", "", 0.0)],
            0,
        );
        item.correct_option = Some(7);
        let err = ItemCatalog::new(vec![item]).unwrap_err();
        assert!(matches!(err, CatalogError::MissingAnswerKey { .. }));
    }

    #[test]
    fn dimensions_in_declaration_order() {
        let catalog = ItemCatalog::new(vec![
            Item::likert("q1", "empathy", false),
            Item::forced_choice("q2", vec![opt("a", "drive", 2.0), opt("b", "empathy", 1.0)]),
            Item::likert("q3", "calm", true),
        ])
        .unwrap();
        assert_eq!(catalog.dimensions(), ["empathy", "drive", "calm"]);
    }

    #[test]
    fn reverse_scoring_is_symmetric() {
        let scale = LikertScale::default();
        assert_eq!(scale.reverse(1), 5);
        assert_eq!(scale.reverse(3), 3);
        assert_eq!(scale.reverse(scale.reverse(2)), 2);
    }

    #[test]
    fn endorse_threshold_default_scale() {
        assert_eq!(LikertScale::default().endorse_threshold(), 4);
    }
}
