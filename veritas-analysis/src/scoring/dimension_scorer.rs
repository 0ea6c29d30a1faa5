//! Per-dimension score aggregation.
//!
//! One `DimensionScore` per distinct dimension in the catalog slice.
//! Missing responses are excluded from numerator and denominator both,
//! so an incomplete attempt yields a valid lower-confidence score; a
//! dimension with zero answered items is flagged `insufficient_data`
//! rather than reported as a misleading 0%.

use rustc_hash::FxHashMap;
use tracing::debug;

use veritas_core::config::LevelThresholds;
use veritas_core::errors::ScoringError;
use veritas_core::types::{
    DimensionScore, Item, ItemCatalog, ItemType, LikertScale, ResponseSet, ResponseValue,
    ScoreStatus,
};

#[derive(Debug, Default)]
struct DimensionAccumulator {
    raw: f64,
    max: f64,
    answered: usize,
}

/// Scores one attempt against an item catalog and a threshold table.
pub struct DimensionScorer<'a> {
    catalog: &'a ItemCatalog,
    thresholds: LevelThresholds,
    scale: LikertScale,
}

impl<'a> DimensionScorer<'a> {
    pub fn new(catalog: &'a ItemCatalog, thresholds: LevelThresholds, scale: LikertScale) -> Self {
        Self {
            catalog,
            thresholds,
            scale,
        }
    }

    /// Produce one score per catalog dimension, declaration order.
    ///
    /// Contract violations (unknown item, out-of-scale value, wrong
    /// response format) fail the whole computation: they indicate a
    /// capture-layer bug, and a silently wrong score is worse than none.
    pub fn score(&self, responses: &ResponseSet) -> Result<Vec<DimensionScore>, ScoringError> {
        for response in responses.responses() {
            if self.catalog.get(&response.item_id).is_none() {
                return Err(ScoringError::UnknownItem {
                    item_id: response.item_id.clone(),
                });
            }
        }

        let mut accumulators: FxHashMap<&str, DimensionAccumulator> = FxHashMap::default();

        for item in self.catalog.items() {
            match item.item_type {
                ItemType::Likert => self.accumulate_likert(item, responses, &mut accumulators)?,
                ItemType::ForcedChoice => {
                    self.accumulate_forced_choice(item, responses, &mut accumulators)?
                }
                // Distortion items never contribute to trait scores.
                ItemType::Distortion => {}
            }
        }

        let scores = self
            .catalog
            .dimensions()
            .iter()
            .map(|dimension| match accumulators.get(dimension.as_str()) {
                Some(acc) if acc.answered > 0 => {
                    let percentage = percentage(acc.raw, acc.max);
                    DimensionScore {
                        dimension: dimension.clone(),
                        raw_total: acc.raw,
                        max_possible: acc.max,
                        answered_items: acc.answered,
                        status: ScoreStatus::Scored,
                        percentage: Some(percentage),
                        level: Some(self.thresholds.level_for(percentage)),
                    }
                }
                _ => DimensionScore::insufficient_data(dimension.clone()),
            })
            .collect::<Vec<_>>();

        debug!(
            session = responses.session_id(),
            dimensions = scores.len(),
            answered = responses.len(),
            "attempt scored"
        );
        Ok(scores)
    }

    fn accumulate_likert(
        &self,
        item: &Item,
        responses: &ResponseSet,
        accumulators: &mut FxHashMap<&'a str, DimensionAccumulator>,
    ) -> Result<(), ScoringError> {
        let Some(response) = responses.get(&item.id) else {
            return Ok(());
        };
        let value = match response.value {
            ResponseValue::Likert(v) => v,
            ResponseValue::Choice(_) => {
                return Err(ScoringError::ValueTypeMismatch {
                    item_id: item.id.clone(),
                });
            }
        };
        if !self.scale.contains(value) {
            return Err(ScoringError::ValueOutOfScale {
                item_id: item.id.clone(),
                value,
                min: self.scale.min,
                max: self.scale.max,
            });
        }

        let effective = if item.reverse_scored {
            self.scale.reverse(value)
        } else {
            value
        };

        // The catalog interned this dimension at construction; look up
        // the canonical &str so the accumulator key borrows the catalog.
        let dimension = item
            .dimension
            .as_deref()
            .and_then(|d| self.canonical_dimension(d))
            .unwrap_or_default();
        let acc = accumulators.entry(dimension).or_default();
        acc.raw += f64::from(effective);
        acc.max += f64::from(self.scale.max);
        acc.answered += 1;
        Ok(())
    }

    fn accumulate_forced_choice(
        &self,
        item: &Item,
        responses: &ResponseSet,
        accumulators: &mut FxHashMap<&'a str, DimensionAccumulator>,
    ) -> Result<(), ScoringError> {
        let Some(response) = responses.get(&item.id) else {
            return Ok(());
        };
        let index = match response.value {
            ResponseValue::Choice(i) => i,
            ResponseValue::Likert(_) => {
                return Err(ScoringError::ValueTypeMismatch {
                    item_id: item.id.clone(),
                });
            }
        };
        if index >= item.options.len() {
            return Err(ScoringError::ChoiceOutOfRange {
                item_id: item.id.clone(),
                index,
                options: item.options.len(),
            });
        }

        // Denominator: for each dimension any option can move, the
        // per-dimension maximum across options. The chosen option
        // contributes its own weights to the numerator; a dimension the
        // chosen option skips still saw the item answered.
        let mut per_dimension_max: FxHashMap<&str, f64> = FxHashMap::default();
        for option in &item.options {
            for w in &option.weights {
                let entry = per_dimension_max.entry(w.dimension.as_str()).or_insert(0.0);
                if w.weight > *entry {
                    *entry = w.weight;
                }
            }
        }

        for (dimension, max) in per_dimension_max {
            let Some(dimension) = self.canonical_dimension(dimension) else {
                continue;
            };
            let chosen = item.options[index]
                .weights
                .iter()
                .find(|w| w.dimension == dimension)
                .map(|w| w.weight)
                .unwrap_or(0.0);

            let acc = accumulators.entry(dimension).or_default();
            acc.raw += chosen;
            acc.max += max;
            acc.answered += 1;
        }
        Ok(())
    }

    fn canonical_dimension(&self, dimension: &str) -> Option<&'a str> {
        self.catalog
            .dimensions()
            .iter()
            .find(|d| d.as_str() == dimension)
            .map(|d| d.as_str())
    }
}

/// `round(raw / max * 100)` clamped to [0, 100].
fn percentage(raw: f64, max: f64) -> u8 {
    ((raw / max) * 100.0).round().clamp(0.0, 100.0) as u8
}
