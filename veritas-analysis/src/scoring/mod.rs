//! Dimension scoring: raw responses → normalized 0–100 scores.

mod dimension_scorer;

pub use dimension_scorer::DimensionScorer;
