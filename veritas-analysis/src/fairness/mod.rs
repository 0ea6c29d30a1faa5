//! Bias & fairness analysis over populations of completed assessments.

mod actions;
mod adverse_impact;
mod analyzer;

pub use adverse_impact::{adverse_impact_ratio, group_pass_rates};
pub use analyzer::BiasAnalyzer;
