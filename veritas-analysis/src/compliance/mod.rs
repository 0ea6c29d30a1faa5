//! Compliance aggregation: requirement checklists rolled up from
//! available evidence into standards-tracking records.

mod aggregator;
mod checklist;

pub use aggregator::{ComplianceAggregator, EvidenceSet};
pub use checklist::{ada_accommodation_checklist, eeoc_employment_checklist};
