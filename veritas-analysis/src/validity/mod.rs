//! Response-validity analysis: distortion, consistency, and attention.
//!
//! The analyzer never fails: missing distortion items or timing data
//! degrade the verdict's coverage and are reported in
//! `ValidityMetrics::unevaluated`, but scoring is never blocked.

mod analyzer;
mod attention;
mod consistency;
mod distortion;
mod verdict;

pub use analyzer::ValidityAnalyzer;
