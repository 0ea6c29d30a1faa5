//! Veritas analysis engine.
//!
//! Turns raw item responses into per-dimension scores, detects response
//! distortion, and computes aggregate adverse-impact and compliance
//! records. Every component is a pure function over immutable inputs:
//! no storage, no network, no wall clock. Concurrent invocations share
//! nothing and need no synchronization.
//!
//! Subsystems:
//! - `scoring` — per-dimension aggregation and level banding
//! - `validity` — distortion, consistency, and attention checks
//! - `assemble` — candidate-facing result assembly from content tables
//! - `fairness` — adverse-impact ratios over demographic groups
//! - `compliance` — standards checklists rolled up from evidence
//! - `engine` — facade wiring scorer → analyzer → assembler

pub mod assemble;
pub mod compliance;
pub mod engine;
pub mod fairness;
pub mod scoring;
pub mod validity;

pub use engine::AssessmentEngine;
