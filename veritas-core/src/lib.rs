//! Core types, errors, configuration, tracing, and constants for the
//! Veritas assessment scoring engine.
//!
//! This crate carries no analysis logic. It defines the data contracts
//! that cross the engine boundary (items, responses, scores, fairness
//! and compliance records), the per-subsystem error enums, and the
//! threshold-table configuration every analytical component consumes.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
