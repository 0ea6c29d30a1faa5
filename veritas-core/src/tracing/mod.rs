//! Tracing initialization and configuration.

mod setup;

pub use setup::init_tracing;
