//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Veritas tracing/logging system.
///
/// Reads the `VERITAS_LOG` environment variable for per-subsystem log
/// levels, e.g. `VERITAS_LOG=scoring=debug,fairness=info`.
///
/// Falls back to `veritas=info` if `VERITAS_LOG` is not set or invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("VERITAS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("veritas=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
