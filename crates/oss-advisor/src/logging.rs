//! Log subscriber setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr subscriber. `log` records from the library are
/// forwarded through it.
///
/// Reads `OSS_LOG` for per-module levels, e.g. `OSS_LOG=oss_logic=debug`.
/// Falls back to `info` if unset or invalid.
pub fn init() {
    let filter = EnvFilter::try_from_env("OSS_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .init();
}
