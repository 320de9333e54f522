//! Tracing initialization

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding per-target log levels
pub const LOG_ENV_VAR: &str = "CERTLINT_LOG";

/// Initialize logging to stderr
///
/// Reads `CERTLINT_LOG` (for example `CERTLINT_LOG=certlint=debug`) and falls
/// back to `certlint=warn` when it is unset or invalid. Stdout is left for
/// JSON output. Calling this more than once is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("certlint=warn"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
