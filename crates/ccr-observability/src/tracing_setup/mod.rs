//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use ccr_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "CCR_LOG";

static INIT: Once = Once::new();

/// Initialize tracing with compiled defaults.
///
/// Respects `CCR_LOG` for filtering, e.g. `CCR_LOG=ccr_router=debug,info`.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize tracing from config. `CCR_LOG` wins over `config.log_filter`.
///
/// Idempotent. If another global subscriber is already installed (for
/// example by an embedding application) this is a no-op.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        let _ = if config.json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
    });
}
