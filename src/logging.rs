//! Logging setup
//!
//! Logs go to stderr so rendered output on stdout stays clean. The filter
//! comes from `RUST_LOG` when set, else `mawaqit=<level>`.

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| format!("mawaqit={}", level).into())
}

/// Subscriber used while the configuration itself is being loaded, so
/// problems with the config file or environment are still reported
pub fn bootstrap() -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&LoggingConfig::default().level))
        .with_writer(std::io::stderr)
        .finish()
}

/// Install the global subscriber described by `config`
pub fn init(config: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(env_filter(&config.level));

    if config.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
