//! Logging setup for Bulwark
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a fmt
//! layer in the configured format.

use bulwark_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Directive used when neither `RUST_LOG` nor the config yields a valid one
const FALLBACK_FILTER: &str = "info";

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `telemetry.log_filter`. Directives that
/// fail to parse are skipped and reported once the subscriber is up.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = parse_filter(from_env.as_deref(), &config.log_filter);

    let (text_layer, json_layer) = match config.format {
        LogFormat::Text => (Some(tracing_subscriber::fmt::layer().with_target(true)), None),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    for reason in rejected {
        tracing::warn!(%reason, "ignoring invalid log filter");
    }

    Ok(())
}

/// Pick the first directive that parses, falling back to `info`
fn parse_filter(from_env: Option<&str>, configured: &str) -> (EnvFilter, Vec<String>) {
    let mut rejected = Vec::new();

    let candidates = from_env
        .filter(|directive| !directive.trim().is_empty())
        .into_iter()
        .chain(std::iter::once(configured));

    for directive in candidates {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return (filter, rejected),
            Err(e) => rejected.push(format!("{directive}: {e}")),
        }
    }

    (EnvFilter::new(FALLBACK_FILTER), rejected)
}
