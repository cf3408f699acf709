//! `tracing` subscriber setup.

use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor `TP_LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter directive: `RUST_LOG` wins, then `TP_LOG_LEVEL`, then `info`.
pub fn filter_directive() -> String {
    env::var("RUST_LOG")
        .or_else(|_| env::var("TP_LOG_LEVEL"))
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the form and `--json` output.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter_directive())
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))?;

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;
    Ok(())
}
