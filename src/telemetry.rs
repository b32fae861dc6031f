//! Opt-in tracing setup for applications embedding `stream-chart`.
//!
//! The library only emits `tracing` events (chart lifecycle at `debug`, each
//! appended sample at `trace`, rejected samples at `warn`). Hosts either call
//! one of these helpers or install their own subscriber.

/// Installs a compact subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback("info")
}

/// Like [`init_default_tracing`], but uses `directives` (for example
/// `"stream_chart=trace"`) when `RUST_LOG` is unset or invalid.
#[must_use]
pub fn init_tracing_with_fallback(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}
