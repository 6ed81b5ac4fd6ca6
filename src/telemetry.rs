//! Telemetry helpers for applications embedding `chart-axes`.
//!
//! Layout passes, range updates and stretch recomputation emit `tracing`
//! events under the `chart_axes` target. Hosts either call one of the
//! helpers below or install their own subscriber.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`,
/// falling back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Initializes a compact subscriber with an explicit filter directive such as
/// `"chart_axes=debug"`.
///
/// An unparsable directive leaves tracing uninitialized and returns `false`.
#[must_use]
pub fn init_tracing_with_filter(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let Ok(filter) = tracing_subscriber::EnvFilter::try_new(directive) else {
            return false;
        };
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::{init_default_tracing, init_tracing_with_filter};

    #[test]
    fn global_subscriber_is_installed_at_most_once() {
        let first = init_default_tracing();
        let second = init_tracing_with_filter("chart_axes=debug");
        assert!(!(first && second));
        if cfg!(not(feature = "telemetry")) {
            assert!(!first && !second);
        }
    }
}
