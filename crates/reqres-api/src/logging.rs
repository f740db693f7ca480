//! Tracing setup for test runs.
//!
//! Request/response logging is emitted through `tracing`; this installs a
//! subscriber that routes it to the test harness output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset. Debug level keeps the headers and
/// bodies logged under [`LogDetail::All`](crate::LogDetail::All).
pub const DEFAULT_FILTER: &str = "reqres_api=debug";

/// Install a compact fmt subscriber writing through the test writer.
///
/// Level is controlled by `RUST_LOG` (default: [`DEFAULT_FILTER`]). Safe to
/// call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .compact(),
        )
        .try_init()
        .ok(); // Ignore error if already initialized
}
