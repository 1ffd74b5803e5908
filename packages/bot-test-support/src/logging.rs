//! Test logging bootstrap
//!
//! Every test binary of `truco-bot` calls [`init`] from a `ctor` hook. Rule
//! matches are logged at `debug`, so `TEST_LOG=truco_bot=debug` shows which
//! rule produced each decision.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Directive used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_DIRECTIVE: &str = "warn";

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Pick the filter directive: `TEST_LOG` first, then `RUST_LOG`, then
/// [`DEFAULT_DIRECTIVE`]. Blank values count as unset.
pub fn directive(test_log: Option<String>, rust_log: Option<String>) -> String {
    [test_log, rust_log]
        .into_iter()
        .flatten()
        .find(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

/// Install the fmt subscriber once per process. Later calls are no-ops.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        let filter = directive(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        // Another subscriber may already be global; keep it.
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
