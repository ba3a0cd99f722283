//! End-to-end transition scenarios.

use std::sync::Once;

mod faults;

static INIT: Once = Once::new();

/// Installs the test tracing subscriber once for the whole suite.
/// `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
