//! Tracing setup for tests
//!
//! Set `RUST_LOG=domain_contract=debug` to see contract transitions while a
//! test runs. Output goes through the test writer so it is captured unless
//! `--nocapture` is passed.

use once_cell::sync::Lazy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // another harness may already have installed a subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_test_writer())
        .try_init();
});

/// Installs the test subscriber once per test binary
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
