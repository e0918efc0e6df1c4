#![cfg(test)]

//! Test logging for the library's unit tests.
//!
//! Installed once per test binary by the `ctor` hook in `lib.rs`. The filter
//! comes from `TEST_LOG`, then `RUST_LOG`, then defaults to `warn` so a
//! normal run stays quiet:
//!
//! ```bash
//! TEST_LOG=clash_backend=debug cargo test -p clash-backend
//! ```

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Idempotent; safe to call from any test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // try_init: another subscriber may already be installed.
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
