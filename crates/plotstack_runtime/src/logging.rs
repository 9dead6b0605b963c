//! Log output for the runtime.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to the binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs a formatting subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
/// Enable with e.g. `RUST_LOG=plotstack_language=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
