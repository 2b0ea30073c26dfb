//! Tracing setup shared by both binaries
//!
//! Logs always go to stderr so stdout carries only status lines.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: warnings only, or debug output with `--verbose`
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "python_toolkit=debug"
    } else {
        "python_toolkit=warn"
    }
}

/// Initialize tracing; `RUST_LOG` overrides the default filter
pub fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter(verbose).into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
