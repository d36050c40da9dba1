//! Driver for the declaration scanner.
//!
//! Loads a declaration listing (a file, or the compiled-in `ImDrawList`
//! excerpt), runs [`imdecl_lexer::Scanner`] over it to the end, and prints
//! one `token: <ordinal>, <text>` line per token.

pub mod builtin;
pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=imdecl=debug` or
/// `RUST_LOG=imdecl_lexer=trace` (the latter logs every dropped annotation
/// and skipped body).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
