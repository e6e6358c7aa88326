//! Driver for the dcl description language.
//!
//! Ties the phases together (lex, parse, execute) behind a [`Session`],
//! turns whatever stops a load into a [`LoadError`] and renders it as
//! a diagnostic. The `dclc` binary is a thin shell over [`commands`].

pub mod commands;
pub mod demo;
mod load_error;
mod session;

use std::sync::Once;

pub use load_error::LoadError;
pub use session::Session;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
