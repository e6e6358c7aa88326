// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of the dcl language: source text in, atoms and
//! diagnostics out, through the same `Session` the binary uses.
//!
//! ```bash
//! cargo test -p dclc --test language
//! ```

#[path = "language/common.rs"]
mod common;

#[path = "language/properties.rs"]
mod properties;

#[path = "language/diagnostics.rs"]
mod diagnostics;

#[path = "language/cli.rs"]
mod cli;
