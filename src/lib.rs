#![doc(test(attr(deny(warnings))))]

//! tabkeep keeps a personal tab: unpaid entries, partial payments against a
//! running credit balance, an audit log, and a password-gated wipe of all data.
//!
//! The domain, operations and persistence live in the `tabkeep-*` crates; this
//! crate wires them together behind the command-line shell.

pub mod app;
pub mod cli;
pub mod errors;
pub mod utils;

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    utils::init_tracing();
    tracing::debug!("tabkeep tracing initialized.");
}
