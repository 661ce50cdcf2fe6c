//! tabkeep-domain
//!
//! Pure domain models for the tab ledger: entries, the ledger document and the
//! minor-unit money type. No I/O, no CLI, no storage.

pub mod entry;
pub mod ledger;
pub mod money;

pub use entry::*;
pub use ledger::*;
pub use money::*;
