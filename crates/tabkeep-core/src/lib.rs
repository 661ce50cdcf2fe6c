//! tabkeep-core
//!
//! Ledger and access-control operations for tabkeep.
//! Depends on tabkeep-domain. No CLI, no terminal I/O, no direct storage interactions:
//! persistence and the audit trail are reached through the traits in [`storage`].

pub mod access_service;
pub mod audit;
pub mod error;
pub mod ledger_service;
pub mod storage;
pub mod time;

pub use access_service::*;
pub use audit::AuditEvent;
pub use error::{CoreError, StoreError};
pub use ledger_service::*;
pub use storage::{AuditSink, LedgerStorage};
pub use time::Clock;
