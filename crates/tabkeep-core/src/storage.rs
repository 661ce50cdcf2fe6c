use tabkeep_domain::Ledger;

use crate::StoreError;

/// Abstraction over the backend that owns the ledger document.
pub trait LedgerStorage: Send + Sync {
    /// Reads the ledger. A missing or malformed document is reported through
    /// [`StoreError::NotFound`] and [`StoreError::Malformed`]; callers decide how to
    /// degrade.
    fn load_ledger(&self) -> Result<Ledger, StoreError>;

    /// Replaces the stored ledger with `ledger`.
    fn save_ledger(&self, ledger: &Ledger) -> Result<(), StoreError>;

    /// Removes every document this backend manages, including files it shares a
    /// directory with. Returns `false` when there was nothing to remove.
    fn wipe(&self) -> Result<bool, StoreError>;
}

/// Append-only record of mutating actions.
pub trait AuditSink: Send + Sync {
    fn record(&self, message: &str) -> Result<(), StoreError>;
}
