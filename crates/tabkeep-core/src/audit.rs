use std::fmt;

use tabkeep_domain::EntryId;

/// Mutating actions written to the audit trail.
///
/// Amounts are kept exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    Add { id: EntryId, price: String },
    PayId { id: EntryId },
    PayPartial { amount: String },
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditEvent::Add { id, price } => write!(f, "ADD id={} price={}", id, price),
            AuditEvent::PayId { id } => write!(f, "PAY_ID id={}", id),
            AuditEvent::PayPartial { amount } => write!(f, "PAY_PARTIAL amount={}", amount),
        }
    }
}
