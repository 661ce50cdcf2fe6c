//! Pure mutations and queries over a [`Ledger`].
//!
//! Nothing here touches the disk; callers load the ledger, apply one of these
//! operations and write the result back.

use tabkeep_domain::{Entry, EntryId, Ledger, MinorUnits};

use crate::CoreError;

/// Result of applying a partial payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialPayment {
    /// Ids settled by the payment, in the order they were consumed.
    pub paid: Vec<EntryId>,
    /// Credit left over once the pass finished.
    pub balance: MinorUnits,
}

/// Provides the tab operations for [`Ledger`] instances.
pub struct LedgerService;

impl LedgerService {
    /// One more than the largest id present, or 1 for an empty ledger.
    ///
    /// Ids restart at 1 once every entry has been removed.
    pub fn next_id(ledger: &Ledger) -> Result<EntryId, CoreError> {
        match ledger.max_id() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(CoreError::IdSpaceExhausted),
        }
    }

    /// Appends a new unpaid entry and returns its id.
    pub fn add_entry(
        ledger: &mut Ledger,
        item: impl Into<String>,
        price: MinorUnits,
        created: i64,
    ) -> Result<EntryId, CoreError> {
        let id = Self::next_id(ledger)?;
        ledger.entries.push(Entry::new(id, item, price, created));
        tracing::info!(id, price = price.value(), "added entry");
        Ok(id)
    }

    /// Unpaid entries in storage order.
    pub fn list_unpaid(ledger: &Ledger) -> &[Entry] {
        &ledger.entries
    }

    pub fn balance(ledger: &Ledger) -> MinorUnits {
        ledger.balance
    }

    /// Removes every entry carrying `id`, keeping the others in order.
    ///
    /// Returns one id per removed entry; an empty vector means nothing matched.
    pub fn pay_by_id(ledger: &mut Ledger, id: EntryId) -> Vec<EntryId> {
        let before = ledger.entries.len();
        ledger.entries.retain(|entry| entry.id != id);
        let removed = before - ledger.entries.len();
        if removed > 0 {
            tracing::info!(id, "paid entry");
        }
        vec![id; removed]
    }

    /// Adds `amount` to the balance, then walks the entries once in storage order,
    /// settling each entry the running balance covers.
    ///
    /// Entries are not sorted by price: an entry that is not covered stays unpaid
    /// even if a later, cheaper entry is settled.
    pub fn pay_partial(
        ledger: &mut Ledger,
        amount: MinorUnits,
    ) -> Result<PartialPayment, CoreError> {
        let mut balance = ledger.balance.checked_add(amount).ok_or_else(|| {
            CoreError::InvalidOperation("payment would overflow the balance".into())
        })?;

        let mut paid = Vec::new();
        let mut remaining = Vec::with_capacity(ledger.entries.len());
        for entry in ledger.entries.drain(..) {
            let settled = if balance >= entry.price {
                balance.checked_sub(entry.price)
            } else {
                None
            };
            match settled {
                Some(left) => {
                    balance = left;
                    paid.push(entry.id);
                }
                None => remaining.push(entry),
            }
        }

        ledger.entries = remaining;
        ledger.balance = balance;
        tracing::info!(
            amount = amount.value(),
            paid = paid.len(),
            balance = balance.value(),
            "applied partial payment"
        );
        Ok(PartialPayment { paid, balance })
    }
}
