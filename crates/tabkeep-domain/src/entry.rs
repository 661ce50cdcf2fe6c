use serde::{Deserialize, Serialize};

use crate::money::MinorUnits;

/// Identifier of an unpaid entry, unique among the entries currently stored.
pub type EntryId = u32;

/// One unpaid charge on the tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub item: String,
    pub price: MinorUnits,
    /// Creation time in seconds since the Unix epoch.
    pub created: i64,
}

impl Entry {
    pub fn new(id: EntryId, item: impl Into<String>, price: MinorUnits, created: i64) -> Self {
        Self {
            id,
            item: item.into(),
            price,
            created,
        }
    }
}
