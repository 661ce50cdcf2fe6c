use serde::{de::Deserializer, Deserialize, Serialize};

use crate::{
    entry::{Entry, EntryId},
    money::MinorUnits,
};

/// The persisted root document: a credit balance plus the unpaid entries in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub balance: MinorUnits,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest id currently present, if any.
    pub fn max_id(&self) -> Option<EntryId> {
        self.entries.iter().map(|entry| entry.id).max()
    }
}

// Older ledgers were written with `"entries": null` once every entry was paid.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Entry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Entry>>::deserialize(deserializer)?.unwrap_or_default())
}
