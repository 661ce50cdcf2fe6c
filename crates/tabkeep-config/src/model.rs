use serde::{Deserialize, Serialize};

/// Stored password digest gating destructive operations.
///
/// A document without `password_hash` behaves like a missing document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl AccessConfig {
    pub fn with_hash(hash: impl Into<String>) -> Self {
        Self {
            password_hash: Some(hash.into()),
        }
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }
}
