use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::SecondsFormat;
use tabkeep_core::{storage::AuditSink, Clock, StoreError};

use crate::ensure_dir;

/// Text audit trail: one `<RFC-3339 timestamp> <message>` line per action.
///
/// The file is opened, appended to and closed on every call.
#[derive(Clone)]
pub struct FileAuditLog {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileAuditLog {
    pub fn new(path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self { path, clock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(&self, message: &str) -> String {
        let stamp = self.clock.now().to_rfc3339_opts(SecondsFormat::Secs, true);
        format!("{} {}\n", stamp, message)
    }
}

impl AuditSink for FileAuditLog {
    fn record(&self, message: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(self.format_line(message).as_bytes())?;
        tracing::debug!(path = %self.path.display(), record = message, "appended audit record");
        Ok(())
    }
}
