//! tabkeep-storage-json
//!
//! Filesystem persistence for tabkeep: the JSON ledger document, the append-only
//! audit log, and the per-user directory that holds them.

pub mod audit;
pub mod paths;

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tabkeep_core::{storage::LedgerStorage, StoreError};
use tabkeep_domain::Ledger;

pub use audit::FileAuditLog;
pub use paths::StoragePaths;

const TMP_SUFFIX: &str = "tmp";
#[cfg(unix)]
pub(crate) const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const LEDGER_FILE_MODE: u32 = 0o644;

/// Filesystem-backed JSON persistence for the ledger document.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    paths: StoragePaths,
}

impl JsonLedgerStorage {
    pub fn new(paths: StoragePaths) -> Self {
        Self { paths }
    }

    pub fn ledger_path(&self) -> &Path {
        &self.paths.ledger_file
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn load_ledger(&self) -> Result<Ledger, StoreError> {
        load_ledger_from_path(self.ledger_path())
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<(), StoreError> {
        save_ledger_to_path(ledger, self.ledger_path())
    }

    fn wipe(&self) -> Result<bool, StoreError> {
        let root = &self.paths.root;
        match fs::remove_dir_all(root) {
            Ok(()) => {
                tracing::info!(path = %root.display(), "removed data directory");
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

/// Saves a ledger to an arbitrary path on disk, creating parent directories.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(ledger).map_err(|err| StoreError::Malformed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::debug!(path = %path.display(), entries = ledger.entries.len(), "saved ledger");
    Ok(())
}

/// Loads a ledger from the provided filesystem path.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()))
        }
        Err(err) => return Err(err.into()),
    };
    let ledger = serde_json::from_str(&data).map_err(|err| StoreError::Malformed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "loaded ledger");
    Ok(ledger)
}

pub(crate) fn ensure_dir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(LEDGER_FILE_MODE);
    }
    let mut file: File = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(LEDGER_FILE_MODE))?;
    }
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
