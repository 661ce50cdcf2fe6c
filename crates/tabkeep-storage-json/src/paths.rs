use std::path::PathBuf;

const DEFAULT_DIR_NAME: &str = ".tabkeep";
const LEDGER_FILE: &str = "db.json";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "log.txt";

/// Locations of every file tabkeep manages, all inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub root: PathBuf,
    pub ledger_file: PathBuf,
    pub config_file: PathBuf,
    pub log_file: PathBuf,
}

impl StoragePaths {
    /// Lays the files out inside `root`.
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            ledger_file: root.join(LEDGER_FILE),
            config_file: root.join(CONFIG_FILE),
            log_file: root.join(LOG_FILE),
            root,
        }
    }

    /// The per-user directory, `~/.tabkeep`.
    pub fn resolve() -> Self {
        Self::in_dir(default_root())
    }
}

/// Returns the application data directory, defaulting to `./.tabkeep` when the
/// home directory cannot be determined.
pub fn default_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_share_the_root_directory() {
        let paths = StoragePaths::in_dir("/data/tab");
        assert_eq!(paths.ledger_file, PathBuf::from("/data/tab/db.json"));
        assert_eq!(paths.config_file, PathBuf::from("/data/tab/config.json"));
        assert_eq!(paths.log_file, PathBuf::from("/data/tab/log.txt"));
        assert_eq!(paths.root, PathBuf::from("/data/tab"));
    }

    #[test]
    fn default_root_ends_with_app_dir() {
        assert!(default_root().ends_with(".tabkeep"));
    }
}
