use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{AccessConfig, ConfigError};

const TMP_SUFFIX: &str = "tmp";
#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o600;
#[cfg(unix)]
const CONFIG_DIR_MODE: u32 = 0o755;

/// Handles persistence for [`AccessConfig`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Reads the document, reporting a missing file and a malformed one as
    /// distinct errors.
    pub fn try_load(&self) -> Result<AccessConfig, ConfigError> {
        let data = match fs::read_to_string(&self.config_path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(self.config_path.clone()))
            }
            Err(err) => return Err(err.into()),
        };
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    /// Returns the stored configuration, or `None` when it is missing or cannot be
    /// parsed. Only I/O failures other than "not found" are errors.
    pub fn load(&self) -> Result<Option<AccessConfig>, ConfigError> {
        match self.try_load() {
            Ok(config) => Ok(Some(config)),
            Err(ConfigError::NotFound(_)) => Ok(None),
            Err(ConfigError::Serde(reason)) => {
                tracing::warn!(
                    path = %self.config_path.display(),
                    %reason,
                    "ignoring unreadable access configuration"
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Overwrites the document; the file is readable by its owner only.
    pub fn save(&self, config: &AccessConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            ensure_dir(parent)?;
        }
        let json =
            serde_json::to_string(config).map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_private(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        tracing::debug!(path = %self.config_path.display(), "saved access configuration");
        Ok(())
    }
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

fn ensure_dir(path: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(CONFIG_DIR_MODE);
    }
    builder.create(path)
}

fn write_private(path: &Path, data: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(CONFIG_FILE_MODE);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        // A leftover temp file keeps its old mode; tighten it explicitly.
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(CONFIG_FILE_MODE))?;
    }
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
