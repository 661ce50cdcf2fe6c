use std::fs;

use tabkeep_config::{AccessConfig, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_has_no_password() {
    let cfg = AccessConfig::default();

    assert!(cfg.password_hash().is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let cfg = AccessConfig::with_hash("abc123");
    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, Some(cfg));
}

#[test]
fn saved_document_uses_password_hash_key() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    let manager = ConfigManager::new(path.clone());

    manager
        .save(&AccessConfig::with_hash("deadbeef"))
        .expect("save config");

    let raw = fs::read_to_string(path).expect("read config");
    assert_eq!(raw, r#"{"password_hash":"deadbeef"}"#);
}

#[test]
fn missing_config_loads_as_absent() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    assert!(matches!(manager.try_load(), Err(ConfigError::NotFound(_))));
    assert_eq!(manager.load().expect("load config"), None);
}

#[test]
fn malformed_config_loads_as_absent() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").expect("write garbage");
    let manager = ConfigManager::new(path);

    assert!(matches!(manager.try_load(), Err(ConfigError::Serde(_))));
    assert_eq!(manager.load().expect("load config"), None);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("data").join("config.json");
    let manager = ConfigManager::new(path.clone());

    manager
        .save(&AccessConfig::with_hash("00"))
        .expect("save config");

    assert!(path.exists());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    let manager = ConfigManager::new(path.clone());
    manager
        .save(&AccessConfig::with_hash("00"))
        .expect("save config");

    let mode = fs::metadata(&path).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
