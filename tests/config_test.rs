use poc_dashboard::config::{ConfigError, ConfigManager, ConfigStore, FileConfigStore};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_survive_a_new_store_instance() {
    let dir = tempdir().unwrap();

    let mut manager = ConfigManager::load(FileConfigStore::new(dir.path())).unwrap();
    assert!(!manager.is_configured());
    manager.set_token("secret-token").unwrap();
    manager.set_base_url("https://staging.example.com").unwrap();
    manager.set_timeout(Duration::from_secs(5)).unwrap();

    let reopened = ConfigManager::load(FileConfigStore::new(dir.path())).unwrap();
    let config = reopened.effective();
    assert!(reopened.is_configured());
    assert_eq!(config.token.as_deref(), Some("secret-token"));
    assert_eq!(config.base_url, "https://staging.example.com");
    assert_eq!(config.timeout_ms, 5000);
    assert!(dir.path().join("poc-sdk-config.json").exists());
}

#[test]
fn reset_clears_token_and_keeps_base_url() {
    let dir = tempdir().unwrap();
    let mut manager = ConfigManager::load(FileConfigStore::new(dir.path())).unwrap();
    manager.set_token("secret-token").unwrap();
    manager.set_base_url("https://staging.example.com").unwrap();

    manager.reset().unwrap();

    let stored = FileConfigStore::new(dir.path()).load().unwrap().unwrap();
    assert_eq!(stored.token, None);
    assert_eq!(stored.base_url, "https://staging.example.com");
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let store = FileConfigStore::new(dir.path().join("nested"));
    assert_eq!(store.load().unwrap(), None);

    let manager = ConfigManager::load(store).unwrap();
    assert_eq!(manager.effective().base_url, "https://api.example.com");
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("poc-sdk-config.json"), "{ not json").unwrap();

    let result = ConfigManager::load(FileConfigStore::new(dir.path()));
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
