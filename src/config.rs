//! # Credential Configuration
//!
//! The endpoint settings (`token`, `baseUrl`, `timeoutMs`) persisted under the
//! `poc-sdk-config` namespace. [`FileConfigStore`] keeps them in
//! `<dir>/poc-sdk-config.json` so they survive restarts; [`MemoryConfigStore`]
//! is for tests and throwaway sessions.
//!
//! [`ConfigManager`] owns the persisted values and layers environment
//! overrides on top:
//!
//! | variable | overrides |
//! |---|---|
//! | `POC_SDK_TOKEN` | `token` |
//! | `POC_SDK_BASE_URL` | `baseUrl` |
//! | `POC_SDK_TIMEOUT_MS` | `timeoutMs` |
//!
//! Overrides are never written back to the store.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tiered_client::transport::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use tiered_client::{TransportConfig, Url};
use tracing::{debug, info};

pub const NAMESPACE: &str = "poc-sdk-config";

pub const ENV_TOKEN: &str = "POC_SDK_TOKEN";
pub const ENV_BASE_URL: &str = "POC_SDK_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "POC_SDK_TIMEOUT_MS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

/// Persisted endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkConfig {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SdkConfig {
    /// True when a non-empty token is present.
    pub fn is_configured(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_base_url(&self.base_url)?;
        check_timeout(self.timeout_ms)
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            base_url: self.base_url.clone(),
            token: self.token.clone().filter(|t| !t.is_empty()),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

fn check_base_url(url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme {other}"),
        }),
    }
}

fn check_timeout(timeout_ms: u64) -> Result<(), ConfigError> {
    if timeout_ms == 0 {
        return Err(ConfigError::InvalidTimeout("timeout must be positive".into()));
    }
    Ok(())
}

/// Where [`SdkConfig`] is persisted.
pub trait ConfigStore: Send + Sync {
    /// `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<SdkConfig>, ConfigError>;

    fn save(&self, config: &SdkConfig) -> Result<(), ConfigError>;
}

/// JSON file at `<dir>/poc-sdk-config.json`.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{NAMESPACE}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Option<SdkConfig>, ConfigError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        debug!(path = %self.path.display(), "Loaded config file");
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, config: &SdkConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, raw).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), "Saved config file");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    slot: Mutex<Option<SdkConfig>>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Option<SdkConfig>, ConfigError> {
        Ok(self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, config: &SdkConfig) -> Result<(), ConfigError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(())
    }
}

/// Values taken from the environment, applied over the persisted config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub timeout_ms: Option<u64>,
}

impl EnvOverrides {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let timeout_ms = get(ENV_TIMEOUT_MS)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidTimeout(format!("{ENV_TIMEOUT_MS}={raw}: {e}")))
            })
            .transpose()?;
        Ok(Self {
            token: get(ENV_TOKEN),
            base_url: get(ENV_BASE_URL),
            timeout_ms,
        })
    }

    fn apply(&self, config: &mut SdkConfig) {
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
    }
}

/// Reads, changes and persists the endpoint settings.
pub struct ConfigManager {
    store: Box<dyn ConfigStore>,
    persisted: SdkConfig,
    overrides: EnvOverrides,
}

impl ConfigManager {
    /// Loads the persisted config, falling back to defaults when none exists.
    pub fn load(store: impl ConfigStore + 'static) -> Result<Self, ConfigError> {
        let persisted = store.load()?.unwrap_or_default();
        persisted.validate()?;
        Ok(Self {
            store: Box::new(store),
            persisted,
            overrides: EnvOverrides::default(),
        })
    }

    /// Applies `overrides` on top of the persisted values.
    pub fn with_overrides(mut self, overrides: EnvOverrides) -> Result<Self, ConfigError> {
        self.overrides = overrides;
        self.effective().validate()?;
        Ok(self)
    }

    /// What the transport should use: persisted values plus overrides.
    pub fn effective(&self) -> SdkConfig {
        let mut config = self.persisted.clone();
        self.overrides.apply(&mut config);
        config
    }

    /// The values as stored, without overrides.
    pub fn persisted(&self) -> &SdkConfig {
        &self.persisted
    }

    pub fn is_configured(&self) -> bool {
        self.effective().is_configured()
    }

    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), ConfigError> {
        let token = token.into();
        self.persist(|config| config.token = Some(token))
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> Result<(), ConfigError> {
        let base_url = base_url.into();
        check_base_url(&base_url)?;
        self.persist(|config| config.base_url = base_url)
    }

    pub fn set_timeout(&mut self, timeout: Duration) -> Result<(), ConfigError> {
        let timeout_ms = u64::try_from(timeout.as_millis())
            .map_err(|_| ConfigError::InvalidTimeout(format!("{timeout:?} is too large")))?;
        check_timeout(timeout_ms)?;
        self.persist(|config| config.timeout_ms = timeout_ms)
    }

    /// Clears the token. The base URL and timeout are kept.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.persist(|config| config.token = None)?;
        info!("Credential cleared");
        Ok(())
    }

    /// Saves a changed copy and adopts it only once the store accepted it.
    fn persist(&mut self, change: impl FnOnce(&mut SdkConfig)) -> Result<(), ConfigError> {
        let mut next = self.persisted.clone();
        change(&mut next);
        self.store.save(&next)?;
        self.persisted = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sdk() {
        let config = SdkConfig::default();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout_ms, 30_000);
        assert!(!config.is_configured());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: SdkConfig = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.transport_config().timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn overrides_win_but_are_not_persisted() {
        let overrides = EnvOverrides::from_lookup(|key| match key {
            ENV_TOKEN => Some("env-token".into()),
            ENV_TIMEOUT_MS => Some("5000".into()),
            ENV_BASE_URL => Some("   ".into()),
            _ => None,
        })
        .unwrap();
        let mut manager = ConfigManager::load(MemoryConfigStore::new())
            .unwrap()
            .with_overrides(overrides)
            .unwrap();

        assert!(manager.is_configured());
        assert_eq!(manager.effective().timeout_ms, 5000);
        assert_eq!(manager.effective().base_url, DEFAULT_BASE_URL);

        manager.set_token("stored").unwrap();
        assert_eq!(manager.persisted().token.as_deref(), Some("stored"));
        assert_eq!(manager.effective().token.as_deref(), Some("env-token"));
    }

    #[test]
    fn bad_timeout_override_is_rejected() {
        let result = EnvOverrides::from_lookup(|key| (key == ENV_TIMEOUT_MS).then(|| "soon".into()));
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));
    }

    /// Loads defaults and refuses every save.
    struct ReadOnlyStore;

    impl ConfigStore for ReadOnlyStore {
        fn load(&self) -> Result<Option<SdkConfig>, ConfigError> {
            Ok(None)
        }

        fn save(&self, _config: &SdkConfig) -> Result<(), ConfigError> {
            Err(ConfigError::Io {
                path: PathBuf::from("/read-only/config.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn failed_save_leaves_values_unchanged() {
        let mut manager = ConfigManager::load(ReadOnlyStore).unwrap();

        assert!(matches!(manager.set_token("abc"), Err(ConfigError::Io { .. })));
        assert!(matches!(
            manager.set_base_url("https://staging.example.com"),
            Err(ConfigError::Io { .. })
        ));
        assert!(matches!(
            manager.set_timeout(Duration::from_secs(5)),
            Err(ConfigError::Io { .. })
        ));

        assert_eq!(manager.persisted(), &SdkConfig::default());
        assert!(!manager.is_configured());
    }

    #[test]
    fn set_base_url_validates() {
        let mut manager = ConfigManager::load(MemoryConfigStore::new()).unwrap();
        assert!(matches!(
            manager.set_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            manager.set_base_url("ftp://files.example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert_eq!(manager.persisted().base_url, DEFAULT_BASE_URL);
    }
}
