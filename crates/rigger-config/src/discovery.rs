//! File-based config discovery
//!
//! Handles finding and loading rigger configuration files from the
//! filesystem. Library callers with config already in hand should use
//! `RiggerConfig::from_value()` directly.

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde_json::Value;
use tracing::debug;

use crate::config::RiggerConfig;
use crate::error::{ConfigError, Result};

/// Environment variable prefix for config overrides, e.g.
/// `RIGGER_WEB__CSS_PREFIX=im`.
const ENV_PREFIX: &str = "RIGGER_";

/// File-based configuration discovery
///
/// Searches for rigger configuration files in conventional locations and
/// loads them, layering `RIGGER_`-prefixed environment variables on top.
///
/// # Example
///
/// ```no_run
/// use rigger_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let config = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: rigger.toml
    /// 2. package.json (rigger field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("rigger.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        // package.json with rigger field
        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("rigger").is_some() && !parsed["rigger"].is_null() {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<RiggerConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    fn load_from(&self, path: &Path) -> Result<RiggerConfig> {
        debug!(path = %path.display(), "loading configuration");

        // Handle package.json specially
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            let config = self.load_from_package_json(path)?;
            return layer_env(config);
        }

        let content = fs::read_to_string(path)?;
        let config: RiggerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::InvalidValue(format!("invalid TOML syntax: {e}")))?;
        layer_env(config)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<RiggerConfig> {
        let content = fs::read_to_string(path)?;

        let parsed: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::InvalidValue(format!("invalid JSON: {e}")))?;

        let rigger_value = parsed.get("rigger").ok_or_else(|| {
            ConfigError::InvalidValue("package.json has no 'rigger' field".to_string())
        })?;

        if rigger_value.is_null() {
            return Err(ConfigError::InvalidValue(
                "the 'rigger' field cannot be null".to_string(),
            ));
        }

        RiggerConfig::from_value(rigger_value.clone())
    }
}

/// Apply `RIGGER_`-prefixed environment variables over a loaded config.
/// Nested fields use `__` as the separator.
fn layer_env(config: RiggerConfig) -> Result<RiggerConfig> {
    Figment::from(Serialized::defaults(config))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| ConfigError::InvalidValue(e.to_string()))
}

/// Discover and load config from current directory (convenience function)
///
/// # Example
///
/// ```no_run
/// use rigger_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<RiggerConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
