//! Top-level configuration document.
//!
//! This module provides the main `RiggerConfig` struct. For file
//! discovery, see the `discovery` module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::options::WebOptions;
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiggerConfig {
    #[serde(default)]
    pub web: WebOptions,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl RiggerConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use rigger_config::RiggerConfig;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let value = json!({
    ///     "web": {
    ///         "root": "/app",
    ///         "environment": "production"
    ///     }
    /// });
    ///
    /// let config = RiggerConfig::from_value(value).unwrap();
    /// assert_eq!(config.web.root, PathBuf::from("/app"));
    /// assert!(config.web.environment.is_production());
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn from_value_creates_config() {
        let value = json!({
            "web": {
                "root": "/app",
                "css_prefix": "im",
                "paths": {
                    "js": "/app/src"
                }
            }
        });

        let config = RiggerConfig::from_value(value).unwrap();
        assert_eq!(config.web.root, PathBuf::from("/app"));
        assert_eq!(config.web.css_prefix, "im");
        assert_eq!(config.web.paths.js.to_vec(), vec![PathBuf::from("/app/src")]);
    }

    #[test]
    fn from_value_rejects_malformed_config() {
        let value = json!({ "web": { "root": 42 } });
        assert!(matches!(
            RiggerConfig::from_value(value),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn to_value_serializes_config() {
        let mut config = RiggerConfig::default();
        config.web.root = PathBuf::from("/app");
        config.web.environment = "production".into();

        let value = config.to_value().unwrap();
        assert_eq!(value["web"]["root"], json!("/app"));
        assert_eq!(value["web"]["environment"], json!("production"));
    }
}
