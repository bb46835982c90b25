//! Global settings shared across builds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Log level filter (`silent`, `error`, `warn`, `info`, `debug`)
    #[serde(default)]
    pub log_level: Option<String>,

    /// Log output format (`compact` or `full`)
    #[serde(default)]
    pub log_format: Option<String>,
}
