//! Core option types consumed by rule generation.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Build environment selector.
///
/// Round-trips through its string form so configs can say
/// `environment = "production"`. Values other than `production` and
/// `development` are preserved as [`Environment::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    Production,
    Development,
    Custom(String),
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
            Self::Custom(name) => name,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::Development
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "production" => Self::Production,
            "development" => Self::Development,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A path option that accepts either a single path or a list of paths.
///
/// Normalization is total: absent values yield an empty list, a scalar
/// yields a one-element list, and a list passes through in order.
///
/// # Example
///
/// ```
/// use rigger_config::PathArg;
/// use std::path::PathBuf;
///
/// assert!(PathArg::default().to_vec().is_empty());
///
/// let one = PathArg::from("src/app.js");
/// assert_eq!(one.to_vec(), vec![PathBuf::from("src/app.js")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathArg {
    #[default]
    None,
    One(PathBuf),
    Many(Vec<PathBuf>),
}

impl PathArg {
    /// Normalize into an owned list of paths, preserving order.
    pub fn to_vec(&self) -> Vec<PathBuf> {
        match self {
            Self::None => Vec::new(),
            Self::One(path) => vec![path.clone()],
            Self::Many(paths) => paths.clone(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::One(_) => false,
            Self::Many(paths) => paths.is_empty(),
        }
    }
}

impl From<&str> for PathArg {
    fn from(value: &str) -> Self {
        Self::One(PathBuf::from(value))
    }
}

impl From<PathBuf> for PathArg {
    fn from(value: PathBuf) -> Self {
        Self::One(value)
    }
}

impl From<Vec<PathBuf>> for PathArg {
    fn from(value: Vec<PathBuf>) -> Self {
        Self::Many(value)
    }
}

/// Application source locations fed into the generated rules.
///
/// Every field accepts a single path or a list of paths. Paths are
/// expected to be absolute; relative paths are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppPaths {
    /// Build-time evaluated modules (val-loader inputs)
    #[serde(default, skip_serializing_if = "PathArg::is_none")]
    pub val_files: PathArg,

    /// Application script sources
    #[serde(default, skip_serializing_if = "PathArg::is_none")]
    pub js: PathArg,

    /// Global (unscoped) stylesheets
    #[serde(default, skip_serializing_if = "PathArg::is_none")]
    pub styles: PathArg,

    /// CSS-module stylesheets (scoped class names)
    #[serde(default, skip_serializing_if = "PathArg::is_none")]
    pub css_modules: PathArg,
}

/// Options describing one web application build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebOptions {
    /// Project root directory; fixed library paths resolve against it
    pub root: PathBuf,

    #[serde(default)]
    pub environment: Environment,

    /// Prefix for generated scoped CSS class names
    #[serde(default = "default_css_prefix")]
    pub css_prefix: String,

    #[serde(default)]
    pub paths: AppPaths,
}

impl Default for WebOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            environment: Environment::default(),
            css_prefix: default_css_prefix(),
            paths: AppPaths::default(),
        }
    }
}

fn default_css_prefix() -> String {
    "app".to_string()
}
