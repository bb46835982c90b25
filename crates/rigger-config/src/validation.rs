//! Pluggable option validation strategies
//!
//! Separates filesystem validation (for build-host use) from schema
//! validation (for library use). The rule builder itself never validates;
//! callers run one of these strategies beforehand.

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::options::{PathArg, WebOptions};

/// Trait for pluggable option validation strategies
pub trait ConfigValidator {
    /// Validate web build options
    fn validate(&self, options: &WebOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use rigger_config::{ConfigValidator, SchemaValidator, WebOptions};
///
/// let options = WebOptions::default();
/// SchemaValidator.validate(&options).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, options: &WebOptions) -> Result<()> {
        if options.root.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "root directory cannot be empty".to_string(),
                hint: Some("Set 'root' to the project directory".to_string()),
            });
        }

        if !is_valid_css_prefix(&options.css_prefix) {
            return Err(ConfigError::SchemaValidation {
                message: format!("'{}' is not a usable CSS class prefix", options.css_prefix),
                hint: Some(
                    "Use ASCII letters, digits, '-' or '_', starting with a letter or '_'"
                        .to_string(),
                ),
            });
        }

        Ok(())
    }
}

/// Generated class names start with the prefix, so it must itself open a
/// valid CSS identifier.
fn is_valid_css_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Filesystem validator (for build-host use)
///
/// Validates that the root directory and every configured path list entry
/// exist on disk. Relative entries are resolved against the root.
///
/// # Example
///
/// ```no_run
/// use rigger_config::{ConfigValidator, FsValidator, WebOptions};
///
/// let options = WebOptions::default();
/// FsValidator.validate(&options).unwrap();
/// ```
pub struct FsValidator;

impl FsValidator {
    fn check_all(&self, root: &Path, paths: &PathArg) -> Result<()> {
        for entry in paths.to_vec() {
            let path = if entry.is_absolute() {
                entry
            } else {
                root.join(entry)
            };
            if !path.exists() {
                return Err(ConfigError::PathNotFound(path));
            }
        }
        Ok(())
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, options: &WebOptions) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(options)?;

        if !options.root.is_dir() {
            return Err(ConfigError::RootNotFound(options.root.clone()));
        }

        self.check_all(&options.root, &options.paths.val_files)?;
        self.check_all(&options.root, &options.paths.js)?;
        self.check_all(&options.root, &options.paths.styles)?;
        self.check_all(&options.root, &options.paths.css_modules)?;

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(options: &WebOptions) -> Result<()> {
    SchemaValidator.validate(options)
}

/// Convenience function for filesystem validation
pub fn validate_fs(options: &WebOptions) -> Result<()> {
    FsValidator.validate(options)
}
