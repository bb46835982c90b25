//! Loader stage descriptors.
//!
//! Each loader is a named transform stage with typed options. Options
//! serialize with camelCase keys, matching what the consuming bundler
//! expects to read back.

use std::path::PathBuf;

use rigger_config::Environment;
use serde::{Deserialize, Serialize};

/// One named transform stage in a rule's `use` chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loader {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LoaderOptions>,
}

impl Loader {
    /// A loader with no options.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            loader: name.into(),
            options: None,
        }
    }

    pub fn with_options(name: impl Into<String>, options: LoaderOptions) -> Self {
        Self {
            loader: name.into(),
            options: Some(options),
        }
    }
}

/// Typed options for the loaders this crate emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderOptions {
    Babel(BabelOptions),
    Css(CssLoaderOptions),
    File(FileLoaderOptions),
    PostCss(PostCssOptions),
}

/// Script compilation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabelOptions {
    pub babelrc: bool,
    pub cache_directory: bool,
    pub presets: Vec<BabelPreset>,
}

impl BabelOptions {
    /// The shared Dialog preset, with its production/development switches
    /// derived from the build environment.
    pub fn for_environment(environment: &Environment) -> Self {
        Self {
            babelrc: false,
            cache_directory: true,
            presets: vec![BabelPreset(
                "@dlghq/dialog".to_string(),
                PresetOptions {
                    modules: false,
                    optimize: environment.is_production(),
                    development: environment.is_development(),
                },
            )],
        }
    }
}

/// A preset reference: name plus configuration, serialized as a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabelPreset(pub String, pub PresetOptions);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetOptions {
    pub modules: bool,
    pub optimize: bool,
    pub development: bool,
}

/// Stylesheet interpretation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssLoaderOptions {
    /// Generate scoped class names
    pub modules: bool,

    /// Number of loaders applied before this one to `@import`ed files
    pub import_loaders: u32,

    /// Template for generated scoped class names, e.g. `app-[name]-[local]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ident_name: Option<String>,
}

impl CssLoaderOptions {
    /// Plain global stylesheets, class names untouched.
    pub fn global() -> Self {
        Self {
            modules: false,
            import_loaders: 1,
            local_ident_name: None,
        }
    }

    /// CSS modules with the given class-name template.
    pub fn scoped(template: impl Into<String>) -> Self {
        Self {
            modules: true,
            import_loaders: 1,
            local_ident_name: Some(template.into()),
        }
    }
}

/// Binary asset emission options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLoaderOptions {
    /// Output naming template
    pub name: String,
}

/// PostCSS stage options. The plugin chain itself lives in the referenced
/// config file, outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCssOptions {
    pub config: PathBuf,
    pub source_map: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn babel_flags_follow_environment() {
        let prod = BabelOptions::for_environment(&Environment::Production);
        assert!(prod.presets[0].1.optimize);
        assert!(!prod.presets[0].1.development);

        let dev = BabelOptions::for_environment(&Environment::Development);
        assert!(!dev.presets[0].1.optimize);
        assert!(dev.presets[0].1.development);

        let other = BabelOptions::for_environment(&Environment::from("staging"));
        assert!(!other.presets[0].1.optimize);
        assert!(!other.presets[0].1.development);
    }

    #[test]
    fn babel_options_serialize_with_camel_case_keys() {
        let options = BabelOptions::for_environment(&Environment::Development);
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["babelrc"], serde_json::json!(false));
        assert_eq!(value["cacheDirectory"], serde_json::json!(true));
        assert_eq!(value["presets"][0][0], serde_json::json!("@dlghq/dialog"));
        assert_eq!(value["presets"][0][1]["modules"], serde_json::json!(false));
    }

    #[test]
    fn css_options_carry_the_template_only_when_scoped() {
        let global = serde_json::to_value(CssLoaderOptions::global()).unwrap();
        assert!(global.get("localIdentName").is_none());
        assert_eq!(global["importLoaders"], serde_json::json!(1));

        let scoped = serde_json::to_value(CssLoaderOptions::scoped("app-[name]-[local]")).unwrap();
        assert_eq!(scoped["modules"], serde_json::json!(true));
        assert_eq!(scoped["localIdentName"], serde_json::json!("app-[name]-[local]"));
    }

    #[test]
    fn bare_loader_serializes_without_options() {
        let value = serde_json::to_value(Loader::bare("val-loader")).unwrap();
        assert_eq!(value, serde_json::json!({ "loader": "val-loader" }));
    }
}
