//! Module-rule generation for Dialog web application builds.
//!
//! Turns a [`rigger_config::WebOptions`] into the ordered list of
//! loader rules the consuming bundler applies during module resolution.

pub mod loader;
pub mod logging;
pub mod postcss;
pub mod resolve;
pub mod rule;
pub mod rules;

// Re-export main types
pub use loader::{
    BabelOptions, BabelPreset, CssLoaderOptions, FileLoaderOptions, Loader, LoaderOptions,
    PostCssOptions, PresetOptions,
};
pub use postcss::configure_postcss;
pub use resolve::resolve;
pub use rule::{ModuleRule, RuleTest};
pub use rules::{configure_module_rules, rules_to_value};
