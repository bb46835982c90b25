//! Module rule assembly.
//!
//! [`configure_module_rules`] turns one [`WebOptions`] into the full
//! ordered rule list for a Dialog web application build. Ordering is
//! significant; the consumer resolves rules first-match.

use std::path::PathBuf;

use rigger_config::{Environment, WebOptions};
use serde_json::Value;
use tracing::debug;

use crate::loader::{BabelOptions, CssLoaderOptions, FileLoaderOptions, Loader, LoaderOptions};
use crate::postcss::configure_postcss;
use crate::resolve::resolve;
use crate::rule::{ModuleRule, RuleTest};

// Library sources shipped through node_modules that still go through the
// loader pipeline.
const DLG_SCOPE: &str = "node_modules/@dlghq";
const WEB_CORE: &str = "node_modules/@dlghq/dialog-web-core";
const COMPONENTS: &str = "node_modules/@dlghq/dialog-components";
const JAVA_CORE: &str = "node_modules/@dlghq/dialog-java-core";
const BABEL_SCOPE: &str = "node_modules/@babel";

const MESSAGES_GENERATE: &str = "node_modules/@dlghq/dialog-web-core/src/messages-generate.js";
const GLOBAL_STYLESHEET: &str = "node_modules/@dlghq/dialog-web-core/src/styles/global.css";
const ICON_SVG_DIR: &str = "node_modules/@dlghq/dialog-components/src/components/Icon/svg";

const VAL_LOADER: &str = "val-loader";
const BABEL_LOADER: &str = "babel-loader";
const WORKER_LOADER: &str = "worker-loader";
const STYLE_LOADER: &str = "style-loader";
const CSS_LOADER: &str = "css-loader";
const EXTRACT_LOADER: &str = "mini-css-extract-plugin/dist/loader";
const YML_LOADER: &str = "yml-loader";
const FILE_LOADER: &str = "file-loader";
const SVG_SPRITE_LOADER: &str = "svg-sprite-loader";

const SCRIPT_TEST: &str = r"\.js$";
const WORKER_TEST: &str = r"\.worker\.js$";
const CSS_TEST: &str = r"\.css$";
const YML_TEST: &str = r"\.yml$";
const ASSET_TEST: &str = r"\.(svg|png|gif|jpe?g|ttf|eot|woff2?|mp3)$";
const SVG_TEST: &str = r"\.svg$";

const ASSET_NAME_TEMPLATE: &str = "[sha1:hash:hex].[ext]";

/// Assemble the ordered module rule list for one build.
///
/// The result is a fresh structure on every call; the only collaborators
/// are [`resolve`] and [`configure_postcss`], both pure.
///
/// # Example
///
/// ```
/// use rigger_config::WebOptions;
/// use rigger_rules::configure_module_rules;
///
/// let rules = configure_module_rules(&WebOptions::default());
/// assert!(!rules.is_empty());
/// ```
pub fn configure_module_rules(options: &WebOptions) -> Vec<ModuleRule> {
    debug!(environment = %options.environment, "assembling module rules");

    let mut rules = Vec::new();

    // Build-time evaluated modules, always including the generated
    // translation messages from the web core.
    let val_files: Vec<PathBuf> = options
        .paths
        .val_files
        .to_vec()
        .into_iter()
        .chain([resolve(&options.root, MESSAGES_GENERATE)])
        .collect();

    rules.push(
        ModuleRule::new(RuleTest::Paths(val_files.clone())).transform(Loader::bare(VAL_LOADER)),
    );

    let compile_scripts = Loader::with_options(
        BABEL_LOADER,
        LoaderOptions::Babel(BabelOptions::for_environment(&options.environment)),
    );
    let script_include = script_include(options);
    let script_exclude: Vec<PathBuf> = val_files
        .into_iter()
        .chain([
            resolve(&options.root, JAVA_CORE),
            resolve(&options.root, BABEL_SCOPE),
        ])
        .collect();

    rules.push(
        ModuleRule::new(RuleTest::pattern(SCRIPT_TEST))
            .transform(compile_scripts.clone())
            .include(script_include.clone())
            .exclude(script_exclude.clone()),
    );

    // Worker entry points get wrapped before compilation; same source set
    // as the plain script rule.
    rules.push(
        ModuleRule::new(RuleTest::pattern(WORKER_TEST))
            .transform(Loader::bare(WORKER_LOADER))
            .transform(compile_scripts)
            .include(script_include)
            .exclude(script_exclude),
    );

    match options.environment {
        Environment::Production => rules.extend(extraction_css_rules(options)),
        _ => rules.extend(injection_css_rules(options)),
    }

    rules.push(ModuleRule::new(RuleTest::pattern(YML_TEST)).transform(Loader::bare(YML_LOADER)));

    let icons = vec![resolve(&options.root, ICON_SVG_DIR)];

    rules.push(
        ModuleRule::new(RuleTest::pattern(ASSET_TEST))
            .transform(Loader::with_options(
                FILE_LOADER,
                LoaderOptions::File(FileLoaderOptions {
                    name: ASSET_NAME_TEMPLATE.to_string(),
                }),
            ))
            .exclude(icons.clone()),
    );

    rules.push(
        ModuleRule::new(RuleTest::pattern(SVG_TEST))
            .transform(Loader::bare(SVG_SPRITE_LOADER))
            .include(icons),
    );

    rules
}

/// Serialize a rule list into one JSON document for the consuming
/// bundler.
pub fn rules_to_value(rules: &[ModuleRule]) -> rigger_config::Result<Value> {
    serde_json::to_value(rules).map_err(|e| rigger_config::ConfigError::InvalidValue(e.to_string()))
}

fn script_include(options: &WebOptions) -> Vec<PathBuf> {
    options
        .paths
        .js
        .to_vec()
        .into_iter()
        .chain([
            resolve(&options.root, DLG_SCOPE),
            resolve(&options.root, WEB_CORE),
            resolve(&options.root, COMPONENTS),
        ])
        .collect()
}

fn global_style_include(options: &WebOptions) -> Vec<PathBuf> {
    options
        .paths
        .styles
        .to_vec()
        .into_iter()
        .chain([resolve(&options.root, GLOBAL_STYLESHEET)])
        .collect()
}

/// Production CSS rules: styles are extracted into a standalone artifact,
/// scoped class names collapse to a content hash.
fn extraction_css_rules(options: &WebOptions) -> Vec<ModuleRule> {
    let postcss = configure_postcss(options);
    let global_include = global_style_include(options);

    let global = ModuleRule::new(RuleTest::pattern(CSS_TEST))
        .transform(Loader::bare(EXTRACT_LOADER))
        .transform(Loader::with_options(
            CSS_LOADER,
            LoaderOptions::Css(CssLoaderOptions::global()),
        ))
        .transform(postcss.clone())
        .include(global_include.clone());

    let scoped_include: Vec<PathBuf> = options
        .paths
        .css_modules
        .to_vec()
        .into_iter()
        .chain([
            resolve(&options.root, DLG_SCOPE),
            resolve(&options.root, WEB_CORE),
            resolve(&options.root, COMPONENTS),
        ])
        .collect();

    let scoped = ModuleRule::new(RuleTest::pattern(CSS_TEST))
        .transform(Loader::bare(EXTRACT_LOADER))
        .transform(Loader::with_options(
            CSS_LOADER,
            LoaderOptions::Css(CssLoaderOptions::scoped(format!(
                "{}-[sha1:hash:hex]",
                options.css_prefix
            ))),
        ))
        .transform(postcss)
        .include(scoped_include)
        .exclude(global_include);

    vec![global, scoped]
}

/// Development-style CSS rules: styles are injected at runtime, scoped
/// class names keep the file and local names for debugging.
fn injection_css_rules(options: &WebOptions) -> Vec<ModuleRule> {
    let postcss = configure_postcss(options);

    let global = ModuleRule::new(RuleTest::pattern(CSS_TEST))
        .transform(Loader::bare(STYLE_LOADER))
        .transform(Loader::with_options(
            CSS_LOADER,
            LoaderOptions::Css(CssLoaderOptions::global()),
        ))
        .transform(postcss.clone())
        .include(global_style_include(options));

    let app = ModuleRule::new(RuleTest::pattern(CSS_TEST))
        .transform(Loader::bare(STYLE_LOADER))
        .transform(Loader::with_options(
            CSS_LOADER,
            LoaderOptions::Css(CssLoaderOptions::scoped(format!(
                "{}-[name]-[local]",
                options.css_prefix
            ))),
        ))
        .transform(postcss.clone())
        .include(options.paths.css_modules.to_vec())
        .exclude(options.paths.styles.to_vec());

    let sdk = ModuleRule::new(RuleTest::pattern(CSS_TEST))
        .transform(Loader::bare(STYLE_LOADER))
        .transform(Loader::with_options(
            CSS_LOADER,
            LoaderOptions::Css(CssLoaderOptions::scoped("DialogSDK-[name]-[local]")),
        ))
        .transform(postcss.clone())
        .include(vec![resolve(&options.root, WEB_CORE)])
        .exclude(vec![resolve(&options.root, GLOBAL_STYLESHEET)]);

    let components = ModuleRule::new(RuleTest::pattern(CSS_TEST))
        .transform(Loader::bare(STYLE_LOADER))
        .transform(Loader::with_options(
            CSS_LOADER,
            LoaderOptions::Css(CssLoaderOptions::scoped("DialogComponents-[name]-[local]")),
        ))
        .transform(postcss)
        .include(vec![resolve(&options.root, COMPONENTS)]);

    vec![global, app, sdk, components]
}
