//! Module rule descriptors.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::loader::Loader;

/// What a rule matches: a pattern over file names, or an explicit set of
/// paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleTest {
    Pattern(String),
    Paths(Vec<PathBuf>),
}

impl RuleTest {
    pub fn pattern(source: impl Into<String>) -> Self {
        Self::Pattern(source.into())
    }

    /// Whether this matcher applies to the given path. First-match
    /// resolution across a rule list is the consumer's job; this only
    /// answers for a single rule.
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Pattern(source) => Regex::new(source)
                .map(|re| re.is_match(&path.to_string_lossy()))
                .unwrap_or(false),
            Self::Paths(paths) => paths
                .iter()
                .any(|candidate| path == candidate || path.starts_with(candidate)),
        }
    }
}

/// A declarative record telling the bundler which files to transform and
/// with which loader stages. Serializes to the bundler's `module.rules`
/// entry shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    pub test: RuleTest,

    /// Loader stages, applied by the consumer in reverse order
    #[serde(rename = "use")]
    pub transforms: Vec<Loader>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<PathBuf>,
}

impl ModuleRule {
    pub fn new(test: RuleTest) -> Self {
        Self {
            test,
            transforms: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Append a loader stage.
    pub fn transform(mut self, loader: Loader) -> Self {
        self.transforms.push(loader);
        self
    }

    pub fn include(mut self, paths: Vec<PathBuf>) -> Self {
        self.include = paths;
        self
    }

    pub fn exclude(mut self, paths: Vec<PathBuf>) -> Self {
        self.exclude = paths;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Loader;

    #[test]
    fn pattern_matches_file_names() {
        let test = RuleTest::pattern(r"\.worker\.js$");
        assert!(test.matches(Path::new("/app/src/upload.worker.js")));
        assert!(!test.matches(Path::new("/app/src/upload.js")));
    }

    #[test]
    fn plain_script_pattern_also_matches_workers() {
        // Worker files are routed by rule order on the consumer side, not
        // by the pattern itself.
        let test = RuleTest::pattern(r"\.js$");
        assert!(test.matches(Path::new("/app/src/upload.worker.js")));
    }

    #[test]
    fn path_set_matches_exact_and_nested_paths() {
        let test = RuleTest::Paths(vec![PathBuf::from("/app/node_modules/@dlghq")]);
        assert!(test.matches(Path::new("/app/node_modules/@dlghq")));
        assert!(test.matches(Path::new("/app/node_modules/@dlghq/dialog-web-core/src/index.js")));
        assert!(!test.matches(Path::new("/app/src/index.js")));
    }

    #[test]
    fn invalid_pattern_matches_nothing() {
        let test = RuleTest::Pattern("(".to_string());
        assert!(!test.matches(Path::new("/app/src/index.js")));
    }

    #[test]
    fn rule_serializes_use_key_and_drops_empty_lists() {
        let rule = ModuleRule::new(RuleTest::pattern(r"\.yml$")).transform(Loader::bare("yml-loader"));
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["test"], serde_json::json!(r"\.yml$"));
        assert_eq!(value["use"][0]["loader"], serde_json::json!("yml-loader"));
        assert!(value.get("include").is_none());
        assert!(value.get("exclude").is_none());
    }
}
