//! PostCSS stage configuration.
//!
//! Every CSS rule ends with this stage. The plugin chain lives in the
//! project's `postcss.config.js`; this only points the loader at it.

use rigger_config::WebOptions;

use crate::loader::{Loader, LoaderOptions, PostCssOptions};
use crate::resolve::resolve;

pub const POSTCSS_LOADER: &str = "postcss-loader";

/// Build the PostCSS stage for the given options. Source maps stay on
/// outside production builds.
pub fn configure_postcss(options: &WebOptions) -> Loader {
    Loader::with_options(
        POSTCSS_LOADER,
        LoaderOptions::PostCss(PostCssOptions {
            config: resolve(&options.root, "postcss.config.js"),
            source_map: !options.environment.is_production(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options(environment: &str) -> WebOptions {
        WebOptions {
            root: PathBuf::from("/app"),
            environment: environment.into(),
            ..WebOptions::default()
        }
    }

    #[test]
    fn stage_points_at_the_project_config() {
        let stage = configure_postcss(&options("development"));
        assert_eq!(stage.loader, POSTCSS_LOADER);
        match stage.options {
            Some(LoaderOptions::PostCss(ref postcss)) => {
                assert_eq!(postcss.config, PathBuf::from("/app/postcss.config.js"));
                assert!(postcss.source_map);
            }
            ref other => panic!("unexpected options: {other:?}"),
        }
    }

    #[test]
    fn production_disables_source_maps() {
        let stage = configure_postcss(&options("production"));
        match stage.options {
            Some(LoaderOptions::PostCss(ref postcss)) => assert!(!postcss.source_map),
            ref other => panic!("unexpected options: {other:?}"),
        }
    }
}
