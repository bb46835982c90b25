//! Lexical path resolution against the project root.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Resolve a path against the project root, cleaning `.` and `..`
/// segments. Absolute inputs are cleaned and returned as-is; no
/// filesystem access happens here.
pub fn resolve(root: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let relative = relative.as_ref();
    if relative.is_absolute() {
        return relative.to_path_buf().clean();
    }
    root.join(relative).clean()
}
