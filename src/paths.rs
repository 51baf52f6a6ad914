//! Source-tree to output-tree path mapping.
//!
//! Every output location is derived from a source location by exchanging the
//! source root for the output root. The mapping is a strict relative-path
//! computation: a path that is not actually rooted under the source root is
//! an error, and a recurrence of the root's string form deeper inside a path
//! is never rewritten.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Path {0} is not under source root {1}")]
    NotUnderRoot(PathBuf, PathBuf),
}

/// Map a source path onto the output tree.
///
/// Strips `source_root` as a leading prefix and joins the remainder onto
/// `output_root`. The source root itself maps to the output root.
pub fn map_to_output(
    path: &Path,
    source_root: &Path,
    output_root: &Path,
) -> Result<PathBuf, PathError> {
    let rel = path
        .strip_prefix(source_root)
        .map_err(|_| PathError::NotUnderRoot(path.to_path_buf(), source_root.to_path_buf()))?;
    Ok(output_root.join(rel))
}

/// Replace a path's extension with `html`.
pub fn html_sibling(path: &Path) -> PathBuf {
    path.with_extension("html")
}

/// Derive a page title from a path: the filename with its extension stripped.
///
/// Depth-independent — `a.md` and `sub/deep/a.md` both title as "a".
pub fn page_title(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
