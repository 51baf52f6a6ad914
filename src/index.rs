//! Per-directory index generation.
//!
//! Each source directory gets one `index.html` in its mapped output
//! directory, listing immediate children only: subdirectories first, then
//! Markdown-derived pages. Ordering within each group is stable
//! lexicographic by name — an explicit choice rather than whatever order
//! the platform's directory enumeration happens to return.

use crate::config::Config;
use crate::paths::{self, PathError};
use crate::template::{IndexEntry, RenderContext, TemplateError};
use crate::walk::VCS_DIR;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Title of the source root's index page.
const TOP_TITLE: &str = "Main Index";

/// Build the listing for one directory's immediate children.
///
/// Subdirectories become `name/` entries, `.md` files become `stem.html`
/// entries; everything else (including version-control metadata, which the
/// walker never descends into) is left out. Directory entries precede file
/// entries, lexicographic within each group.
pub fn build_entries(dir: &Path) -> Result<Vec<IndexEntry>, IndexError> {
    let mut entries: Vec<IndexEntry> = Vec::new();

    for child in fs::read_dir(dir)? {
        let child = child?;
        let path = child.path();
        let name = child.file_name().to_string_lossy().to_string();

        if path.is_dir() {
            if name != VCS_DIR {
                entries.push(IndexEntry::dir(&name));
            }
        } else if path.extension().map(|e| e == "md").unwrap_or(false) {
            let stem = paths::page_title(&path);
            entries.push(IndexEntry::file(&stem));
        }
    }

    entries.sort_by(|a, b| (a.is_file, &a.name).cmp(&(b.is_file, &b.name)));
    Ok(entries)
}

/// Generate `index.html` for one source directory.
///
/// The source root is titled "Main Index" and marked top-level; every other
/// directory is titled by its `/`-prefixed source-relative path. The mapped
/// output directory is created as needed and any existing `index.html` is
/// truncated. Returns the written path.
pub fn write_index(dir: &Path, config: &Config) -> Result<PathBuf, IndexError> {
    let out_dir = paths::map_to_output(dir, &config.source, &config.output)?;
    fs::create_dir_all(&out_dir)?;

    let is_top = dir == config.source;
    let title = if is_top {
        TOP_TITLE.to_string()
    } else {
        let rel = dir
            .strip_prefix(&config.source)
            .map_err(|_| PathError::NotUnderRoot(dir.to_path_buf(), config.source.clone()))?;
        format!("/{}", rel.display())
    };

    let entries = build_entries(dir)?;
    let ctx = RenderContext::index(title, entries, is_top);
    let html = config.templates.render(&ctx)?;

    let out_path = out_dir.join("index.html");
    fs::write(&out_path, html)?;
    Ok(out_path)
}
