//! The tree walk driving a full generator run.
//!
//! One depth-first traversal of the source tree: every directory gets an
//! index, every `*.md` regular file gets a rendered page. Version-control
//! metadata directories are pruned whole, descendants included. The first
//! error is returned to the caller rather than terminating the process
//! here, so a run stays testable as a plain function.

use crate::config::Config;
use crate::index::{self, IndexError};
use crate::output;
use crate::page::{self, RenderError};
use std::fs;
use thiserror::Error;
use walkdir::WalkDir;

/// Version-control metadata directory name, pruned from the walk and from
/// index listings.
pub const VCS_DIR: &str = ".git";

/// Name of the stylesheet optionally copied from source root to output root.
const STYLESHEET: &str = "style.css";

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Counts reported after a successful run.
#[derive(Debug, Default, PartialEq)]
pub struct WalkSummary {
    pub pages: usize,
    pub indexes: usize,
}

/// Run the full generation pass over the source tree.
///
/// Fail-fast: the first render or index error aborts the traversal and is
/// returned. Output written before the failing step stays on disk. After a
/// successful walk, `style.css` is copied from the source root to the output
/// root when configured, with absence or copy failure silently ignored.
pub fn walk(config: &Config) -> Result<WalkSummary, WalkError> {
    let mut summary = WalkSummary::default();

    let walker = WalkDir::new(&config.source)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == VCS_DIR));

    for entry in walker {
        let entry = entry?;

        if entry.file_type().is_dir() {
            let written = index::write_index(entry.path(), config)?;
            output::print_index(&written);
            summary.indexes += 1;
        } else if entry.file_type().is_file()
            && entry.path().extension().map(|e| e == "md").unwrap_or(false)
        {
            let written = page::render_page(entry.path(), config)?;
            output::print_page(&written);
            summary.pages += 1;
        }
    }

    if config.copy_stylesheet {
        // Best-effort: a missing or unreadable stylesheet never fails a run
        let _ = fs::copy(
            config.source.join(STYLESHEET),
            config.output.join(STYLESHEET),
        );
    }

    Ok(summary)
}
