//! Page rendering: one Markdown file to one HTML file.

use crate::config::Config;
use crate::paths::{self, PathError};
use crate::template::{RenderContext, TemplateError};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Render one Markdown file into the output tree.
///
/// The output location mirrors the source location with the `.md` extension
/// swapped for `.html`; the page title is the output filename without its
/// extension. Existing output is truncated. Returns the written path.
pub fn render_page(md_path: &Path, config: &Config) -> Result<std::path::PathBuf, RenderError> {
    let mapped = paths::map_to_output(md_path, &config.source, &config.output)?;
    let out_path = paths::html_sibling(&mapped);
    let title = paths::page_title(&out_path);

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = fs::read_to_string(md_path)?;
    let body = crate::markdown::to_html(&content);

    let ctx = RenderContext::page(title, body);
    let html = config.templates.render(&ctx)?;
    fs::write(&out_path, html)?;

    Ok(out_path)
}
