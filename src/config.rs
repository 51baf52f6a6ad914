//! Run configuration.
//!
//! Everything a run needs is resolved up front and then immutable: absolute
//! source and output roots, the parsed template, and the stylesheet-copy
//! flag. The template is threaded explicitly through the renderer and index
//! builder rather than living in process-wide state, and a custom template
//! file replaces the embedded default entirely — there is no fallback once
//! an override is supplied.

use crate::template::{DEFAULT_TEMPLATE, TemplateError, Templates};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Source directory {0} does not exist")]
    MissingSource(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

/// Immutable configuration for one generator run.
pub struct Config {
    /// Absolute source root containing the Markdown tree.
    pub source: PathBuf,
    /// Absolute output root; created on demand during the walk.
    pub output: PathBuf,
    /// The parsed page/index template.
    pub templates: Templates,
    /// Copy `style.css` from the source root after the walk.
    pub copy_stylesheet: bool,
}

impl Config {
    /// Resolve and validate configuration.
    ///
    /// Fails if the source directory is absent, the custom template file is
    /// unreadable, or the chosen template text does not parse. Template
    /// errors surface here, before any output is written.
    pub fn load(
        source: &Path,
        output: &Path,
        template_path: Option<&Path>,
        copy_stylesheet: bool,
    ) -> Result<Self, ConfigError> {
        let source = std::path::absolute(source)?;
        let output = std::path::absolute(output)?;

        if !source.is_dir() {
            return Err(ConfigError::MissingSource(source));
        }

        let template_text = match template_path {
            Some(path) => fs::read_to_string(path)?,
            None => DEFAULT_TEMPLATE.to_string(),
        };
        let templates = Templates::new(&template_text)?;

        Ok(Config {
            source,
            output,
            templates,
            copy_stylesheet,
        })
    }
}
