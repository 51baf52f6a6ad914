//! Template execution and the data handed to it.
//!
//! One Tera template serves both rendered pages and index listings; the
//! `is_index` flag in [`RenderContext`] selects which branch the template
//! takes. The default template is embedded at compile time and can be
//! replaced wholesale by a custom file (see [`crate::config`]).
//!
//! The template owns all presentation. The core hands it structured data
//! plus an already-converted HTML fragment; interpolation is auto-escaped
//! except where the template itself opts out with `| safe`.

use serde::Serialize;
use tera::Tera;
use thiserror::Error;

/// The embedded default template, used unless a custom file overrides it.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.html");

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),
}

/// One row of a directory index listing.
///
/// `target` is directory-relative: `"sub/"` for a subdirectory, `"a.html"`
/// for a rendered page. Built per directory, consumed by the template,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexEntry {
    pub name: String,
    pub target: String,
    pub is_file: bool,
}

impl IndexEntry {
    pub fn dir(name: &str) -> Self {
        IndexEntry {
            name: name.to_string(),
            target: format!("{name}/"),
            is_file: false,
        }
    }

    pub fn file(stem: &str) -> Self {
        IndexEntry {
            name: stem.to_string(),
            target: format!("{stem}.html"),
            is_file: true,
        }
    }
}

/// Data for one template execution.
#[derive(Debug, Serialize)]
pub struct RenderContext {
    pub title: String,
    pub entries: Vec<IndexEntry>,
    pub body: String,
    pub footer: String,
    pub is_top: bool,
    pub is_index: bool,
}

impl RenderContext {
    /// Context for a rendered Markdown page: title + body, no listing.
    pub fn page(title: String, body: String) -> Self {
        RenderContext {
            title,
            entries: Vec::new(),
            body,
            footer: String::new(),
            is_top: false,
            is_index: false,
        }
    }

    /// Context for a directory index listing.
    pub fn index(title: String, entries: Vec<IndexEntry>, is_top: bool) -> Self {
        RenderContext {
            title,
            entries,
            body: String::new(),
            footer: String::new(),
            is_top,
            is_index: true,
        }
    }
}

/// A parsed template, immutable after construction.
///
/// Parsing happens once up front so malformed syntax fails the run before
/// any output is written.
pub struct Templates {
    tera: Tera,
}

const PAGE_TEMPLATE: &str = "page.html";

impl Templates {
    pub fn new(text: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        // The .html name keeps Tera's HTML auto-escaping on
        tera.add_raw_template(PAGE_TEMPLATE, text)?;
        Ok(Templates { tera })
    }

    pub fn render(&self, ctx: &RenderContext) -> Result<String, TemplateError> {
        let context = tera::Context::from_serialize(ctx)?;
        Ok(self.tera.render(PAGE_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_parses() {
        Templates::new(DEFAULT_TEMPLATE).unwrap();
    }

    #[test]
    fn malformed_template_is_error() {
        let result = Templates::new("{% if unclosed %}");
        assert!(matches!(result, Err(TemplateError::Tera(_))));
    }

    #[test]
    fn page_context_injects_title_and_body() {
        let templates = Templates::new(DEFAULT_TEMPLATE).unwrap();
        let ctx = RenderContext::page("a".to_string(), "<h1>A</h1>".to_string());
        let html = templates.render(&ctx).unwrap();
        assert!(html.contains("<title>a</title>"));
        assert!(html.contains("<h1>A</h1>"));
    }

    #[test]
    fn body_fragment_is_not_escaped() {
        let templates = Templates::new(DEFAULT_TEMPLATE).unwrap();
        let ctx = RenderContext::page("p".to_string(), "<p>already html</p>".to_string());
        let html = templates.render(&ctx).unwrap();
        assert!(html.contains("<p>already html</p>"));
        assert!(!html.contains("&lt;p&gt;"));
    }

    #[test]
    fn title_is_escaped() {
        let templates = Templates::new(DEFAULT_TEMPLATE).unwrap();
        let ctx = RenderContext::page("a < b".to_string(), String::new());
        let html = templates.render(&ctx).unwrap();
        assert!(html.contains("a &lt; b"));
    }

    #[test]
    fn index_context_lists_entries() {
        let templates = Templates::new(DEFAULT_TEMPLATE).unwrap();
        let entries = vec![IndexEntry::dir("sub"), IndexEntry::file("a")];
        let ctx = RenderContext::index("Main Index".to_string(), entries, true);
        let html = templates.render(&ctx).unwrap();
        assert!(html.contains(r#"<a href="sub/">sub</a>"#));
        assert!(html.contains(r#"<a href="a.html">a</a>"#));
        assert!(html.contains("Main Index"));
    }

    #[test]
    fn top_level_index_has_no_up_link() {
        let templates = Templates::new(DEFAULT_TEMPLATE).unwrap();
        let top = templates
            .render(&RenderContext::index("Main Index".to_string(), vec![], true))
            .unwrap();
        let nested = templates
            .render(&RenderContext::index("/sub".to_string(), vec![], false))
            .unwrap();
        assert!(!top.contains(r#"<a href="../">"#));
        assert!(nested.contains(r#"<a href="../">"#));
    }

    #[test]
    fn empty_footer_emits_no_footer_element() {
        let templates = Templates::new(DEFAULT_TEMPLATE).unwrap();
        let ctx = RenderContext::page("a".to_string(), String::new());
        let html = templates.render(&ctx).unwrap();
        assert!(!html.contains("<footer>"));
    }

    #[test]
    fn footer_fragment_rendered_when_present() {
        let templates = Templates::new(DEFAULT_TEMPLATE).unwrap();
        let mut ctx = RenderContext::page("a".to_string(), String::new());
        ctx.footer = "<em>fin</em>".to_string();
        let html = templates.render(&ctx).unwrap();
        assert!(html.contains("<footer><em>fin</em></footer>"));
    }

    #[test]
    fn entry_constructors() {
        assert_eq!(
            IndexEntry::dir("sub"),
            IndexEntry {
                name: "sub".to_string(),
                target: "sub/".to_string(),
                is_file: false,
            }
        );
        assert_eq!(
            IndexEntry::file("a"),
            IndexEntry {
                name: "a".to_string(),
                target: "a.html".to_string(),
                is_file: true,
            }
        );
    }
}
