//! Markdown to HTML-fragment conversion.
//!
//! Uses pulldown-cmark with GFM extensions (tables, strikethrough, task
//! lists, footnotes). Two event-stream transforms run over the parser
//! output before serialization:
//!
//! - every heading with non-empty text gets a slugified `id` anchor;
//! - links with absolute `http(s)` destinations open in a new tab.
//!
//! The fragment carries no document chrome; the template wraps it.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html::push_html};

/// Convert one Markdown document to an HTML fragment.
pub fn to_html(content: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    let parser = Parser::new_ext(content, options);
    let events = rewrite_external_links(inject_heading_anchors(parser));

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Slugify heading text for an `id` attribute.
///
/// Lowercases, collapses non-alphanumeric runs to single hyphens, strips
/// hyphens at both ends.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Buffer each heading's events, then re-emit it as `<hN id="slug">`.
///
/// Headings whose text slugifies to nothing pass through unchanged.
fn inject_heading_anchors<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = Vec::new();
    let mut in_heading: Option<pulldown_cmark::HeadingLevel> = None;
    let mut heading_text = String::new();
    let mut heading_events: Vec<Event<'a>> = Vec::new();

    for event in parser {
        match &event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(*level);
                heading_text.clear();
                heading_events.clear();
                heading_events.push(event);
            }
            Event::End(TagEnd::Heading(level)) if in_heading == Some(*level) => {
                let slug = slugify(&heading_text);
                let n = match level {
                    pulldown_cmark::HeadingLevel::H1 => 1,
                    pulldown_cmark::HeadingLevel::H2 => 2,
                    pulldown_cmark::HeadingLevel::H3 => 3,
                    pulldown_cmark::HeadingLevel::H4 => 4,
                    pulldown_cmark::HeadingLevel::H5 => 5,
                    pulldown_cmark::HeadingLevel::H6 => 6,
                };
                if slug.is_empty() {
                    events.extend(heading_events.drain(..));
                    events.push(event);
                } else {
                    events.push(Event::Html(format!("<h{n} id=\"{slug}\">").into()));
                    // Inner events minus the buffered Start(Heading)
                    events.extend(heading_events.drain(..).skip(1));
                    events.push(Event::Html(format!("</h{n}>").into()));
                }
                in_heading = None;
            }
            Event::Text(text) if in_heading.is_some() => {
                heading_text.push_str(text);
                heading_events.push(event);
            }
            Event::Code(code) if in_heading.is_some() => {
                heading_text.push_str(code);
                heading_events.push(event);
            }
            _ if in_heading.is_some() => {
                heading_events.push(event);
            }
            _ => {
                events.push(event);
            }
        }
    }

    events
}

/// Re-emit absolute `http(s)` links as raw anchors with `target="_blank"`.
///
/// Relative links (the index cross-links between generated pages) are left
/// to the serializer untouched. Markdown links do not nest, so a single
/// flag tracks whether the matching `End` needs replacing.
fn rewrite_external_links(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out: Vec<Event<'_>> = Vec::with_capacity(events.len());
    let mut in_external = false;

    for event in events {
        match &event {
            Event::Start(Tag::Link {
                dest_url, title, ..
            }) if is_external(dest_url) => {
                let mut anchor = format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener\"",
                    escape_attr(dest_url)
                );
                if !title.is_empty() {
                    anchor.push_str(&format!(" title=\"{}\"", escape_attr(title)));
                }
                anchor.push('>');
                out.push(Event::Html(anchor.into()));
                in_external = true;
            }
            Event::End(TagEnd::Link) if in_external => {
                out.push(Event::Html("</a>".into()));
                in_external = false;
            }
            _ => out.push(event),
        }
    }

    out
}

fn is_external(dest: &str) -> bool {
    dest.starts_with("http://") || dest.starts_with("https://")
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_document() {
        let html = to_html("# Hello\n\nWorld");
        assert!(html.contains(r#"<h1 id="hello">"#));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn heading_anchor_is_slugified() {
        let html = to_html("## The Water System\n");
        assert!(html.contains(r#"<h2 id="the-water-system">"#), "got: {html}");
    }

    #[test]
    fn heading_with_inline_code_keeps_markup() {
        let html = to_html("## Using `weft`\n");
        assert!(html.contains(r#"<h2 id="using-weft">"#));
        assert!(html.contains("<code>weft</code>"));
    }

    #[test]
    fn heading_without_slug_passes_through() {
        let html = to_html("## !!!\n");
        assert!(html.contains("<h2>"));
        assert!(!html.contains("id=\"\""));
    }

    #[test]
    fn external_link_opens_new_tab() {
        let html = to_html("[repo](https://example.com/repo)");
        assert!(
            html.contains(r#"<a href="https://example.com/repo" target="_blank" rel="noopener">"#),
            "got: {html}"
        );
        assert!(html.contains("repo</a>"));
    }

    #[test]
    fn relative_link_untouched() {
        let html = to_html("[next page](sub/b.html)");
        assert!(html.contains(r#"<a href="sub/b.html">"#));
        assert!(!html.contains("target="));
    }

    #[test]
    fn external_link_title_preserved() {
        let html = to_html(r#"[repo](https://example.com "The Repo")"#);
        assert!(html.contains(r#"title="The Repo""#));
    }

    #[test]
    fn external_link_href_is_escaped() {
        let html = to_html("[q](https://example.com/?a=1&b=2)");
        assert!(html.contains("a=1&amp;b=2"));
    }

    #[test]
    fn tables_enabled() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn strikethrough_enabled() {
        let html = to_html("~~gone~~");
        assert!(html.contains("<del>"));
    }

    #[test]
    fn slugify_examples() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Leading & Trailing  "), "leading-trailing");
        assert_eq!(slugify("CamelCase123"), "camelcase123");
        assert_eq!(slugify("!!!"), "");
    }
}
