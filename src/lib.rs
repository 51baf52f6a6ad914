//! # weft
//!
//! A minimal static site generator. Your filesystem is the site structure:
//! a source tree of Markdown files becomes a mirrored tree of HTML pages,
//! with one auto-generated `index.html` per directory linking its
//! subdirectories and pages.
//!
//! # Architecture
//!
//! One synchronous depth-first walk drives everything:
//!
//! ```text
//! src/                 out/
//! ├── a.md        →    ├── a.html          (rendered page)
//! │                    ├── index.html      ("Main Index": sub/, a.html)
//! └── sub/             └── sub/
//!     └── b.md    →        ├── b.html
//!                          └── index.html  ("/sub": b.html)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Run configuration: absolute roots, parsed template, stylesheet flag |
//! | [`template`] | Tera template wrapper, `RenderContext`, `IndexEntry`, embedded default |
//! | [`markdown`] | Markdown → HTML fragment: GFM extensions, heading anchors, external links in new tabs |
//! | [`paths`] | Strict source → output path mapping and title derivation |
//! | [`page`] | One Markdown file → one HTML file through the template |
//! | [`index`] | One directory → `index.html` with a classified, partitioned listing |
//! | [`walk`] | The depth-first traversal tying pages and indexes together |
//! | [`output`] | Glyph-prefixed CLI lines: pure `format_*` functions + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Strict path mapping
//!
//! Output locations come from `Path::strip_prefix`, not string surgery. A
//! path outside the source root is an error, and a path whose string form
//! happens to contain the root again deeper down is mapped correctly.
//!
//! ## One template, two shapes
//!
//! A single Tera template renders both pages and index listings; the
//! `is_index` flag in the context selects the branch. The default template
//! is embedded at compile time and a `-t` file replaces it wholesale —
//! parsed once before any output is written, never mutated afterwards.
//!
//! ## Batch, not service
//!
//! The run is all-or-nothing: the first error propagates out of the walk
//! and terminates the process with a non-zero status. No retries, no
//! partial-success accounting, no rollback of files already written.
//! Re-running on an unchanged tree is byte-identical.

pub mod config;
pub mod index;
pub mod markdown;
pub mod output;
pub mod page;
pub mod paths;
pub mod template;
pub mod walk;
