//! CLI output formatting.
//!
//! Each line class has a pure `format_*` function (testable, no I/O) and a
//! thin `print_*` wrapper. Status glyphs mark the line class: `🧵` banner,
//! `🧩` template notice, `📜` rendered page, `📂` written index, `💥` fatal.

use crate::walk::WalkSummary;
use std::path::Path;

pub fn format_banner(version: &str) -> String {
    format!("🧵 weft v{version}")
}

pub fn format_template_notice(path: &Path) -> String {
    format!("🧩 Using custom template: {}", path.display())
}

pub fn format_page(out_path: &Path) -> String {
    format!("📜 Generating HTML: {}", out_path.display())
}

pub fn format_index(out_path: &Path) -> String {
    format!("📂 Indexing: {}", out_path.display())
}

pub fn format_summary(summary: &WalkSummary) -> String {
    format!(
        "🧵 Done: {} pages, {} indexes",
        summary.pages, summary.indexes
    )
}

pub fn format_fatal(err: &dyn std::fmt::Display) -> String {
    format!("💥 {err}")
}

pub fn print_banner(version: &str) {
    println!("{}", format_banner(version));
}

pub fn print_template_notice(path: &Path) {
    println!("{}", format_template_notice(path));
}

pub fn print_page(out_path: &Path) {
    println!("{}", format_page(out_path));
}

pub fn print_index(out_path: &Path) {
    println!("{}", format_index(out_path));
}

pub fn print_summary(summary: &WalkSummary) {
    println!("{}", format_summary(summary));
}
