//! Presentation of search sessions and reference pages.
//!
//! Everything here is read-only over [`crate::models::SearchSession`] and the
//! [`crate::reference`] tables. HTML goes to the browser, text goes to the terminal.

mod reference;
mod search;
mod text;

pub use reference::{render_class_page, render_kingdom_page, render_phylum_page};
pub use search::render_search_page;
pub use text::{render_class_text, render_kingdom_text, render_phylum_text, render_stage_text};

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Uppercase the first character.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

const STYLE: &str = "body{font-family:sans-serif;background:#f3f4f6;color:#1f2937;margin:0;padding:24px}\
main{max-width:48rem;margin:0 auto;background:#fff;border-radius:8px;padding:32px;box-shadow:0 1px 4px rgba(0,0,0,.1)}\
table{border-collapse:collapse;width:100%}td,th{padding:6px 10px;text-align:left;border-bottom:1px solid #e5e7eb}\
a{color:#3b82f6}.error{color:#ef4444}.notice{color:#b45309}.spinner{color:#6b7280;font-style:italic}\
img.illustration{max-width:100%;border-radius:6px}img.continent{height:24px;vertical-align:middle;margin-right:4px}";

/// Wrap page content in the shared document shell.
pub(crate) fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n{}</main>\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}
