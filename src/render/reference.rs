use std::fmt::Write;

use super::{escape_html, layout};
use crate::reference::{self, ClassInfo};

const BACK_LINK: &str = "<p><a href=\"/\">Back to search</a></p>\n";

/// Kingdom page. Returns the HTML and whether the kingdom is known.
pub fn render_kingdom_page(kingdom: &str) -> (String, bool) {
    let title = format!("Kingdom: {}", kingdom);
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape_html(&title));

    let found = match reference::kingdom(kingdom) {
        Some(info) if !info.phyla.is_empty() => {
            let _ = writeln!(body, "<h2>Major Phyla</h2>\n<ul>");
            for phylum in info.phyla {
                let name = if reference::has_phylum_page(phylum.name) {
                    format!(
                        "<a href=\"/phylum/{}\">{}</a>",
                        urlencoding::encode(phylum.name),
                        phylum.name
                    )
                } else {
                    format!("<strong>{}:</strong>", phylum.name)
                };
                let _ = writeln!(body, "<li>{} <small>{}</small></li>", name, phylum.description);
            }
            let _ = writeln!(body, "</ul>");
            true
        }
        Some(_) => {
            let _ = writeln!(
                body,
                "<p>No phyla data available for the kingdom {}.</p>",
                escape_html(kingdom)
            );
            true
        }
        None => {
            let _ = writeln!(
                body,
                "<p class=\"error\">Invalid kingdom {}</p>",
                escape_html(kingdom)
            );
            false
        }
    };

    body.push_str(BACK_LINK);
    (layout(&title, &body), found)
}

/// Phylum page. Phyla without detail content get a generic placeholder.
pub fn render_phylum_page(phylum: &str) -> String {
    let title = format!("Phylum: {}", phylum);
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape_html(&title));

    match reference::phylum_detail(phylum) {
        Some(detail) => {
            let _ = writeln!(body, "<p>{}</p>", detail.summary);
            let _ = writeln!(body, "<h2>Defining Traits</h2>\n<ul>");
            for t in detail.traits {
                let _ = writeln!(body, "<li>{}</li>", t);
            }
            let _ = writeln!(body, "</ul>\n<h2>Classes</h2>\n<ul>");
            for class in detail.classes {
                let name = if reference::has_class_page(class.name) {
                    format!(
                        "<a href=\"/class/{}\">{}</a>",
                        urlencoding::encode(class.name),
                        class.name
                    )
                } else {
                    class.name.to_string()
                };
                let _ = writeln!(body, "<li>{} <small>{}</small></li>", name, class.description);
            }
            let _ = writeln!(body, "</ul>");
        }
        None => {
            let _ = writeln!(
                body,
                "<p>Information about phylum {}.</p>",
                escape_html(phylum)
            );
        }
    }

    body.push_str(BACK_LINK);
    layout(&title, &body)
}

/// Class page. Returns the HTML and whether the class is known.
pub fn render_class_page(class: &str) -> (String, bool) {
    match reference::class(class) {
        Some(info) => (layout(info.title, &class_body(info)), true),
        None => {
            let shown = if class.trim().is_empty() { "Unknown" } else { class };
            let body = format!(
                "<h1 class=\"error\">Class Not Found</h1>\n\
                 <p>Sorry, we don't have information for the class: <strong>{}</strong></p>\n\
                 <p><a href=\"/\">Go Back Home</a></p>\n",
                escape_html(shown)
            );
            (layout("Class Not Found", &body), false)
        }
    }
}

fn class_body(info: &ClassInfo) -> String {
    let simple = info.simple_name();
    let mut body = String::new();
    let _ = writeln!(body, "<header><h1>{}</h1><p>{}</p></header>", info.title, info.subtitle);
    let _ = writeln!(body, "<section><h2>What are {}?</h2>", simple);
    for paragraph in info.description {
        let _ = writeln!(body, "<p>{}</p>", escape_html(paragraph));
    }
    let _ = writeln!(body, "</section>");

    let (name_label, description_label) = info.characteristic_labels;
    let _ = writeln!(
        body,
        "<section><h2>{}</h2>\n<table>\n<tr><th>{}</th><th>{}</th></tr>",
        info.characteristics_title, name_label, description_label
    );
    for item in info.characteristics {
        let _ = writeln!(body, "<tr><td>{}</td><td>{}</td></tr>", item.name, item.description);
    }
    let _ = writeln!(
        body,
        "</table>\n<p><small>Note: Classification details can be complex and subject to ongoing research.</small></p>\n</section>"
    );
    body.push_str(BACK_LINK);
    body
}
