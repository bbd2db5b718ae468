use std::fmt::Write;

use super::{capitalize, escape_html, layout};
use crate::models::{Notice, SearchSession, SearchStep, TaxonomyRecord};
use crate::reference;

/// Render the home page for a session: search form plus whichever of the error
/// banner, taxonomy table, illustration and narrative are present.
pub fn render_search_page(session: &SearchSession) -> String {
    let query = session.query.as_ref().map(|q| q.as_str()).unwrap_or("");
    let heading = match capitalize(query) {
        name if name.is_empty() => "Animal Taxonomy".to_string(),
        name => format!("{} Taxonomy", name),
    };

    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape_html(&heading));
    let _ = writeln!(
        body,
        "<form method=\"get\" action=\"/\">\
         <input type=\"text\" name=\"animalName\" value=\"{}\" placeholder=\"Enter animal name (e.g., lion)\"> \
         <button type=\"submit\"{}>{}</button></form>",
        escape_html(query),
        if session.is_loading() { " disabled" } else { "" },
        if session.is_loading() { "Searching..." } else { "Search" },
    );

    if let Some(notice) = &session.notice {
        push_notice(&mut body, notice);
    }

    if session.step() == Some(SearchStep::LookingUp) {
        let _ = writeln!(body, "<p class=\"spinner\">Looking up taxonomy...</p>");
    }

    if let Some(record) = session.record() {
        push_record(&mut body, record);
    }

    match (&session.illustration, session.step()) {
        (Some(asset), _) => {
            let subject = session
                .record()
                .map(|r| r.name.as_str())
                .unwrap_or(query);
            let _ = writeln!(
                body,
                "<section><img class=\"illustration\" src=\"{}\" alt=\"{}\"></section>",
                asset.to_data_uri(),
                escape_html(&format!(
                    "{} illustration of {}",
                    if asset.realistic { "Realistic" } else { "Imagined" },
                    subject
                )),
            );
        }
        (None, Some(SearchStep::Illustrating)) => {
            let _ = writeln!(body, "<p class=\"spinner\">Generating image...</p>");
        }
        _ => {}
    }

    match (&session.narrative, session.step()) {
        (Some(text), _) => {
            let _ = writeln!(
                body,
                "<section class=\"narrative\"><p>{}</p></section>",
                escape_html(text)
            );
        }
        (None, Some(SearchStep::Narrating)) => {
            let _ = writeln!(body, "<p class=\"spinner\">Writing summary...</p>");
        }
        _ => {}
    }

    layout(&heading, &body)
}

fn push_notice(body: &mut String, notice: &Notice) {
    let class = if notice.is_error() { "error" } else { "notice" };
    let _ = writeln!(
        body,
        "<p class=\"{}\">{}</p>",
        class,
        escape_html(&notice.message())
    );
}

fn push_record(body: &mut String, record: &TaxonomyRecord) {
    let taxonomy = &record.taxonomy;
    let _ = writeln!(body, "<section class=\"taxonomy\">");
    let _ = writeln!(body, "<h2>{}</h2>", escape_html(&record.name));
    if let Some(scientific) = &taxonomy.scientific_name {
        let _ = writeln!(body, "<p><em>{}</em></p>", escape_html(scientific));
    }

    let _ = writeln!(body, "<table>");
    for (label, value) in taxonomy.ranks() {
        let cell = match label {
            "Kingdom" if !value.is_empty() => link("kingdom", value),
            "Phylum" if !value.is_empty() => link("phylum", value),
            "Class" if reference::has_class_page(value) => link("class", value),
            _ => escape_html(value),
        };
        let _ = writeln!(body, "<tr><th>{}:</th><td>{}</td></tr>", label, cell);
    }
    let _ = writeln!(body, "</table>");

    if !record.locations.is_empty() {
        let _ = write!(body, "<p>Found in: ");
        for (i, location) in record.locations.iter().enumerate() {
            if i > 0 {
                body.push_str(", ");
            }
            if let Some(src) = reference::continent_image(location) {
                let _ = write!(
                    body,
                    "<img class=\"continent\" src=\"{}\" alt=\"\">",
                    escape_html(src)
                );
            }
            body.push_str(&escape_html(location));
        }
        let _ = writeln!(body, "</p>");
    }

    if !record.characteristics.is_empty() {
        let _ = writeln!(body, "<h3>Characteristics</h3>\n<table>");
        for (key, value) in &record.characteristics {
            let _ = writeln!(
                body,
                "<tr><th>{}</th><td>{}</td></tr>",
                escape_html(&key.replace('_', " ")),
                escape_html(value)
            );
        }
        let _ = writeln!(body, "</table>");
    }
    let _ = writeln!(body, "</section>");
}

fn link(kind: &str, value: &str) -> String {
    format!(
        "<a href=\"/{}/{}\">{}</a>",
        kind,
        urlencoding::encode(value),
        escape_html(value)
    )
}
