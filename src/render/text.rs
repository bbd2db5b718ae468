//! Plain-text rendering for the terminal.

use crate::models::{SearchPhase, SearchSession, SearchStep, TaxonomyRecord};
use crate::reference;

/// Render only what `current` adds over `previous`: new regions and spinner lines for
/// newly entered steps. Used to print a search's staged reveal as it progresses.
pub fn render_stage_text(previous: &SearchSession, current: &SearchSession) -> String {
    let mut output = String::new();
    let same_search = previous.sequence == current.sequence;

    if current.notice.is_some() && (!same_search || previous.notice.is_none()) {
        if let Some(notice) = &current.notice {
            let marker = if notice.is_error() { "✗" } else { "?" };
            output.push_str(&format!("{} {}\n", marker, notice.message()));
        }
    }

    if current.record().is_some() && (!same_search || previous.record().is_none()) {
        if let Some(record) = current.record() {
            render_record(&mut output, record);
        }
    }

    if current.step() != previous.step() || !same_search {
        match current.step() {
            Some(SearchStep::LookingUp) => output.push_str("… Looking up taxonomy\n"),
            Some(SearchStep::Illustrating) => output.push_str("… Generating image\n"),
            Some(SearchStep::Narrating) => output.push_str("… Writing summary\n"),
            None => {}
        }
    }

    if current.illustration.is_some() && (!same_search || previous.illustration.is_none()) {
        if let Some(asset) = &current.illustration {
            output.push_str(&format!(
                "● Image: {} bytes ({}, {})\n",
                asset.bytes.len(),
                asset.mime_type,
                if asset.realistic { "realistic" } else { "imagined" }
            ));
        }
    }

    if current.narrative.is_some() && (!same_search || previous.narrative.is_none()) {
        if let Some(text) = &current.narrative {
            output.push('\n');
            output.push_str(text);
            output.push('\n');
        }
    }

    let just_settled = current.phase.is_settled() && (!same_search || !previous.phase.is_settled());
    if just_settled && current.phase == SearchPhase::Resolved && current.illustration.is_none() {
        output.push_str("◇ Image unavailable\n");
    }

    output
}

/// Render a taxonomy record as a rank tree.
///
/// ```text
/// Lion (Panthera leo)
/// ├── Kingdom: Animalia
/// ├── Phylum: Chordata
/// ...
/// └── Genus: Panthera
/// ```
fn render_record(output: &mut String, record: &TaxonomyRecord) {
    output.push_str(&record.name);
    if let Some(scientific) = &record.taxonomy.scientific_name {
        output.push_str(&format!(" ({})", scientific));
    }
    output.push('\n');

    let ranks = record.taxonomy.ranks();
    for (i, (label, value)) in ranks.iter().enumerate() {
        let branch = if i == ranks.len() - 1 { "└── " } else { "├── " };
        output.push_str(&format!("{}{}: {}\n", branch, label, value));
    }

    if !record.locations.is_empty() {
        output.push_str(&format!("Found in: {}\n", record.locations.join(", ")));
    }
    for (key, value) in &record.characteristics {
        output.push_str(&format!("  {}: {}\n", key.replace('_', " "), value));
    }
}

pub fn render_kingdom_text(kingdom: &str) -> (String, bool) {
    let mut output = format!("Kingdom: {}\n", kingdom);
    let found = match reference::kingdom(kingdom) {
        Some(info) if !info.phyla.is_empty() => {
            for (i, phylum) in info.phyla.iter().enumerate() {
                let branch = if i == info.phyla.len() - 1 { "└── " } else { "├── " };
                let marker = if reference::has_phylum_page(phylum.name) { "●" } else { "○" };
                output.push_str(&format!(
                    "{}{} {} {}\n",
                    branch, marker, phylum.name, phylum.description
                ));
            }
            true
        }
        Some(_) => {
            output.push_str(&format!("No phyla data available for the kingdom {}.\n", kingdom));
            true
        }
        None => {
            output.push_str(&format!("Invalid kingdom {}\n", kingdom));
            false
        }
    };
    (output, found)
}

pub fn render_phylum_text(phylum: &str) -> String {
    let mut output = format!("Phylum: {}\n", phylum);
    match reference::phylum_detail(phylum) {
        Some(detail) => {
            output.push_str(detail.summary);
            output.push('\n');
            for class in detail.classes {
                output.push_str(&format!("  • {} {}\n", class.name, class.description));
            }
        }
        None => output.push_str(&format!("Information about phylum {}.\n", phylum)),
    }
    output
}

pub fn render_class_text(class: &str) -> (String, bool) {
    let Some(info) = reference::class(class) else {
        return (
            format!("Class Not Found: no information for the class {}\n", class),
            false,
        );
    };

    let mut output = format!("{}\n{}\n\n", info.title, info.subtitle);
    for paragraph in info.description {
        output.push_str(paragraph);
        output.push_str("\n\n");
    }
    output.push_str(info.characteristics_title);
    output.push('\n');
    for item in info.characteristics {
        output.push_str(&format!("  {:<18} {}\n", item.name, item.description));
    }
    (output, true)
}
