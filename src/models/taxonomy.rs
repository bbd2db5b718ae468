use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A species record as normalized from the taxonomy provider.
///
/// `name` is the provider's canonical common name, which may differ from what the
/// user typed (e.g. "lion" → "Lion"). Illustrations for found animals use this name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyRecord {
    pub name: String,
    pub taxonomy: Taxonomy,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub characteristics: BTreeMap<String, String>,
    /// Factual summary attached inline by servers running with inline summaries enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Kingdom through genus classification.
///
/// The provider omits ranks for some species; missing ranks become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub kingdom: String,
    #[serde(default)]
    pub phylum: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub order: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub genus: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
}

impl Taxonomy {
    /// Ranks in display order, paired with their labels.
    pub fn ranks(&self) -> [(&'static str, &str); 6] {
        [
            ("Kingdom", &self.kingdom),
            ("Phylum", &self.phylum),
            ("Class", &self.class),
            ("Order", &self.order),
            ("Family", &self.family),
            ("Genus", &self.genus),
        ]
    }
}

impl TaxonomyRecord {
    /// The embedded summary, if present and non-blank.
    pub fn embedded_summary(&self) -> Option<&str> {
        self.summary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
