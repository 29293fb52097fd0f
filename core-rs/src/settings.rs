//! Query-level settings shared by every criterion compile
//!
//! Mirrors the settings surface the visual builder exposes: the language
//! used for multilingual label filters, and an optional property path that
//! replaces `rdf:type` in type-assertion triples (for ontologies that expose
//! typing through an indirect path).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{Result, VqbError};

/// BCP47-ish language tag check, enough to catch configuration typos.
static LANGUAGE_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$").expect("language tag regex is valid")
});

fn default_language() -> String {
    "en".to_string()
}

fn default_distinct() -> bool {
    true
}

/// Settings applied to one compiled query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuerySettings {
    /// Language constraint applied to multilingual default labels.
    /// An empty string disables the language filter entirely.
    #[serde(default = "default_language")]
    pub language: String,

    /// Custom type predicate, written as a SPARQL property path
    /// (e.g. `<http://ex.org/p1>/<http://ex.org/p2>`). `None` means `rdf:type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_predicate: Option<String>,

    /// Whether the assembled SELECT query is DISTINCT.
    #[serde(default = "default_distinct")]
    pub distinct: bool,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            type_predicate: None,
            distinct: true,
        }
    }
}

impl QuerySettings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings: QuerySettings = serde_yaml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the configured values are usable before any compile runs.
    pub fn validate(&self) -> Result<()> {
        if !self.language.is_empty() && !LANGUAGE_TAG_RE.is_match(&self.language) {
            return Err(VqbError::InvalidLanguageTag(self.language.clone()));
        }
        if let Some(predicate) = &self.type_predicate {
            if predicate.trim().is_empty() {
                return Err(VqbError::InvalidInput(
                    "typePredicate must not be empty when present".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// The language to filter labels on, or `None` when filtering is disabled.
    pub fn filter_language(&self) -> Option<&str> {
        if self.language.is_empty() {
            None
        } else {
            Some(&self.language)
        }
    }
}
