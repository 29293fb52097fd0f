//! File-backed ontology metadata library
//!
//! Loads the builder configuration from a YAML file declaring, per class,
//! the default label property and tooltip, and per property, the
//! multilingual / optional / negation flags. Lookups for URIs the file does
//! not mention answer "not found", which the compiler treats as a normal
//! domain answer.
//!
//! Format:
//! ```yaml
//! classes:
//!   "http://ex.org/onto#Person":
//!     defaultLabelProperty: "http://ex.org/onto#name"
//!     tooltip: "A human being"
//! properties:
//!   "http://ex.org/onto#name":
//!     multilingual: true
//!     optionalEnabled: true
//!     negationEnabled: false
//! ```

use serde::{Deserialize, Serialize};
use spargebra::term::NamedNode;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::errors::{Result, VqbError};
use crate::ontology::OntologyMetadata;

/// Per-class configuration entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_label_property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// Per-property configuration entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEntry {
    #[serde(default)]
    pub multilingual: bool,
    #[serde(default)]
    pub optional_enabled: bool,
    #[serde(default)]
    pub negation_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    classes: HashMap<String, ClassEntry>,
    #[serde(default)]
    properties: HashMap<String, PropertyEntry>,
}

/// In-memory ontology metadata, usually loaded from a configuration file.
#[derive(Debug, Clone, Default)]
pub struct OntologyLibrary {
    classes: HashMap<String, ClassEntry>,
    properties: HashMap<String, PropertyEntry>,
}

impl OntologyLibrary {
    /// Create an empty library. Useful for tests and for builders that
    /// register entries programmatically.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a library from a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a library from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let file: LibraryFile = serde_yaml::from_str(content)?;
        let library = Self {
            classes: file.classes,
            properties: file.properties,
        };
        library.validate()?;
        Ok(library)
    }

    /// Register a class entry.
    pub fn insert_class(&mut self, class_uri: impl Into<String>, entry: ClassEntry) {
        self.classes.insert(class_uri.into(), entry);
    }

    /// Register a property entry.
    pub fn insert_property(&mut self, property_uri: impl Into<String>, entry: PropertyEntry) {
        self.properties.insert(property_uri.into(), entry);
    }

    /// Number of declared classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of declared properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    fn validate(&self) -> Result<()> {
        for (class_uri, entry) in &self.classes {
            if let Some(label) = &entry.default_label_property {
                NamedNode::new(label.clone()).map_err(|_| {
                    VqbError::OntologyConfig(format!(
                        "defaultLabelProperty of {} is not a valid IRI: {}",
                        class_uri, label
                    ))
                })?;
                // A declared label property with no property entry still works,
                // it just carries none of the flags.
                if !self.properties.contains_key(label) {
                    warn!(class = %class_uri, label = %label,
                        "default label property has no property entry; flags default to false");
                }
            }
        }
        Ok(())
    }
}

impl OntologyMetadata for OntologyLibrary {
    fn default_label_property(&self, class_uri: &str) -> Option<NamedNode> {
        self.classes
            .get(class_uri)
            .and_then(|entry| entry.default_label_property.as_deref())
            // validated at load time
            .map(NamedNode::new_unchecked)
    }

    fn is_multilingual(&self, property_uri: &str) -> bool {
        self.properties
            .get(property_uri)
            .map(|entry| entry.multilingual)
            .unwrap_or(false)
    }

    fn is_optional_enabled(&self, property_uri: &str) -> bool {
        self.properties
            .get(property_uri)
            .map(|entry| entry.optional_enabled)
            .unwrap_or(false)
    }

    fn is_negation_enabled(&self, property_uri: &str) -> bool {
        self.properties
            .get(property_uri)
            .map(|entry| entry.negation_enabled)
            .unwrap_or(false)
    }

    fn tooltip(&self, uri: &str) -> Option<String> {
        self.classes
            .get(uri)
            .and_then(|entry| entry.tooltip.clone())
            .or_else(|| {
                self.properties
                    .get(uri)
                    .and_then(|entry| entry.tooltip.clone())
            })
    }
}
