//! Saved-query descriptions
//!
//! The editor can persist a query as a small YAML document listing its
//! criteria rows; replaying the document through [`QueryGraph`] rebuilds the
//! exact same compile state. Row order matters: a row may only reference an
//! earlier row as its upstream.
//!
//! Format:
//! ```yaml
//! settings:
//!   language: en
//! criteria:
//!   - class: "http://ex.org#Person"
//!     viewVariable: true
//!   - class: "http://ex.org#Museum"
//!     upstream: 0
//!     property: "http://ex.org#visited"
//!     options:
//!       optional: true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{Result, VqbError};
use crate::graph::QueryGraph;
use crate::ontology::OntologyMetadata;
use crate::selection::{CriterionOption, OptionsState};
use crate::settings::QuerySettings;

/// One criterion row of a saved query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CriterionDescription {
    /// The class URI selected for this row.
    pub class: String,
    /// Index of the row this one branches from. Absent for the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<usize>,
    /// The connecting property. Required whenever `upstream` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Option toggles recorded for the row.
    #[serde(default)]
    pub options: OptionsState,
    /// Whether the row's column is shown in the result table.
    #[serde(default)]
    pub view_variable: bool,
    /// Externally imposed variable name, for rows unified with another
    /// query's bindings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
}

/// A whole saved query: settings plus ordered criteria rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescription {
    #[serde(default)]
    pub settings: QuerySettings,
    #[serde(default)]
    pub criteria: Vec<CriterionDescription>,
}

impl QueryDescription {
    /// Load a description from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a description from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let description: QueryDescription = serde_yaml::from_str(content)?;
        description.validate()?;
        Ok(description)
    }

    fn validate(&self) -> Result<()> {
        for (index, row) in self.criteria.iter().enumerate() {
            match row.upstream {
                Some(up) if up >= index => {
                    return Err(VqbError::QueryDescription(format!(
                        "criterion {} references upstream {}, which is not an earlier row",
                        index, up
                    )));
                }
                Some(_) if row.property.is_none() => {
                    return Err(VqbError::QueryDescription(format!(
                        "criterion {} has an upstream but no connecting property",
                        index
                    )));
                }
                None if row.property.is_some() => {
                    return Err(VqbError::QueryDescription(format!(
                        "criterion {} has a property but no upstream",
                        index
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Replay the description into a live [`QueryGraph`].
    pub fn build_graph(&self, ontology: &dyn OntologyMetadata) -> Result<QueryGraph> {
        let mut graph = QueryGraph::new(self.settings.clone())?;
        for row in &self.criteria {
            let id = graph.add_criterion(row.upstream)?;
            graph.select_class(id, &row.class, ontology)?;
            if let Some(name) = &row.variable {
                graph.override_variable(id, name)?;
            }
            if let Some(property) = &row.property {
                graph.connect_property(id, property)?;
            }
            if row.options.optional {
                graph.toggle_option(id, CriterionOption::Optional, true, ontology)?;
            }
            if row.options.not_exists {
                graph.toggle_option(id, CriterionOption::NotExists, true, ontology)?;
            }
            if row.view_variable {
                graph.set_view_selected(id, true)?;
            }
        }
        Ok(graph)
    }
}
