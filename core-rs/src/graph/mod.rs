//! The visual query graph, stripped of its widgets
//!
//! Each criterion row of the visual editor is a [`CriteriaNode`]: a class
//! selection, its option toggles, and an explicit link to the upstream node
//! it branches from. Notifications that the original UI bubbled through the
//! DOM are plain method calls here: [`QueryGraph::select_class`] returns the
//! resolved value, and [`QueryGraph::connect_property`] hands the upstream
//! node's binding to the downstream row as its start value.

mod description;

pub use description::{CriterionDescription, QueryDescription};

use spargebra::term::Variable;
use spargebra::Query;
use tracing::debug;

use crate::builder::ClassPatternBuilder;
use crate::errors::{Result, VqbError};
use crate::naming::{assign_variable, VariableCounter};
use crate::ontology::OntologyMetadata;
use crate::patterns::{Pattern, PatternFactory, QueryAssembler};
use crate::selection::{
    ClassSelection, CriterionOption, NodeKind, OptionAvailability, OptionsState, SelectedValue,
};
use crate::settings::QuerySettings;

/// One criterion row: selection state, option toggles, upstream link.
#[derive(Debug)]
pub struct CriteriaNode {
    selection: ClassSelection,
    options: OptionsState,
    upstream: Option<usize>,
}

impl CriteriaNode {
    pub fn selection(&self) -> &ClassSelection {
        &self.selection
    }

    pub fn options(&self) -> &OptionsState {
        &self.options
    }

    pub fn upstream(&self) -> Option<usize> {
        self.upstream
    }
}

/// The whole query under construction: criteria rows plus the session-owned
/// variable counter and settings.
#[derive(Debug)]
pub struct QueryGraph {
    nodes: Vec<CriteriaNode>,
    counter: VariableCounter,
    settings: QuerySettings,
}

impl QueryGraph {
    pub fn new(settings: QuerySettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            nodes: Vec::new(),
            counter: VariableCounter::new(),
            settings,
        })
    }

    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: usize) -> Result<&CriteriaNode> {
        self.nodes
            .get(id)
            .ok_or_else(|| VqbError::UnknownCriterion(id.to_string()))
    }

    fn node_mut(&mut self, id: usize) -> Result<&mut CriteriaNode> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| VqbError::UnknownCriterion(id.to_string()))
    }

    /// Add a criterion row. `upstream` is the row this one branches from;
    /// `None` for the root.
    pub fn add_criterion(&mut self, upstream: Option<usize>) -> Result<usize> {
        if let Some(up) = upstream {
            if up >= self.nodes.len() {
                return Err(VqbError::UnknownCriterion(up.to_string()));
            }
        }
        self.nodes.push(CriteriaNode {
            selection: ClassSelection::new(),
            options: OptionsState::default(),
            upstream,
        });
        Ok(self.nodes.len() - 1)
    }

    /// The user picked a class for a row. Assigns the row its variable and
    /// returns the resolved value, which the caller may pass along to
    /// downstream rows.
    pub fn select_class(
        &mut self,
        id: usize,
        class_uri: &str,
        ontology: &dyn OntologyMetadata,
    ) -> Result<SelectedValue> {
        let counter = &self.counter;
        // split borrow: the counter is read-only to the selection
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| VqbError::UnknownCriterion(id.to_string()))?;
        let resolved = node.selection.select_type(class_uri, counter, ontology)?;
        debug!(id, class = class_uri, variable = ?resolved.variable, "class selected");
        Ok(resolved)
    }

    /// The user connected a row to its upstream through a property. The
    /// upstream row must have resolved its class already; its binding
    /// becomes this row's start value.
    pub fn connect_property(&mut self, id: usize, property_uri: &str) -> Result<()> {
        let upstream_id = self
            .node(id)?
            .upstream
            .ok_or_else(|| VqbError::InvalidInput(format!("criterion {} has no upstream", id)))?;
        let start_value = self.node(upstream_id)?.selection.end_value().clone();
        if !start_value.is_resolved() {
            return Err(VqbError::InvalidInput(format!(
                "upstream criterion {} has not resolved a class yet",
                upstream_id
            )));
        }

        let property = spargebra::term::NamedNode::new(property_uri)
            .map_err(|_| VqbError::InvalidIri(property_uri.to_string()))?;
        let property_variable = assign_variable(property_uri, &self.counter)?;

        let node = self.node_mut(id)?;
        node.selection.set_start_value(start_value)?;
        node.selection.set_object_property(SelectedValue {
            kind: NodeKind::Property,
            type_uri: Some(property),
            variable: Some(property_variable),
        })?;
        Ok(())
    }

    /// Toggle one of the row's options. Availability comes from the
    /// connected property's ontology flags; a row whose ancestors already
    /// enabled an option exposes no options, as nested toggles would
    /// contradict the enclosing block.
    pub fn toggle_option(
        &mut self,
        id: usize,
        option: CriterionOption,
        enabled: bool,
        ontology: &dyn OntologyMetadata,
    ) -> Result<()> {
        let property_uri = {
            let node = self.node(id)?;
            node.selection
                .object_property_value()
                .and_then(|v| v.type_uri.as_ref())
                .ok_or_else(|| {
                    VqbError::InvalidInput(format!(
                        "criterion {} has no connected property to toggle options on",
                        id
                    ))
                })?
                .as_str()
                .to_string()
        };
        if enabled && self.ancestor_has_option(id)? {
            return Err(VqbError::InvalidInput(format!(
                "an enclosing criterion of {} already enables an option",
                id
            )));
        }

        let availability = OptionAvailability::for_property(ontology, &property_uri);
        self.node_mut(id)?.options.toggle(option, enabled, availability)
    }

    fn ancestor_has_option(&self, id: usize) -> Result<bool> {
        let mut current = self.node(id)?.upstream;
        while let Some(up) = current {
            let node = self.node(up)?;
            if node.options.any() {
                return Ok(true);
            }
            current = node.upstream;
        }
        Ok(false)
    }

    /// Relay of the widget blocking flag for a row.
    pub fn set_widget_blocking(&mut self, id: usize, blocking: bool) -> Result<()> {
        self.node_mut(id)?.selection.set_widget_blocking(blocking);
        Ok(())
    }

    /// Relay of the "show in results" toggle for a row.
    pub fn set_view_selected(&mut self, id: usize, selected: bool) -> Result<()> {
        self.node_mut(id)?
            .selection
            .set_view_variable_selected(selected);
        Ok(())
    }

    /// Unify a row's variable with an externally chosen name. The label
    /// variable follows automatically.
    pub fn override_variable(&mut self, id: usize, new_name: &str) -> Result<()> {
        self.node_mut(id)?.selection.override_variable(new_name)
    }

    /// Compile every row and concatenate the pattern sequences, honoring
    /// per-row OPTIONAL / NOT EXISTS toggles.
    pub fn compile(&self, ontology: &dyn OntologyMetadata) -> Result<CompiledQuery> {
        let mut patterns = Vec::new();
        let mut projection = Vec::new();

        for (id, node) in self.nodes.iter().enumerate() {
            let mut builder =
                ClassPatternBuilder::new(&node.selection, ontology, &self.settings);
            builder.build()?;
            let view_variable = builder.selected_view_variable();
            let class_patterns = builder.into_patterns();
            if class_patterns.is_empty() {
                debug!(id, "criterion is incomplete, skipped");
                continue;
            }

            let mut row = Vec::new();
            if let Some(edge) = self.edge_triple(node) {
                row.push(edge);
            }
            row.extend(class_patterns);

            if node.options.not_exists {
                patterns.push(PatternFactory::filter_not_exists(
                    QueryAssembler::graph_pattern(row),
                ));
                // a negated row matches nothing, so it projects nothing
                continue;
            }
            if node.options.optional {
                patterns.push(PatternFactory::optional(row));
            } else {
                patterns.extend(row);
            }

            if node.selection.is_view_variable_selected() {
                // the label when one exists, the raw binding otherwise
                let variable = view_variable
                    .or_else(|| node.selection.variable().cloned());
                projection.extend(variable);
            }
        }

        if projection.is_empty() {
            // nothing explicitly selected: project every resolved row
            projection = self
                .nodes
                .iter()
                .filter(|n| !n.selection.is_blocking() && !n.options.not_exists)
                .filter_map(|n| n.selection.variable().cloned())
                .collect();
        }

        Ok(CompiledQuery {
            patterns,
            projection,
            distinct: self.settings.distinct,
        })
    }

    /// The connecting triple between a row and its upstream, when both ends
    /// are resolved. The subject is read from the upstream node itself, not
    /// from the stored start value, so variable overrides on the upstream
    /// row propagate into the join.
    fn edge_triple(&self, node: &CriteriaNode) -> Option<Pattern> {
        node.selection.start_value()?;
        let upstream = self.nodes.get(node.upstream?)?;
        let property = node.selection.object_property_value()?;
        let triple = PatternFactory::triple(
            upstream.selection.variable()?,
            property.type_uri.as_ref()?,
            node.selection.variable()?,
        );
        Some(PatternFactory::bgp(vec![triple]))
    }

    /// Compile and assemble into a ready-to-serialize SELECT query.
    pub fn compile_query(&self, ontology: &dyn OntologyMetadata) -> Result<Query> {
        let compiled = self.compile(ontology)?;
        QueryAssembler::select_query(compiled.patterns, compiled.projection, compiled.distinct)
    }

    /// Compile straight to SPARQL text.
    pub fn compile_sparql(&self, ontology: &dyn OntologyMetadata) -> Result<String> {
        Ok(self.compile_query(ontology)?.to_string())
    }
}

/// The flattened output of compiling a whole graph.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub patterns: Vec<Pattern>,
    pub projection: Vec<Variable>,
    pub distinct: bool,
}
