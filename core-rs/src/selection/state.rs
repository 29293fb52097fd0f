//! Per-criterion selection state
//!
//! One [`ClassSelection`] holds everything a visual criterion row knows:
//! the class picked for the node, the shadow default-label binding, the
//! subject-side value received from the upstream node, the connecting
//! property, and the blocking flag of whatever input widget is attached.

use serde::{Deserialize, Serialize};
use spargebra::term::{NamedNode, Variable};

use crate::errors::{Result, VqbError};
use crate::naming::{assign_variable, derive_label_variable, VariableCounter};
use crate::ontology::OntologyMetadata;

/// Which kind of visual node produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Class,
    Property,
}

/// One resolved binding: an ontology URI and the query variable bound to it.
/// `type_uri == None` means "not yet selected".
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedValue {
    pub kind: NodeKind,
    pub type_uri: Option<NamedNode>,
    pub variable: Option<Variable>,
}

impl SelectedValue {
    /// An unselected value of the given kind.
    pub fn empty(kind: NodeKind) -> Self {
        Self {
            kind,
            type_uri: None,
            variable: None,
        }
    }

    /// Whether both halves of the binding are present.
    pub fn is_resolved(&self) -> bool {
        self.type_uri.is_some() && self.variable.is_some()
    }
}

/// Selection state of one class node in the visual graph.
#[derive(Debug, Clone)]
pub struct ClassSelection {
    end_value: SelectedValue,
    /// Shadow binding for the default label. Set atomically with its
    /// predicate: both halves present, or neither.
    default_label_value: SelectedValue,
    start_value: Option<SelectedValue>,
    object_property_value: Option<SelectedValue>,
    widget_is_blocking: bool,
    view_variable_selected: bool,
}

impl Default for ClassSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassSelection {
    /// A fresh node: nothing selected, nothing blocking.
    pub fn new() -> Self {
        Self {
            end_value: SelectedValue::empty(NodeKind::Class),
            default_label_value: SelectedValue::empty(NodeKind::Property),
            start_value: None,
            object_property_value: None,
            widget_is_blocking: false,
            view_variable_selected: false,
        }
    }

    /// Record the user's class choice and assign the node its variable.
    ///
    /// The variable is assigned exactly once, here; if the ontology declares
    /// a default label property for the class, the shadow label binding is
    /// populated in the same step. Returns the resolved value so the caller
    /// can hand it to the downstream node as its start value.
    pub fn select_type(
        &mut self,
        type_uri: &str,
        counter: &VariableCounter,
        ontology: &dyn OntologyMetadata,
    ) -> Result<SelectedValue> {
        if self.end_value.type_uri.is_some() {
            return Err(VqbError::InvalidInput(
                "a class is already selected for this criterion".to_string(),
            ));
        }
        let class = NamedNode::new(type_uri)
            .map_err(|_| VqbError::InvalidIri(type_uri.to_string()))?;
        let variable = assign_variable(type_uri, counter)?;

        if let Some(label_predicate) = ontology.default_label_property(type_uri) {
            self.default_label_value = SelectedValue {
                kind: NodeKind::Property,
                type_uri: Some(label_predicate),
                variable: Some(derive_label_variable(&variable)),
            };
        }

        self.end_value = SelectedValue {
            kind: NodeKind::Class,
            type_uri: Some(class),
            variable: Some(variable),
        };
        Ok(self.end_value.clone())
    }

    /// Replace the bound variable with an externally supplied name, e.g.
    /// when two criteria are unified to share one variable. The label
    /// variable, when present, is re-derived from the new name.
    pub fn override_variable(&mut self, new_name: &str) -> Result<()> {
        if self.end_value.variable.is_none() {
            return Err(VqbError::InvalidInput(
                "cannot override a variable before one is assigned".to_string(),
            ));
        }
        let variable = Variable::new(new_name)
            .map_err(|e| VqbError::InvalidInput(e.to_string()))?;
        if self.default_label_value.type_uri.is_some() {
            self.default_label_value.variable = Some(derive_label_variable(&variable));
        }
        self.end_value.variable = Some(variable);
        Ok(())
    }

    /// Record the subject-side binding provided by the upstream node.
    /// Set once; the upstream link never changes afterwards.
    pub fn set_start_value(&mut self, value: SelectedValue) -> Result<()> {
        if self.start_value.is_some() {
            return Err(VqbError::InvalidInput(
                "start value is already set for this criterion".to_string(),
            ));
        }
        self.start_value = Some(value);
        Ok(())
    }

    /// Record the connecting predicate chosen by the user. Set once.
    pub fn set_object_property(&mut self, value: SelectedValue) -> Result<()> {
        if self.object_property_value.is_some() {
            return Err(VqbError::InvalidInput(
                "object property is already set for this criterion".to_string(),
            ));
        }
        self.object_property_value = Some(value);
        Ok(())
    }

    /// Flag from the attached input widget: `true` while it has not yet
    /// produced a usable value.
    pub fn set_widget_blocking(&mut self, blocking: bool) {
        self.widget_is_blocking = blocking;
    }

    /// Toggle of the "show this column in results" eye icon.
    pub fn set_view_variable_selected(&mut self, selected: bool) {
        self.view_variable_selected = selected;
    }

    pub fn is_view_variable_selected(&self) -> bool {
        self.view_variable_selected
    }

    /// Whether compilation must be skipped for this node.
    pub fn is_blocking(&self) -> bool {
        self.widget_is_blocking || self.end_value.type_uri.is_none()
    }

    pub fn widget_is_blocking(&self) -> bool {
        self.widget_is_blocking
    }

    pub fn end_value(&self) -> &SelectedValue {
        &self.end_value
    }

    pub fn default_label_value(&self) -> &SelectedValue {
        &self.default_label_value
    }

    pub fn start_value(&self) -> Option<&SelectedValue> {
        self.start_value.as_ref()
    }

    pub fn object_property_value(&self) -> Option<&SelectedValue> {
        self.object_property_value.as_ref()
    }

    /// The selected class URI, if any.
    pub fn type_selected(&self) -> Option<&NamedNode> {
        self.end_value.type_uri.as_ref()
    }

    /// The variable bound to this node, if any.
    pub fn variable(&self) -> Option<&Variable> {
        self.end_value.variable.as_ref()
    }

    /// The derived label variable, if a default label predicate exists.
    pub fn label_variable(&self) -> Option<&Variable> {
        self.default_label_value.variable.as_ref()
    }
}
