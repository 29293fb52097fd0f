//! Compilation of one class selection into its pattern sequence
//!
//! Given a criterion's selection state and the ontology metadata, produce
//! the ordered patterns representing the node: the type-assertion anchor,
//! then - when the ontology declares one - the default-label retrieval,
//! plain or language-filtered, plain or wrapped in a single OPTIONAL.
//!
//! An incomplete selection (blocking widget, no class chosen yet) compiles
//! to an empty sequence. That path is silent: incomplete nodes are a normal
//! transient state of the visual editor, not an error.

use spargebra::term::Variable;
use tracing::debug;

use crate::errors::{Result, VqbError};
use crate::naming::derive_label_variable;
use crate::ontology::OntologyMetadata;
use crate::patterns::{Pattern, PatternFactory, TypePredicate};
use crate::selection::ClassSelection;
use crate::settings::QuerySettings;

/// Compiles one [`ClassSelection`] into SPARQL patterns.
pub struct ClassPatternBuilder<'a> {
    selection: &'a ClassSelection,
    ontology: &'a dyn OntologyMetadata,
    settings: &'a QuerySettings,
    patterns: Vec<Pattern>,
}

impl<'a> ClassPatternBuilder<'a> {
    pub fn new(
        selection: &'a ClassSelection,
        ontology: &'a dyn OntologyMetadata,
        settings: &'a QuerySettings,
    ) -> Self {
        Self {
            selection,
            ontology,
            settings,
            patterns: Vec::new(),
        }
    }

    /// Run the compile. Afterwards [`patterns`](Self::patterns) holds the
    /// result: empty for a blocking selection, otherwise the type-assertion
    /// pattern first, then the label patterns in one of their three shapes.
    pub fn build(&mut self) -> Result<()> {
        if self.selection.is_blocking() {
            debug!("selection is blocking, emitting no patterns");
            return Ok(());
        }

        let end = self.selection.end_value();
        // is_blocking() ruled out a missing type; a missing half at this
        // point means the caller corrupted the selection state.
        let (Some(class), Some(variable)) = (end.type_uri.as_ref(), end.variable.as_ref())
        else {
            return Err(VqbError::InvalidInput(
                "selection end value was not populated through select_type".to_string(),
            ));
        };

        let type_predicate =
            TypePredicate::from_configured(self.settings.type_predicate.as_deref())?;
        let anchor = PatternFactory::type_pattern(variable, &type_predicate, class);

        let label_group = self.build_label_group(class.as_str(), variable);
        self.patterns.push(anchor);
        match label_group {
            LabelGroup::None => {}
            LabelGroup::Plain(patterns) => self.patterns.extend(patterns),
            LabelGroup::Optional(patterns) => {
                // OPTIONAL stays a sibling of the anchor; merging it into
                // the BGP would be ill-formed in most SPARQL algebras.
                self.patterns.push(PatternFactory::optional(patterns));
            }
        }
        Ok(())
    }

    /// The default-label patterns for this node, if its class declares a
    /// default label property.
    fn build_label_group(&self, class: &str, subject: &Variable) -> LabelGroup {
        let Some(label_predicate) = self.ontology.default_label_property(class) else {
            return LabelGroup::None;
        };

        // The label triple shares the anchor's subject variable; the label
        // variable is derived from it, which is what ties the label to the
        // right node.
        let label_variable = derive_label_variable(subject);
        let mut group = vec![PatternFactory::bgp(vec![PatternFactory::triple(
            subject,
            &label_predicate,
            &label_variable,
        )])];

        if self.ontology.is_multilingual(label_predicate.as_str()) {
            if let Some(language) = self.settings.filter_language() {
                group.push(PatternFactory::filter_lang_equals(&label_variable, language));
            }
        }

        if self.ontology.is_optional_enabled(label_predicate.as_str()) {
            debug!(label = %label_predicate, "label predicate is optional-enabled");
            LabelGroup::Optional(group)
        } else {
            LabelGroup::Plain(group)
        }
    }

    /// The compiled pattern sequence.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Consume the builder, returning the compiled sequence.
    pub fn into_patterns(self) -> Vec<Pattern> {
        self.patterns
    }

    /// The variable to project for this node when its "show in results"
    /// toggle is on: the label variable, so the result table shows a
    /// human-readable value instead of a raw IRI. `None` when the toggle is
    /// off or the class has no default label.
    pub fn selected_view_variable(&self) -> Option<Variable> {
        if !self.selection.is_view_variable_selected() {
            return None;
        }
        self.selection.label_variable().cloned()
    }
}

/// The label half of a compiled node, before placement.
enum LabelGroup {
    None,
    Plain(Vec<Pattern>),
    Optional(Vec<Pattern>),
}
