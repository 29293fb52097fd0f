//! Ontology metadata consumed by the pattern compiler
//!
//! The compiler never reads the ontology itself; it asks the
//! [`OntologyMetadata`] trait the handful of questions that change the shape
//! of the emitted patterns. Every query may legitimately answer "not found"
//! (`None` / `false`) - that is a domain answer, never an error.

mod library;

pub use library::{ClassEntry, OntologyLibrary, PropertyEntry};

use spargebra::term::NamedNode;

/// Read-only metadata queries the compiler issues, all keyed by URI.
pub trait OntologyMetadata {
    /// The predicate declared as the default human-readable label for
    /// instances of `class_uri`, if any.
    fn default_label_property(&self, class_uri: &str) -> Option<NamedNode>;

    /// Whether `property_uri` carries language-tagged values, in which case
    /// label retrieval is constrained to the configured query language.
    fn is_multilingual(&self, property_uri: &str) -> bool;

    /// Whether `property_uri` is not guaranteed to exist on every instance,
    /// in which case patterns using it are wrapped in OPTIONAL.
    fn is_optional_enabled(&self, property_uri: &str) -> bool;

    /// Whether the ontology allows negating criteria over `property_uri`.
    fn is_negation_enabled(&self, property_uri: &str) -> bool;

    /// Help text for a class or property, for display next to the widget.
    fn tooltip(&self, uri: &str) -> Option<String>;
}
