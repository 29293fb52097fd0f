//! # VQB Core - Visual SPARQL Query Builder Runtime
//!
//! Core of a visual SPARQL query builder: non-technical users assemble a
//! query by picking classes, connecting them with properties, and toggling
//! per-criterion options; this crate turns those selections into a correct
//! SPARQL abstract pattern tree with stable variable naming.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   select/connect/toggle    ┌──────────────────────┐
//! │  UI (out of  │ ─────────────────────────▶ │  QueryGraph          │
//! │  scope)      │ ◀───────────────────────── │  (selection state)   │
//! └──────────────┘     resolved values        └──────────┬───────────┘
//!                                                        │ compile
//!                 ┌──────────────────┐        ┌──────────▼───────────┐
//!                 │ OntologyMetadata │ ◀───── │ ClassPatternBuilder  │
//!                 │ (trait)          │        │ (pattern compiler)   │
//!                 └──────────────────┘        └──────────┬───────────┘
//!                                                        │ patterns
//!                                             ┌──────────▼───────────┐
//!                                             │ QueryAssembler       │
//!                                             │ (spargebra algebra)  │
//!                                             └──────────────────────┘
//! ```
//!
//! ## Key guarantees
//!
//! - No two criteria in one query ever share a variable: ids come from one
//!   session-owned monotonic counter.
//! - A blocking or type-less criterion compiles to nothing, silently.
//! - The type-assertion pattern is always the first element of a non-empty
//!   compile result.
//! - A default-label group (triple plus optional language filter) is either
//!   emitted whole as plain members or wrapped whole in a single OPTIONAL,
//!   never split, and OPTIONAL is never nested inside a BGP.

pub mod builder;
pub mod errors;
pub mod graph;
pub mod naming;
pub mod ontology;
pub mod patterns;
pub mod selection;
pub mod settings;
pub mod vocab;

pub use builder::ClassPatternBuilder;
pub use errors::{Result, VqbError};
pub use graph::{CompiledQuery, CriteriaNode, CriterionDescription, QueryDescription, QueryGraph};
pub use naming::{assign_variable, derive_label_variable, local_name, VariableCounter};
pub use ontology::{ClassEntry, OntologyLibrary, OntologyMetadata, PropertyEntry};
pub use patterns::{parse_property_path, Pattern, PatternFactory, QueryAssembler, TypePredicate};
pub use selection::{
    ClassSelection, CriterionOption, NodeKind, OptionAvailability, OptionsState, SelectedValue,
};
pub use settings::QuerySettings;

/// Crate version, surfaced by the CLI.
pub const VERSION: &str = "0.3.1";
