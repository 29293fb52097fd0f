//! SPARQL graph-pattern primitives
//!
//! The compiler emits an ordered sequence of [`Pattern`]s per criterion;
//! the [`QueryAssembler`] later folds all sequences into one
//! `spargebra` algebra tree. Keeping the intermediate sequence flat is what
//! lets OPTIONAL blocks stay siblings of the basic patterns - an OPTIONAL is
//! never a member of a BGP.

mod assembly;
mod factory;

pub use assembly::QueryAssembler;
pub use factory::{parse_property_path, PatternFactory, TypePredicate};

use spargebra::algebra::{Expression, PropertyPathExpression};
use spargebra::term::{TermPattern, TriplePattern};

/// One element of a criterion's compiled pattern sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// A basic graph pattern: triples that must all match.
    Bgp { triples: Vec<TriplePattern> },
    /// A triple whose predicate position holds a property path.
    Path {
        subject: TermPattern,
        path: PropertyPathExpression,
        object: TermPattern,
    },
    /// A sub-sequence that may match zero or one times.
    Optional { patterns: Vec<Pattern> },
    /// A filter constraining the group assembled so far.
    Filter { expr: Expression },
}

impl Pattern {
    pub fn is_optional(&self) -> bool {
        matches!(self, Pattern::Optional { .. })
    }

    pub fn is_filter(&self) -> bool {
        matches!(self, Pattern::Filter { .. })
    }

    /// The triples of a BGP pattern, if this is one.
    pub fn as_bgp(&self) -> Option<&[TriplePattern]> {
        match self {
            Pattern::Bgp { triples } => Some(triples),
            _ => None,
        }
    }
}
