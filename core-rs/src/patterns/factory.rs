//! Constructors for the pattern shapes the compiler emits

use spargebra::algebra::{Expression, Function, GraphPattern, PropertyPathExpression};
use spargebra::term::{Literal, NamedNode, NamedNodePattern, TermPattern, TriplePattern, Variable};
use spargebra::Query;

use crate::errors::{Result, VqbError};
use crate::patterns::Pattern;
use crate::vocab::RDF_TYPE;

/// The predicate used in a type-assertion pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum TypePredicate {
    /// Plain `rdf:type`.
    Default,
    /// A configured replacement, possibly a multi-hop path.
    Path(PropertyPathExpression),
}

impl TypePredicate {
    /// Resolve the configured type predicate, parsing it as a property path
    /// when one is set.
    pub fn from_configured(type_predicate: Option<&str>) -> Result<Self> {
        match type_predicate {
            None => Ok(TypePredicate::Default),
            Some(path) => Ok(TypePredicate::Path(parse_property_path(path)?)),
        }
    }
}

/// Parse a SPARQL property path expression, e.g.
/// `<http://ex.org/p1>/<http://ex.org/p2>` or `<http://ex.org/isA>`.
///
/// The path is planted in a one-triple SELECT and extracted back out of the
/// parsed algebra, so every path form the SPARQL grammar accepts is
/// supported without a dedicated parser.
pub fn parse_property_path(path: &str) -> Result<PropertyPathExpression> {
    let query = format!("SELECT * WHERE {{ ?s {} ?o }}", path);
    let parsed = Query::parse(&query, None).map_err(|e| VqbError::PropertyPath {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    let Query::Select { pattern, .. } = parsed else {
        return Err(VqbError::PropertyPath {
            path: path.to_string(),
            reason: "expression did not parse as a graph pattern".to_string(),
        });
    };
    extract_path(pattern).ok_or_else(|| VqbError::PropertyPath {
        path: path.to_string(),
        reason: "expression is not a property path".to_string(),
    })
}

fn extract_path(pattern: GraphPattern) -> Option<PropertyPathExpression> {
    match pattern {
        GraphPattern::Project { inner, .. } => extract_path(*inner),
        GraphPattern::Path { path, .. } => Some(path),
        GraphPattern::Bgp { mut patterns } => {
            if patterns.len() != 1 {
                return None;
            }
            match patterns.pop()?.predicate {
                NamedNodePattern::NamedNode(node) => {
                    Some(PropertyPathExpression::NamedNode(node))
                }
                NamedNodePattern::Variable(_) => None,
            }
        }
        _ => None,
    }
}

/// Stateless constructors for well-formed patterns.
pub struct PatternFactory;

impl PatternFactory {
    /// The type-assertion pattern anchoring a criterion: subject variable,
    /// type predicate (default or configured path), class as object.
    /// A configured path that is a single predicate degenerates to a plain
    /// triple.
    pub fn type_pattern(
        subject: &Variable,
        predicate: &TypePredicate,
        class: &NamedNode,
    ) -> Pattern {
        match predicate {
            TypePredicate::Default => Self::bgp(vec![Self::triple_with_node_object(
                subject,
                &RDF_TYPE,
                class,
            )]),
            TypePredicate::Path(PropertyPathExpression::NamedNode(node)) => {
                Self::bgp(vec![Self::triple_with_node_object(subject, node, class)])
            }
            TypePredicate::Path(path) => Pattern::Path {
                subject: TermPattern::Variable(subject.clone()),
                path: path.clone(),
                object: TermPattern::NamedNode(class.clone()),
            },
        }
    }

    /// `?subject <predicate> ?object`
    pub fn triple(subject: &Variable, predicate: &NamedNode, object: &Variable) -> TriplePattern {
        TriplePattern {
            subject: TermPattern::Variable(subject.clone()),
            predicate: NamedNodePattern::NamedNode(predicate.clone()),
            object: TermPattern::Variable(object.clone()),
        }
    }

    /// `?subject <predicate> <object>`
    pub fn triple_with_node_object(
        subject: &Variable,
        predicate: &NamedNode,
        object: &NamedNode,
    ) -> TriplePattern {
        TriplePattern {
            subject: TermPattern::Variable(subject.clone()),
            predicate: NamedNodePattern::NamedNode(predicate.clone()),
            object: TermPattern::NamedNode(object.clone()),
        }
    }

    /// A basic graph pattern.
    pub fn bgp(triples: Vec<TriplePattern>) -> Pattern {
        Pattern::Bgp { triples }
    }

    /// An OPTIONAL wrapping a whole sub-sequence.
    pub fn optional(patterns: Vec<Pattern>) -> Pattern {
        Pattern::Optional { patterns }
    }

    /// `FILTER(lang(?variable) = "language")`
    pub fn filter_lang_equals(variable: &Variable, language: &str) -> Pattern {
        Pattern::Filter {
            expr: Expression::Equal(
                Box::new(Expression::FunctionCall(
                    Function::Lang,
                    vec![Expression::Variable(variable.clone())],
                )),
                Box::new(Expression::Literal(Literal::new_simple_literal(language))),
            ),
        }
    }

    /// `FILTER(NOT EXISTS { ... })` over an already assembled group.
    pub fn filter_not_exists(group: GraphPattern) -> Pattern {
        Pattern::Filter {
            expr: Expression::Not(Box::new(Expression::Exists(Box::new(group)))),
        }
    }
}
