//! Folding pattern sequences into a complete SELECT query
//!
//! The compiler hands over flat, ordered pattern sequences; this module
//! turns them into the `spargebra` algebra tree: adjacent BGPs merge,
//! OPTIONAL becomes a left join with everything before it, FILTER wraps the
//! group built so far. Serialization falls out of `spargebra::Query`'s
//! `Display`.

use spargebra::algebra::GraphPattern;
use spargebra::term::Variable;
use spargebra::Query;
use tracing::debug;

use crate::errors::{Result, VqbError};
use crate::patterns::Pattern;

/// Assembles criterion pattern sequences into one query.
pub struct QueryAssembler;

impl QueryAssembler {
    /// Fold an ordered pattern sequence into a single graph pattern.
    pub fn graph_pattern(patterns: Vec<Pattern>) -> GraphPattern {
        patterns
            .into_iter()
            .fold(GraphPattern::Bgp { patterns: vec![] }, |acc, pattern| {
                match pattern {
                    Pattern::Bgp { triples } => {
                        Self::join(acc, GraphPattern::Bgp { patterns: triples })
                    }
                    Pattern::Path {
                        subject,
                        path,
                        object,
                    } => Self::join(
                        acc,
                        GraphPattern::Path {
                            subject,
                            path,
                            object,
                        },
                    ),
                    Pattern::Optional { patterns } => GraphPattern::LeftJoin {
                        left: Box::new(acc),
                        right: Box::new(Self::graph_pattern(patterns)),
                        expression: None,
                    },
                    Pattern::Filter { expr } => GraphPattern::Filter {
                        expr,
                        inner: Box::new(acc),
                    },
                }
            })
    }

    /// Join two group members, merging adjacent BGPs so the algebra stays
    /// as small as the query the user drew.
    fn join(left: GraphPattern, right: GraphPattern) -> GraphPattern {
        match (left, right) {
            (GraphPattern::Bgp { patterns: mut a }, GraphPattern::Bgp { patterns: b }) => {
                a.extend(b);
                GraphPattern::Bgp { patterns: a }
            }
            (GraphPattern::Bgp { patterns }, right) if patterns.is_empty() => right,
            (left, GraphPattern::Bgp { patterns }) if patterns.is_empty() => left,
            (left, right) => GraphPattern::Join {
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    /// Build the final SELECT query from the concatenated node sequences and
    /// the variables to project.
    pub fn select_query(
        patterns: Vec<Pattern>,
        projection: Vec<Variable>,
        distinct: bool,
    ) -> Result<Query> {
        if projection.is_empty() {
            return Err(VqbError::Assembly(
                "no variables to project; select at least one criterion".to_string(),
            ));
        }
        debug!(
            variables = projection.len(),
            distinct, "assembling SELECT query"
        );

        let body = Self::graph_pattern(patterns);
        let mut pattern = GraphPattern::Project {
            inner: Box::new(body),
            variables: projection,
        };
        if distinct {
            pattern = GraphPattern::Distinct {
                inner: Box::new(pattern),
            };
        }
        Ok(Query::Select {
            dataset: None,
            pattern,
            base_iri: None,
        })
    }
}
