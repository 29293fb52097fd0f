//! RDF vocabulary terms used by the pattern builders

use once_cell::sync::Lazy;
use spargebra::term::NamedNode;

/// IRI of the default type predicate.
pub const RDF_TYPE_IRI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// IRI of rdfs:label, the conventional fallback label predicate.
pub const RDFS_LABEL_IRI: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// `rdf:type` as a ready-made named node.
pub static RDF_TYPE: Lazy<NamedNode> =
    Lazy::new(|| NamedNode::new_unchecked(RDF_TYPE_IRI));

/// `rdfs:label` as a ready-made named node.
pub static RDFS_LABEL: Lazy<NamedNode> =
    Lazy::new(|| NamedNode::new_unchecked(RDFS_LABEL_IRI));
