//! Error types for the query builder core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VqbError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid property path '{path}': {reason}")]
    PropertyPath { path: String, reason: String },

    #[error("Invalid query language tag: {0}")]
    InvalidLanguageTag(String),

    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Ontology configuration error: {0}")]
    OntologyConfig(String),

    #[error("Query description error: {0}")]
    QueryDescription(String),

    #[error("Unknown criterion reference: {0}")]
    UnknownCriterion(String),

    #[error("Query assembly error: {0}")]
    Assembly(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VqbError>;
