//! Variable naming from ontology URIs
//!
//! A criterion variable is the local name of its class URI plus a numeric
//! suffix from the session counter, e.g. `http://ex.org/onto#Person` with
//! id 3 becomes `?Person_3`. The companion label variable is always derived
//! from the primary one by suffixing `_label`.

use spargebra::term::Variable;

use crate::errors::{Result, VqbError};
use crate::naming::VariableCounter;

/// Suffix appended to a criterion variable to form its label variable.
pub const LABEL_SUFFIX: &str = "_label";

/// Extract the local name of a URI: the substring after the last `#`,
/// else after the last `/`, else the whole string.
pub fn local_name(uri: &str) -> &str {
    if let Some(idx) = uri.rfind('#') {
        &uri[idx + 1..]
    } else if let Some(idx) = uri.rfind('/') {
        &uri[idx + 1..]
    } else {
        uri
    }
}

/// Replace every character that is illegal in a SPARQL variable name.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Build the unique variable for a newly selected type.
///
/// The id comes from the session counter, so two criteria selecting the same
/// class still get distinct variables.
pub fn assign_variable(type_uri: &str, counter: &VariableCounter) -> Result<Variable> {
    if type_uri.is_empty() {
        return Err(VqbError::InvalidInput(
            "cannot assign a variable for an empty type URI".to_string(),
        ));
    }
    let base = sanitize(local_name(type_uri));
    let name = format!("{}_{}", base, counter.next());
    Variable::new(name).map_err(|e| VqbError::InvalidInput(e.to_string()))
}

/// Derive the label variable from an already assigned criterion variable.
pub fn derive_label_variable(base: &Variable) -> Variable {
    // The base name is already a legal variable name and the suffix is
    // alphanumeric, so this cannot fail.
    Variable::new_unchecked(format!("{}{}", base.as_str(), LABEL_SUFFIX))
}
