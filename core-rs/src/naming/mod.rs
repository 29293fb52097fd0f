//! Variable naming for compiled queries
//!
//! Two rules govern every variable in a compiled query:
//!
//! 1. A criterion variable is `<localName>_<id>`, where the local name comes
//!    from the class URI and the id from the session-owned
//!    [`VariableCounter`]. The counter is never reset mid-query, so no two
//!    criteria ever share a variable.
//! 2. A label variable is always `<criterionVariable>_label`, derived and
//!    re-derived from the primary variable, never chosen independently.

mod counter;
mod namer;

pub use counter::VariableCounter;
pub use namer::{assign_variable, derive_label_variable, local_name, LABEL_SUFFIX};
