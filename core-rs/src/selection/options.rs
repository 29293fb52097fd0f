//! Per-criterion option toggles
//!
//! A criterion row exposes up to two options: wrap the whole branch in
//! OPTIONAL, or negate it (FILTER NOT EXISTS downstream). Whether either is
//! offered at all depends on the ontology flags of the connecting property;
//! the compiler only ever consumes the resulting booleans.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VqbError};
use crate::ontology::OntologyMetadata;

/// Identifier of one option toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriterionOption {
    Optional,
    NotExists,
}

/// Which options the connected property allows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionAvailability {
    pub optional: bool,
    pub not_exists: bool,
}

impl OptionAvailability {
    /// Availability for a criterion connected through `property_uri`.
    pub fn for_property(ontology: &dyn OntologyMetadata, property_uri: &str) -> Self {
        Self {
            optional: ontology.is_optional_enabled(property_uri),
            not_exists: ontology.is_negation_enabled(property_uri),
        }
    }

    /// Whether the option menu is shown at all.
    pub fn any(&self) -> bool {
        self.optional || self.not_exists
    }

    fn allows(&self, option: CriterionOption) -> bool {
        match option {
            CriterionOption::Optional => self.optional,
            CriterionOption::NotExists => self.not_exists,
        }
    }
}

/// Current toggle state of a criterion's options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsState {
    pub optional: bool,
    pub not_exists: bool,
}

impl OptionsState {
    /// Apply a toggle. Toggling an option the property does not enable is a
    /// caller contract violation (the UI never offers such a toggle).
    pub fn toggle(
        &mut self,
        option: CriterionOption,
        enabled: bool,
        availability: OptionAvailability,
    ) -> Result<()> {
        if enabled && !availability.allows(option) {
            return Err(VqbError::InvalidInput(format!(
                "option {:?} is not enabled for this property",
                option
            )));
        }
        match option {
            CriterionOption::Optional => self.optional = enabled,
            CriterionOption::NotExists => self.not_exists = enabled,
        }
        Ok(())
    }

    pub fn any(&self) -> bool {
        self.optional || self.not_exists
    }
}
