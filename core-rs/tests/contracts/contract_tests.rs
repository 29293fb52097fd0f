//! Contract Tests - Compiler Invariant Protection
//!
//! This file aggregates all contract test modules.
//! Contract tests verify invariants that MUST NEVER BREAK.

// Contract test modules
mod contracts {
    // Variable naming contracts
    mod variable_naming {
        include!("variable_naming_contracts.rs");
    }

    // Pattern shape contracts
    mod pattern_shape {
        include!("pattern_shape_contracts.rs");
    }
}
