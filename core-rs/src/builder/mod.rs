//! Selection-to-pattern compilation

mod class_patterns;

pub use class_patterns::ClassPatternBuilder;
