//! Secret redaction for code snippets
//!
//! Patterns run in a fixed order, each against the output of the previous
//! one. Matches are replaced with fixed placeholder tokens.

pub mod patterns;
pub mod redactor;

pub use patterns::SecretPattern;
pub use redactor::{RedactionResult, SecretRedactor};
