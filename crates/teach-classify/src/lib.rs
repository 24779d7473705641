//! Best-effort construct classification
//!
//! Answers "what kind of code is this" (function, class, hook, loop...)
//! from hand-ordered regex tables:
//! - one table per known language, first match wins
//! - a generic, language-agnostic table used as fallback
//! - a small language auto-detector for snippets without a hint

pub mod classifier;
pub mod detect;
pub mod patterns;

pub use classifier::ConstructClassifier;
pub use detect::{detect_language, language_from_extension};
pub use patterns::{ConstructPattern, LanguageTable};
