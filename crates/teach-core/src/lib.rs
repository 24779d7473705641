//! Core domain models and logic for teach
//!
//! This crate contains:
//! - Domain models (LengthPreset, WorkspaceContext, ExplainRequest)
//! - Classification result types shared by the classifier and the engine
//! - Prompt templates (deterministic prompt text per length preset)

pub mod classification;
pub mod context;
pub mod error;
pub mod preset;
pub mod render;
pub mod request;

pub use classification::{ClassificationResult, DetailedClassification};
pub use context::{ProjectContext, RepoContext, WorkspaceContext};
pub use error::{CoreError, Result};
pub use preset::{LengthPreset, ResponseShape};
pub use render::{PromptParts, render_prompt};
pub use request::{ExplainArgs, ExplainRequest};
