//! Explain requests
//!
//! `ExplainArgs` is what arrives over the wire; `ExplainRequest` is the
//! validated form the prompt pipeline accepts.

use serde::Deserialize;
use serde_json::Value;

use crate::{CoreError, LengthPreset, Result, WorkspaceContext};

/// Raw request arguments, every field optional until validated
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplainArgs {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub context: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplainRequest {
    pub code: String,
    pub length: LengthPreset,
    pub language: Option<String>,
    pub filename: Option<String>,
    pub context: Option<WorkspaceContext>,
}

impl ExplainRequest {
    pub fn new(code: impl Into<String>, length: LengthPreset) -> Self {
        Self {
            code: code.into(),
            length,
            language: None,
            filename: None,
            context: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_context(mut self, context: WorkspaceContext) -> Self {
        self.context = Some(context);
        self
    }
}

impl TryFrom<ExplainArgs> for ExplainRequest {
    type Error = CoreError;

    fn try_from(args: ExplainArgs) -> Result<Self> {
        let code = args
            .code
            .filter(|c| !c.is_empty())
            .ok_or_else(|| CoreError::InvalidInput("code is required".to_string()))?;
        let length = args
            .length
            .filter(|l| !l.is_empty())
            .ok_or_else(|| CoreError::InvalidInput("length is required".to_string()))?
            .parse::<LengthPreset>()?;

        Ok(Self {
            code,
            length,
            language: args.language.filter(|l| !l.trim().is_empty()),
            filename: args.filename.filter(|f| !f.trim().is_empty()),
            context: args.context.as_ref().and_then(WorkspaceContext::from_value),
        })
    }
}
