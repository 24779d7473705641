use teach_config::PreferencesError;
use teach_core::CoreError;
use thiserror::Error;

use crate::protocol::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND};

#[derive(Error, Debug)]
pub enum McpError {
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    #[error("{0}")]
    InvalidParams(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Preferences(#[from] PreferencesError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl McpError {
    /// JSON-RPC error code for this failure
    pub fn code(&self) -> i32 {
        match self {
            McpError::MethodNotFound(_) | McpError::UnknownTool(_) => METHOD_NOT_FOUND,
            McpError::UnknownPrompt(_)
            | McpError::InvalidParams(_)
            | McpError::Core(_)
            | McpError::Preferences(_) => INVALID_PARAMS,
            McpError::Internal(_) => INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for McpError {
    fn from(e: serde_json::Error) -> Self {
        McpError::InvalidParams(format!("Invalid arguments: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, McpError>;
