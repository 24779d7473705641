use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("Preferences update must be a JSON object")]
    NotAnObject,

    #[error("Invalid preferences: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

pub type Result<T> = std::result::Result<T, PreferencesError>;
