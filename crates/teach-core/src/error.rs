use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported length preset: {0} (expected micro, short, paragraph or deep)")]
    UnsupportedPreset(String),

    #[error("Input too large: {size} bytes exceeds the {max} byte limit")]
    InputTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
