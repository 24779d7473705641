//! Configuration for teach
//!
//! Two layers live here:
//! - `Config`: process-wide runtime settings read from a TOML file
//! - `PreferencesManager`: per-session output preferences, in memory only

mod config;
mod error;
mod manager;
mod preferences;
mod validate;

pub use config::{CliConfig, Config, McpConfig, OutputFormat};
pub use error::{PreferencesError, Result};
pub use manager::{ImportOutcome, PreferencesManager};
pub use preferences::{
    ClassificationPreferences, CustomRedactionPattern, OutputPreferences, Preferences,
    RedactionPreferences, Separator, UiPreferences,
};
pub use validate::{ValidationReport, validate_preferences};
