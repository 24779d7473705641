use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use teach_core::LengthPreset;
use tracing::debug;

/// Runtime configuration for teach
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Requests with more code than this are rejected before redaction
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    #[serde(default)]
    pub mcp: McpConfig,

    #[serde(default)]
    pub cli: CliConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default = "default_server_name")]
    pub server_name: String,

    #[serde(default = "default_protocol_version")]
    pub protocol_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_length")]
    pub default_length: LengthPreset,

    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Plain,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            mcp: McpConfig::default(),
            cli: CliConfig::default(),
        }
    }
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            protocol_version: default_protocol_version(),
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            format: OutputFormat::default(),
        }
    }
}

fn default_max_input_bytes() -> usize {
    256 * 1024
}

fn default_server_name() -> String {
    "teach".to_string()
}

fn default_protocol_version() -> String {
    "2024-11-05".to_string()
}

fn default_length() -> LengthPreset {
    LengthPreset::Short
}

impl Config {
    /// Load config from the default location, or defaults if there is none.
    /// Nothing is written to disk.
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "teach", "teach")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_input_bytes, 262_144);
        assert_eq!(config.mcp.server_name, "teach");
        assert_eq!(config.mcp.protocol_version, "2024-11-05");
        assert_eq!(config.cli.default_length, LengthPreset::Short);
        assert_eq!(config.cli.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_input_bytes = 1024\n\n[cli]\nformat = \"plain\"").unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.max_input_bytes, 1024);
        assert_eq!(config.cli.format, OutputFormat::Plain);
        assert_eq!(config.cli.default_length, LengthPreset::Short);
        assert_eq!(config.mcp, McpConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_input_bytes = \"lots\"").unwrap();

        let err = Config::from_path(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}
