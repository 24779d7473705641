use std::path::Path;

use anyhow::{Context, Result, bail};
use teach_config::{PreferencesManager, ValidationReport, validate_preferences};

use crate::cli::PreferencesCommands;

pub fn handle(cmd: PreferencesCommands) -> Result<()> {
    match cmd {
        PreferencesCommands::Validate { file } => {
            let report = validate_file(&file)?;
            if !report.valid {
                for error in &report.errors {
                    eprintln!("  • {}", error);
                }
                bail!(
                    "{} has {} invalid setting(s)",
                    file.display(),
                    report.errors.len()
                );
            }
            println!("✓ {} is valid", file.display());
            Ok(())
        }
        PreferencesCommands::Defaults => {
            println!("{}", PreferencesManager::new().export_preferences()?);
            Ok(())
        }
    }
}

fn validate_file(path: &Path) -> Result<ValidationReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read preferences '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in '{}'", path.display()))?;
    Ok(validate_preferences(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"{"output": {"max_tokens_micro": 150}}"#).unwrap();
        std::fs::write(&bad, r#"{"output": {"max_tokens_micro": 301}}"#).unwrap();

        assert!(validate_file(&good).unwrap().valid);
        assert_eq!(
            validate_file(&bad).unwrap().errors,
            vec!["Token limit for micro must be between 50 and 300"]
        );
    }

    #[test]
    fn test_validate_file_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let err = validate_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
