//! Session preference state

use serde::Serialize;
use serde_json::{Map, Value};
use teach_core::LengthPreset;
use tracing::debug;

use crate::validate::{ValidationReport, validate_preferences};
use crate::{
    ClassificationPreferences, OutputPreferences, Preferences, PreferencesError,
    RedactionPreferences, Result, UiPreferences,
};

const SECTIONS: [&str; 4] = ["ui", "output", "redaction", "classification"];

/// Result of `import_preferences`, shaped for clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Owns the preferences of one session. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct PreferencesManager {
    preferences: Preferences,
}

impl PreferencesManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences.clone()
    }

    /// Merge a partial update. Object sections are spread over the current
    /// section one level deep; anything else replaces it. On error the
    /// current preferences are left untouched.
    pub fn update_preferences(&mut self, updates: &Value) -> Result<()> {
        self.preferences = merge(&self.preferences, updates)?;
        debug!("Preferences updated");
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        self.preferences = Preferences::default();
    }

    pub fn ui(&self) -> &UiPreferences {
        &self.preferences.ui
    }

    pub fn output(&self) -> &OutputPreferences {
        &self.preferences.output
    }

    pub fn redaction(&self) -> &RedactionPreferences {
        &self.preferences.redaction
    }

    pub fn classification(&self) -> &ClassificationPreferences {
        &self.preferences.classification
    }

    pub fn update_ui(&mut self, partial: &Value) -> Result<()> {
        self.update_section("ui", partial)
    }

    pub fn update_output(&mut self, partial: &Value) -> Result<()> {
        self.update_section("output", partial)
    }

    pub fn update_redaction(&mut self, partial: &Value) -> Result<()> {
        self.update_section("redaction", partial)
    }

    pub fn update_classification(&mut self, partial: &Value) -> Result<()> {
        self.update_section("classification", partial)
    }

    /// Response token limit configured for `preset`
    pub fn token_limit(&self, preset: LengthPreset) -> u32 {
        self.preferences.output.token_limit(preset)
    }

    pub fn validate_preferences(&self, updates: &Value) -> ValidationReport {
        validate_preferences(updates)
    }

    pub fn export_preferences(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.preferences)?)
    }

    /// Replace preferences with `json` merged over the defaults
    pub fn import_preferences(&mut self, json: &str) -> ImportOutcome {
        match self.try_import(json) {
            Ok(()) => ImportOutcome {
                success: true,
                error: None,
            },
            Err(e) => ImportOutcome {
                success: false,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn preferences_summary(&self) -> String {
        let prefs = &self.preferences;
        let enabled = |on: bool| if on { "enabled" } else { "disabled" };

        format!(
            "Preferences Summary:\n\
             • Default Length: {}\n\
             • Token Limits: micro({}), short({}), paragraph({}), deep({})\n\
             • Secret Redaction: {}\n\
             • Classification: {}\n\
             • UI Separator: {}\n\
             • Show Language Info: {}\n\
             • Custom Patterns: {}",
            prefs.output.default_length,
            prefs.output.max_tokens_micro,
            prefs.output.max_tokens_short,
            prefs.output.max_tokens_paragraph,
            prefs.output.max_tokens_deep,
            enabled(prefs.redaction.enable),
            enabled(prefs.classification.enable),
            prefs.ui.separator.as_str(),
            if prefs.ui.show_language_line { "yes" } else { "no" },
            prefs.redaction.custom_patterns.len(),
        )
    }

    fn try_import(&mut self, json: &str) -> Result<()> {
        let imported: Value =
            serde_json::from_str(json).map_err(|e| PreferencesError::InvalidJson(e.to_string()))?;

        let report = validate_preferences(&imported);
        if !report.valid {
            return Err(PreferencesError::Validation(report.errors));
        }

        self.preferences = merge(&Preferences::default(), &imported)?;
        Ok(())
    }

    fn update_section(&mut self, section: &str, partial: &Value) -> Result<()> {
        let mut updates = Map::new();
        updates.insert(section.to_string(), partial.clone());
        self.update_preferences(&Value::Object(updates))
    }
}

fn merge(base: &Preferences, updates: &Value) -> Result<Preferences> {
    let Value::Object(updates) = updates else {
        return Err(PreferencesError::NotAnObject);
    };

    let mut merged = serde_json::to_value(base)?;
    if let Value::Object(target) = &mut merged {
        for (key, value) in updates {
            if !SECTIONS.contains(&key.as_str()) {
                debug!(key = %key, "Ignoring unknown preferences section");
                continue;
            }
            match (target.get_mut(key), value) {
                (Some(Value::Object(section)), Value::Object(patch)) => {
                    for (field, v) in patch {
                        section.insert(field.clone(), v.clone());
                    }
                }
                _ => {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
    }

    Ok(serde_json::from_value(merged)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Separator;
    use serde_json::json;

    #[test]
    fn test_shallow_merge_keeps_sibling_fields() {
        let mut manager = PreferencesManager::new();
        manager
            .update_preferences(&json!({"ui": {"separator": "emoji"}}))
            .unwrap();

        assert_eq!(manager.ui().separator, Separator::Emoji);
        assert_eq!(manager.ui().header_emoji, "💡");
        assert!(manager.ui().show_construct_info);
    }

    #[test]
    fn test_arrays_are_replaced() {
        let mut manager = PreferencesManager::new();
        let one = json!({"name": "a", "pattern": "a+", "replacement": "A"});
        let two = json!({"name": "b", "pattern": "b+", "replacement": "B"});

        manager
            .update_redaction(&json!({"custom_patterns": [one]}))
            .unwrap();
        manager
            .update_redaction(&json!({"custom_patterns": [two]}))
            .unwrap();

        assert_eq!(manager.redaction().custom_patterns.len(), 1);
        assert_eq!(manager.redaction().custom_patterns[0].name, "b");
    }

    #[test]
    fn test_bad_type_leaves_state_untouched() {
        let mut manager = PreferencesManager::new();
        manager
            .update_output(&json!({"max_tokens_micro": 120}))
            .unwrap();

        let result = manager.update_preferences(&json!({
            "output": {"max_tokens_short": "lots"}
        }));

        assert!(matches!(result, Err(PreferencesError::Invalid(_))));
        assert_eq!(manager.output().max_tokens_micro, 120);
        assert_eq!(manager.output().max_tokens_short, 250);
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let mut manager = PreferencesManager::new();
        manager
            .update_preferences(&json!({"theme": "dark", "ui": {"show_confidence_scores": true}}))
            .unwrap();

        assert!(manager.ui().show_confidence_scores);
        let exported: Value = serde_json::from_str(&manager.export_preferences().unwrap()).unwrap();
        assert!(exported.get("theme").is_none());
    }

    #[test]
    fn test_non_object_update_is_rejected() {
        let mut manager = PreferencesManager::new();
        assert!(matches!(
            manager.update_preferences(&json!([1, 2])),
            Err(PreferencesError::NotAnObject)
        ));
    }

    #[test]
    fn test_token_limit_and_reset() {
        let mut manager = PreferencesManager::new();
        manager
            .update_output(&json!({"max_tokens_deep": 900}))
            .unwrap();
        assert_eq!(manager.token_limit(LengthPreset::Deep), 900);

        manager.reset_to_defaults();
        assert_eq!(manager.token_limit(LengthPreset::Deep), 700);
        assert_eq!(manager.preferences(), Preferences::default());
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut source = PreferencesManager::new();
        source
            .update_preferences(&json!({
                "output": {"default_length": "deep", "max_tokens_micro": 100},
                "classification": {"custom_language_hints": {"tsx": "typescript"}}
            }))
            .unwrap();
        let exported = source.export_preferences().unwrap();

        let mut restored = PreferencesManager::new();
        let outcome = restored.import_preferences(&exported);

        assert!(outcome.success);
        assert_eq!(restored.preferences(), source.preferences());
    }

    #[test]
    fn test_import_failures() {
        let mut manager = PreferencesManager::new();

        let outcome = manager.import_preferences("{not json");
        assert!(!outcome.success);
        assert!(outcome.error.unwrap().starts_with("Invalid JSON: "));

        let outcome =
            manager.import_preferences(r#"{"output": {"max_tokens_micro": 301, "default_length": "x"}}"#);
        assert_eq!(
            outcome.error.as_deref(),
            Some(
                "Validation failed: Invalid default length value, \
                 Token limit for micro must be between 50 and 300"
            )
        );
        assert_eq!(manager.preferences(), Preferences::default());
    }

    #[test]
    fn test_import_merges_over_defaults() {
        let mut manager = PreferencesManager::new();
        manager
            .update_ui(&json!({"separator": "none"}))
            .unwrap();

        let outcome = manager.import_preferences(r#"{"output": {"include_examples": false}}"#);

        assert!(outcome.success);
        assert_eq!(manager.ui().separator, Separator::Ascii);
        assert!(!manager.output().include_examples);
    }

    #[test]
    fn test_summary() {
        let manager = PreferencesManager::new();
        let summary = manager.preferences_summary();

        assert!(summary.starts_with("Preferences Summary:\n• Default Length: short\n"));
        assert!(summary.contains("• Token Limits: micro(150), short(250), paragraph(450), deep(700)"));
        assert!(summary.contains("• Secret Redaction: enabled"));
        assert!(summary.ends_with("• Custom Patterns: 0"));
    }
}
