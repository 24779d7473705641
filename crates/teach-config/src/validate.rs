//! Preference validation
//!
//! Checks a partial preferences object before it is merged. Every problem
//! is collected; nothing short-circuits.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use teach_core::LengthPreset;

use crate::Separator;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

// (preset, field, min, max)
const TOKEN_LIMITS: [(&str, &str, u64, u64); 4] = [
    ("micro", "max_tokens_micro", 50, 300),
    ("short", "max_tokens_short", 100, 500),
    ("paragraph", "max_tokens_paragraph", 200, 800),
    ("deep", "max_tokens_deep", 400, 1200),
];

/// Validate a partial preferences object. Absent fields are not checked.
pub fn validate_preferences(updates: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    if let Some(ui) = updates.get("ui") {
        if let Some(separator) = present(ui, "separator") {
            let known = separator
                .as_str()
                .is_some_and(|s| Separator::NAMES.contains(&s));
            if !known {
                errors.push("Invalid separator value".to_string());
            }
        }
        if present(ui, "header_emoji").is_some_and(|v| !v.is_string()) {
            errors.push("Header emoji must be a string".to_string());
        }
    }

    if let Some(output) = updates.get("output") {
        if let Some(length) = present(output, "default_length") {
            let known = length
                .as_str()
                .is_some_and(|s| s.parse::<LengthPreset>().is_ok());
            if !known {
                errors.push("Invalid default length value".to_string());
            }
        }
        for (name, field, min, max) in TOKEN_LIMITS {
            // Null counts as present, matching a JSON payload that names the field
            if let Some(value) = output.get(field) {
                let in_range = value.as_u64().is_some_and(|v| (min..=max).contains(&v));
                if !in_range {
                    errors.push(format!("Token limit for {name} must be between {min} and {max}"));
                }
            }
        }
    }

    if let Some(patterns) = updates
        .get("redaction")
        .and_then(|r| present(r, "custom_patterns"))
    {
        match patterns {
            Value::Array(items) => {
                for item in items {
                    validate_custom_pattern(item, &mut errors);
                }
            }
            _ => errors.push("Custom redaction patterns must be an array".to_string()),
        }
    }

    if let Some(threshold) = updates
        .get("classification")
        .and_then(|c| c.get("min_confidence_threshold"))
    {
        let in_range = threshold.as_f64().is_some_and(|t| (0.0..=1.0).contains(&t));
        if !in_range {
            errors.push("Confidence threshold must be between 0 and 1".to_string());
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}

fn validate_custom_pattern(item: &Value, errors: &mut Vec<String>) {
    let field = |key: &str| {
        item.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };

    if field("name").is_none() || field("pattern").is_none() || field("replacement").is_none() {
        errors.push(
            "Custom redaction patterns must have name, pattern, and replacement".to_string(),
        );
    }
    if let Some(pattern) = field("pattern")
        && Regex::new(pattern).is_err()
    {
        errors.push(format!("Invalid regex pattern: {pattern}"));
    }
}

/// Field value, treating JSON null as absent
fn present<'a>(section: &'a Value, key: &str) -> Option<&'a Value> {
    section.get(key).filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_update_is_valid() {
        let report = validate_preferences(&json!({}));
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_micro_token_limit_bounds() {
        let report = validate_preferences(&json!({"output": {"max_tokens_micro": 301}}));
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            vec!["Token limit for micro must be between 50 and 300"]
        );

        assert!(validate_preferences(&json!({"output": {"max_tokens_micro": 150}})).valid);
        assert!(validate_preferences(&json!({"output": {"max_tokens_micro": 300}})).valid);
        assert!(!validate_preferences(&json!({"output": {"max_tokens_micro": "150"}})).valid);
    }

    #[test]
    fn test_enum_fields() {
        let report = validate_preferences(&json!({
            "ui": {"separator": "fancy", "header_emoji": 7},
            "output": {"default_length": "huge"}
        }));
        assert_eq!(
            report.errors,
            vec![
                "Invalid separator value",
                "Header emoji must be a string",
                "Invalid default length value",
            ]
        );
    }

    #[test]
    fn test_bad_custom_pattern() {
        let report = validate_preferences(&json!({
            "redaction": {"custom_patterns": [
                {"name": "bad", "pattern": "([", "replacement": "X"},
                {"name": "", "pattern": "ok", "replacement": "Y"}
            ]}
        }));
        assert_eq!(
            report.errors,
            vec![
                "Invalid regex pattern: ([",
                "Custom redaction patterns must have name, pattern, and replacement",
            ]
        );
    }

    #[test]
    fn test_confidence_threshold_range() {
        let valid = json!({"classification": {"min_confidence_threshold": 0.5}});
        assert!(validate_preferences(&valid).valid);

        let report = validate_preferences(&json!({"classification": {"min_confidence_threshold": 1.5}}));
        assert_eq!(report.errors, vec!["Confidence threshold must be between 0 and 1"]);
    }

    #[test]
    fn test_all_errors_are_collected() {
        let report = validate_preferences(&json!({
            "output": {"max_tokens_short": 10, "max_tokens_deep": 5000},
            "classification": {"min_confidence_threshold": -1}
        }));
        assert_eq!(report.errors.len(), 3);
    }
}
