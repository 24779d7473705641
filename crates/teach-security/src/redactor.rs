//! Secret redaction engine

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::patterns::{SecretPattern, builtin_patterns};

/// Outcome of one redaction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionResult {
    pub redacted_code: String,
    pub secrets_found: usize,
    /// `"<count> <name>[s]"`, one per pattern that matched, in pattern order
    pub redaction_notices: Vec<String>,
}

/// Redaction engine for common secret shapes
#[derive(Debug, Clone)]
pub struct SecretRedactor {
    patterns: Vec<SecretPattern>,
}

impl SecretRedactor {
    pub fn new() -> Self {
        Self {
            patterns: builtin_patterns(),
        }
    }

    /// Redact secrets and prepend a comment banner summarising what was
    /// removed. Empty input is returned unchanged.
    pub fn redact(&self, code: &str) -> String {
        if code.is_empty() {
            return code.to_string();
        }

        let (redacted, total, counts) = self.run(code);
        if total == 0 {
            return redacted;
        }

        let items: Vec<String> = counts
            .iter()
            .map(|(name, count)| format!("{} redacted", notice(name, *count)))
            .collect();

        format!(
            "\n// ⚠️ SECURITY NOTICE: {} potential secret{} redacted\n// Redacted items: {}\n{}",
            total,
            plural(total),
            items.join(", "),
            redacted
        )
    }

    /// Redact secrets and report counts as structured data, without a banner
    pub fn redaction_details(&self, code: &str) -> RedactionResult {
        if code.is_empty() {
            return RedactionResult {
                redacted_code: code.to_string(),
                ..Default::default()
            };
        }

        let (redacted_code, secrets_found, counts) = self.run(code);
        RedactionResult {
            redacted_code,
            secrets_found,
            redaction_notices: counts
                .iter()
                .map(|(name, count)| notice(name, *count))
                .collect(),
        }
    }

    /// Append a pattern. It runs after every existing pattern and sees
    /// their output.
    pub fn add_custom_pattern(
        &mut self,
        name: impl Into<String>,
        regex: Regex,
        replacement: impl Into<String>,
    ) {
        let pattern = SecretPattern::new(name, regex, replacement);
        debug!(name = %pattern.name, "Added custom redaction pattern");
        self.patterns.push(pattern);
    }

    /// Cheap probe: does any pattern match, ignoring existing placeholders
    pub fn contains_secrets(&self, code: &str) -> bool {
        if code.is_empty() {
            return false;
        }
        self.patterns.iter().any(|p| p.is_present(code))
    }

    /// Pattern names in application order
    pub fn available_patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name.as_str()).collect()
    }

    fn run<'a>(&'a self, code: &str) -> (String, usize, Vec<(&'a str, usize)>) {
        let mut result = code.to_string();
        let mut total = 0;
        let mut counts = Vec::new();

        for pattern in &self.patterns {
            let (next, count) = pattern.apply(&result);
            if count > 0 {
                debug!(pattern = %pattern.name, count, "Redacted secrets");
                total += count;
                counts.push((pattern.name.as_str(), count));
                result = next;
            }
        }

        (result, total, counts)
    }
}

impl Default for SecretRedactor {
    fn default() -> Self {
        Self::new()
    }
}

fn notice(name: &str, count: usize) -> String {
    format!("{} {}{}", count, name, plural(count))
}

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}
