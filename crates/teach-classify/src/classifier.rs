//! Construct classification

use regex::Regex;
use teach_core::{ClassificationResult, DetailedClassification};
use tracing::debug;

use crate::detect::detect_language;
use crate::patterns::{ConstructPattern, LanguageTable, builtin_tables, generic_table};

/// Results at or below this confidence fall through to the next stage
const ACCEPT_THRESHOLD: f64 = 0.5;
/// Alternatives at or below this confidence are dropped
const ALTERNATIVE_THRESHOLD: f64 = 0.3;
const MAX_ALTERNATIVES: usize = 3;

/// Regex-driven construct classifier keyed by language
#[derive(Debug, Clone)]
pub struct ConstructClassifier {
    tables: Vec<LanguageTable>,
    generic: LanguageTable,
}

impl ConstructClassifier {
    pub fn new() -> Self {
        Self {
            tables: builtin_tables(),
            generic: generic_table(),
        }
    }

    /// Classify a snippet, preferring the hinted language, then the detected
    /// one, then the generic table.
    pub fn classify(&self, code: &str, language_hint: Option<&str>) -> ClassificationResult {
        if code.is_empty() {
            return ClassificationResult::new("unknown", 0.0, Some("No code provided"));
        }

        let trimmed = code.trim();
        if trimmed.is_empty() {
            return ClassificationResult::new("empty", 1.0, Some("Empty code"));
        }

        if let Some(hint) = language_hint {
            let result = self.classify_with_language(trimmed, hint);
            if result.confidence > ACCEPT_THRESHOLD {
                debug!(language = hint, construct = %result.construct, "Classified from hint");
                return result;
            }
        }

        let detected = detect_language(trimmed);
        if let Some(language) = detected {
            let result = self.classify_with_language(trimmed, language);
            if result.confidence > ACCEPT_THRESHOLD {
                debug!(language, construct = %result.construct, "Classified from detection");
                return result.with_language(Some(language));
            }
        }

        self.classify_generic(trimmed)
            .with_language(detected.or(language_hint))
    }

    /// Classify against one language table, falling back to the generic
    /// table when the language is unknown or nothing in it matches.
    pub fn classify_with_language(&self, code: &str, language: &str) -> ClassificationResult {
        self.table(language)
            .and_then(|table| table.first_match(code))
            .map(ConstructPattern::to_result)
            .unwrap_or_else(|| self.classify_generic(code))
    }

    /// Primary result plus the best guesses from every other language table
    pub fn detailed_classification(
        &self,
        code: &str,
        language_hint: Option<&str>,
    ) -> DetailedClassification {
        let primary = self.classify(code, language_hint);

        let mut alternatives: Vec<ClassificationResult> = self
            .tables
            .iter()
            .filter(|table| primary.language.as_deref() != Some(table.name.as_str()))
            .map(|table| {
                self.classify_with_language(code, &table.name)
                    .with_language(Some(table.name.as_str()))
            })
            .filter(|result| result.confidence > ALTERNATIVE_THRESHOLD)
            .collect();

        // Stable, so equal confidences keep table order
        alternatives.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        alternatives.truncate(MAX_ALTERNATIVES);

        let language_confidence = if primary.language.is_some() { 0.8 } else { 0.3 };

        DetailedClassification {
            primary,
            alternatives,
            language_confidence,
        }
    }

    /// Register a pattern for `language`, creating its table on first use
    pub fn add_custom_pattern(
        &mut self,
        language: &str,
        construct: &str,
        regex: Regex,
        confidence: f64,
        details: Option<&str>,
    ) {
        let name = language.to_lowercase();
        let index = match self.tables.iter().position(|t| t.name == name) {
            Some(index) => index,
            None => {
                self.tables.push(LanguageTable::new(name.as_str()));
                self.tables.len() - 1
            }
        };

        debug!(language = %name, construct, confidence, "Added custom construct pattern");
        self.tables[index].insert(ConstructPattern::new(construct, regex, confidence, details));
    }

    /// Table names in registration order
    pub fn known_languages(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }

    fn table(&self, language: &str) -> Option<&LanguageTable> {
        let name = language.to_lowercase();
        self.tables.iter().find(|t| t.name == name)
    }

    fn classify_generic(&self, code: &str) -> ClassificationResult {
        self.generic
            .first_match(code)
            .map(ConstructPattern::to_result)
            .unwrap_or_else(|| {
                ClassificationResult::new(
                    "code snippet",
                    0.3,
                    Some("Generic code - unable to classify specifically"),
                )
            })
    }
}

impl Default for ConstructClassifier {
    fn default() -> Self {
        Self::new()
    }
}
