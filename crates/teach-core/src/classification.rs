//! Construct classification results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub construct: String,
    /// Hand-assigned trust in the match, in [0, 1]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ClassificationResult {
    pub fn new(construct: impl Into<String>, confidence: f64, details: Option<&str>) -> Self {
        Self {
            construct: construct.into(),
            confidence,
            language: None,
            details: details.map(String::from),
        }
    }

    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(String::from);
        self
    }

    /// `"<construct> (confidence: N.NN)"`
    pub fn label(&self) -> String {
        format!("{} (confidence: {:.2})", self.construct, self.confidence)
    }
}

/// Primary result plus alternatives from other language tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedClassification {
    pub primary: ClassificationResult,
    pub alternatives: Vec<ClassificationResult>,
    pub language_confidence: f64,
}
