//! Prompt construction pipeline
//!
//! redaction → classification → context header → preset template → notices

use std::sync::Arc;

use serde::Serialize;
use teach_classify::ConstructClassifier;
use teach_core::{
    ClassificationResult, CoreError, ExplainRequest, PromptParts, Result, render_prompt,
};
use teach_security::{RedactionResult, SecretRedactor};
use teach_tokens::TokenEstimator;
use tracing::debug;

pub const DEFAULT_MAX_INPUT_BYTES: usize = 256 * 1024;

/// A rendered prompt plus what the pipeline learned on the way
#[derive(Debug, Clone, Serialize)]
pub struct PromptOutput {
    pub prompt: String,
    pub redaction: RedactionResult,
    pub classification: ClassificationResult,
    /// Estimated cl100k_base tokens in `prompt`
    pub prompt_tokens: usize,
}

pub struct PromptBuilder {
    redactor: SecretRedactor,
    classifier: ConstructClassifier,
    token_estimator: Arc<TokenEstimator>,
    max_input_bytes: usize,
}

impl PromptBuilder {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_estimator(Arc::new(TokenEstimator::new()?)))
    }

    /// Build around an existing estimator, which is costly to load
    pub fn with_estimator(token_estimator: Arc<TokenEstimator>) -> Self {
        Self {
            redactor: SecretRedactor::new(),
            classifier: ConstructClassifier::new(),
            token_estimator,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    pub fn redactor_mut(&mut self) -> &mut SecretRedactor {
        &mut self.redactor
    }

    pub fn classifier(&self) -> &ConstructClassifier {
        &self.classifier
    }

    /// Reject empty or oversized code
    pub fn check_input(&self, code: &str) -> Result<()> {
        if code.is_empty() {
            return Err(CoreError::InvalidInput("code is required".to_string()));
        }
        if code.len() > self.max_input_bytes {
            return Err(CoreError::InputTooLarge {
                size: code.len(),
                max: self.max_input_bytes,
            });
        }
        Ok(())
    }

    /// Classify code that has already been redacted
    pub fn classify(&self, code: &str, language: Option<&str>) -> ClassificationResult {
        self.classifier.classify(code, language)
    }

    pub fn build_prompt(&self, request: &ExplainRequest) -> Result<PromptOutput> {
        // 1. Guard input
        self.check_input(&request.code)?;

        // 2. Redact
        let redaction = self.redactor.redaction_details(&request.code);
        debug!(secrets = redaction.secrets_found, "Redaction complete");

        // 3. Classify the redacted text
        let language = request.language.as_deref();
        let classification = self.classify(&redaction.redacted_code, language);
        debug!(construct = %classification.construct, confidence = classification.confidence, "Classified");

        // 4. Header
        let mut header = Vec::new();
        if let Some(language) = language {
            header.push(format!("Language: {}", language));
        }
        if let Some(filename) = request.filename.as_deref() {
            header.push(format!("File: {}", filename));
        }
        header.push(format!("Construct: {}", classification.label()));

        let qualifier = match &request.context {
            Some(context) => {
                header.extend(context.header_lines());
                context.project_qualifier()
            }
            None => String::new(),
        };

        // 5. Template
        let mut prompt = render_prompt(&PromptParts {
            preset: request.length,
            language,
            qualifier: &qualifier,
            header: &header,
            code: &redaction.redacted_code,
        });

        // 6. Notices
        if redaction.secrets_found > 0 {
            prompt.push_str(&security_note(&redaction));
        }

        let prompt_tokens = self.token_estimator.estimate(&prompt);
        debug!(preset = %request.length, prompt_tokens, "Prompt built");

        Ok(PromptOutput {
            prompt,
            redaction,
            classification,
            prompt_tokens,
        })
    }
}

fn security_note(redaction: &RedactionResult) -> String {
    let count = redaction.secrets_found;
    format!(
        "\n\n🔒 Security Note: {} potential secret{} were redacted before analysis ({}). \
         Do not attempt to reconstruct redacted values.",
        count,
        if count == 1 { "" } else { "s" },
        redaction.redaction_notices.join(", ")
    )
}
