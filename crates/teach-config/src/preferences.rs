use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use teach_core::LengthPreset;

/// User-facing output preferences for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub ui: UiPreferences,
    #[serde(default)]
    pub output: OutputPreferences,
    #[serde(default)]
    pub redaction: RedactionPreferences,
    #[serde(default)]
    pub classification: ClassificationPreferences,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Ascii,
    Emoji,
    None,
}

impl Separator {
    pub const NAMES: [&'static str; 3] = ["ascii", "emoji", "none"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Ascii => "ascii",
            Separator::Emoji => "emoji",
            Separator::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPreferences {
    pub separator: Separator,
    pub header_emoji: String,
    pub show_language_line: bool,
    pub show_construct_info: bool,
    pub show_confidence_scores: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            separator: Separator::Ascii,
            header_emoji: "💡".to_string(),
            show_language_line: true,
            show_construct_info: true,
            show_confidence_scores: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPreferences {
    pub default_length: LengthPreset,
    pub max_tokens_micro: u32,
    pub max_tokens_short: u32,
    pub max_tokens_paragraph: u32,
    pub max_tokens_deep: u32,
    pub include_examples: bool,
    pub include_checklists: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            default_length: LengthPreset::Short,
            max_tokens_micro: LengthPreset::Micro.token_ceiling(),
            max_tokens_short: LengthPreset::Short.token_ceiling(),
            max_tokens_paragraph: LengthPreset::Paragraph.token_ceiling(),
            max_tokens_deep: LengthPreset::Deep.token_ceiling(),
            include_examples: true,
            include_checklists: true,
        }
    }
}

impl OutputPreferences {
    pub fn token_limit(&self, preset: LengthPreset) -> u32 {
        match preset {
            LengthPreset::Micro => self.max_tokens_micro,
            LengthPreset::Short => self.max_tokens_short,
            LengthPreset::Paragraph => self.max_tokens_paragraph,
            LengthPreset::Deep => self.max_tokens_deep,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRedactionPattern {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedactionPreferences {
    pub enable: bool,
    pub custom_patterns: Vec<CustomRedactionPattern>,
    pub show_redaction_notices: bool,
    pub strict_mode: bool,
}

impl Default for RedactionPreferences {
    fn default() -> Self {
        Self {
            enable: true,
            custom_patterns: Vec::new(),
            show_redaction_notices: true,
            strict_mode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationPreferences {
    pub enable: bool,
    pub show_confidence: bool,
    pub min_confidence_threshold: f64,
    /// File extension or name → language
    pub custom_language_hints: BTreeMap<String, String>,
}

impl Default for ClassificationPreferences {
    fn default() -> Self {
        Self {
            enable: true,
            show_confidence: true,
            min_confidence_threshold: 0.3,
            custom_language_hints: BTreeMap::new(),
        }
    }
}
