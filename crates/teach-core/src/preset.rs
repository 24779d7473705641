//! Length presets
//!
//! A closed set of explanation-length contracts. Each preset pins a word
//! range, a hard token ceiling and a response shape so that a caller can
//! reserve a fixed-size display region regardless of snippet size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPreset {
    Micro,
    Short,
    Paragraph,
    Deep,
}

/// Shape the downstream LLM is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseShape {
    /// Inclusive bullet range, `None` for prose presets
    pub bullets: Option<(u8, u8)>,
    pub example_block: bool,
    /// Number of checklist items (0 = no checklist)
    pub checklist_items: u8,
}

impl LengthPreset {
    pub const ALL: [LengthPreset; 4] = [
        LengthPreset::Micro,
        LengthPreset::Short,
        LengthPreset::Paragraph,
        LengthPreset::Deep,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthPreset::Micro => "micro",
            LengthPreset::Short => "short",
            LengthPreset::Paragraph => "paragraph",
            LengthPreset::Deep => "deep",
        }
    }

    /// Target word range (inclusive)
    pub fn word_range(&self) -> (u32, u32) {
        match self {
            LengthPreset::Micro => (5, 25),
            LengthPreset::Short => (30, 60),
            LengthPreset::Paragraph => (120, 180),
            LengthPreset::Deep => (250, 350),
        }
    }

    /// Hard token ceiling written into the prompt
    pub fn token_ceiling(&self) -> u32 {
        match self {
            LengthPreset::Micro => 150,
            LengthPreset::Short => 250,
            LengthPreset::Paragraph => 450,
            LengthPreset::Deep => 700,
        }
    }

    pub fn shape(&self) -> ResponseShape {
        match self {
            LengthPreset::Micro => ResponseShape {
                bullets: Some((1, 3)),
                example_block: false,
                checklist_items: 0,
            },
            LengthPreset::Short => ResponseShape {
                bullets: Some((4, 6)),
                example_block: false,
                checklist_items: 0,
            },
            LengthPreset::Paragraph => ResponseShape {
                bullets: None,
                example_block: true,
                checklist_items: 0,
            },
            LengthPreset::Deep => ResponseShape {
                bullets: None,
                example_block: false,
                checklist_items: 5,
            },
        }
    }

    /// One-line description used when listing prompts
    pub fn description(&self) -> &'static str {
        match self {
            LengthPreset::Micro => "Micro explanation (1-3 lines) - paste code as argument",
            LengthPreset::Short => "Short explanation (4-6 bullets) - paste code as argument",
            LengthPreset::Paragraph => {
                "Paragraph explanation (120-180 words + example) - paste code as argument"
            }
            LengthPreset::Deep => {
                "Deep explanation (250-350 words + checklist) - paste code as argument"
            }
        }
    }
}

impl fmt::Display for LengthPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "micro" => Ok(LengthPreset::Micro),
            "short" => Ok(LengthPreset::Short),
            "paragraph" => Ok(LengthPreset::Paragraph),
            "deep" => Ok(LengthPreset::Deep),
            other => Err(CoreError::UnsupportedPreset(other.to_string())),
        }
    }
}
