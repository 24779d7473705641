//! Prompt templates - deterministic prompt text per length preset
//!
//! Same parts in, same prompt out. Nothing here depends on time, locale or
//! map iteration order.

use crate::LengthPreset;

/// Everything interpolated into a preset template
#[derive(Debug, Clone, Copy)]
pub struct PromptParts<'a> {
    pub preset: LengthPreset,
    /// Language tag for the heading and code fences; `None` renders as "code"
    pub language: Option<&'a str>,
    /// Project/framework phrase following the language name (may be empty)
    pub qualifier: &'a str,
    /// Context header lines (Language:, File:, Construct:, Project: ...)
    pub header: &'a [String],
    /// Already-redacted code
    pub code: &'a str,
}

/// Render the fixed template for `parts.preset`
pub fn render_prompt(parts: &PromptParts<'_>) -> String {
    let subject = format!("{}{}", parts.language.unwrap_or("code"), parts.qualifier);
    let fence = parts.language.unwrap_or("");
    let ceiling = parts.preset.token_ceiling();
    let (min_words, max_words) = parts.preset.word_range();

    let mut context = String::new();
    for line in parts.header {
        context.push_str(line);
        context.push('\n');
    }
    if !context.is_empty() {
        context.push('\n');
    }

    let code_block = format!("{context}Code:\n```{fence}\n{}\n```", parts.code);

    match parts.preset {
        LengthPreset::Micro => format!(
            "Explain this {subject} in exactly 1-3 bullet points (max {ceiling} tokens):\n\n\
             {code_block}\n\n\
             Response format:\n\
             • [Brief explanation point]\n\
             • [Key purpose or usage]\n\
             • [Important caveat or tip if applicable]"
        ),
        LengthPreset::Short => format!(
            "Explain this {subject} in exactly 4-6 bullet points (max {ceiling} tokens):\n\n\
             {code_block}\n\n\
             Response format:\n\
             • [What this code does]\n\
             • [How it works or key mechanism]\n\
             • [Parameters/inputs and outputs]\n\
             • [When/why to use this pattern]\n\
             • [Common pitfalls or gotchas]\n\
             • [Best practices or tips]"
        ),
        LengthPreset::Paragraph => format!(
            "Explain this {subject} in {min_words}-{max_words} words with a usage example (max {ceiling} tokens):\n\n\
             {code_block}\n\n\
             Response format:\n\
             [Paragraph explanation covering purpose, mechanism, and usage context]\n\n\
             Usage example:\n\
             ```{fence}\n\
             [Simple, clear example showing how to use this code]\n\
             ```"
        ),
        LengthPreset::Deep => format!(
            "Provide a comprehensive explanation of this {subject} in {min_words}-{max_words} words with checklist (max {ceiling} tokens):\n\n\
             {code_block}\n\n\
             Response format:\n\
             [Detailed explanation covering purpose, implementation details, patterns, trade-offs, and broader context]\n\n\
             **Understanding Checklist:**\n\
             - [ ] [Key concept 1]\n\
             - [ ] [Key concept 2]\n\
             - [ ] [Implementation detail]\n\
             - [ ] [Usage consideration]\n\
             - [ ] [Best practice or warning]"
        ),
    }
}
