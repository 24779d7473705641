use std::path::Path;

use anyhow::Result;
use teach_classify::ConstructClassifier;
use teach_core::{ClassificationResult, DetailedClassification};

use super::{language_for_path, read_input};

pub fn handle(file: Option<&Path>, language: Option<String>, detailed: bool) -> Result<()> {
    let code = read_input(file)?;
    let language = language.or_else(|| file.and_then(language_for_path).map(String::from));

    let classifier = ConstructClassifier::new();
    let report = if detailed {
        render_detailed(&classifier.detailed_classification(&code, language.as_deref()))
    } else {
        render(&classifier.classify(&code, language.as_deref()))
    };

    println!("{}", report);
    Ok(())
}

fn render(result: &ClassificationResult) -> String {
    let mut lines = vec![format!("Construct: {}", result.label())];
    if let Some(language) = &result.language {
        lines.push(format!("Language:  {}", language));
    }
    if let Some(details) = &result.details {
        lines.push(format!("Details:   {}", details));
    }
    lines.join("\n")
}

fn render_detailed(detailed: &DetailedClassification) -> String {
    let mut out = render(&detailed.primary);
    out.push_str(&format!(
        "\nLanguage confidence: {:.2}",
        detailed.language_confidence
    ));

    if !detailed.alternatives.is_empty() {
        out.push_str("\n\nAlternatives:");
        for alt in &detailed.alternatives {
            out.push_str(&format!(
                "\n  {:<12} {}",
                alt.language.as_deref().unwrap_or("-"),
                alt.label()
            ));
        }
    }
    out
}
