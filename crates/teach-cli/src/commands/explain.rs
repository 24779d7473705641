use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use teach_config::Config;
use teach_core::{ExplainRequest, WorkspaceContext};
use teach_engine::PromptBuilder;
use tracing::debug;

use super::{language_for_path, read_input};
use crate::cli::{ExplainArgs, Format};

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static FENCE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```\w*\n?").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

pub fn handle(args: ExplainArgs, config: &Config) -> Result<()> {
    let format = args.format.unwrap_or_else(|| config.cli.format.into());
    let request = build_request(&args, config)?;

    let builder = PromptBuilder::new()?.with_max_input_bytes(config.max_input_bytes);
    let output = builder.build_prompt(&request)?;
    debug!(
        construct = %output.classification.construct,
        secrets = output.redaction.secrets_found,
        prompt_tokens = output.prompt_tokens,
        "Prompt ready"
    );

    println!("{}", format_output(&output.prompt, format));
    Ok(())
}

fn build_request(args: &ExplainArgs, config: &Config) -> Result<ExplainRequest> {
    let mut code = read_input(args.file.as_deref())?;
    if let Some(range) = args.lines {
        code = range.apply(&code);
    }

    let length = args.length.unwrap_or(config.cli.default_length);
    let mut request = ExplainRequest::new(code, length);

    let language = args.language.clone().or_else(|| {
        args.file
            .as_deref()
            .and_then(language_for_path)
            .map(String::from)
    });
    if let Some(language) = language {
        request = request.with_language(language);
    }

    let filename = args
        .filename
        .clone()
        .or_else(|| args.file.as_ref().map(|p| p.display().to_string()));
    if let Some(filename) = filename {
        request = request.with_filename(filename);
    }

    if let Some(path) = &args.context {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read context '{}'", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("Context '{}' is not valid JSON", path.display()))?;
        let context = WorkspaceContext::from_value(&value)
            .with_context(|| format!("Context '{}' must be a JSON object", path.display()))?;
        request = request.with_context(context);
    }

    Ok(request)
}

fn format_output(prompt: &str, format: Format) -> String {
    match format {
        Format::Markdown => prompt.to_string(),
        Format::Plain => to_plain(prompt),
    }
}

/// Strip code fences and emphasis markers
fn to_plain(text: &str) -> String {
    let text = FENCED_BLOCK.replace_all(text, |caps: &Captures<'_>| {
        FENCE_MARKER.replace_all(&caps[0], "").into_owned()
    });
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    INLINE_CODE.replace_all(&text, "$1").into_owned()
}
