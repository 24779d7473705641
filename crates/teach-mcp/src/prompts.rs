//! `prompts/*` handlers

use serde_json::{Value, json};
use teach_core::{ExplainArgs, ExplainRequest, LengthPreset};
use teach_engine::PromptBuilder;

use crate::error::{McpError, Result};

const PROMPT_PREFIX: &str = "explain_";

pub fn list_prompts() -> Value {
    let prompts: Vec<Value> = LengthPreset::ALL
        .iter()
        .map(|preset| {
            json!({
                "name": format!("{}{}", PROMPT_PREFIX, preset),
                "description": preset.description(),
                "arguments": [
                    {
                        "name": "code",
                        "description": "Code to explain (paste here)",
                        "required": true
                    },
                    {
                        "name": "language",
                        "description": "Programming language (optional)",
                        "required": false
                    },
                    {
                        "name": "filename",
                        "description": "Source filename for context (optional)",
                        "required": false
                    }
                ]
            })
        })
        .collect();

    json!({ "prompts": prompts })
}

pub fn get_prompt(builder: &PromptBuilder, params: &Value) -> Result<Value> {
    let name = params["name"]
        .as_str()
        .ok_or_else(|| McpError::InvalidParams("Missing prompt name".to_string()))?;
    let preset = name
        .strip_prefix(PROMPT_PREFIX)
        .and_then(|p| p.parse::<LengthPreset>().ok())
        .ok_or_else(|| McpError::UnknownPrompt(name.to_string()))?;

    let mut args: ExplainArgs = match params.get("arguments") {
        Some(arguments) if !arguments.is_null() => serde_json::from_value(arguments.clone())?,
        _ => ExplainArgs::default(),
    };
    if args.code.as_deref().is_none_or(str::is_empty) {
        return Err(McpError::InvalidParams("Code argument is required".to_string()));
    }
    args.length = Some(preset.as_str().to_string());

    let request = ExplainRequest::try_from(args)?;
    let output = builder.build_prompt(&request)?;

    Ok(json!({
        "description": preset.description(),
        "messages": [
            {
                "role": "user",
                "content": { "type": "text", "text": output.prompt }
            }
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_prompts() {
        let listed = list_prompts();
        let names: Vec<&str> = listed["prompts"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p["name"].as_str())
            .collect();

        assert_eq!(
            names,
            vec!["explain_micro", "explain_short", "explain_paragraph", "explain_deep"]
        );
        assert_eq!(listed["prompts"][0]["arguments"][0]["required"], true);
    }

    #[test]
    fn test_get_prompt() {
        let builder = PromptBuilder::new().unwrap();
        let result = get_prompt(
            &builder,
            &json!({"name": "explain_deep", "arguments": {"code": "fn main() {}", "language": "rust"}}),
        )
        .unwrap();

        let text = result["messages"][0]["content"]["text"].as_str().unwrap();
        assert_eq!(result["messages"][0]["role"], "user");
        assert!(text.starts_with("Provide a comprehensive explanation of this rust"));
        assert!(text.contains("Construct: function (confidence: 0.90)"));
    }

    #[test]
    fn test_get_prompt_errors() {
        let builder = PromptBuilder::new().unwrap();

        let err = get_prompt(&builder, &json!({"name": "explain_huge", "arguments": {"code": "x"}}))
            .unwrap_err();
        assert!(matches!(err, McpError::UnknownPrompt(_)));

        let err = get_prompt(&builder, &json!({"name": "explain_micro", "arguments": {}})).unwrap_err();
        assert_eq!(err.to_string(), "Code argument is required");

        let err = get_prompt(&builder, &json!({"name": "explain_micro"})).unwrap_err();
        assert!(matches!(err, McpError::InvalidParams(_)));
    }
}
