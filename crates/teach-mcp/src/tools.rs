//! `tools/*` handlers

use serde_json::{Value, json};
use teach_core::{ClassificationResult, ExplainArgs, ExplainRequest};
use tracing::info;

use crate::error::{McpError, Result};
use crate::server::McpServer;

pub fn call_tool(server: &mut McpServer, params: &Value) -> Result<Value> {
    let tool_name = params["name"]
        .as_str()
        .ok_or_else(|| McpError::InvalidParams("Missing tool name".to_string()))?;
    let args = match params.get("arguments") {
        Some(args) if !args.is_null() => args.clone(),
        _ => json!({}),
    };

    let text = match tool_name {
        "explain_selection" => explain_selection(server, args)?,
        "classify_construct" => classify_construct(server, &args)?,
        "set_preferences" => set_preferences(server, &args)?,
        "get_preferences" => format!(
            "{}\n\n{}",
            server.preferences.export_preferences()?,
            server.preferences.preferences_summary()
        ),
        "reset_preferences" => {
            server.preferences.reset_to_defaults();
            info!("Preferences reset to defaults");
            "Preferences reset to defaults".to_string()
        }
        _ => return Err(McpError::UnknownTool(tool_name.to_string())),
    };

    Ok(text_content(text))
}

fn explain_selection(server: &McpServer, args: Value) -> Result<String> {
    let args: ExplainArgs = serde_json::from_value(args)?;
    let request = ExplainRequest::try_from(args)?;
    let output = server.builder.build_prompt(&request)?;
    let limit = server.preferences.token_limit(request.length);

    Ok(format!(
        "Generated explanation prompt:\n\n\
         {}\n\n\
         📊 Processing Summary:\n\
         • Construct: {}\n\
         • Secrets redacted: {}\n\
         • Estimated prompt tokens: {}\n\
         • Response token limit: {}\n\n\
         Note: This prompt should be sent to your LLM for processing. \
         The client handles the LLM communication and displays the response.",
        output.prompt,
        output.classification.label(),
        output.redaction.secrets_found,
        output.prompt_tokens,
        limit
    ))
}

fn classify_construct(server: &McpServer, args: &Value) -> Result<String> {
    let code = args["code"].as_str().unwrap_or_default();
    if code.is_empty() {
        return Err(McpError::InvalidParams("Code is required".to_string()));
    }
    server.builder.check_input(code)?;

    let language = args["language"].as_str().filter(|l| !l.trim().is_empty());
    let detailed = args["detailed"].as_bool().unwrap_or(false);
    let classifier = server.builder.classifier();

    if !detailed {
        return Ok(describe(&classifier.classify(code, language)));
    }

    let detailed = classifier.detailed_classification(code, language);
    let mut text = describe(&detailed.primary);
    text.push_str(&format!(
        "\nLanguage confidence: {:.2}",
        detailed.language_confidence
    ));
    if detailed.alternatives.is_empty() {
        text.push_str("\nAlternatives: none");
    } else {
        text.push_str("\nAlternatives:");
        for alternative in &detailed.alternatives {
            text.push_str(&format!(
                "\n• {} [{}]",
                alternative.label(),
                alternative.language.as_deref().unwrap_or("generic")
            ));
        }
    }
    Ok(text)
}

fn describe(result: &ClassificationResult) -> String {
    let mut text = format!("Construct: {}", result.label());
    if let Some(language) = result.language.as_deref() {
        text.push_str(&format!("\nLanguage: {}", language));
    }
    if let Some(details) = result.details.as_deref() {
        text.push_str(&format!("\nDetails: {}", details));
    }
    text
}

fn set_preferences(server: &mut McpServer, args: &Value) -> Result<String> {
    let updates = args
        .get("preferences")
        .filter(|p| p.is_object())
        .ok_or_else(|| McpError::InvalidParams("Preferences object is required".to_string()))?;

    let report = server.preferences.validate_preferences(updates);
    if !report.valid {
        return Err(McpError::InvalidParams(format!(
            "Invalid preferences: {}",
            report.errors.join(", ")
        )));
    }

    server.preferences.update_preferences(updates)?;
    info!("Preferences updated");

    Ok(format!(
        "Preferences updated successfully\n\n{}",
        server.preferences.preferences_summary()
    ))
}

fn text_content(text: String) -> Value {
    json!({
        "content": [
            { "type": "text", "text": text }
        ]
    })
}

pub fn list_tools() -> Value {
    let tools = vec![
        tool_schema(
            "explain_selection",
            "Build an explanation prompt for selected code with a length preset",
            json!({
                "type": "object",
                "properties": {
                    "code": {
                        "type": "string",
                        "description": "Selected code text"
                    },
                    "length": {
                        "type": "string",
                        "enum": ["micro", "short", "paragraph", "deep"],
                        "description": "Length preset for explanation"
                    },
                    "language": {
                        "type": "string",
                        "description": "Programming language (optional)"
                    },
                    "filename": {
                        "type": "string",
                        "description": "Source filename for context (optional)"
                    },
                    "context": {
                        "type": "object",
                        "description": "Workspace context: repo, project and deps (optional)"
                    }
                },
                "required": ["code", "length"]
            }),
        ),
        tool_schema(
            "classify_construct",
            "Classify code construct using regex patterns",
            json!({
                "type": "object",
                "properties": {
                    "code": {
                        "type": "string",
                        "description": "Code to classify"
                    },
                    "language": {
                        "type": "string",
                        "description": "Programming language hint (optional)"
                    },
                    "detailed": {
                        "type": "boolean",
                        "description": "Include alternatives from other languages"
                    }
                },
                "required": ["code"]
            }),
        ),
        tool_schema(
            "set_preferences",
            "Configure output preferences and settings",
            json!({
                "type": "object",
                "properties": {
                    "preferences": {
                        "type": "object",
                        "description": "Preference updates as JSON object"
                    }
                },
                "required": ["preferences"]
            }),
        ),
        tool_schema(
            "get_preferences",
            "Show current preferences",
            json!({ "type": "object", "properties": {} }),
        ),
        tool_schema(
            "reset_preferences",
            "Reset preferences to defaults",
            json!({ "type": "object", "properties": {} }),
        ),
    ];

    json!({ "tools": tools })
}

fn tool_schema(name: &str, description: &str, input_schema: Value) -> Value {
    json!({
        "name": name,
        "description": description,
        "inputSchema": input_schema
    })
}
