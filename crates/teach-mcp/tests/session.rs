use serde_json::{Value, json};
use teach_config::Config;
use teach_mcp::McpServer;

fn server() -> McpServer {
    McpServer::new(Config::default()).unwrap()
}

fn call(server: &mut McpServer, request: Value) -> Value {
    let response = server
        .handle_line(&request.to_string())
        .expect("request with an id gets a response");
    serde_json::to_value(response).unwrap()
}

fn tool(server: &mut McpServer, name: &str, arguments: Value) -> Value {
    call(
        server,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": name, "arguments": arguments}
        }),
    )
}

fn text(response: &Value) -> &str {
    response["result"]["content"][0]["text"].as_str().unwrap()
}

#[test]
fn test_initialize() {
    let mut server = server();
    let response = call(
        &mut server,
        json!({"jsonrpc": "2.0", "id": 0, "method": "initialize", "params": {}}),
    );

    assert_eq!(response["id"], 0);
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(response["result"]["serverInfo"]["name"], "teach");
    assert!(response["result"]["capabilities"]["prompts"].is_object());
    assert!(response["result"]["capabilities"]["tools"].is_object());
}

#[test]
fn test_notifications_get_no_response() {
    let mut server = server();
    let line = json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string();
    assert!(server.handle_line(&line).is_none());

    let line = json!({"jsonrpc": "2.0", "method": "no/such"}).to_string();
    assert!(server.handle_line(&line).is_none());
}

#[test]
fn test_null_id_is_a_request() {
    let mut server = server();
    let response = call(&mut server, json!({"jsonrpc": "2.0", "id": null, "method": "ping"}));

    assert!(response["id"].is_null());
    assert_eq!(response["result"], json!({}));
}

#[test]
fn test_protocol_errors() {
    let mut server = server();

    let response = serde_json::to_value(server.handle_line("{oops").unwrap()).unwrap();
    assert_eq!(response["error"]["code"], -32700);
    assert_eq!(response["id"], Value::Null);

    let response = call(&mut server, json!({"jsonrpc": "2.0", "id": 4}));
    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(response["id"], 4);

    let response = call(&mut server, json!({"jsonrpc": "1.0", "id": 5, "method": "ping"}));
    assert_eq!(response["error"]["code"], -32600);

    let response = call(&mut server, json!({"jsonrpc": "2.0", "id": 6, "method": "resources/list"}));
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Method not found: resources/list");
}

#[test]
fn test_tools_list() {
    let mut server = server();
    let response = call(&mut server, json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}));

    let names: Vec<&str> = response["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "explain_selection",
            "classify_construct",
            "set_preferences",
            "get_preferences",
            "reset_preferences",
        ]
    );
}

#[test]
fn test_explain_selection_redacts_and_summarises() {
    let mut server = server();
    let response = tool(
        &mut server,
        "explain_selection",
        json!({
            "code": "const apiKey = 'sk-1234567890abcdef'; const password = 'secret123';",
            "length": "micro",
            "language": "javascript",
            "filename": "config.js"
        }),
    );

    let text = text(&response);
    assert!(text.contains("Explain this javascript in exactly 1-3 bullet points"));
    assert!(text.contains("File: config.js"));
    assert!(!text.contains("secret123"));
    assert!(!text.contains("sk-1234567890abcdef"));
    assert!(text.contains("🔒 Security Note: 2 potential secrets were redacted"));
    assert!(text.contains("📊 Processing Summary:"));
    assert!(text.contains("• Secrets redacted: 2"));
    assert!(text.contains("• Response token limit: 150"));
}

#[test]
fn test_explain_selection_invalid_params() {
    let mut server = server();

    let response = tool(&mut server, "explain_selection", json!({"code": "x = 1", "length": "huge"}));
    assert_eq!(response["error"]["code"], -32602);

    let response = tool(&mut server, "explain_selection", json!({"length": "micro"}));
    assert_eq!(response["error"]["code"], -32602);

    let response = tool(&mut server, "explain_selection", json!({"code": "x = 1"}));
    assert_eq!(response["error"]["code"], -32602);
}

#[test]
fn test_oversized_input_is_rejected() {
    let mut config = Config::default();
    config.max_input_bytes = 16;
    let mut server = McpServer::new(config).unwrap();

    let response = tool(
        &mut server,
        "explain_selection",
        json!({"code": "let value = compute_everything();", "length": "short"}),
    );
    assert_eq!(response["error"]["code"], -32602);
    assert!(
        response["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("Input too large")
    );
}

#[test]
fn test_classify_construct() {
    let mut server = server();

    let response = tool(
        &mut server,
        "classify_construct",
        json!({"code": "class UserService { constructor() {} }", "language": "javascript"}),
    );
    assert_eq!(
        text(&response),
        "Construct: class (confidence: 0.90)\nDetails: ES6 class"
    );

    let response = tool(
        &mut server,
        "classify_construct",
        json!({"code": "async def fetch(url):\n    return url", "detailed": true}),
    );
    let text = text(&response);
    assert!(text.starts_with("Construct: async function (confidence: 0.90)\nLanguage: python"));
    assert!(text.contains("Language confidence: 0.80"));
    assert!(text.contains("• async function (confidence: 0.90) [javascript]"));

    let response = tool(&mut server, "classify_construct", json!({}));
    assert_eq!(response["error"]["code"], -32602);
}

#[test]
fn test_preferences_lifecycle() {
    let mut server = server();

    let response = tool(
        &mut server,
        "set_preferences",
        json!({"preferences": {"output": {"max_tokens_micro": 120}}}),
    );
    assert!(text(&response).starts_with("Preferences updated successfully"));
    assert_eq!(server.preferences().output().max_tokens_micro, 120);

    let response = tool(&mut server, "get_preferences", json!({}));
    assert!(text(&response).contains("\"max_tokens_micro\": 120"));
    assert!(text(&response).contains("Preferences Summary:"));

    let response = tool(
        &mut server,
        "set_preferences",
        json!({"preferences": {"output": {"max_tokens_micro": 301}}}),
    );
    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(
        response["error"]["message"],
        "Invalid preferences: Token limit for micro must be between 50 and 300"
    );
    assert_eq!(server.preferences().output().max_tokens_micro, 120);

    tool(&mut server, "reset_preferences", json!({}));
    assert_eq!(server.preferences().output().max_tokens_micro, 150);

    let response = tool(&mut server, "set_preferences", json!({}));
    assert_eq!(response["error"]["message"], "Preferences object is required");
}

#[test]
fn test_unknown_tool() {
    let mut server = server();
    let response = tool(&mut server, "explain_everything", json!({}));
    assert_eq!(response["error"]["code"], -32601);
    assert_eq!(response["error"]["message"], "Unknown tool: explain_everything");
}

#[test]
fn test_prompts_get() {
    let mut server = server();
    let response = call(
        &mut server,
        json!({
            "jsonrpc": "2.0",
            "id": "p1",
            "method": "prompts/get",
            "params": {
                "name": "explain_short",
                "arguments": {
                    "code": "def greet(name):\n    return f'hi {name}'",
                    "language": "python",
                    "context": "{\"project\": {\"type\": \"python\", \"frameworkHints\": [\"fastapi\"]}}"
                }
            }
        }),
    );

    assert_eq!(response["id"], "p1");
    let text = response["result"]["messages"][0]["content"]["text"].as_str().unwrap();
    assert!(text.starts_with(
        "Explain this python in a python project using fastapi in exactly 4-6 bullet points"
    ));
    assert!(text.contains("Frameworks: fastapi\n"));
}

#[test]
fn test_sessions_are_independent() {
    let mut first = server();
    let second = server();

    tool(
        &mut first,
        "set_preferences",
        json!({"preferences": {"ui": {"separator": "emoji"}}}),
    );

    assert_ne!(first.preferences().preferences(), second.preferences().preferences());
}
