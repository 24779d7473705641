//! One client session: prompt pipeline, preferences and request dispatch

use serde_json::{Value, json};
use teach_config::{Config, PreferencesManager};
use teach_engine::PromptBuilder;
use tracing::{debug, warn};

use crate::error::{McpError, Result};
use crate::prompts::{get_prompt, list_prompts};
use crate::protocol::{INVALID_REQUEST, JsonRpcRequest, JsonRpcResponse, PARSE_ERROR};
use crate::tools::{call_tool, list_tools};

pub struct McpServer {
    pub(crate) builder: PromptBuilder,
    pub(crate) preferences: PreferencesManager,
    pub(crate) config: Config,
}

impl McpServer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let builder = PromptBuilder::new()?.with_max_input_bytes(config.max_input_bytes);
        Ok(Self::with_builder(builder, config))
    }

    pub fn with_builder(builder: PromptBuilder, config: Config) -> Self {
        Self {
            builder,
            preferences: PreferencesManager::new(),
            config,
        }
    }

    pub fn preferences(&self) -> &PreferencesManager {
        &self.preferences
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle one raw protocol line. Returns `None` for notifications.
    pub fn handle_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparseable request");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    &format!("Parse error: {}", e),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request = match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) if request.jsonrpc == "2.0" => request,
            Ok(request) => {
                return Some(JsonRpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    &format!("Invalid request: unsupported jsonrpc version {:?}", request.jsonrpc),
                ));
            }
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    &format!("Invalid request: {}", e),
                ));
            }
        };

        self.handle_request(request)
    }

    /// Dispatch a parsed request. Returns `None` for notifications.
    pub fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %request.method, "Handling request");
        let outcome = self.dispatch(&request.method, &request.params);

        if request.is_notification() {
            if let Err(e) = outcome {
                warn!(method = %request.method, error = %e, "Notification failed");
            }
            return None;
        }
        let id = request.id.unwrap_or(Value::Null);

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                warn!(method = %request.method, code = e.code(), error = %e, "Request rejected");
                JsonRpcResponse::error(id, e.code(), &e.to_string())
            }
        })
    }

    fn dispatch(&mut self, method: &str, params: &Value) -> Result<Value> {
        match method {
            "initialize" => Ok(json!({
                "protocolVersion": self.config.mcp.protocol_version,
                "capabilities": { "prompts": {}, "tools": {} },
                "serverInfo": {
                    "name": self.config.mcp.server_name,
                    "version": env!("CARGO_PKG_VERSION"),
                }
            })),
            "initialized" | "notifications/initialized" | "ping" => Ok(json!({})),
            "prompts/list" => Ok(list_prompts()),
            "prompts/get" => get_prompt(&self.builder, params),
            "tools/list" => Ok(list_tools()),
            "tools/call" => call_tool(self, params),
            other => Err(McpError::MethodNotFound(other.to_string())),
        }
    }
}
