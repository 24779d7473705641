//! JSON-RPC prompt server
//!
//! Speaks MCP-flavoured JSON-RPC 2.0 over stdio: `prompts/*` for manual use
//! and `tools/*` for editor integrations. Each server value is one session
//! with its own preferences.

pub mod error;
pub mod prompts;
pub mod protocol;
pub mod server;
pub mod stdio;
pub mod tools;

pub use error::McpError;
pub use server::McpServer;
pub use stdio::{run_stdio, serve};
