use teach_config::Config;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::protocol::{JsonRpcResponse, PARSE_ERROR};
use crate::server::McpServer;

/// Serve newline-delimited JSON-RPC until `reader` reaches EOF
pub async fn serve<R, W>(server: &mut McpServer, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.split(b'\n');

    while let Some(bytes) = lines.next_segment().await? {
        let response = match String::from_utf8(bytes) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => server.handle_line(&line),
            Err(e) => {
                warn!(error = %e, "Request line is not valid UTF-8");
                Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    PARSE_ERROR,
                    &format!("Parse error: {}", e),
                ))
            }
        };

        if let Some(response) = response {
            let output = serde_json::to_string(&response)?;
            writer.write_all(output.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    Ok(())
}

pub async fn run_stdio(config: Config) -> anyhow::Result<()> {
    let mut server = McpServer::new(config)?;
    info!(
        name = %server.config().mcp.server_name,
        version = env!("CARGO_PKG_VERSION"),
        "Prompt server running on stdio"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    serve(&mut server, stdin, tokio::io::stdout()).await?;

    info!("stdin closed, shutting down");
    Ok(())
}
