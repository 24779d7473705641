use anyhow::Result;
use teach_config::Config;

pub async fn handle(config: Config) -> Result<()> {
    teach_mcp::run_stdio(config).await
}
