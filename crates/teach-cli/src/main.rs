mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use teach_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries prompts and protocol traffic
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.default_log_filter())),
        )
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        cli::Commands::Explain(args) => commands::explain::handle(args, &config),
        cli::Commands::Classify {
            file,
            language,
            detailed,
        } => commands::classify::handle(file.as_deref(), language, detailed),
        cli::Commands::Mcp => commands::mcp::handle(config).await,
        cli::Commands::Preferences(cmd) => commands::preferences::handle(cmd),
    }
}
