use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use teach_config::OutputFormat;
use teach_core::LengthPreset;

use crate::commands::LineRange;

#[derive(Parser)]
#[command(name = "teach")]
#[command(about = "Build deterministic \"explain this code\" prompts for LLMs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable ANSI colors in log output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build an explanation prompt for a file or stdin
    Explain(ExplainArgs),

    /// Classify the construct in a file or stdin
    Classify {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Language hint
        #[arg(long)]
        language: Option<String>,

        /// Include alternatives from other languages
        #[arg(long)]
        detailed: bool,
    },

    /// Run the JSON-RPC prompt server on stdio
    Mcp,

    /// Inspect and validate preferences
    #[command(subcommand)]
    Preferences(PreferencesCommands),
}

#[derive(Args)]
pub struct ExplainArgs {
    /// Source file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Length preset: micro, short, paragraph or deep (default from config)
    #[arg(short, long)]
    pub length: Option<LengthPreset>,

    /// Language hint (derived from the file extension when omitted)
    #[arg(long)]
    pub language: Option<String>,

    /// Filename shown in the prompt (defaults to the file path)
    #[arg(long)]
    pub filename: Option<String>,

    /// Only use lines START-END (1-indexed, inclusive)
    #[arg(long, value_name = "START-END")]
    pub lines: Option<LineRange>,

    /// Output format (default from config)
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Workspace context JSON file
    #[arg(long, value_name = "FILE")]
    pub context: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum PreferencesCommands {
    /// Validate a preferences JSON file
    Validate {
        /// Preferences file
        file: PathBuf,
    },

    /// Print the default preferences
    Defaults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Markdown,
    Plain,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => Format::Markdown,
            OutputFormat::Plain => Format::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_flags() {
        let cli = Cli::try_parse_from(["teach", "mcp"]).unwrap();
        assert!(!cli.no_color);
        assert_eq!(cli.default_log_filter(), "info");

        let cli = Cli::try_parse_from(["teach", "classify", "--debug", "--no-color"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.default_log_filter(), "debug");
    }
}
