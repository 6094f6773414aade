//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bidscope - decide whether to answer a call for tenders.
#[derive(Debug, Parser)]
#[command(name = "bidscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Labelled text (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a document's text and ask the model for a go/no-go analysis
    Analyze(AnalyzeArgs),

    /// Print the text extracted from a document
    Extract(ExtractArgs),

    /// Parse a saved model reply into the five analysis sections
    Parse(ParseArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Call for tenders document (.txt, .pdf or .docx)
    pub file: PathBuf,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat model (overrides the config file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Also print the extracted text
    #[arg(long)]
    pub show_text: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Document to read
    pub file: PathBuf,

    /// Decode as this extension instead of the file's own (e.g. pdf)
    #[arg(long = "as", value_name = "EXT")]
    pub as_extension: Option<String>,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// File holding the model's reply
    #[arg(conflicts_with = "stdin")]
    pub file: Option<PathBuf>,

    /// Read the reply from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Only use the line scan, never the pattern fallback
    #[arg(long)]
    pub no_fallback: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
