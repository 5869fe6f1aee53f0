use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "naki",
    author,
    version,
    about = "Decode and inspect mirai webhook payloads",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NAKI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode webhook payloads from a file or stdin
    Decode {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Treat each non-empty line as a separate payload
        #[arg(short, long)]
        lines: bool,

        /// Decode a bare message chain array instead of an event
        #[arg(long)]
        chain: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,

        /// Report failures and continue with the next payload
        #[arg(short, long)]
        keep_going: bool,

        /// Override the configured quote nesting limit
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List registered discriminators
    Variants {
        /// List message elements instead of events
        #[arg(short, long)]
        elements: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },

    /// Show or reset configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Reset configuration to defaults
        #[arg(long, conflicts_with = "show")]
        reset: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Output format requested by the command, if it has one.
    pub fn output_format(&self) -> Option<OutputFormat> {
        match self {
            Commands::Decode { output, .. } | Commands::Variants { output, .. } => Some(*output),
            _ => None,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable summary
    #[default]
    Pretty,
    /// Re-encoded JSON, pretty printed
    Json,
    /// Re-encoded JSON, one document per line
    JsonCompact,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::JsonCompact)
    }
}
