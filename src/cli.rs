use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "discprofile")]
#[command(about = "DISC personality assessment with live scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long = "plain", global = true)]
    pub plain: bool,

    /// Configuration file (skips discovery)
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,
}

/// Output options shared by every command that renders a result.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take the assessment in an interactive terminal form
    Take {
        /// Print the handoff query string instead of the result
        #[arg(long = "print-query")]
        print_query: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Score a completed assessment without the interactive form
    Score {
        /// One row of ranks in D,I,S,C order, e.g. 4,3,2,1 (repeat five times)
        #[arg(long = "row")]
        rows: Vec<String>,

        /// TOML file with `rows = [[4, 3, 2, 1], ...]`
        #[arg(long = "file", conflicts_with = "rows")]
        file: Option<PathBuf>,

        /// Print the handoff query string instead of the result
        #[arg(long = "query")]
        query: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a result from a handoff query string
    Result {
        /// Query string such as `type=D&D=20&I=15&S=10&C=5`
        query: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
