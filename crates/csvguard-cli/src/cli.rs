use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser, Debug)]
#[command(
    name = "csvguard",
    version,
    about = "csvguard - per-column rule checks for CSV files",
    long_about = "csvguard checks CSV files against per-column rules declared in a TOML \
                  configuration. Checking stops at the first failing rule.\n\n\
                  Example usage:\n  \
                  csvguard check --config rules.toml ./data/dev.csv"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q to silence)
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check CSV files against the configured rules
    Check(CheckArgs),

    /// List the available rules
    Rules,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the TOML configuration file that defines the rules
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Check only this file; it must be declared in the configuration
    #[arg(value_name = "CSV")]
    pub target: Option<String>,

    /// Rows per batch read from the CSV (overrides the [reader] section)
    #[arg(long = "batch-size", value_name = "ROWS")]
    pub batch_size: Option<NonZeroUsize>,

    /// Rows whose first cell starts with this prefix are skipped (overrides the [reader] section)
    #[arg(long = "comment-prefix", value_name = "PREFIX")]
    pub comment_prefix: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
