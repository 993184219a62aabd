mod cli;
mod errors;
mod logging;
mod parser;
mod runner;

use clap::Parser;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::logging::{LogConfig, LogFormat, init_logging};
use crate::runner::{run_check, run_rules};

const EXIT_FAILED: i32 = 1;
const EXIT_CONFIG: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match cli.command {
        Command::Check(args) => match run_check(&args) {
            Ok(true) => 0,
            Ok(false) => EXIT_FAILED,
            Err(err) => {
                eprintln!("Error: {:#}", err);
                EXIT_CONFIG
            }
        },
        Command::Rules => {
            run_rules();
            0
        }
    };
    std::process::exit(exit_code);
}

/// `RUST_LOG` wins unless a verbosity flag was given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        use_env_filter: !cli.verbosity.is_present(),
        ..LogConfig::default()
    }
}
