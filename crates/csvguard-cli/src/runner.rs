use anyhow::Result;
use csvguard_core::{ReaderConfigBuilder, Validator};
use csvguard_reports::{Reporter, StdOutFormatter, rules_table};
use tracing::info;

use crate::{cli::CheckArgs, parser::parse_config};

/// Run the configured checks, `Ok(false)` when a file failed.
///
/// Errors are configuration problems, check failures are part of the outcome.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let version = env!("CARGO_PKG_VERSION");
    let formatter = StdOutFormatter::new(version.to_string());
    formatter.on_start();

    let config = parse_config(&args.config)?;
    let rule_set = config.rule_set();
    let reader_config = config.reader_config();

    let mut builder = ReaderConfigBuilder::new()
        .with_batch_size(reader_config.batch_size)
        .with_comment_prefix(reader_config.comment_prefix());
    if let Some(batch_size) = args.batch_size {
        builder = builder.with_batch_size(batch_size.get());
    }
    if let Some(prefix) = &args.comment_prefix {
        builder = builder.with_comment_prefix(prefix.as_str());
    }

    let targets: Vec<&str> = match &args.target {
        Some(target) => vec![target.as_str()],
        None => rule_set.paths().collect(),
    };
    info!(config = %args.config.display(), files = targets.len(), "loaded configuration");
    formatter.on_checking(&targets);

    let validator = Validator::new(rule_set).with_reader_config(builder.build());
    let outcome = validator.check(args.target.as_deref());
    formatter.on_outcome(&outcome);

    Ok(outcome.is_success())
}

pub fn run_rules() {
    println!("{}", rules_table());
}
