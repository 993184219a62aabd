//! Validator: entry point running a [`RuleSet`] against the files it names.

use tracing::{info, info_span};

use crate::{
    compiler,
    errors::CheckError,
    readers::ReaderConfig,
    results::{FileSummary, ValidationOutcome},
    rule_set::RuleSet,
    tables::ingest,
    validator::{dispatch, FileContext},
};

pub struct Validator {
    rule_set: RuleSet,
    reader_config: ReaderConfig,
}

impl Validator {
    /// Create a new Validator instance
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            rule_set,
            reader_config: ReaderConfig::default(),
        }
    }

    pub fn with_reader_config(mut self, config: ReaderConfig) -> Self {
        self.reader_config = config;
        self
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Check `target` only, or every file of the rule set in declaration order.
    ///
    /// The run stops at the first failing file.
    pub fn check(&self, target: Option<&str>) -> ValidationOutcome {
        self.try_check(target).into()
    }

    /// Same as [`Validator::check`] but returns the first error as `Err`.
    pub fn try_check(&self, target: Option<&str>) -> Result<Vec<FileSummary>, CheckError> {
        let files: Vec<&str> = match target {
            Some(file) => vec![file],
            None => self.rule_set.paths().collect(),
        };

        files
            .into_iter()
            .map(|file| self.check_file(file))
            .collect()
    }

    /// Validate one file: static rule checks, ingestion, then dispatch.
    pub fn check_file(&self, file: &str) -> Result<FileSummary, CheckError> {
        let _span = info_span!("check_file", file).entered();

        compiler::validate_rule_set(&self.rule_set, file)?;
        let columns = compiler::compile_file(&self.rule_set, file)?;
        let table = ingest(file, &self.reader_config)?;
        let summary = dispatch(&FileContext::new(file, &table), &columns)?;

        info!(
            rows = summary.total_rows,
            rules = summary.rules_run,
            "file passed"
        );
        Ok(summary)
    }
}
