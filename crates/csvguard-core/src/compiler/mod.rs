//! Rule compilation module.
//!
//! Checks a [`RuleSet`] before any file is read and turns the rule names
//! declared for one file into [`ExecutableColumn`]s holding [`RuleKind`]s.

use std::path::Path;

use tracing::debug;


use crate::{errors::CheckError, rule_set::RuleSet, rules::RuleKind};

/// A column with its rules resolved, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableColumn {
    pub name: String,
    pub rules: Vec<RuleKind>,
}

/// Static checks run once per file before ingestion, in this order:
/// the file exists, the file is registered, every rule name of the whole
/// rule set is known.
pub fn validate_rule_set(rule_set: &RuleSet, file: &str) -> Result<(), CheckError> {
    if !Path::new(file).exists() {
        return Err(CheckError::FileNotFound {
            file: file.to_string(),
        });
    }

    if !rule_set.contains(file) {
        return Err(CheckError::UnregisteredFile {
            file: file.to_string(),
        });
    }

    validate_rule_names(rule_set)
}

/// Fail with [`CheckError::UnknownRule`] on the first unknown rule name, across all files.
pub fn validate_rule_names(rule_set: &RuleSet) -> Result<(), CheckError> {
    rule_set
        .rule_names()
        .try_for_each(|name| name.parse::<RuleKind>().map(drop))
}

/// Resolve the rules declared for `file`.
pub fn compile_file(rule_set: &RuleSet, file: &str) -> Result<Vec<ExecutableColumn>, CheckError> {
    let rules = rule_set
        .get(file)
        .ok_or_else(|| CheckError::UnregisteredFile {
            file: file.to_string(),
        })?;

    let columns = rules
        .columns()
        .iter()
        .map(|column| {
            let kinds = column
                .rules
                .iter()
                .map(|name| name.parse::<RuleKind>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ExecutableColumn {
                name: column.name.clone(),
                rules: kinds,
            })
        })
        .collect::<Result<Vec<_>, CheckError>>()?;

    debug!(
        file,
        columns = columns.len(),
        rules = columns.iter().map(|c| c.rules.len()).sum::<usize>(),
        "rules compiled"
    );
    Ok(columns)
}
