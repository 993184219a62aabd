use thiserror::Error;

use crate::rules::RuleKind;

/// Every way a check run can stop.
///
/// The `Display` output is the message shown to the user, always prefixed by
/// the file it concerns when one is known.
#[derive(Error, Debug)]
pub enum CheckError {
    /// Target file is missing on disk
    #[error("File:{file} File not found")]
    FileNotFound { file: String },

    /// Target file has no entry in the rule set
    #[error("File:{file} Check csv file path was not defined")]
    UnregisteredFile { file: String },

    /// A rule name is not part of the registry
    #[error("The {rule} rule was not defined")]
    UnknownRule { rule: String },

    /// File exists but could not be opened or parsed
    #[error("File:{file} Cannot open file: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// File holds bytes that are not utf8 outside comment rows
    #[error("File:{file} Cannot read line {line}: not valid UTF-8")]
    Encoding { file: String, line: u64 },

    /// Declared column has no match in the header
    #[error("File:{file} Column:{column} was not found")]
    ColumnNotFound { file: String, column: String },

    /// A check found a value breaking its rule
    #[error("File:{file} Check:{rule} {message}")]
    RuleViolation {
        file: String,
        rule: RuleKind,
        column: String,
        /// 1-based data row of the offending cell, when the check can point at one
        row: Option<usize>,
        message: String,
    },
}

impl CheckError {
    /// File the error is about, if any.
    pub fn file(&self) -> Option<&str> {
        match self {
            CheckError::FileNotFound { file }
            | CheckError::UnregisteredFile { file }
            | CheckError::Io { file, .. }
            | CheckError::Encoding { file, .. }
            | CheckError::ColumnNotFound { file, .. }
            | CheckError::RuleViolation { file, .. } => Some(file),
            CheckError::UnknownRule { .. } => None,
        }
    }

    /// Rule whose check failed, only set for data violations.
    pub fn rule(&self) -> Option<RuleKind> {
        match self {
            CheckError::RuleViolation { rule, .. } => Some(*rule),
            _ => None,
        }
    }

    /// `true` when the error comes from the data rather than the rule set or the file system.
    pub fn is_violation(&self) -> bool {
        matches!(self, CheckError::RuleViolation { .. })
    }
}
