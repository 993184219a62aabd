use crate::errors::CheckError;

/// Message returned by a run where every file passed.
pub const SUCCESS_MESSAGE: &str = "No error has found.";

/// What was checked in one file that passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub path: String,
    pub total_rows: usize,
    pub columns_checked: usize,
    pub rules_run: usize,
}

impl FileSummary {
    pub fn new(path: String, total_rows: usize) -> Self {
        Self {
            path,
            total_rows,
            columns_checked: 0,
            rules_run: 0,
        }
    }
}

/// Result of one `check` call.
#[derive(Debug)]
pub enum ValidationOutcome {
    Success { files: Vec<FileSummary> },
    Failure(CheckError),
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success { .. })
    }

    /// Fixed success text, or the failure message.
    pub fn message(&self) -> String {
        match self {
            ValidationOutcome::Success { .. } => SUCCESS_MESSAGE.to_string(),
            ValidationOutcome::Failure(error) => error.to_string(),
        }
    }

    pub fn error(&self) -> Option<&CheckError> {
        match self {
            ValidationOutcome::Success { .. } => None,
            ValidationOutcome::Failure(error) => Some(error),
        }
    }

    pub fn files(&self) -> &[FileSummary] {
        match self {
            ValidationOutcome::Success { files } => files,
            ValidationOutcome::Failure(_) => &[],
        }
    }
}

impl From<Result<Vec<FileSummary>, CheckError>> for ValidationOutcome {
    fn from(result: Result<Vec<FileSummary>, CheckError>) -> Self {
        match result {
            Ok(files) => ValidationOutcome::Success { files },
            Err(error) => ValidationOutcome::Failure(error),
        }
    }
}
