use crate::{errors::CheckError, rules::RuleKind, tables::Table};

/// State of the file being checked, handed down to dispatch and checks.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    file: &'a str,
    table: &'a Table,
}

impl<'a> FileContext<'a> {
    pub fn new(file: &'a str, table: &'a Table) -> Self {
        Self { file, table }
    }

    pub fn file(&self) -> &'a str {
        self.file
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn column_name(&self, index: usize) -> &'a str {
        self.table.column_name(index).unwrap_or_default()
    }

    /// Cells of the column at `index`, nulls read as `""`.
    ///
    /// [`dispatch`](crate::validator::dispatch) only passes indices found in
    /// the header, so this fails only for callers holding an index past the
    /// last column. The error then names the column `#<index>`.
    pub fn cells(&self, index: usize) -> Result<impl Iterator<Item = &'a str> + 'a, CheckError> {
        self.table
            .cells(index)
            .ok_or_else(|| CheckError::ColumnNotFound {
                file: self.file.to_string(),
                column: format!("#{index}"),
            })
    }

    /// Build the error reported when `rule` fails on the column at `index`.
    pub fn violation(
        &self,
        rule: RuleKind,
        index: usize,
        row: Option<usize>,
        message: String,
    ) -> CheckError {
        CheckError::RuleViolation {
            file: self.file.to_string(),
            rule,
            column: self.column_name(index).to_string(),
            row,
            message,
        }
    }
}
