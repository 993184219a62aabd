use std::collections::HashSet;

use crate::{
    errors::CheckError,
    rules::{ColumnCheck, RuleKind},
    utils::hasher::Xxh3Builder,
    validator::FileContext,
};

/// Fails when two cells of the column hold the same string.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicityCheck;

impl UnicityCheck {
    /// 0-based row of the first value already seen earlier in `cells`.
    pub fn first_duplicate<'c>(&self, cells: impl Iterator<Item = &'c str>) -> Option<usize> {
        let mut seen = HashSet::with_hasher(Xxh3Builder);
        cells.enumerate().find_map(|(row, cell)| (!seen.insert(cell)).then_some(row))
    }
}

impl ColumnCheck for UnicityCheck {
    fn rule(&self) -> RuleKind {
        RuleKind::Unique
    }

    fn validate(&self, ctx: &FileContext<'_>, index: usize) -> Result<(), CheckError> {
        match self.first_duplicate(ctx.cells(index)?) {
            Some(row) => Err(ctx.violation(
                self.rule(),
                index,
                Some(row + 1),
                format!("{} is not unique", ctx.column_name(index)),
            )),
            None => Ok(()),
        }
    }
}

/// Fails when a cell of the column is empty (or missing).
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmptyCheck;

impl ColumnCheck for NotEmptyCheck {
    fn rule(&self) -> RuleKind {
        RuleKind::NotEmpty
    }

    fn validate(&self, ctx: &FileContext<'_>, index: usize) -> Result<(), CheckError> {
        match ctx.cells(index)?.position(str::is_empty) {
            Some(row) => Err(ctx.violation(
                self.rule(),
                index,
                Some(row + 1),
                format!("Empty value has exists in {}", ctx.column_name(index)),
            )),
            None => Ok(()),
        }
    }
}
