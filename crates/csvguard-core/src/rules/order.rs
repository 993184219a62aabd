use std::cmp::Ordering;

use crate::{
    errors::CheckError,
    rules::{numeric::parse_numeric, ColumnCheck, RuleKind},
    validator::FileContext,
};

/// Compare two cells.
///
/// When both cells are numeric strings they are compared as numbers,
/// otherwise as raw bytes. `"10"` sorts after `"9"`, `"b"` after `"10"`.
pub fn compare_cells(left: &str, right: &str) -> Ordering {
    match (parse_numeric(left), parse_numeric(right)) {
        (Some(l), Some(r)) => l.partial_cmp(&r).unwrap_or(Ordering::Equal),
        _ => left.cmp(right),
    }
}

/// Fails on the first adjacent pair of rows out of order. Equal neighbours pass.
#[derive(Debug, Clone, Copy)]
pub struct OrderCheck {
    asc: bool,
}

impl OrderCheck {
    pub const fn ascending() -> Self {
        Self { asc: true }
    }

    pub const fn descending() -> Self {
        Self { asc: false }
    }

    fn in_order(&self, previous: &str, current: &str) -> bool {
        match compare_cells(current, previous) {
            Ordering::Equal => true,
            Ordering::Greater => self.asc,
            Ordering::Less => !self.asc,
        }
    }

    /// 0-based row of the first cell breaking the order with its predecessor.
    pub fn first_inversion<'c>(&self, cells: impl Iterator<Item = &'c str>) -> Option<usize> {
        let mut previous: Option<&str> = None;
        for (row, cell) in cells.enumerate() {
            if let Some(prev) = previous {
                if !self.in_order(prev, cell) {
                    return Some(row);
                }
            }
            previous = Some(cell);
        }
        None
    }
}

impl ColumnCheck for OrderCheck {
    fn rule(&self) -> RuleKind {
        if self.asc {
            RuleKind::OrderAsc
        } else {
            RuleKind::OrderDesc
        }
    }

    fn validate(&self, ctx: &FileContext<'_>, index: usize) -> Result<(), CheckError> {
        let Some(row) = self.first_inversion(ctx.cells(index)?) else {
            return Ok(());
        };
        let message = if self.asc {
            "Not in ascending order"
        } else {
            "Not in descending order"
        };
        Err(ctx.violation(self.rule(), index, Some(row + 1), message.to_string()))
    }
}
