use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::CheckError,
    rules::{ColumnCheck, RuleKind},
    validator::FileContext,
};

// Signed integer or decimal, optional exponent. No blanks, no digit grouping.
static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric pattern is valid")
});

/// `true` when `value` is a numeric string.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

/// Parse a numeric string, `None` for anything [`is_numeric`] rejects.
pub fn parse_numeric(value: &str) -> Option<f64> {
    if is_numeric(value) {
        value.parse::<f64>().ok()
    } else {
        None
    }
}

/// Fails on the first cell that is not a numeric string.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyNumbersCheck;

impl ColumnCheck for OnlyNumbersCheck {
    fn rule(&self) -> RuleKind {
        RuleKind::OnlyNumbers
    }

    fn validate(&self, ctx: &FileContext<'_>, index: usize) -> Result<(), CheckError> {
        match ctx.cells(index)?.enumerate().find(|(_, cell)| !is_numeric(cell)) {
            Some((row, cell)) => Err(ctx.violation(
                self.rule(),
                index,
                Some(row + 1),
                format!("{} is not numeric string", cell),
            )),
            None => Ok(()),
        }
    }
}
