use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::CheckError,
    rules::{ColumnCheck, RuleKind},
    validator::FileContext,
};

/// Layout every cell of a `datetime_format` column must follow.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// chrono accepts single digit fields and signed years, the layout does not
static DATETIME_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("datetime pattern is valid")
});

/// Parse `YYYY-MM-DD HH:MM:SS`, `None` for any other shape or an impossible date.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if !DATETIME_SHAPE.is_match(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

/// Fails on the first cell that is not a valid datetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatetimeFormatCheck;

impl ColumnCheck for DatetimeFormatCheck {
    fn rule(&self) -> RuleKind {
        RuleKind::DatetimeFormat
    }

    fn validate(&self, ctx: &FileContext<'_>, index: usize) -> Result<(), CheckError> {
        let invalid = ctx
            .cells(index)?
            .enumerate()
            .find(|(_, cell)| parse_datetime(cell).is_none());
        match invalid {
            Some((row, cell)) => Err(ctx.violation(
                self.rule(),
                index,
                Some(row + 1),
                format!("{} is not datetime format", cell),
            )),
            None => Ok(()),
        }
    }
}
