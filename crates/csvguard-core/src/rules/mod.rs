pub mod date;
pub mod generic;
pub mod numeric;
pub mod order;

use std::{fmt, str::FromStr};

pub use date::DatetimeFormatCheck;
pub use generic::{NotEmptyCheck, UnicityCheck};
pub use numeric::{is_numeric, OnlyNumbersCheck};
pub use order::{compare_cells, OrderCheck};

use crate::{errors::CheckError, validator::FileContext};

/// The closed set of rules a column can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Unique,
    NotEmpty,
    OrderAsc,
    OrderDesc,
    OnlyNumbers,
    DatetimeFormat,
}

impl RuleKind {
    /// Every rule, in registry order.
    pub const ALL: [RuleKind; 6] = [
        RuleKind::Unique,
        RuleKind::NotEmpty,
        RuleKind::OrderAsc,
        RuleKind::OrderDesc,
        RuleKind::OnlyNumbers,
        RuleKind::DatetimeFormat,
    ];

    /// Identifier used in rule configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Unique => "unique",
            RuleKind::NotEmpty => "not_empty",
            RuleKind::OrderAsc => "order_asc",
            RuleKind::OrderDesc => "order_desc",
            RuleKind::OnlyNumbers => "only_numbers",
            RuleKind::DatetimeFormat => "datetime_format",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::Unique => "All values of the column are pairwise distinct",
            RuleKind::NotEmpty => "No value of the column is the empty string",
            RuleKind::OrderAsc => "Each value is greater than or equal to the previous one",
            RuleKind::OrderDesc => "Each value is lesser than or equal to the previous one",
            RuleKind::OnlyNumbers => "Every value is a signed integer or decimal number",
            RuleKind::DatetimeFormat => "Every value is a datetime formatted YYYY-MM-DD HH:MM:SS",
        }
    }

    /// Message reported on failure, with `<column>` / `<value>` placeholders.
    pub fn failure_template(&self) -> &'static str {
        match self {
            RuleKind::Unique => "<column> is not unique",
            RuleKind::NotEmpty => "Empty value has exists in <column>",
            RuleKind::OrderAsc => "Not in ascending order",
            RuleKind::OrderDesc => "Not in descending order",
            RuleKind::OnlyNumbers => "<value> is not numeric string",
            RuleKind::DatetimeFormat => "<value> is not datetime format",
        }
    }

    /// Check implementing this rule.
    pub fn check(&self) -> &'static dyn ColumnCheck {
        static UNIQUE: UnicityCheck = UnicityCheck;
        static NOT_EMPTY: NotEmptyCheck = NotEmptyCheck;
        static ORDER_ASC: OrderCheck = OrderCheck::ascending();
        static ORDER_DESC: OrderCheck = OrderCheck::descending();
        static ONLY_NUMBERS: OnlyNumbersCheck = OnlyNumbersCheck;
        static DATETIME_FORMAT: DatetimeFormatCheck = DatetimeFormatCheck;

        match self {
            RuleKind::Unique => &UNIQUE,
            RuleKind::NotEmpty => &NOT_EMPTY,
            RuleKind::OrderAsc => &ORDER_ASC,
            RuleKind::OrderDesc => &ORDER_DESC,
            RuleKind::OnlyNumbers => &ONLY_NUMBERS,
            RuleKind::DatetimeFormat => &DATETIME_FORMAT,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = CheckError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| CheckError::UnknownRule {
                rule: value.to_string(),
            })
    }
}

/// `true` if `name` identifies a rule of the registry.
pub fn is_known(name: &str) -> bool {
    RuleKind::ALL.iter().any(|kind| kind.as_str() == name)
}

/// A validation run over one whole column of the table held by `ctx`.
pub trait ColumnCheck: Send + Sync {
    /// Returns the rule implemented by the check.
    fn rule(&self) -> RuleKind;
    /// Scans the column at `index`, failing on the first violation found.
    fn validate(&self, ctx: &FileContext<'_>, index: usize) -> Result<(), CheckError>;
}
