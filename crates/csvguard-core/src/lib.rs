pub mod compiler;
pub mod errors;
pub mod readers;
pub mod results;
pub mod rule_set;
pub mod rules;
pub mod tables;
pub mod utils;
pub mod validator;

pub use errors::CheckError;
pub use readers::{ReaderConfig, ReaderConfigBuilder};
pub use results::{FileSummary, ValidationOutcome, SUCCESS_MESSAGE};
pub use rule_set::{ColumnRules, FileRules, RuleSet};
pub use rules::{is_known, ColumnCheck, RuleKind};
pub use tables::{ingest, Table};
pub use validator::{FileContext, Validator};
