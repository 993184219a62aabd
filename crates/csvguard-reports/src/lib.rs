pub mod formatters;
pub mod utils;

use csvguard_core::ValidationOutcome;
pub use formatters::{rules::rules_table, stdout::StdOutFormatter};

pub trait Reporter {
    fn on_start(&self);
    fn on_checking(&self, targets: &[&str]);
    fn on_outcome(&self, outcome: &ValidationOutcome);
}
