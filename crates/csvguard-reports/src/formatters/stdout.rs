use csvguard_core::ValidationOutcome;

use crate::{utils::numbers::format_count, Reporter};

pub struct StdOutFormatter {
    intro: String,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        Self {
            intro: format!("csvguard v{} - CSV check", version),
        }
    }

    pub fn render_start(&self) -> String {
        format!("{}\n{}", self.intro, "=".repeat(self.intro.len()))
    }

    pub fn render_checking(&self, targets: &[&str]) -> String {
        let mut out = format!("Checking {} file(s)...", targets.len());
        for (i, path) in targets.iter().enumerate() {
            out.push_str(&format!("\n  [{}/{}] {}", i + 1, targets.len(), path));
        }
        out
    }

    /// `Success!!` or `Failed!!`, followed by the outcome message.
    pub fn render_outcome(&self, outcome: &ValidationOutcome) -> String {
        match outcome {
            ValidationOutcome::Success { files } => {
                let mut out = String::new();
                for file in files {
                    out.push_str(&format!(
                        "{} ({} rows, {} rules) - PASSED\n",
                        file.path,
                        format_count(file.total_rows),
                        file.rules_run
                    ));
                }
                out.push_str("\nSuccess!!\n");
                out.push_str(&outcome.message());
                out
            }
            ValidationOutcome::Failure(_) => format!("\nFailed!!\n{}", outcome.message()),
        }
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        println!("{}", self.render_start());
    }

    fn on_checking(&self, targets: &[&str]) {
        println!("{}", self.render_checking(targets));
    }

    fn on_outcome(&self, outcome: &ValidationOutcome) {
        println!("{}", self.render_outcome(outcome));
    }
}
