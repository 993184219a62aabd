use csvguard_core::RuleKind;
use prettytable::{Cell, Row, Table};

/// Table of every rule of the registry with what it enforces and how it fails.
pub fn rules_table() -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Rule"),
        Cell::new("Description"),
        Cell::new("Failure message"),
    ]));

    for kind in RuleKind::ALL {
        table.add_row(Row::new(vec![
            Cell::new(kind.as_str()),
            Cell::new(kind.description()),
            Cell::new(kind.failure_template()),
        ]));
    }

    table.to_string()
}
