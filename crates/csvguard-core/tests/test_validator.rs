use csvguard_core::{CheckError, RuleKind, RuleSet, ValidationOutcome, Validator};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::{tempdir, TempDir};

fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> String {
    let file_path = dir.join(name);
    let mut file = File::create(&file_path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file_path.into_os_string().into_string().unwrap()
}

fn dev_csv(dir: &TempDir) -> String {
    write_csv(
        dir.path(),
        "dev.csv",
        &[
            "id,any_id,start_datetime",
            "1,30,2024-01-15 10:30:00",
            "2,20,2024-01-15 11:00:00",
            "# 2,20,commented out",
            "3,10,2024-01-16 08:00:00",
        ],
    )
}

fn dev_rules(path: &str) -> RuleSet {
    let mut rules = RuleSet::new();
    rules
        .file(path)
        .column("id", ["unique", "order_asc"])
        .column("any_id", ["unique", "not_empty", "order_desc", "only_numbers"])
        .column("start_datetime", ["datetime_format"]);
    rules
}

#[test]
fn test_validator_round_trip_success() {
    let dir = tempdir().unwrap();
    let path = dev_csv(&dir);
    let validator = Validator::new(dev_rules(&path));

    let outcome = validator.check(None);
    assert!(outcome.is_success());
    assert_eq!(outcome.message(), "No error has found.");
    assert_eq!(outcome.files().len(), 1);
    assert_eq!(outcome.files()[0].total_rows, 3);
    assert_eq!(outcome.files()[0].rules_run, 7);
}

#[test]
fn test_validator_explicit_target() {
    let dir = tempdir().unwrap();
    let path = dev_csv(&dir);
    let validator = Validator::new(dev_rules(&path));

    let outcome = validator.check(Some(&path));
    assert!(outcome.is_success());
}

#[test]
fn test_validator_unregistered_target() {
    let dir = tempdir().unwrap();
    let path = dev_csv(&dir);
    let other = write_csv(dir.path(), "other.csv", &["id", "1", "1"]);
    let validator = Validator::new(dev_rules(&path));

    let outcome = validator.check(Some(&other));
    assert!(matches!(
        outcome,
        ValidationOutcome::Failure(CheckError::UnregisteredFile { ref file }) if *file == other
    ));
}

#[test]
fn test_validator_missing_target() {
    let dir = tempdir().unwrap();
    let path = dev_csv(&dir);
    let missing = dir.path().join("missing.csv");
    let missing = missing.to_str().unwrap();
    let validator = Validator::new(dev_rules(&path));

    let err = validator.try_check(Some(missing)).unwrap_err();
    assert_eq!(err.to_string(), format!("File:{} File not found", missing));
}

#[test]
fn test_validator_unknown_rule_stops_before_reading() {
    let dir = tempdir().unwrap();
    let path = dev_csv(&dir);
    let mut rules = dev_rules(&path);
    rules.file("never_read.csv").column("id", ["is_even"]);
    let validator = Validator::new(rules);

    let err = validator.try_check(Some(&path)).unwrap_err();
    assert!(matches!(err, CheckError::UnknownRule { ref rule } if rule == "is_even"));
}

#[test]
fn test_validator_column_not_found() {
    let dir = tempdir().unwrap();
    let path = dev_csv(&dir);
    let mut rules = dev_rules(&path);
    rules.file(&path).column("price", ["only_numbers"]);
    let validator = Validator::new(rules);

    let err = validator.try_check(None).unwrap_err();
    assert_eq!(err.to_string(), format!("File:{} Column:price was not found", path));
}

#[test]
fn test_validator_stops_at_first_failing_file() {
    let dir = tempdir().unwrap();
    let good = write_csv(dir.path(), "good.csv", &["id", "1", "2"]);
    let bad = write_csv(dir.path(), "bad.csv", &["id", "1", "1"]);
    let missing = dir.path().join("missing.csv").to_str().unwrap().to_string();

    let mut rules = RuleSet::new();
    rules.file(&good).column("id", ["unique"]);
    rules.file(&bad).column("id", ["unique"]);
    // would fail with FileNotFound if it were ever attempted
    rules.file(&missing).column("id", ["unique"]);
    let validator = Validator::new(rules);

    let err = validator.try_check(None).unwrap_err();
    assert_eq!(err.file(), Some(bad.as_str()));
    assert_eq!(err.rule(), Some(RuleKind::Unique));
    assert_eq!(err.to_string(), format!("File:{} Check:unique id is not unique", bad));
}

#[test]
fn test_validator_all_files_in_order() {
    let dir = tempdir().unwrap();
    let first = write_csv(dir.path(), "first.csv", &["id", "1", "2"]);
    let second = write_csv(dir.path(), "second.csv", &["id", "b", "a"]);

    let mut rules = RuleSet::new();
    rules.file(&second).column("id", ["order_desc"]);
    rules.file(&first).column("id", ["order_asc"]);
    let validator = Validator::new(rules);

    let summaries = validator.try_check(None).unwrap();
    let paths: Vec<&str> = summaries.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(paths, vec![second.as_str(), first.as_str()]);
}

#[test]
fn test_validator_rule_order_decides_reported_failure() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), "data.csv", &["code", "b", "a", "a"]);

    let mut rules = RuleSet::new();
    rules.file(&path).column("code", ["order_asc", "unique"]);
    let err = Validator::new(rules).try_check(None).unwrap_err();
    assert_eq!(err.rule(), Some(RuleKind::OrderAsc));

    let mut rules = RuleSet::new();
    rules.file(&path).column("code", ["unique", "order_asc"]);
    let err = Validator::new(rules).try_check(None).unwrap_err();
    assert_eq!(err.rule(), Some(RuleKind::Unique));
}

#[test]
fn test_validator_empty_rule_set() {
    let validator = Validator::new(RuleSet::new());
    let outcome = validator.check(None);
    assert!(outcome.is_success());
    assert!(outcome.files().is_empty());
}
