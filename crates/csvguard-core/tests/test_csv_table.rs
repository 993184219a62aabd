use csvguard_core::{ingest, CheckError, ReaderConfig, ReaderConfigBuilder};
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

fn write(dir: &std::path::Path, content: &str) -> String {
    let file_path = dir.join("test.csv");
    let mut file = File::create(&file_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file_path.into_os_string().into_string().unwrap()
}

#[test]
fn test_ingest_header_and_rows() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "id,name,age\n1,alice,30\n2,bob,25\n");

    let table = ingest(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(table.header(), vec!["id", "name", "age"]);
    assert_eq!(table.num_rows(), 2);
    let names: Vec<&str> = table.cells(1).unwrap().collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[test]
fn test_ingest_skips_comment_rows_keeps_order() {
    let dir = tempdir().unwrap();
    let path = write(
        dir.path(),
        "id,name\n#0,header note\n1,a\n#1.5,between\n2,b\n3,c\n#,trailing\n",
    );

    let table = ingest(&path, &ReaderConfig::default()).unwrap();
    let ids: Vec<&str> = table.cells(0).unwrap().collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_ingest_header_starting_with_hash_is_kept() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "#id,name\n1,a\n");

    let table = ingest(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(table.column_index("#id"), Some(0));
    assert_eq!(table.num_rows(), 1);
}

#[test]
fn test_ingest_custom_comment_prefix() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "id\n--1\n#2\n3\n");
    let config = ReaderConfigBuilder::new().with_comment_prefix("--").build();

    let table = ingest(&path, &config).unwrap();
    let ids: Vec<&str> = table.cells(0).unwrap().collect();
    assert_eq!(ids, vec!["#2", "3"]);
}

#[test]
fn test_ingest_no_trimming() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "id,name\n 1 ,\" a \"\n");

    let table = ingest(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(table.cells(0).unwrap().next(), Some(" 1 "));
    assert_eq!(table.cells(1).unwrap().next(), Some(" a "));
}

#[test]
fn test_ingest_short_rows_read_as_empty() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "id,name,age\n1,a\n2\n");

    let table = ingest(&path, &ReaderConfig::default()).unwrap();
    let ages: Vec<&str> = table.cells(2).unwrap().collect();
    assert_eq!(ages, vec!["", ""]);
}

#[test]
fn test_ingest_empty_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "");

    let err = ingest(&path, &ReaderConfig::default()).unwrap_err();
    match err {
        CheckError::Io { file, source } => {
            assert_eq!(file, path);
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_ingest_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    let path = path.to_str().unwrap();

    let err = ingest(path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, CheckError::FileNotFound { .. }));
}

#[test]
fn test_ingest_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().to_str().unwrap();

    let err = ingest(path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, CheckError::Io { .. }));
}

#[test]
fn test_ingest_wide_comment_row() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "id,name\n1,a\n# note, with, several, commas\n2,b\n");

    let table = ingest(&path, &ReaderConfig::default()).unwrap();
    let ids: Vec<&str> = table.cells(0).unwrap().collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_ingest_narrow_comment_row() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "id,name,age\n#\n1,a,30\n# short\n");

    let table = ingest(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.cells(2).unwrap().next(), Some("30"));
}

#[test]
fn test_ingest_long_rows_keep_header_width() {
    let dir = tempdir().unwrap();
    let path = write(dir.path(), "id,name\n1,a,extra\n2,b\n3,c,x,y,z\n");

    let table = ingest(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(table.num_columns(), 2);
    let names: Vec<&str> = table.cells(1).unwrap().collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_ingest_not_utf8_is_encoding_error() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("latin1.csv");
    std::fs::write(&file_path, b"id,name\n1,caf\xe9\n").unwrap();
    let path = file_path.to_str().unwrap();

    let err = ingest(path, &ReaderConfig::default()).unwrap_err();
    assert!(matches!(err, CheckError::Encoding { line: 2, .. }));
    assert!(err.to_string().ends_with("Cannot read line 2: not valid UTF-8"));
}
