//! Dataset Loading Tests
//!
//! Loads CSV files from disk and checks the resulting dataset shape.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use csvapi::dataset::{Dataset, LoadError, Value};
use csvapi::schema::ColumnKind;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_infers_every_kind() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(
        &temp,
        "mixed.csv",
        "id,price,active,label,notes\n1,9.5,true,x,\n2,10,FALSE,,\n",
    );

    let dataset = Dataset::load(&path).unwrap();
    let schema = dataset.schema();

    assert_eq!(schema.kind_of("id"), Some(ColumnKind::Integer));
    assert_eq!(schema.kind_of("price"), Some(ColumnKind::Float));
    assert_eq!(schema.kind_of("active"), Some(ColumnKind::Boolean));
    assert_eq!(schema.kind_of("label"), Some(ColumnKind::String));
    assert_eq!(schema.kind_of("notes"), Some(ColumnKind::Empty));

    let second = &dataset.records()[1];
    assert_eq!(second.get("active"), Some(&Value::Bool(false)));
    assert_eq!(second.get("label"), Some(&Value::Null));
    assert_eq!(
        serde_json::to_value(second.get("price").unwrap()).unwrap(),
        serde_json::json!(10.0)
    );
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Dataset::load(temp.path().join("absent.csv")).unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.code(), "CSVAPI_LOAD_IO");
}

#[test]
fn test_load_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "empty.csv", "");

    assert!(matches!(Dataset::load(&path), Err(LoadError::Empty)));
}

#[test]
fn test_load_header_only() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "header.csv", "name,city\n");

    let dataset = Dataset::load(&path).unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.columns().names(), &["name", "city"]);
}

#[test]
fn test_load_rejects_ragged_rows() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "ragged.csv", "a,b\n1,2\n3\n");

    let err = Dataset::load(&path).unwrap_err();
    assert_eq!(err.code(), "CSVAPI_LOAD_MALFORMED");
}

#[test]
fn test_load_rejects_duplicate_header() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "dup.csv", "a,b,a\n1,2,3\n");

    match Dataset::load(&path) {
        Err(LoadError::DuplicateColumn(name)) => assert_eq!(name, "a"),
        other => panic!("unexpected result: {:?}", other.map(|d| d.len())),
    }
}

#[test]
fn test_load_keeps_row_order() {
    let temp = TempDir::new().unwrap();
    let path = write_csv(&temp, "order.csv", "name\nzed\namy\nbob\n");

    let dataset = Dataset::load(&path).unwrap();
    let names: Vec<_> = dataset
        .records()
        .iter()
        .map(|r| r.get("name").unwrap().as_text().into_owned())
        .collect();
    assert_eq!(names, vec!["zed", "amy", "bob"]);
}
