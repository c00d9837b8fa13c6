//! Integration tests for reading class description files from disk.

use std::fs;

use classgen_descriptor::{ClassFile, Error, Warning};
use tempfile::TempDir;

#[test]
fn test_open_reads_and_parses() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("point");
    fs::write(&path, "Point\nint x\nint y\n").unwrap();

    let file = ClassFile::open(&path).unwrap();

    assert_eq!(file.path(), path);
    assert_eq!(file.content(), "Point\nint x\nint y\n");
    assert_eq!(file.descriptor().name, "Point");
    assert_eq!(file.descriptor().attributes.len(), 2);
    assert!(file.warnings().is_empty());
}

#[test]
fn test_open_missing_file_is_input_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope");

    let err = ClassFile::open(&path).err().expect("open should fail");

    match *err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
    }
}

#[test]
fn test_warnings_for_untyped_attribute() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken");
    fs::write(&path, "Broken\nlonely\n").unwrap();

    let file = ClassFile::open(&path).unwrap();
    let warnings = file.warnings();

    assert_eq!(warnings.len(), 1);
    assert!(matches!(&warnings[0], Warning::MissingType { name, .. } if name == "lonely"));
}
