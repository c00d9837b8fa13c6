//! Integration tests for writing generated files to disk.

use std::fs;

use classgen_codegen::Generator;
use classgen_descriptor::ClassDescriptor;
use tempfile::TempDir;

#[test]
fn test_generate_writes_both_files() {
    let temp = TempDir::new().unwrap();
    let class = ClassDescriptor::parse("Point\nint x\nint y\n");

    let result = Generator::new(&class).generate(temp.path());

    assert!(result.is_complete());
    assert_eq!(
        result.written,
        vec![temp.path().join("Point.h"), temp.path().join("Point.cpp")]
    );
    let source = fs::read_to_string(temp.path().join("Point.cpp")).unwrap();
    assert!(source.starts_with("#include \"./Point.h\"\n"));
}

#[test]
fn test_generate_overwrites_previous_output() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Point.h"), "stale").unwrap();
    let class = ClassDescriptor::parse("Point\nint x\n");

    Generator::new(&class).generate(temp.path());

    let header = fs::read_to_string(temp.path().join("Point.h")).unwrap();
    assert!(header.starts_with("class Point {\n"));
}

#[test]
fn test_unwritable_file_is_skipped() {
    let temp = TempDir::new().unwrap();
    // A directory where the header should go makes that single write fail.
    fs::create_dir(temp.path().join("Point.h")).unwrap();
    let class = ClassDescriptor::parse("Point\nint x\n");

    let result = Generator::new(&class).generate(temp.path());

    assert!(!result.is_complete());
    assert_eq!(result.failed, vec![temp.path().join("Point.h")]);
    assert_eq!(result.written, vec![temp.path().join("Point.cpp")]);
    assert!(temp.path().join("Point.cpp").is_file());
}

#[test]
fn test_missing_output_dir_fails_every_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nowhere");
    let class = ClassDescriptor::parse("Point\nint x\n");

    let result = Generator::new(&class).generate(&missing);

    assert!(result.written.is_empty());
    assert_eq!(result.failed.len(), 2);
    assert!(!missing.exists());
}
