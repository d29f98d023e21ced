use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

use crate::builders::extractor;
use crate::core::reader::{self, MAX_LINE_LEN, ReadError};
use crate::core::registry::BlockRegistry;
use crate::core::scanner;

fn write_tf(content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("main.tf");
    fs::write(&file_path, content).unwrap();
    (dir, file_path)
}

fn load_registry(file_path: &std::path::Path) -> BlockRegistry {
    let lines = reader::read_lines(file_path).unwrap();
    BlockRegistry::from_blocks(scanner::scan_blocks(&lines))
}

#[test]
fn test_reader_delivers_lines_in_order_without_terminators() {
    let (_dir, file_path) = write_tf("locals {\n  a = 1\n}\n");

    let lines = reader::read_lines(&file_path).unwrap();
    assert_eq!(lines, vec!["locals {", "  a = 1", "}"]);
}

#[test]
fn test_reader_rejects_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.tf");

    let err = reader::read_lines(&missing).unwrap_err();
    assert!(matches!(err, ReadError::Open { .. }));
}

#[test]
fn test_reader_rejects_over_long_line() {
    let long_line = "x".repeat(MAX_LINE_LEN + 1);
    let (_dir, file_path) = write_tf(&format!("locals {{\n{long_line}\n}}\n"));

    let err = reader::read_lines(&file_path).unwrap_err();
    assert!(matches!(err, ReadError::LineTooLong { line: 2, .. }));
}

#[test]
fn test_end_to_end_locals_and_resource() {
    let (_dir, file_path) = write_tf("locals { a = 1 }\nresource \"x\" \"y\" { z = 2 }\n");

    let registry = load_registry(&file_path);

    let anonymous = registry.anonymous_blocks();
    assert_eq!(anonymous.len(), 1);
    assert_eq!(anonymous[0], vec!["locals { a = 1 }".to_string()]);

    let resources = registry.named_blocks("resource").unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(
        resources["x.y"],
        vec!["resource \"x\" \"y\" { z = 2 }".to_string()]
    );
}

#[test]
fn test_extract_locals_separates_blocks_with_blank_line() {
    let (dir, file_path) = write_tf("locals {\n  a = 1\n}\nlocals {\n  b = 2\n}\n");

    let registry = load_registry(&file_path);
    let outcome = extractor::extract_to_file(&registry, "locals", &file_path).unwrap();

    assert_eq!(outcome.block_count, 2);
    assert_eq!(outcome.target, dir.path().join("locals.tf"));
    let written = fs::read_to_string(&outcome.target).unwrap();
    assert_eq!(written, "locals {\n  a = 1\n}\n\nlocals {\n  b = 2\n}\n");
}

#[test]
fn test_extract_named_type_in_name_order() {
    let (dir, file_path) = write_tf(
        "resource \"b\" \"two\" {\n  x = 2\n}\nresource \"a\" \"one\" {\n  x = 1\n}\n",
    );

    let registry = load_registry(&file_path);
    let outcome = extractor::extract_to_file(&registry, "resource", &file_path).unwrap();

    assert_eq!(outcome.block_count, 2);
    let written = fs::read_to_string(dir.path().join("resource.tf")).unwrap();
    assert_eq!(
        written,
        "resource \"a\" \"one\" {\n  x = 1\n}\nresource \"b\" \"two\" {\n  x = 2\n}\n"
    );
}

#[test]
fn test_extract_unknown_type_writes_empty_file() {
    let (dir, file_path) = write_tf("locals { a = 1 }\n");

    let registry = load_registry(&file_path);
    let outcome = extractor::extract_to_file(&registry, "output", &file_path).unwrap();

    assert_eq!(outcome.block_count, 0);
    let written = fs::read_to_string(dir.path().join("output.tf")).unwrap();
    assert!(written.is_empty());
}
