//! Tests for input acquisition: record files, manual entry, and the file boundary.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bstview::application::{ApplicationError, InputLoader, InputSource, TreeSession};
use bstview::infrastructure::traits::{FileSystem, RealFileSystem};
use tempfile::TempDir;

fn create_input_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write input file");
    path
}

/// Filesystem that knows no files at all.
struct EmptyFileSystem;

impl FileSystem for EmptyFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        ))
    }
}

#[test]
fn given_record_file_when_loading_then_values_in_file_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_input_file(&temp, "values.csv", "5,root\n3,left\n\n8,right\n");
    let loader = InputLoader::new(Arc::new(RealFileSystem), ',');

    // Act
    let values = loader.load(&InputSource::File(path)).unwrap();

    // Assert
    assert_eq!(values, vec![5, 3, 8]);
}

#[test]
fn given_empty_file_when_loading_then_no_values_and_no_tree() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_input_file(&temp, "empty.csv", "");
    let loader = InputLoader::new(Arc::new(RealFileSystem), ',');

    // Act
    let values = loader.load(&InputSource::File(path)).unwrap();
    let session = TreeSession::from_values(values);

    // Assert
    assert!(session.is_empty());
    assert!(session.traversals().preorder.is_empty());
}

#[test]
fn given_malformed_record_when_loading_then_errors_with_line() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_input_file(&temp, "bad.csv", "1\n2.5\n");
    let loader = InputLoader::new(Arc::new(RealFileSystem), ',');

    // Act
    let result = loader.load(&InputSource::File(path));

    // Assert
    match result {
        Err(ApplicationError::InvalidRecord { line, field }) => {
            assert_eq!(line, 2);
            assert_eq!(field, "2.5");
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn given_missing_file_when_loading_then_operation_failed_names_path() {
    // Arrange
    let loader = InputLoader::new(Arc::new(EmptyFileSystem), ',');

    // Act
    let err = loader
        .load(&InputSource::File(PathBuf::from("/nowhere/values.csv")))
        .unwrap_err();

    // Assert
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("/nowhere/values.csv"));
}

#[test]
fn given_manual_entry_when_loading_then_uses_delimiter() {
    let loader = InputLoader::new(Arc::new(EmptyFileSystem), ';');

    let values = loader
        .load(&InputSource::Manual("7; -2 ;11".to_string()))
        .unwrap();

    assert_eq!(values, vec![7, -2, 11]);
}

#[test]
fn given_manual_entry_with_garbage_when_loading_then_invalid_token() {
    let loader = InputLoader::new(Arc::new(EmptyFileSystem), ',');

    let err = loader
        .load(&InputSource::Manual("1,2,three".to_string()))
        .unwrap_err();

    assert!(matches!(err, ApplicationError::InvalidToken { position: 3, .. }));
    assert_eq!(
        err.to_string(),
        "invalid entry: \"three\" at position 3 is not an integer"
    );
}
