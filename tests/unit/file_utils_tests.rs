/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use modalswap::errors::MigrationError;
use modalswap::file_utils::FileManager;
use crate::common;

/// Test that path_exists returns true for existing files
#[test]
fn test_path_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "page.php", "content")?;

    assert!(FileManager::path_exists(&test_file));

    Ok(())
}

/// Test that existence checks return false for non-existent paths
#[test]
fn test_path_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::path_exists("non_existent_file_12345.php"));
}

/// Test that read_to_string returns file content correctly
#[test]
fn test_read_to_string_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "page.php", "héllo\r\nworld")?;

    assert_eq!(FileManager::read_to_string(&test_file)?, "héllo\r\nworld");

    Ok(())
}

/// Test that invalid UTF-8 is reported as a read error
#[test]
fn test_read_to_string_withInvalidUtf8_shouldFailWithReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("latin1.php");
    fs::write(&test_file, [0x3c, 0x70, 0xe9, 0xff])?;

    let result = FileManager::read_to_string(&test_file);
    assert!(matches!(result, Err(MigrationError::Read { .. })));

    Ok(())
}

/// Test that write_to_file does not create missing parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldFailWithWriteError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("missing").join("page.php");

    let result = FileManager::write_to_file(&target, "x");
    assert!(matches!(result, Err(MigrationError::Write { .. })));
    assert!(!target.exists());

    Ok(())
}

/// Test that find_files returns matching files sorted by path
#[test]
fn test_find_files_withMixedExtensions_shouldReturnSortedMatches() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "b.php", "")?;
    common::create_test_file(temp_dir.path(), "a.PHP", "")?;
    common::create_test_file(temp_dir.path(), "style.css", "")?;
    common::create_test_file(temp_dir.path(), "sub/c.php", "")?;

    let files = FileManager::find_files(temp_dir.path(), ".php")?;
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(temp_dir.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();

    assert_eq!(names, vec!["a.PHP", "b.php", "sub/c.php"]);

    Ok(())
}
