/*!
 * Tests for error types and conversions
 */

use std::io;
use std::path::PathBuf;
use modalswap::errors::MigrationError;

#[test]
fn test_migrationError_read_shouldDisplayPathAndCause() {
    let error = MigrationError::Read {
        path: PathBuf::from("barangay-hall/reports.php"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
    };
    let display = format!("{}", error);
    assert!(display.contains("Failed to read file"));
    assert!(display.contains("reports.php"));
    assert!(display.contains("permission denied"));
}

#[test]
fn test_migrationError_write_shouldExposeSource() {
    let error = MigrationError::Write {
        path: PathBuf::from("a.php"),
        source: io::Error::new(io::ErrorKind::Other, "disk full"),
    };
    let source = std::error::Error::source(&error).expect("write error should carry a source");
    assert_eq!(source.to_string(), "disk full");
}

#[test]
fn test_migrationError_fromRegexError_shouldBecomeInvalidPattern() {
    let regex_error = regex::Regex::new("(unclosed").unwrap_err();
    let error: MigrationError = regex_error.into();
    assert!(matches!(error, MigrationError::InvalidPattern(_)));
    assert!(format!("{}", error).contains("Invalid block pattern"));
}

#[test]
fn test_migrationError_config_shouldDisplayCorrectly() {
    let error = MigrationError::Config("end marker must not be empty".to_string());
    assert_eq!(format!("{}", error), "Invalid configuration: end marker must not be empty");
}

#[test]
fn test_migrationError_intoAnyhow_shouldKeepMessage() {
    let error = MigrationError::Config("bad".to_string());
    let wrapped: anyhow::Error = error.into();
    assert!(wrapped.to_string().contains("bad"));
}
