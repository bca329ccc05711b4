/*!
 * # modalswap - logout modal migration for page templates
 *
 * Replaces the per-page logout confirmation modal (markup plus inline script)
 * in a list of page files with a sidebar toggle script and an include of the
 * shared logout modal component.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Target list, markers, replacement template and switches
 * - `block_replacer`: Cross-line block matching and substitution
 * - `batch_updater`: Sequential read/replace/write over the target list
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod batch_updater;
pub mod block_replacer;
pub mod errors;
pub mod file_utils;

// Re-export main types for easier usage
pub use app_config::{BlockPattern, Config};
pub use batch_updater::{BatchReport, BatchUpdater, FileOutcome, UpdateOptions};
pub use block_replacer::{BlockReplacer, Replacement};
pub use errors::MigrationError;
