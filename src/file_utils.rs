use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::{MigrationError, MigrationResult};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Path existence (file or directory)
    pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists()
    }

    /// Read a whole UTF-8 file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> MigrationResult<String> {
        let path = path.as_ref();
        fs::read_to_string(path).map_err(|source| MigrationError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overwrite a file with the given content
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> MigrationResult<()> {
        let path = path.as_ref();
        fs::write(path, content).map_err(|source| MigrationError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find files with a specific extension in a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> MigrationResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let normalized_ext = extension.trim_start_matches('.');
        let mut result = Vec::new();

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| MigrationError::Read {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
                source: e.into(),
            })?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }
}
