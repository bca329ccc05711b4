use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::{MigrationError, MigrationResult};

/// Application configuration module
/// This module handles the migration configuration: which files are
/// rewritten, which block is removed and what replaces it.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Ordered list of target files, relative to the run root
    #[serde(default = "default_files")]
    pub files: Vec<String>,

    /// Markers delimiting the block to remove
    #[serde(default)]
    pub block: BlockPattern,

    /// Text inserted in place of every removed block
    #[serde(default = "default_replacement")]
    pub replacement: String,

    /// Rewrite files even when no block was found
    #[serde(default)]
    pub write_unchanged: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Start and end markers of the block being replaced
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BlockPattern {
    // @field: Literal text opening the block
    #[serde(default = "default_start_marker")]
    pub start_marker: String,

    // @field: Literal text closing the block
    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

impl Default for BlockPattern {
    fn default() -> Self {
        Self {
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Sidebar toggle wiring plus the shared logout modal include
pub const DEFAULT_REPLACEMENT: &str = r#"    <script>
        // Sidebar Toggle
        const sidebarToggle = document.getElementById('sidebarToggle');
        const sidebar = document.getElementById('sidebar');

        if (sidebarToggle && sidebar) {
            sidebarToggle.addEventListener('click', () => {
                sidebar.classList.toggle('-translate-x-full');
            });

            // Close sidebar when clicking outside on mobile
            document.addEventListener('click', (e) => {
                if (window.innerWidth < 1024) {
                    if (!sidebar.contains(e.target) && !sidebarToggle.contains(e.target)) {
                        sidebar.classList.add('-translate-x-full');
                    }
                }
            });
        }
    </script>

    <?php include '../includes/logout_modal.php'; ?>"#;

fn default_files() -> Vec<String> {
    [
        "barangay-hall/applications.php",
        "barangay-hall/barangay-staff.php",
        "barangay-hall/community-concerns.php",
        "barangay-hall/reports.php",
        "barangay-hall/services.php",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_start_marker() -> String {
    "    <!-- Logout Confirmation Modal -->".to_string()
}

fn default_end_marker() -> String {
    "</script>".to_string()
}

fn default_replacement() -> String {
    DEFAULT_REPLACEMENT.to_string()
}

impl Config {
    /// Load the configuration from a JSON file, falling back to the built-in
    /// defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Config file not found at {:?}, using built-in defaults.", path);
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Write this configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {:?}", path))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> MigrationResult<()> {
        if self.block.start_marker.is_empty() {
            return Err(MigrationError::Config("start marker must not be empty".to_string()));
        }
        if self.block.end_marker.is_empty() {
            return Err(MigrationError::Config("end marker must not be empty".to_string()));
        }

        // A replacement carrying the start marker would be matched again on the next run
        if self.replacement.contains(&self.block.start_marker) {
            return Err(MigrationError::Config(
                "replacement must not contain the start marker".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            files: default_files(),
            block: BlockPattern::default(),
            replacement: default_replacement(),
            write_unchanged: false,
            log_level: LogLevel::default(),
        }
    }
}
