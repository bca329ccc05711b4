use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::block_replacer::BlockReplacer;
use crate::errors::MigrationResult;
use crate::file_utils::FileManager;

// @module: Sequential in-place rewriting of a list of page files

/// What happened to a single target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Blocks were replaced and the file rewritten
    Updated { blocks: usize },
    /// Blocks were found but the run is a dry run
    WouldUpdate { blocks: usize },
    /// No block matched; content is unchanged on disk
    Unchanged,
    /// The path does not exist
    NotFound,
}

/// Outcome of one entry of the target list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    // @field: Path as given in the target list
    pub path: PathBuf,
    // @field: Result of processing
    pub outcome: FileOutcome,
}

/// Per-file outcomes of a completed batch, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Updated { .. }))
    }

    /// Files a dry run found blocks in
    pub fn would_update(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::WouldUpdate { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| *o == FileOutcome::Unchanged)
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| *o == FileOutcome::NotFound)
    }

    /// Total number of blocks replaced across all files
    pub fn blocks_replaced(&self) -> usize {
        self.files
            .iter()
            .map(|f| match f.outcome {
                FileOutcome::Updated { blocks } | FileOutcome::WouldUpdate { blocks } => blocks,
                _ => 0,
            })
            .sum()
    }

    fn count(&self, predicate: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| predicate(&f.outcome)).count()
    }
}

/// Switches controlling how results are written back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Rewrite files even when nothing matched
    pub write_unchanged: bool,
    /// Compute and report replacements without writing
    pub dry_run: bool,
}

/// Applies a block replacement to every file of a target list
pub struct BatchUpdater {
    // @field: Pattern and template
    replacer: BlockReplacer,
    // @field: Directory relative target paths are resolved against
    root: PathBuf,
    // @field: Write behavior
    options: UpdateOptions,
}

impl BatchUpdater {
    /// Create an updater rooted at `root` with default options
    pub fn new(replacer: BlockReplacer, root: impl Into<PathBuf>) -> Self {
        Self {
            replacer,
            root: root.into(),
            options: UpdateOptions::default(),
        }
    }

    /// Create an updater from a validated configuration
    pub fn from_config(config: &Config, root: impl Into<PathBuf>) -> MigrationResult<Self> {
        config.validate()?;
        let replacer = BlockReplacer::new(&config.block, config.replacement.clone())?;
        Ok(Self::new(replacer, root).with_options(UpdateOptions {
            write_unchanged: config.write_unchanged,
            dry_run: false,
        }))
    }

    pub fn with_options(mut self, options: UpdateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &UpdateOptions {
        &self.options
    }

    /// Resolve a target path against the root; absolute paths are kept
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        self.root.join(file_path)
    }

    /// Rewrite one existing file. Any read or write failure is returned
    /// to the caller untouched.
    pub fn process(&self, file_path: &Path) -> MigrationResult<FileOutcome> {
        info!("Updating {}...", file_path.display());
        let full_path = self.resolve(file_path);

        let content = FileManager::read_to_string(&full_path)?;
        let replacement = self.replacer.replace(&content);

        if self.options.dry_run {
            return Ok(if replacement.changed() {
                info!("Would update {} ({} block(s))", file_path.display(), replacement.blocks);
                FileOutcome::WouldUpdate { blocks: replacement.blocks }
            } else {
                info!("No logout modal block found in {}", file_path.display());
                FileOutcome::Unchanged
            });
        }

        if !replacement.changed() {
            if self.options.write_unchanged {
                debug!("Rewriting unchanged file {:?}", full_path);
                FileManager::write_to_file(&full_path, &replacement.content)?;
            }
            info!("No logout modal block found in {}", file_path.display());
            return Ok(FileOutcome::Unchanged);
        }

        FileManager::write_to_file(&full_path, &replacement.content)?;
        info!("Updated {} ({} block(s))", file_path.display(), replacement.blocks);

        Ok(FileOutcome::Updated { blocks: replacement.blocks })
    }

    /// Process every path in order. Missing files are reported and skipped;
    /// the first other failure aborts the batch, leaving earlier files
    /// rewritten and later ones untouched.
    pub fn run_batch<I, P>(&self, file_paths: I) -> MigrationResult<BatchReport>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = BatchReport::default();

        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let outcome = if FileManager::path_exists(self.resolve(file_path)) {
                self.process(file_path)?
            } else {
                warn!("File not found: {}", file_path.display());
                FileOutcome::NotFound
            };

            report.files.push(FileReport {
                path: file_path.to_path_buf(),
                outcome,
            });
        }

        if self.options.dry_run {
            info!(
                "Dry run finished: {} would update, {} unchanged, {} not found, {} block(s) found",
                report.would_update(),
                report.unchanged(),
                report.not_found(),
                report.blocks_replaced()
            );
        } else {
            info!(
                "Finished: {} updated, {} unchanged, {} not found, {} block(s) replaced",
                report.updated(),
                report.unchanged(),
                report.not_found(),
                report.blocks_replaced()
            );
        }

        Ok(report)
    }
}
