// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, info};
use std::io::Write;
use std::path::PathBuf;

use modalswap::app_config::{self, Config};
use modalswap::batch_updater::{BatchUpdater, UpdateOptions};
use modalswap::file_utils::FileManager;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace logout modal blocks in the target files (default command)
    Run(RunArgs),

    /// Write the default configuration to a file
    InitConfig {
        /// Where to write the configuration
        #[arg(value_name = "PATH", default_value = "modalswap.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for modalswap
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct RunArgs {
    /// Files to update, replacing the configured list
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Directory relative paths are resolved against
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "modalswap.json")]
    config_path: PathBuf,

    /// Process every file with this extension under the root instead of a list
    #[arg(long, value_name = "EXT", conflicts_with = "files")]
    scan_ext: Option<String>,

    /// Rewrite files even when no block was found
    #[arg(long)]
    always_write: bool,

    /// Report what would change without writing anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// modalswap - replace per-page logout modals with the shared component
///
/// Finds the custom "Logout Confirmation Modal" block (markup plus inline
/// script) in each target page and swaps it for a sidebar toggle script and
/// an include of the shared logout modal.
#[derive(Parser, Debug)]
#[command(args_conflicts_with_subcommands = true)]
#[command(name = "modalswap")]
#[command(version)]
#[command(about = "Replace per-page logout modals with the shared component")]
#[command(long_about = "modalswap rewrites page templates in place, replacing every custom logout modal block with the standardized sidebar toggle script and logout modal include.

EXAMPLES:
    modalswap                                  # Update the configured target list
    modalswap -n                               # Show what would change
    modalswap a.php b.php                      # Update specific files
    modalswap --root site --scan-ext php       # Update every .php file under site/
    modalswap init-config                      # Write modalswap.json with defaults
    modalswap completions bash > modalswap.bash

CONFIGURATION:
    Configuration is read from modalswap.json by default. If the file does not
    exist, the built-in target list and replacement are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => ("✅", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything; the effective level is applied through set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "modalswap", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::InitConfig { path, force }) => init_config(path, force),
        Some(Commands::Run(args)) => run(args),
        None => run(cli.run),
    }
}

fn init_config(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Config file already exists: {:?}. Use -f to overwrite.", path);
    }
    Config::default().save(&path)?;
    info!("Wrote default configuration to {:?}", path);
    Ok(())
}

fn run(options: RunArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }
    if options.always_write {
        config.write_unchanged = true;
    }

    let updater = BatchUpdater::from_config(&config, &options.root)
        .context("Configuration validation failed")?;
    let update_options = UpdateOptions {
        dry_run: options.dry_run,
        ..updater.options().clone()
    };
    let updater = updater.with_options(update_options);

    let targets: Vec<PathBuf> = if let Some(ext) = &options.scan_ext {
        FileManager::find_files(&options.root, ext)?
            .into_iter()
            .map(|p| match p.strip_prefix(&options.root) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => p.clone(),
            })
            .collect()
    } else if !options.files.is_empty() {
        options.files.clone()
    } else {
        config.files.iter().map(PathBuf::from).collect()
    };

    debug!("Processing {} target file(s) under {:?}", targets.len(), options.root);

    updater.run_batch(&targets)?;

    Ok(())
}
