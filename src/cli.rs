//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library. It provides structured access
//! to user input and handles argument conflicts and defaults.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dirstat::config::file::{FileConfig, expand_tilde};
use dirstat::config::{FilterOptions, ScanOptions, SortCriteria, SortOptions};

/// Command-line arguments for filtering and ordering the report.
///
/// These options control which directories appear in the report and how
/// they are sorted before display.
#[derive(Parser)]
struct FilteringArgs {
    /// Hide directories with a total size smaller than the specified value
    ///
    /// Supports various size formats:
    /// - Decimal: KB, MB, GB (base 1000)
    /// - Binary: KiB, MiB, GiB (base 1024)
    /// - Bytes: plain numbers
    /// - Fractional values: 1.5MB, 2.5GiB, etc.
    ///
    /// Parsing is fail-soft; an unrecognized value behaves like 0.
    #[arg(short = 's', long)]
    min_size: Option<String>,

    /// Sort directories by the given criterion before display
    ///
    /// Supported values: size (largest first), age (oldest first),
    /// name (alphabetical). Use --reverse to flip the order.
    #[arg(long, value_enum)]
    sort: Option<SortCriteria>,

    /// Reverse the sort order
    ///
    /// When used with --sort, reverses the default ordering direction.
    /// For example, --sort size --reverse shows smallest directories first.
    #[arg(long)]
    reverse: bool,
}

/// Command-line arguments for controlling directory scanning behavior.
///
/// These options affect how directory trees are traversed and what
/// information is collected while measuring.
#[derive(Parser)]
struct ScanningArgs {
    /// Only measure the immediate children of each directory
    ///
    /// By default the whole subtree of every requested directory is
    /// traversed. With this flag, nested subdirectories are not descended
    /// into.
    #[arg(long)]
    no_recursive: bool,

    /// Directory names to skip during scanning
    ///
    /// Matching directories are not measured and not descended into. Can be
    /// specified multiple times.
    #[arg(long, action = clap::ArgAction::Append)]
    skip: Vec<PathBuf>,

    /// Maximum directory depth to scan
    ///
    /// Limits how deep into the directory tree the walker will traverse.
    /// A value of 1 scans only the immediate children of each root.
    /// When not set, the scan is unlimited.
    #[arg(long)]
    max_depth: Option<usize>,

    /// The number of threads to use for measuring multiple directories
    ///
    /// A value of 0 uses the default number of threads (typically the number
    /// of CPU cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Show access errors that occur while scanning
    ///
    /// When enabled, displays errors encountered while accessing files or
    /// directories during the scan. Useful for debugging permission issues.
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// List file names inside a directory
    Files {
        /// The directory to list
        dir: PathBuf,

        /// Only list files with this extension (without the leading dot)
        #[arg(short = 'e', long)]
        extension: Option<String>,

        /// Strip the extension from the listed names
        #[arg(long)]
        trim_extension: bool,

        /// Recurse into subdirectories
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// List the immediate subdirectories of a directory
    Folders {
        /// The directory to list
        dir: PathBuf,
    },

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// This struct defines the complete command-line interface for the dirstat
/// tool, combining all argument groups and providing the main entry point
/// for command parsing.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values
/// act as defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "dirstat")]
#[command(about = "Report directory sizes and contents with human-readable output")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand (e.g. `files`, `folders`, `config`)
    #[command(subcommand)]
    pub subcommand: Option<Commands>,

    /// One or more directories to report on
    ///
    /// Defaults to the current directory if not specified. Multiple
    /// directories can be provided: `dirstat ~/Videos ~/Downloads`
    #[arg(num_args = 0..)]
    dirs: Vec<PathBuf>,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, progress bars)
    /// is suppressed and a single JSON document is printed to stdout.
    #[arg(long)]
    json: bool,

    /// Filtering options
    #[command(flatten)]
    filtering: FilteringArgs,

    /// Scanning options
    #[command(flatten)]
    scanning: ScanningArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the target directories from CLI args, config file, or default.
    ///
    /// Priority: CLI arguments > config file `dirs` > config file `dir` >
    /// current directory (`.`). Tilde expansion is applied to paths
    /// originating from the config file.
    #[must_use]
    pub fn directories(&self, config: &FileConfig) -> Vec<PathBuf> {
        if !self.dirs.is_empty() {
            return self.dirs.clone();
        }

        if let Some(ref dirs) = config.dirs
            && !dirs.is_empty()
        {
            return dirs.iter().map(|d| expand_tilde(d)).collect();
        }

        if let Some(ref dir) = config.dir {
            return vec![expand_tilde(dir)];
        }

        vec![PathBuf::from(".")]
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **recursive**: `--no-recursive` wins, then the config value, then `true`
    /// - **skip**: merged from both sources (config values first, then CLI)
    /// - **`max_depth`** / **threads**: CLI > config > default
    /// - **verbose**: CLI flag `||` config value `||` `false`
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let mut skip = config.scanning.skip.clone().unwrap_or_default();
        skip.extend(self.scanning.skip.clone());

        ScanOptions {
            recursive: !self.scanning.no_recursive && config.scanning.recursive.unwrap_or(true),
            skip,
            max_depth: self.scanning.max_depth.or(config.scanning.max_depth),
            threads: self
                .scanning
                .threads
                .or(config.scanning.threads)
                .unwrap_or(0),
            verbose: self.scanning.verbose || config.scanning.verbose.unwrap_or(false),
        }
    }

    /// Extract filtering options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > hardcoded default (`"0"`).
    #[must_use]
    pub fn filter_options(&self, config: &FileConfig) -> FilterOptions {
        FilterOptions {
            min_size: self
                .filtering
                .min_size
                .clone()
                .or_else(|| config.filtering.min_size.clone())
                .unwrap_or_else(|| "0".to_string()),
        }
    }

    /// Extract sorting options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (no sorting).
    #[must_use]
    pub fn sort_options(&self, config: &FileConfig) -> SortOptions {
        SortOptions {
            criteria: self.filtering.sort.or_else(|| {
                config
                    .filtering
                    .sort
                    .as_deref()
                    .and_then(SortCriteria::from_config_str)
            }),
            reverse: self.filtering.reverse || config.filtering.reverse.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use dirstat::config::file::{FileFilterConfig, FileScanConfig};

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["dirstat"]);
        let config = FileConfig::default();

        assert_eq!(args.directories(&config), vec![PathBuf::from(".")]);
        assert!(!args.json());

        let scan_opts = args.scan_options(&config);
        assert!(scan_opts.recursive);
        assert!(scan_opts.skip.is_empty());
        assert!(scan_opts.max_depth.is_none());
        assert_eq!(scan_opts.threads, 0);
        assert!(!scan_opts.verbose);

        let filter_opts = args.filter_options(&config);
        assert_eq!(filter_opts.min_size, "0");

        let sort_opts = args.sort_options(&config);
        assert!(sort_opts.criteria.is_none());
        assert!(!sort_opts.reverse);
    }

    #[test]
    fn test_multiple_directories() {
        let args = Cli::parse_from(["dirstat", "/path/a", "/path/b"]);
        let config = FileConfig::default();

        assert_eq!(
            args.directories(&config),
            vec![PathBuf::from("/path/a"), PathBuf::from("/path/b")]
        );
    }

    #[test]
    fn test_cli_dirs_override_config() {
        let args = Cli::parse_from(["dirstat", "/cli/dir"]);
        let config = FileConfig {
            dirs: Some(vec![PathBuf::from("/config/dir")]),
            ..FileConfig::default()
        };

        assert_eq!(args.directories(&config), vec![PathBuf::from("/cli/dir")]);
    }

    #[test]
    fn test_config_dirs_used_when_no_cli_dirs() {
        let args = Cli::parse_from(["dirstat"]);
        let config = FileConfig {
            dirs: Some(vec![PathBuf::from("/config/dir")]),
            ..FileConfig::default()
        };

        assert_eq!(
            args.directories(&config),
            vec![PathBuf::from("/config/dir")]
        );
    }

    #[test]
    fn test_scan_options_from_cli() {
        let args = Cli::parse_from([
            "dirstat",
            "--no-recursive",
            "--skip",
            ".git",
            "--max-depth",
            "3",
            "--threads",
            "4",
            "--verbose",
        ]);
        let options = args.scan_options(&FileConfig::default());

        assert!(!options.recursive);
        assert_eq!(options.skip, vec![PathBuf::from(".git")]);
        assert_eq!(options.max_depth, Some(3));
        assert_eq!(options.threads, 4);
        assert!(options.verbose);
    }

    #[test]
    fn test_scan_options_merge_skip_lists() {
        let args = Cli::parse_from(["dirstat", "--skip", "vendor"]);
        let config = FileConfig {
            scanning: FileScanConfig {
                skip: Some(vec![PathBuf::from(".git")]),
                ..FileScanConfig::default()
            },
            ..FileConfig::default()
        };

        let options = args.scan_options(&config);
        assert_eq!(
            options.skip,
            vec![PathBuf::from(".git"), PathBuf::from("vendor")]
        );
    }

    #[test]
    fn test_no_recursive_flag_beats_config() {
        let args = Cli::parse_from(["dirstat", "--no-recursive"]);
        let config = FileConfig {
            scanning: FileScanConfig {
                recursive: Some(true),
                ..FileScanConfig::default()
            },
            ..FileConfig::default()
        };

        assert!(!args.scan_options(&config).recursive);
    }

    #[test]
    fn test_filter_options_config_fallback() {
        let args = Cli::parse_from(["dirstat"]);
        let config = FileConfig {
            filtering: FileFilterConfig {
                min_size: Some("50MB".to_string()),
                ..FileFilterConfig::default()
            },
            ..FileConfig::default()
        };

        assert_eq!(args.filter_options(&config).min_size, "50MB");

        let cli_args = Cli::parse_from(["dirstat", "--min-size", "100MB"]);
        assert_eq!(cli_args.filter_options(&config).min_size, "100MB");
    }

    #[test]
    fn test_sort_options() {
        let args = Cli::parse_from(["dirstat", "--sort", "size", "--reverse"]);
        let sort_opts = args.sort_options(&FileConfig::default());

        assert_eq!(sort_opts.criteria, Some(SortCriteria::Size));
        assert!(sort_opts.reverse);
    }

    #[test]
    fn test_sort_options_from_config() {
        let args = Cli::parse_from(["dirstat"]);
        let config = FileConfig {
            filtering: FileFilterConfig {
                sort: Some("name".to_string()),
                ..FileFilterConfig::default()
            },
            ..FileConfig::default()
        };

        assert_eq!(
            args.sort_options(&config).criteria,
            Some(SortCriteria::Name)
        );
    }

    #[test]
    fn test_files_subcommand() {
        let args = Cli::parse_from([
            "dirstat",
            "files",
            "/videos",
            "--extension",
            "mkv",
            "--trim-extension",
            "--recursive",
        ]);

        match args.subcommand {
            Some(Commands::Files {
                dir,
                extension,
                trim_extension,
                recursive,
            }) => {
                assert_eq!(dir, PathBuf::from("/videos"));
                assert_eq!(extension.as_deref(), Some("mkv"));
                assert!(trim_extension);
                assert!(recursive);
            }
            _ => panic!("expected files subcommand"),
        }
    }

    #[test]
    fn test_folders_subcommand() {
        let args = Cli::parse_from(["dirstat", "folders", "/videos"]);

        match args.subcommand {
            Some(Commands::Folders { dir }) => assert_eq!(dir, PathBuf::from("/videos")),
            _ => panic!("expected folders subcommand"),
        }
    }

    #[test]
    fn test_json_flag() {
        let args = Cli::parse_from(["dirstat", "--json"]);
        assert!(args.json());
    }
}
