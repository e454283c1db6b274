//! Directory report generation.
//!
//! This module builds the per-directory summaries shown by the default
//! `dirstat` invocation. Each requested root is walked once, counting
//! files and folders and summing file sizes; multiple roots are measured
//! in parallel. Errors encountered during the walk are collected and
//! printed to stderr in verbose mode instead of aborting the report.

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
    time::SystemTime,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::{config::ScanOptions, walker::Walk};

/// Summary of a single reported directory.
#[derive(Clone, Debug)]
pub struct DirReport {
    /// The directory this report describes.
    pub path: PathBuf,

    /// Total size of all files found, in bytes.
    pub size: u64,

    /// Number of files found.
    pub file_count: usize,

    /// Number of directories found (the root itself not included).
    pub folder_count: usize,

    /// Modification time of the root, when readable.
    pub modified: Option<SystemTime>,
}

/// Directory measurement driver.
///
/// Encapsulates the walk options and produces one [`DirReport`] per
/// requested root. Roots are processed in parallel with `rayon`; a
/// spinner indicates progress unless quiet mode is active.
#[derive(Debug)]
pub struct Reporter {
    /// Configuration options for traversal behavior
    scan_options: ScanOptions,

    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

impl Reporter {
    /// Create a new reporter with the specified scan options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self {
            scan_options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    ///
    /// When quiet mode is active the spinner is hidden, which is required
    /// for `--json` output so that only the final JSON is printed.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Measure each root and produce its report.
    ///
    /// Walk errors never fail the report; they are collected and, when the
    /// `verbose` scan option is set, printed to stderr after the spinner
    /// finishes.
    ///
    /// # Panics
    ///
    /// May panic if the progress bar template string is invalid, which
    /// cannot happen with the hardcoded template used here.
    #[must_use]
    pub fn report(&self, roots: &[PathBuf]) -> Vec<DirReport> {
        let errors = Mutex::new(Vec::<String>::new());

        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Measuring...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        };

        let reports: Vec<DirReport> = roots
            .par_iter()
            .map(|root| {
                let report = self.measure(root, &errors);
                progress.set_message(format!("Measuring... {}", root.display()));
                report
            })
            .collect();

        progress.finish_with_message("✅ Measurement complete");

        if self.scan_options.verbose {
            let errors = errors.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            for error in errors.iter() {
                eprintln!("{}", error.red());
            }
        }

        reports
    }

    /// Walk a single root, summing file sizes and counting entries.
    fn measure(&self, root: &Path, errors: &Mutex<Vec<String>>) -> DirReport {
        let mut walk_errors = Vec::new();
        let walk = Walk::new(root)
            .recursive(self.scan_options.recursive)
            .skip(self.scan_options.skip.clone())
            .max_depth(self.scan_options.max_depth);

        let mut size = 0u64;
        let mut file_count = 0usize;
        let mut folder_count = 0usize;

        for entry in walk.entries_with_errors(&mut walk_errors) {
            if entry.is_dir() {
                folder_count += 1;
            } else if entry.is_file() {
                size += entry.size();
                file_count += 1;
            }
        }

        if !walk_errors.is_empty()
            && let Ok(mut shared) = errors.lock()
        {
            shared.append(&mut walk_errors);
        }

        DirReport {
            path: root.to_path_buf(),
            size,
            file_count,
            folder_count,
            modified: std::fs::metadata(root).and_then(|m| m.modified()).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, len: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, vec![b'x'; len]).unwrap();
    }

    fn quiet_reporter(options: ScanOptions) -> Reporter {
        Reporter::new(options).with_quiet(true)
    }

    #[test]
    fn test_report_counts_and_size() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("a.bin"), 10);
        write(&dir.path().join("sub/b.bin"), 20);

        let reports = quiet_reporter(ScanOptions::default()).report(&[dir.path().to_path_buf()]);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].size, 30);
        assert_eq!(reports[0].file_count, 2);
        assert_eq!(reports[0].folder_count, 1);
        assert!(reports[0].modified.is_some());
    }

    #[test]
    fn test_report_non_recursive() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("a.bin"), 10);
        write(&dir.path().join("sub/b.bin"), 20);

        let options = ScanOptions {
            recursive: false,
            ..ScanOptions::default()
        };
        let reports = quiet_reporter(options).report(&[dir.path().to_path_buf()]);

        assert_eq!(reports[0].size, 10);
        assert_eq!(reports[0].file_count, 1);
        assert_eq!(reports[0].folder_count, 1);
    }

    #[test]
    fn test_report_skip_list() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("keep/a.bin"), 10);
        write(&dir.path().join("node_modules/b.bin"), 1000);

        let options = ScanOptions {
            skip: vec![PathBuf::from("node_modules")],
            ..ScanOptions::default()
        };
        let reports = quiet_reporter(options).report(&[dir.path().to_path_buf()]);

        assert_eq!(reports[0].size, 10);
        assert_eq!(reports[0].folder_count, 1);
    }

    #[test]
    fn test_report_multiple_roots() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("one/a.bin"), 10);
        write(&dir.path().join("two/b.bin"), 20);

        let roots = vec![dir.path().join("one"), dir.path().join("two")];
        let reports = quiet_reporter(ScanOptions::default()).report(&roots);

        assert_eq!(reports.len(), 2);
        let total: u64 = reports.iter().map(|r| r.size).sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_report_missing_root() {
        let dir = TempDir::new().unwrap();
        let reports =
            quiet_reporter(ScanOptions::default()).report(&[dir.path().join("does-not-exist")]);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].size, 0);
        assert_eq!(reports[0].file_count, 0);
        assert!(reports[0].modified.is_none());
    }
}
