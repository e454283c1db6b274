//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how directory trees are
//! walked and what information is collected along the way.

use std::path::PathBuf;

/// Configuration for directory scanning behavior.
///
/// This struct contains options that control how directories are traversed
/// and what information is collected during the scanning process.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Whether to recurse into subdirectories
    pub recursive: bool,

    /// List of directory names to skip during scanning
    pub skip: Vec<PathBuf>,

    /// Maximum directory depth to scan (None = unlimited)
    pub max_depth: Option<usize>,

    /// Number of threads to use for scanning (0 = default)
    pub threads: usize,

    /// Whether to show verbose output including scan errors
    pub verbose: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            skip: Vec::new(),
            max_depth: None,
            threads: 0,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_options_default() {
        let scan_opts = ScanOptions::default();

        assert!(scan_opts.recursive);
        assert!(scan_opts.skip.is_empty());
        assert!(scan_opts.max_depth.is_none());
        assert_eq!(scan_opts.threads, 0);
        assert!(!scan_opts.verbose);
    }

    #[test]
    fn test_scan_options_clone() {
        let original = ScanOptions {
            recursive: false,
            skip: vec![PathBuf::from(".git")],
            max_depth: Some(3),
            threads: 4,
            verbose: true,
        };
        let cloned = original.clone();

        assert_eq!(original.recursive, cloned.recursive);
        assert_eq!(original.skip, cloned.skip);
        assert_eq!(original.max_depth, cloned.max_depth);
        assert_eq!(original.threads, cloned.threads);
        assert_eq!(original.verbose, cloned.verbose);
    }
}
