//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! complete output of a report or listing run. When the `--json` flag is
//! passed, these structures are serialized to stdout as a single JSON
//! object, replacing all human-readable output.

use serde::Serialize;

use crate::report::DirReport;
use crate::utils::format_size;

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The run mode: `"report"`, `"files"` or `"folders"`.
    pub mode: String,

    /// Per-directory entries. Present for report mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directories: Option<Vec<JsonDirEntry>>,

    /// Listed names. Present for files/folders modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,
}

/// A single directory entry in the JSON report output.
#[derive(Serialize, Debug)]
pub struct JsonDirEntry {
    /// Path of the reported directory.
    pub path: String,

    /// Total size in bytes.
    pub size: u64,

    /// Human-readable formatted size (e.g. `"1.23 GB"`).
    pub size_formatted: String,

    /// Number of files found.
    pub file_count: usize,

    /// Number of directories found.
    pub folder_count: usize,
}

/// Aggregated summary across all entries.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Number of entries in the output.
    pub total_entries: usize,

    /// Total size in bytes (0 for name listings).
    pub total_size: u64,

    /// Human-readable formatted total size.
    pub total_size_formatted: String,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a slice of directory reports.
    #[must_use]
    pub fn from_reports(reports: &[DirReport]) -> Self {
        let total_size: u64 = reports.iter().map(|r| r.size).sum();

        Self {
            mode: "report".to_string(),
            directories: Some(reports.iter().map(JsonDirEntry::from_report).collect()),
            names: None,
            summary: JsonSummary {
                total_entries: reports.len(),
                total_size,
                total_size_formatted: format_size(total_size),
            },
        }
    }

    /// Build a `JsonOutput` from a name listing (`files` or `folders` mode).
    #[must_use]
    pub fn from_names(mode: &str, names: Vec<String>) -> Self {
        let total_entries = names.len();

        Self {
            mode: mode.to_string(),
            directories: None,
            names: Some(names),
            summary: JsonSummary {
                total_entries,
                total_size: 0,
                total_size_formatted: format_size(0),
            },
        }
    }
}

impl JsonDirEntry {
    /// Convert a [`DirReport`] into a `JsonDirEntry`.
    #[must_use]
    pub fn from_report(report: &DirReport) -> Self {
        Self {
            path: report.path.display().to_string(),
            size: report.size,
            size_formatted: format_size(report.size),
            file_count: report.file_count,
            folder_count: report.folder_count,
        }
    }
}
