//! File metadata helpers.
//!
//! Small fail-soft wrappers around `std::fs` metadata queries: existence
//! checks, file sizes, modification age, and file-name sanitization.
//! None of these return errors; a missing or unreadable path degrades to
//! `false`, `0`, or `None`.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};

/// Whether `path` exists and is a regular file.
///
/// An empty path is always reported as absent.
#[must_use]
pub fn file_exists(path: &Path) -> bool {
    !path.as_os_str().is_empty() && fs::metadata(path).is_ok_and(|m| m.is_file())
}

/// Whether `path` exists and is a directory.
#[must_use]
pub fn folder_exists(path: &Path) -> bool {
    !path.as_os_str().is_empty() && fs::metadata(path).is_ok_and(|m| m.is_dir())
}

/// Whether `path` exists at all, regardless of kind.
#[must_use]
pub fn path_exists(path: &Path) -> bool {
    !path.as_os_str().is_empty() && fs::metadata(path).is_ok()
}

/// Size of the file at `path` in bytes, or 0 when it cannot be read.
#[must_use]
pub fn file_size(path: &Path) -> u64 {
    fs::metadata(path).map_or(0, |m| m.len())
}

/// Time elapsed since the file at `path` was last modified.
///
/// Returns `None` when the path or its modification time cannot be read,
/// or when the modification time lies in the future.
#[must_use]
pub fn file_age(path: &Path) -> Option<Duration> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    SystemTime::now().duration_since(modified).ok()
}

/// Local date (`YYYY-MM-DD`) the file at `path` was last modified.
///
/// Returns `None` when the modification time cannot be read.
#[must_use]
pub fn last_modified_date(path: &Path) -> Option<String> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let local: DateTime<Local> = modified.into();
    Some(local.format("%Y-%m-%d").to_string())
}

/// Remove characters that are invalid in file names.
///
/// Strips `\ / : * ? " < > |` and returns the remainder.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .collect()
}
