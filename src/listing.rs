//! Directory aggregation helpers.
//!
//! Thin consumers of [`Walk`](crate::walker::Walk) that answer the three
//! common questions about a directory: how big is it, which files does it
//! contain, and which subdirectories does it have. All of them are
//! fail-soft and return empty results for missing or unreadable roots.

use std::path::Path;

use crate::walker::{FsEntry, Walk};

/// Calculate the total size of all files under `path`, in bytes.
///
/// With `recursive` set, the whole subtree is summed; otherwise only the
/// files directly inside `path` count. Returns 0 if the path does not
/// exist or cannot be traversed.
#[must_use]
pub fn dir_size(path: &Path, recursive: bool) -> u64 {
    Walk::new(path)
        .recursive(recursive)
        .entries()
        .filter(FsEntry::is_file)
        .map(|entry| entry.size())
        .sum()
}

/// Collect file names under `path`.
///
/// When `extension` is given, only files with that extension (matched
/// case-insensitively, without the leading dot) are returned. With
/// `trim_extension` set, the extension is removed from the returned names.
/// Directories are never included; recursion into subdirectories is
/// controlled by `recursive`.
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// # use dirstat::listing::collect_files;
/// let stems = collect_files(Path::new("posters"), Some("jpg"), false, true);
/// ```
#[must_use]
pub fn collect_files(
    path: &Path,
    extension: Option<&str>,
    recursive: bool,
    trim_extension: bool,
) -> Vec<String> {
    Walk::new(path)
        .recursive(recursive)
        .entries()
        .filter(|entry| entry.is_file())
        .filter(|entry| {
            extension.is_none_or(|ext| {
                Path::new(&entry.name)
                    .extension()
                    .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
            })
        })
        .map(|entry| {
            if trim_extension {
                Path::new(&entry.name)
                    .file_stem()
                    .map_or(entry.name.clone(), |stem| {
                        stem.to_string_lossy().into_owned()
                    })
            } else {
                entry.name
            }
        })
        .collect()
}

/// Collect the names of the immediate subdirectories of `path`.
///
/// Never recursive; nested directories are not reported.
#[must_use]
pub fn collect_folders(path: &Path) -> Vec<String> {
    Walk::new(path)
        .recursive(false)
        .entries()
        .filter(FsEntry::is_dir)
        .map(|entry| entry.name)
        .collect()
}
