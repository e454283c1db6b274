//! Lazy directory traversal.
//!
//! This module wraps [`walkdir`] in a small builder, [`Walk`], that yields
//! one [`FsEntry`] per directory entry under a root path. Traversal is
//! depth-first and fail-soft: entries that cannot be read (permission
//! denied, broken symlinks, vanished files) are skipped, and the error
//! messages are collected for optional display in verbose mode.
//!
//! Consumers that want to stop early simply stop pulling from the
//! iterator; there is no separate cancellation mechanism.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A single entry produced by a [`Walk`].
///
/// Carries the root the walk started from, the entry's full path and bare
/// file name, and its metadata when it could be read.
#[derive(Debug)]
pub struct FsEntry {
    /// The root path the walk started from.
    pub root: PathBuf,

    /// Full path of this entry.
    pub path: PathBuf,

    /// Bare file name of this entry (lossy UTF-8).
    pub name: String,

    /// Entry metadata, or `None` if it could not be read.
    pub metadata: Option<std::fs::Metadata>,
}

impl FsEntry {
    /// Whether this entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata.as_ref().is_some_and(std::fs::Metadata::is_dir)
    }

    /// Whether this entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.metadata
            .as_ref()
            .is_some_and(std::fs::Metadata::is_file)
    }

    /// File size in bytes, or 0 when metadata is unavailable.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.metadata.as_ref().map_or(0, std::fs::Metadata::len)
    }
}

/// Builder for a lazy, depth-first directory walk.
///
/// By default the walk is fully recursive. [`Walk::recursive`] with
/// `false` restricts it to the immediate children of the root, [`Walk::skip`]
/// prunes directories by bare name, and [`Walk::max_depth`] caps the
/// traversal depth. The root entry itself is never yielded.
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// # use dirstat::walker::Walk;
/// let total: u64 = Walk::new(Path::new("/var/log"))
///     .recursive(true)
///     .entries()
///     .filter(|e| e.is_file())
///     .map(|e| e.size())
///     .sum();
/// ```
#[derive(Debug)]
pub struct Walk {
    root: PathBuf,
    recursive: bool,
    skip: Vec<PathBuf>,
    max_depth: Option<usize>,
}

impl Walk {
    /// Create a fully-recursive walk rooted at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            recursive: true,
            skip: Vec::new(),
            max_depth: None,
        }
    }

    /// Enable or disable recursion into subdirectories.
    ///
    /// When disabled, only the immediate children of the root are yielded.
    #[must_use]
    pub const fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Prune directories whose bare name matches an entry in `skip`.
    ///
    /// Pruned directories are not yielded and are not descended into.
    #[must_use]
    pub fn skip(mut self, skip: Vec<PathBuf>) -> Self {
        self.skip = skip;
        self
    }

    /// Cap the traversal depth (1 = immediate children only).
    ///
    /// `None` leaves the depth unlimited. When recursion is disabled the
    /// effective depth is always 1 regardless of this setting.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Run the walk, yielding entries lazily.
    ///
    /// Unreadable entries are skipped silently. Use [`Walk::entries_with_errors`]
    /// to also collect their error messages.
    pub fn entries(self) -> impl Iterator<Item = FsEntry> {
        self.walk(None)
    }

    /// Run the walk, pushing error messages for unreadable entries into
    /// `errors` as they are encountered.
    ///
    /// The iterator borrows `errors` mutably for its whole lifetime, so
    /// collect or fold it before inspecting the error list.
    pub fn entries_with_errors<'a>(
        self,
        errors: &'a mut Vec<String>,
    ) -> impl Iterator<Item = FsEntry> + 'a {
        self.walk(Some(errors))
    }

    fn walk(self, mut errors: Option<&mut Vec<String>>) -> impl Iterator<Item = FsEntry> + '_ {
        let Self {
            root,
            recursive,
            skip,
            max_depth,
        } = self;

        let depth = if recursive {
            max_depth.unwrap_or(usize::MAX)
        } else {
            1
        };

        let walker = WalkDir::new(&root)
            .max_depth(depth)
            .into_iter()
            .filter_entry(move |entry| {
                // The root always passes; pruning it would end the walk.
                entry.depth() == 0 || !is_skipped(entry.file_name(), &skip)
            });

        let entry_root = root;
        walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    if let Some(errors) = errors.as_deref_mut() {
                        errors.push(format!("Error accessing entry: {err}"));
                    }
                    return None;
                }
            };

            if entry.depth() == 0 {
                return None;
            }

            let metadata = entry.metadata().ok();
            Some(FsEntry {
                root: entry_root.clone(),
                path: entry.path().to_path_buf(),
                name: entry.file_name().to_string_lossy().into_owned(),
                metadata,
            })
        })
    }
}

/// Check whether a bare file name matches any skip-list entry.
fn is_skipped(name: &std::ffi::OsStr, skip: &[PathBuf]) -> bool {
    skip.iter()
        .any(|s| s.as_os_str().to_string_lossy() == name.to_string_lossy())
}
