//! Filtering and sorting configuration for the directory report.
//!
//! This module defines the filtering options and sorting criteria used to
//! decide which directories appear in the report and in what order.

use clap::ValueEnum;

/// Configuration for report filtering criteria.
///
/// The size threshold is kept as the raw string the user supplied; it is
/// parsed (fail-soft) by [`crate::utils::parse_size`] when the filter is
/// applied.
#[derive(Clone, Debug)]
pub struct FilterOptions {
    /// Minimum size threshold for reported directories (e.g., `"50MB"`)
    pub min_size: String,
}

/// Enumeration of supported sorting criteria for the report output.
///
/// This enum determines how directories are ordered in the output.
/// Each variant has a natural default direction:
/// - `Size`: largest first (descending)
/// - `Age`: oldest first (ascending)
/// - `Name`: alphabetical (ascending)
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum SortCriteria {
    /// Sort by total size (largest first by default)
    Size,

    /// Sort by modification time (oldest first by default)
    Age,

    /// Sort by directory name alphabetically (A-Z by default)
    Name,
}

impl SortCriteria {
    /// Parse a config-file string into a criterion (`"size"`, `"age"`, `"name"`).
    #[must_use]
    pub fn from_config_str(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }
}

/// Configuration for report sorting behavior.
///
/// Controls how the list of directories is ordered before display.
/// When `criteria` is `None`, directories are displayed in argument order.
#[derive(Clone, Debug)]
pub struct SortOptions {
    /// The sorting criterion to apply, or `None` to preserve argument order
    pub criteria: Option<SortCriteria>,

    /// Whether to reverse the sort order
    pub reverse: bool,
}
