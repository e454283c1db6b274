//! Report filtering and sorting functionality.
//!
//! This module provides functions for filtering directory reports by size
//! and for ordering them before display.

use rayon::prelude::*;
use std::time::SystemTime;

use crate::config::filter::SortCriteria;
use crate::config::{FilterOptions, SortOptions};
use crate::report::DirReport;
use crate::utils::parse_size;

/// Filter directory reports based on the minimum-size criterion.
///
/// The threshold string is parsed with [`parse_size`], which is fail-soft:
/// an unparseable threshold degrades to `0` and keeps every report.
///
/// # Examples
///
/// ```no_run
/// # use dirstat::{filtering::filter_reports, config::FilterOptions, report::DirReport};
/// # fn example(reports: Vec<DirReport>) {
/// let filter_opts = FilterOptions {
///     min_size: "100MB".to_string(),
/// };
/// let filtered = filter_reports(reports, &filter_opts);
/// # }
/// ```
#[must_use]
pub fn filter_reports(reports: Vec<DirReport>, filter_opts: &FilterOptions) -> Vec<DirReport> {
    let min_size_bytes = parse_size(&filter_opts.min_size);

    reports
        .into_par_iter()
        .filter(|report| meets_size_criteria(report, min_size_bytes))
        .collect()
}

/// Check if a report meets the size criterion.
const fn meets_size_criteria(report: &DirReport, min_size: u64) -> bool {
    report.size >= min_size
}

/// Sort directory reports in place according to the given sorting options.
///
/// When `sort_opts.criteria` is `None`, the list is left in its current
/// (argument) order. Each criterion has a natural default direction:
/// - `Size`: largest first (descending)
/// - `Age`: oldest first (ascending)
/// - `Name`: alphabetical, case-insensitive (ascending)
///
/// Setting `sort_opts.reverse` to `true` flips the resulting order.
pub fn sort_reports(reports: &mut Vec<DirReport>, sort_opts: &SortOptions) {
    let Some(criteria) = sort_opts.criteria else {
        return;
    };

    match criteria {
        SortCriteria::Size => {
            reports.sort_by(|a, b| b.size.cmp(&a.size));
        }
        SortCriteria::Age => {
            reports.sort_by_key(|r| r.modified.unwrap_or(SystemTime::UNIX_EPOCH));
        }
        SortCriteria::Name => {
            reports.sort_by(|a, b| {
                let name_a = a.path.display().to_string().to_lowercase();
                let name_b = b.path.display().to_string().to_lowercase();
                name_a.cmp(&name_b)
            });
        }
    }

    if sort_opts.reverse {
        reports.reverse();
    }
}
