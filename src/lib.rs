//! # dirstat
//!
//! A small library (and CLI tool) for reporting directory sizes and
//! contents. The core is a pair of byte-size conversion functions —
//! [`utils::parse_size`] and [`utils::format_size`] — and a lazy,
//! depth-first directory walker ([`walker::Walk`]) that the aggregation
//! helpers in [`listing`] and the report driver in [`report`] consume.
//!
//! All filesystem-facing functions are fail-soft: missing paths and
//! unreadable entries degrade to zero/empty results instead of errors,
//! which keeps the tool usable on trees with permission holes.
//!
//! ## Main Parts
//!
//! - [`utils`] - Byte-size parsing and formatting
//! - [`walker`] - Lazy directory traversal
//! - [`listing`] - Directory aggregations (size, file names, folder names)
//! - [`meta`] - File metadata helpers (existence, size, age)
//! - [`report`] - Per-directory report generation
//! - [`filtering`] - Report filtering and sorting
//! - [`output`] - JSON output structures for `--json`
//! - [`config`] - Option structs and the TOML config file

pub mod config;
pub mod filtering;
pub mod listing;
pub mod meta;
pub mod output;
pub mod report;
pub mod utils;
pub mod walker;

pub use config::{FilterOptions, ScanOptions, SortOptions};
pub use report::{DirReport, Reporter};
pub use utils::{format_size, parse_size};
