//! Configuration types and option structs.
//!
//! This module collects the plain option structs that are resolved from
//! CLI arguments layered over the TOML configuration file.
//!
//! ## Main Parts
//!
//! - [`FileConfig`] - Values loaded from `~/.config/dirstat/config.toml`
//! - [`ScanOptions`] - How directory trees are walked
//! - [`FilterOptions`] - Which directories make it into the report
//! - [`SortOptions`] / [`SortCriteria`] - How the report is ordered

pub mod file;
pub mod filter;
pub mod scan;

pub use file::FileConfig;
pub use filter::{FilterOptions, SortCriteria, SortOptions};
pub use scan::ScanOptions;
