//! Utility functions and helpers.
//!
//! This module contains the byte-size conversion utilities used throughout
//! the application.

pub mod size;

pub use size::{format_size, parse_size};
