//! Byte-size parsing and formatting utilities.
//!
//! This module provides the two conversion functions at the heart of the
//! crate: [`parse_size`] turns a human-authored size string (like
//! `"100 MB"` or `"1.5GiB"`) into an exact byte count, and [`format_size`]
//! renders a byte count back into a short human-readable string.
//!
//! The two functions intentionally do not share a unit table. The parser
//! distinguishes decimal (`KB` = 1000) from binary (`KiB` = 1024) units,
//! while the formatter divides by powers of 1024 but labels the result
//! `KB`/`MB`/`GB`. Both behaviors are long-standing contracts and are kept
//! independent; do not unify them.

/// Parse a human-readable size string into bytes.
///
/// Supports both decimal (KB, MB, GB) and binary (KiB, MiB, GiB) units,
/// matched case-insensitively, as well as fractional magnitudes
/// (e.g. `"1.5 GiB"`). A string without a unit is taken as a raw byte
/// count. Trailing periods and carriage returns are tolerated, and all
/// spaces are stripped before parsing, so `"1.5 GiB.\r"` parses the same
/// as `"1.5GiB"`.
///
/// Parsing is fail-soft: this function never errors. Malformed numeric
/// text yields a magnitude of zero, an unrecognized unit is treated as a
/// multiplier of one, and negative magnitudes clamp to zero. The result
/// is the floor of `magnitude * multiplier`.
///
/// # Examples
///
/// ```
/// # use dirstat::utils::parse_size;
/// assert_eq!(parse_size("1000"), 1000);
/// assert_eq!(parse_size("1KB"), 1000);
/// assert_eq!(parse_size("1KiB"), 1024);
/// assert_eq!(parse_size("1.5 GiB"), 1_610_612_736);
/// assert_eq!(parse_size("garbage"), 0);
/// ```
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn parse_size(raw: &str) -> u64 {
    let cleaned: String = raw
        .trim_end_matches(['.', '\r'])
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    let (value, unit) = split_unit(&cleaned);
    let multiplier = unit_multiplier(unit.trim());
    let magnitude: f64 = value.parse().unwrap_or(0.0);

    // `as` saturates, so negative magnitudes land on 0 and overflow on u64::MAX.
    (multiplier as f64 * magnitude).floor() as u64
}

/// Split a cleaned size string into its numeric part and trailing unit.
///
/// The unit is the contiguous run of non-numeric characters at the end of
/// the string, where numeric means an ASCII digit or a decimal point.
/// Strings shorter than two characters skip unit extraction entirely and
/// are treated as unit-less.
fn split_unit(cleaned: &str) -> (&str, &str) {
    if cleaned.len() < 2 {
        return (cleaned, "");
    }

    let split_at = cleaned
        .rfind(|c: char| c.is_ascii_digit() || c == '.')
        .map_or(0, |i| i + 1);

    cleaned.split_at(split_at)
}

/// Look up the byte multiplier for a unit token, case-insensitively.
///
/// Unrecognized or empty units fall back to `1` (raw bytes).
fn unit_multiplier(unit: &str) -> u64 {
    const UNITS: &[(&str, u64)] = &[
        ("KB", 1_000),
        ("KiB", 1_024),
        ("MB", 1_000_000),
        ("MiB", 1_048_576),
        ("GB", 1_000_000_000),
        ("GiB", 1_073_741_824),
    ];

    UNITS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(unit))
        .map_or(1, |(_, multiplier)| *multiplier)
}

/// Format a byte count as a short human-readable string.
///
/// Magnitude boundaries are binary powers compared with a strict
/// greater-than, so exactly 2^30 bytes still formats in the MB branch:
/// `format_size(1_073_741_824)` is `"1024.00 MB"` while
/// `format_size(1_073_741_825)` is `"1.00 GB"`. Converted values carry
/// exactly two fractional digits; values of 1024 bytes and below are
/// printed as a plain integer with the suffix `"bytes"`.
///
/// Note that the `KB`/`MB`/`GB` labels here denote 1024-based magnitudes,
/// unlike [`parse_size`]'s unit table. See the module docs.
///
/// # Examples
///
/// ```
/// # use dirstat::utils::format_size;
/// assert_eq!(format_size(500), "500 bytes");
/// assert_eq!(format_size(2048), "2.00 KB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1 << 10;
    const MB: u64 = 1 << 20;
    const GB: u64 = 1 << 30;

    if bytes > GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes > MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes > KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_plain_bytes() {
        assert_eq!(parse_size("1000"), 1000);
        assert_eq!(parse_size("12345"), 12345);
        assert_eq!(parse_size("1"), 1);
        assert_eq!(parse_size("0"), 0);
    }

    #[test]
    fn test_parse_size_decimal_units() {
        assert_eq!(parse_size("1KB"), 1_000);
        assert_eq!(parse_size("100KB"), 100_000);
        assert_eq!(parse_size("1MB"), 1_000_000);
        assert_eq!(parse_size("5MB"), 5_000_000);
        assert_eq!(parse_size("1GB"), 1_000_000_000);
        assert_eq!(parse_size("2GB"), 2_000_000_000);
    }

    #[test]
    fn test_parse_size_binary_units() {
        assert_eq!(parse_size("1KiB"), 1_024);
        assert_eq!(parse_size("1MiB"), 1_048_576);
        assert_eq!(parse_size("1GiB"), 1_073_741_824);
        assert_eq!(parse_size("2KiB"), 2_048);
        assert_eq!(parse_size("10MiB"), 10_485_760);
    }

    #[test]
    fn test_parse_size_case_insensitive() {
        assert_eq!(parse_size("1kb"), 1_000);
        assert_eq!(parse_size("1Kb"), 1_000);
        assert_eq!(parse_size("1kB"), 1_000);
        assert_eq!(parse_size("1mb"), 1_000_000);
        assert_eq!(parse_size("1mib"), 1_048_576);
        assert_eq!(parse_size("1GIB"), 1_073_741_824);
    }

    #[test]
    fn test_parse_size_fractional_values() {
        assert_eq!(parse_size("1.5KB"), 1_500);
        assert_eq!(parse_size("2.5MB"), 2_500_000);
        assert_eq!(parse_size("1.5MiB"), 1_572_864);
        assert_eq!(parse_size("1.5 GiB"), 1_610_612_736);
        assert_eq!(parse_size("0.5GB"), 500_000_000);
    }

    #[test]
    fn test_parse_size_tolerates_noise() {
        assert_eq!(parse_size("1 KiB"), 1_024);
        assert_eq!(parse_size("1.5 GiB.\r"), 1_610_612_736);
        assert_eq!(parse_size(" 2 KB "), 2_000);
        assert_eq!(parse_size("100."), 100);
    }

    #[test]
    fn test_parse_size_fail_soft() {
        assert_eq!(parse_size(""), 0);
        assert_eq!(parse_size("abc"), 0);
        assert_eq!(parse_size("MB"), 0);
        assert_eq!(parse_size("1.2.3MB"), 0);
        assert_eq!(parse_size("1XB"), 1);
    }

    #[test]
    fn test_parse_size_negative_clamps_to_zero() {
        assert_eq!(parse_size("-1MB"), 0);
        assert_eq!(parse_size("-500"), 0);
    }

    #[test]
    fn test_parse_size_short_input_skips_unit() {
        // Single-character inputs never get a unit extracted.
        assert_eq!(parse_size("5"), 5);
        assert_eq!(parse_size("k"), 0);
    }

    #[test]
    fn test_split_unit() {
        assert_eq!(split_unit("100GB"), ("100", "GB"));
        assert_eq!(split_unit("2.5KiB"), ("2.5", "KiB"));
        assert_eq!(split_unit("1024"), ("1024", ""));
        assert_eq!(split_unit("abc"), ("", "abc"));
        assert_eq!(split_unit("k"), ("k", ""));
    }

    #[test]
    fn test_unit_multiplier() {
        assert_eq!(unit_multiplier("KB"), 1_000);
        assert_eq!(unit_multiplier("kib"), 1_024);
        assert_eq!(unit_multiplier("GiB"), 1_073_741_824);
        assert_eq!(unit_multiplier(""), 1);
        assert_eq!(unit_multiplier("XB"), 1);
    }

    #[test]
    fn test_format_size_bytes_branch() {
        assert_eq!(format_size(0), "0 bytes");
        assert_eq!(format_size(500), "500 bytes");
        assert_eq!(format_size(1024), "1024 bytes");
    }

    #[test]
    fn test_format_size_converted_branches() {
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(2 * 1024 * 1024), "2.00 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }

    #[test]
    fn test_format_size_strict_boundaries() {
        // Exactly 2^10 / 2^20 / 2^30 stay in the lower branch.
        assert_eq!(format_size(1 << 10), "1024 bytes");
        assert_eq!(format_size((1 << 10) + 1), "1.00 KB");
        assert_eq!(format_size(1 << 20), "1024.00 KB");
        assert_eq!(format_size((1 << 20) + 1), "1.00 MB");
        assert_eq!(format_size(1 << 30), "1024.00 MB");
        assert_eq!(format_size((1 << 30) + 1), "1.00 GB");
    }

    #[test]
    fn test_format_size_single_space() {
        for n in [0u64, 1, 1023, 1025, 1 << 20, (1 << 20) + 1, 1 << 40] {
            let formatted = format_size(n);
            assert_eq!(
                formatted.matches(' ').count(),
                1,
                "expected one space in {formatted:?}"
            );
        }
    }

    #[test]
    fn test_round_trip_same_magnitude() {
        // The round trip is lossy (two decimals, mismatched unit tables),
        // but stays within the same order of magnitude.
        for n in [5_000u64, 3 << 20, 7 << 30] {
            let reparsed = parse_size(&format_size(n));
            assert!(reparsed > n / 2 && reparsed < n * 2, "{n} -> {reparsed}");
        }
    }
}
