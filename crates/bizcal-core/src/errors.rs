//! Error types for bizcal.
//!
//! Every failure in the calendar engine is fail-fast and surfaced to the
//! caller through a single `thiserror`-derived enum. The `ensure!` and
//! `fail!` macros defined here are the shorthand used at the raise sites.

use chrono::NaiveDate;
use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No calendar lines were supplied.
    #[error("invalid calendar spec: no calendar lines given")]
    InvalidCalendarSpec,

    /// The supplied years do not form a contiguous run.
    #[error("incomplete calendar spec: {count} years given for range [{min_year}, {max_year}]")]
    IncompleteCalendarSpec {
        /// Smallest year supplied.
        min_year: i32,
        /// Largest year supplied.
        max_year: i32,
        /// Number of distinct years supplied.
        count: usize,
    },

    /// A calendar line is not of the form `YEAR: item,item,...`.
    #[error("malformed calendar line {0:?}")]
    MalformedCalendarLine(String),

    /// A range text contains more than one hyphen, or an unusable side.
    #[error("invalid range spec {0:?}")]
    InvalidRangeSpec(String),

    /// A compact date spec whose length is not 4, 6, or 8 digits.
    #[error("invalid date spec {0:?}")]
    InvalidDateSpec(String),

    /// A numeric date code outside `[19000000, 29999999]`.
    #[error("invalid date number {0}")]
    InvalidDateNumber(i64),

    /// A year/month/day triple that names no calendar day.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// A date falls outside the years covered by its calendar.
    #[error("{date} outside [{min_year}, {max_year}]")]
    DateOutOfRange {
        /// The offending date.
        date: NaiveDate,
        /// First year covered by the calendar.
        min_year: i32,
        /// Last year covered by the calendar.
        max_year: i32,
    },

    /// A range indexing request that is not a single spec or a pair.
    #[error("unsupported range shape: {0}")]
    UnsupportedRangeShape(String),
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function unless `$cond` holds.
///
/// # Example
/// ```
/// use bizcal_core::{ensure, errors::{Error, Result}};
/// fn digits(spec: &str) -> Result<&str> {
///     ensure!(spec.len() == 8, Error::InvalidDateSpec(spec.to_string()));
///     Ok(spec)
/// }
/// assert!(digits("20240101").is_ok());
/// assert!(digits("2024").is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return `Err($err)` immediately.
///
/// # Example
/// ```
/// use bizcal_core::{fail, errors::{Error, Result}};
/// fn always_err() -> Result<()> {
///     fail!(Error::InvalidCalendarSpec);
/// }
/// assert_eq!(always_err(), Err(Error::InvalidCalendarSpec));
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_offending_input() {
        let err = Error::InvalidRangeSpec("1-2-3".into());
        assert_eq!(err.to_string(), "invalid range spec \"1-2-3\"");

        let err = Error::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            min_year: 2023,
            max_year: 2025,
        };
        assert_eq!(err.to_string(), "2026-01-02 outside [2023, 2025]");

        let err = Error::InvalidDate { year: 2023, month: 2, day: 29 };
        assert_eq!(err.to_string(), "invalid date 2023-02-29");
    }

    #[test]
    fn incomplete_spec_message() {
        let err = Error::IncompleteCalendarSpec { min_year: 2020, max_year: 2024, count: 3 };
        assert_eq!(
            err.to_string(),
            "incomplete calendar spec: 3 years given for range [2020, 2024]"
        );
    }
}
