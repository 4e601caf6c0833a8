//! Compact date and period grammar.
//!
//! Ranges are written `A-B`, where `B` may supply only the trailing digits
//! that differ from `A`: `"0210-7"` is `"0210"` to `"0217"` and `"202401-3"`
//! is January to March 2024. A side of 8 digits names a day (`YYYYMMDD`),
//! 6 digits a month (`YYYYMM`) and 4 digits a year (`YYYY`).
//!
//! [`join_range_spec`] is the inverse of [`parse_range`]: it elides the
//! longest common prefix of the right side.

use bizcal_core::errors::{Error, Result};
use bizcal_core::{ensure, fail};
use chrono::{Datelike, Months, NaiveDate};

/// Split a range spec into its left and right sides.
///
/// A spec without a hyphen is its own left and right side. With one hyphen
/// both sides are stripped of non-digits, and a right side shorter than or as
/// long as the left one replaces the trailing digits of the left side.
///
/// ```
/// use bizcal_time::range_spec::parse_range;
///
/// assert_eq!(parse_range("0210-7").unwrap(), ("0210".into(), "0217".into()));
/// assert_eq!(parse_range("1234-56").unwrap(), ("1234".into(), "1256".into()));
/// assert_eq!(parse_range("24-2025").unwrap(), ("24".into(), "2025".into()));
/// assert!(parse_range("1-2-3").is_err());
/// ```
pub fn parse_range(spec: &str) -> Result<(String, String)> {
    let spec = spec.trim();
    let mut parts = spec.split('-');
    let (left, right) = match (parts.next(), parts.next(), parts.next()) {
        (Some(single), None, None) => return Ok((single.to_string(), single.to_string())),
        (Some(left), Some(right), None) => (digits(left), digits(right)),
        _ => fail!(Error::InvalidRangeSpec(spec.to_string())),
    };
    ensure!(!right.is_empty(), Error::InvalidRangeSpec(spec.to_string()));

    if left.len() < right.len() {
        return Ok((left, right));
    }
    let keep = left.len() - right.len();
    let expanded = format!("{}{}", &left[..keep], right);
    Ok((left, expanded))
}

/// [`parse_range`], with both sides read as integers.
///
/// ```
/// use bizcal_time::range_spec::parse_numeric_range;
///
/// assert_eq!(parse_numeric_range("0429-0503").unwrap(), (429, 503));
/// assert_eq!(parse_numeric_range("0121-27").unwrap(), (121, 127));
/// assert_eq!(parse_numeric_range("0405").unwrap(), (405, 405));
/// ```
pub fn parse_numeric_range(spec: &str) -> Result<(u32, u32)> {
    let (left, right) = parse_range(spec)?;
    let number = |side: &str| {
        digits(side)
            .parse::<u32>()
            .map_err(|_| Error::InvalidRangeSpec(spec.trim().to_string()))
    };
    Ok((number(&left)?, number(&right)?))
}

/// Expand one holiday item of a calendar line into `MMDD` codes for `year`.
///
/// A bare item names a single day. A hyphenated item names every day from
/// its left to its right side inclusive, walking the real calendar, so
/// `"0228-0301"` covers three days in a leap year and two otherwise.
///
/// Every code is checked against `year`; `"0229"` in 2023 is an
/// [`Error::InvalidDate`].
pub fn expand_year_period(year: i32, spec: &str) -> Result<Vec<u32>> {
    if !spec.contains('-') {
        let code = digits(spec)
            .parse::<u32>()
            .map_err(|_| Error::InvalidDateSpec(spec.trim().to_string()))?;
        ymd(year, code / 100, code % 100)?;
        return Ok(vec![code]);
    }

    let (begin, end) = parse_numeric_range(spec)?;
    let begin = ymd(year, begin / 100, begin % 100)?;
    let end = ymd(year, end / 100, end % 100)?;
    Ok(begin
        .iter_days()
        .take_while(|day| *day <= end)
        .map(mmdd)
        .collect())
}

/// First day of the period named by a 4, 6 or 8 digit spec.
///
/// ```
/// use bizcal_time::range_spec::first_day_of;
/// use chrono::NaiveDate;
///
/// assert_eq!(first_day_of("2024").unwrap(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(first_day_of("202405").unwrap(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
/// assert!(first_day_of("20245").is_err());
/// ```
pub fn first_day_of(spec: &str) -> Result<NaiveDate> {
    let (year, month, day) = split_date_spec(spec)?;
    ymd(year, month.unwrap_or(1), day.unwrap_or(1))
}

/// Last day of the period named by a 4, 6 or 8 digit spec.
///
/// A month spec resolves to the true last day of that month.
///
/// ```
/// use bizcal_time::range_spec::last_day_of;
/// use chrono::NaiveDate;
///
/// assert_eq!(last_day_of("202402").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(last_day_of("202202").unwrap(), NaiveDate::from_ymd_opt(2022, 2, 28).unwrap());
/// assert_eq!(last_day_of("2024").unwrap(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
/// ```
pub fn last_day_of(spec: &str) -> Result<NaiveDate> {
    match split_date_spec(spec)? {
        (year, Some(month), Some(day)) => ymd(year, month, day),
        (year, Some(month), None) => {
            let first = ymd(year, month, 1)?;
            end_of_month(first).ok_or(Error::InvalidDate { year, month, day: 31 })
        }
        (year, _, _) => ymd(year, 12, 31),
    }
}

/// Expand a compact range spec into its first and last day.
///
/// ```
/// use bizcal_time::range_spec::span_bounds;
/// use chrono::NaiveDate;
///
/// let (first, last) = span_bounds("202401-3").unwrap();
/// assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn span_bounds(spec: &str) -> Result<(NaiveDate, NaiveDate)> {
    let (first, last) = parse_range(spec)?;
    Ok((first_day_of(&first)?, last_day_of(&last)?))
}

/// Join two sides into the most compact range spec.
///
/// Sides of different lengths are joined verbatim. Otherwise the longest
/// common prefix is dropped from the right side; identical sides collapse
/// into one.
///
/// ```
/// use bizcal_time::range_spec::join_range_spec;
///
/// assert_eq!(join_range_spec("202401", "202402"), "202401-2");
/// assert_eq!(join_range_spec("2024", "2024"), "2024");
/// assert_eq!(join_range_spec("2024", "3024"), "2024-3024");
/// assert_eq!(join_range_spec("2024", "202402"), "2024-202402");
/// ```
pub fn join_range_spec(left: &str, right: &str) -> String {
    if left.chars().count() != right.chars().count() {
        return format!("{left}-{right}");
    }
    let mismatch = left
        .char_indices()
        .zip(right.chars())
        .find(|((_, l), r)| l != r)
        .map(|((at, _), _)| at);
    match mismatch {
        // Identical sides (this also covers two empty ones).
        None => left.to_string(),
        Some(0) => format!("{left}-{right}"),
        Some(at) => format!("{left}-{}", &right[at..]),
    }
}

/// `month * 100 + day`, the key holidays are stored under.
pub fn mmdd(date: NaiveDate) -> u32 {
    date.month() * 100 + date.day()
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })
}

pub(crate) fn digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

// Year, then month and day when the spec carries them.
fn split_date_spec(spec: &str) -> Result<(i32, Option<u32>, Option<u32>)> {
    let invalid = || Error::InvalidDateSpec(spec.to_string());
    ensure!(spec.bytes().all(|b| b.is_ascii_digit()), invalid());
    let field = |range: std::ops::Range<usize>| spec[range].parse::<u32>().map_err(|_| invalid());
    let year = spec.get(..4).ok_or_else(invalid)?.parse::<i32>().map_err(|_| invalid())?;
    match spec.len() {
        8 => Ok((year, Some(field(4..6)?), Some(field(6..8)?))),
        6 => Ok((year, Some(field(4..6)?), None)),
        4 => Ok((year, None, None)),
        _ => Err(invalid()),
    }
}
