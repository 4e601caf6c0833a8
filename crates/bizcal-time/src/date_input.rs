//! Date and span specs accepted by the [`Calendar`](crate::Calendar) factories.
//!
//! A date may be given as a `YYYYMMDD` number, as text (every non-digit is
//! dropped, so `"2024-02-01"` works; `"today"` asks [`Settings`]), as a
//! `(y, m, d)` triple or sequence, as a plain [`NaiveDate`], or as a
//! [`CalendarDate`] already bound to a calendar.

use bizcal_core::errors::{Error, Result};
use bizcal_core::{ensure, Settings};
use chrono::NaiveDate;

use crate::date::CalendarDate;
use crate::range_spec::{digits, ymd};

/// Smallest accepted `YYYYMMDD` number.
pub const MIN_DATE_NUMBER: i64 = 19_000_000;

/// Largest accepted `YYYYMMDD` number.
pub const MAX_DATE_NUMBER: i64 = 29_999_999;

/// Anything that names a single day.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    /// A `YYYYMMDD` number.
    Number(i64),
    /// Text reduced to its digits, or the literal `"today"`.
    Text(&'a str),
    /// A positional year, month, day triple.
    Ymd(i32, u32, u32),
    /// A sequence read positionally as year, month, day.
    Sequence(&'a [i32]),
    /// A plain date.
    Date(NaiveDate),
    /// A date already bound to a calendar.
    Bound(CalendarDate<'a>),
}

impl DateInput<'_> {
    /// Resolve to a plain date, independent of any calendar.
    pub fn resolve(&self) -> Result<NaiveDate> {
        match *self {
            DateInput::Number(number) => from_number(number),
            DateInput::Text(text) => from_text(text),
            DateInput::Ymd(year, month, day) => ymd(year, month, day),
            DateInput::Sequence(values) => from_sequence(values),
            DateInput::Date(date) => Ok(date),
            DateInput::Bound(date) => Ok(date.date()),
        }
    }
}

fn from_number(number: i64) -> Result<NaiveDate> {
    ensure!(
        (MIN_DATE_NUMBER..=MAX_DATE_NUMBER).contains(&number),
        Error::InvalidDateNumber(number)
    );
    let (year, mmdd) = (number / 10_000, number % 10_000);
    // Both parts are bounded by the range check above.
    ymd(year as i32, (mmdd / 100) as u32, (mmdd % 100) as u32)
}

fn from_text(text: &str) -> Result<NaiveDate> {
    if text.trim() == "today" {
        return Ok(Settings::instance().evaluation_date());
    }
    let number = digits(text)
        .parse::<i64>()
        .map_err(|_| Error::InvalidDateSpec(text.to_string()))?;
    from_number(number)
}

fn from_sequence(values: &[i32]) -> Result<NaiveDate> {
    let &[year, month, day] = values else {
        return Err(Error::InvalidDateSpec(format!("{values:?}")));
    };
    let invalid = || Error::InvalidDate {
        year,
        month: month.max(0).unsigned_abs(),
        day: day.max(0).unsigned_abs(),
    };
    let month = u32::try_from(month).map_err(|_| invalid())?;
    let day = u32::try_from(day).map_err(|_| invalid())?;
    ymd(year, month, day)
}

impl From<i64> for DateInput<'_> {
    fn from(number: i64) -> Self {
        DateInput::Number(number)
    }
}

impl From<i32> for DateInput<'_> {
    fn from(number: i32) -> Self {
        DateInput::Number(number.into())
    }
}

impl From<u32> for DateInput<'_> {
    fn from(number: u32) -> Self {
        DateInput::Number(number.into())
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text)
    }
}

impl From<(i32, u32, u32)> for DateInput<'_> {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        DateInput::Ymd(year, month, day)
    }
}

impl<'a> From<&'a [i32]> for DateInput<'a> {
    fn from(values: &'a [i32]) -> Self {
        DateInput::Sequence(values)
    }
}

impl<'a> From<&'a [i32; 3]> for DateInput<'a> {
    fn from(values: &'a [i32; 3]) -> Self {
        DateInput::Sequence(values)
    }
}

impl<'a> From<&'a Vec<i32>> for DateInput<'a> {
    fn from(values: &'a Vec<i32>) -> Self {
        DateInput::Sequence(values)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl<'a> From<CalendarDate<'a>> for DateInput<'a> {
    fn from(date: CalendarDate<'a>) -> Self {
        DateInput::Bound(date)
    }
}

impl<'a> From<&CalendarDate<'a>> for DateInput<'a> {
    fn from(date: &CalendarDate<'a>) -> Self {
        DateInput::Bound(*date)
    }
}

/// Anything that names an inclusive span of days.
#[derive(Debug, Clone)]
pub enum SpanSpec<'a> {
    /// A compact range spec such as `"202401-3"`, or `"*"` for the whole
    /// calendar.
    Compact(&'a str),
    /// Explicit first and last day.
    Pair(DateInput<'a>, DateInput<'a>),
    /// Bounds collected at run time; only two elements are accepted.
    Sequence(Vec<DateInput<'a>>),
}

impl<'a> From<&'a str> for SpanSpec<'a> {
    fn from(text: &'a str) -> Self {
        SpanSpec::Compact(text)
    }
}

impl<'a> From<&'a String> for SpanSpec<'a> {
    fn from(text: &'a String) -> Self {
        SpanSpec::Compact(text)
    }
}

impl<'a, A, B> From<(A, B)> for SpanSpec<'a>
where
    A: Into<DateInput<'a>>,
    B: Into<DateInput<'a>>,
{
    fn from((since, until): (A, B)) -> Self {
        SpanSpec::Pair(since.into(), until.into())
    }
}

impl<'a, T> From<Vec<T>> for SpanSpec<'a>
where
    T: Into<DateInput<'a>>,
{
    fn from(bounds: Vec<T>) -> Self {
        SpanSpec::Sequence(bounds.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn numbers() {
        assert_eq!(DateInput::from(20240229).resolve().unwrap(), date(2024, 2, 29));
        assert_eq!(DateInput::from(19000101).resolve().unwrap(), date(1900, 1, 1));
        assert_eq!(DateInput::from(29991231).resolve().unwrap(), date(2999, 12, 31));
        assert_eq!(
            DateInput::from(19000000).resolve(),
            Err(Error::InvalidDate { year: 1900, month: 0, day: 0 })
        );
        assert_eq!(
            DateInput::from(18991231).resolve(),
            Err(Error::InvalidDateNumber(18991231))
        );
        assert_eq!(
            DateInput::from(30000101_i64).resolve(),
            Err(Error::InvalidDateNumber(30000101))
        );
        assert!(matches!(
            DateInput::from(20230229).resolve(),
            Err(Error::InvalidDate { year: 2023, month: 2, day: 29 })
        ));
    }

    #[test]
    fn text_drops_non_digits() {
        assert_eq!(DateInput::from("2024-02-01").resolve().unwrap(), date(2024, 2, 1));
        assert_eq!(DateInput::from("2024/12/31").resolve().unwrap(), date(2024, 12, 31));
        assert_eq!(
            DateInput::from("no digits").resolve(),
            Err(Error::InvalidDateSpec("no digits".into()))
        );
        assert_eq!(
            DateInput::from("240101").resolve(),
            Err(Error::InvalidDateNumber(240101))
        );
    }

    #[test]
    fn sequences_are_positional() {
        assert_eq!(DateInput::from(&[2024, 5, 1]).resolve().unwrap(), date(2024, 5, 1));
        assert_eq!(DateInput::from((2024, 5, 1)).resolve().unwrap(), date(2024, 5, 1));
        let short = vec![2024, 5];
        assert!(matches!(
            DateInput::from(&short).resolve(),
            Err(Error::InvalidDateSpec(_))
        ));
        assert!(matches!(
            DateInput::from(&[2024, -1, 1]).resolve(),
            Err(Error::InvalidDate { .. })
        ));
    }
}
