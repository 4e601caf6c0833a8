//! `Calendar` type: a per-year holiday table.
//!
//! A calendar is built once from lines of the form `"YEAR: item,item,..."`,
//! where each item is a bare `MMDD` day or a hyphenated period such as
//! `"0210-7"`. The years must form a contiguous run; row `i` of the table
//! holds the holidays of year `min_year + i` as `MMDD` codes.
//!
//! Calendars are immutable after construction. [`CalendarDate`] and
//! [`DateSpan`] values borrow the calendar they were created from.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use bizcal_core::errors::{Error, Result};
use bizcal_core::{ensure, fail};
use chrono::{Datelike, NaiveDate};

use crate::date::CalendarDate;
use crate::date_input::{DateInput, SpanSpec};
use crate::range_spec::{expand_year_period, mmdd, span_bounds, ymd};
use crate::span::DateSpan;

/// A business calendar covering a contiguous run of years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    min_year: i32,
    max_year: i32,
    table: Vec<BTreeSet<u32>>,
}

impl Calendar {
    /// Build a calendar from `"YEAR: item,item,..."` lines.
    ///
    /// Blank lines and lines starting with `#` are ignored, as are empty
    /// items, so `"2025:"` declares a year without holidays. A year given on
    /// several lines gets the union of their items; older calendar files
    /// that relied on the last such line replacing the earlier ones must be
    /// deduplicated before loading.
    ///
    /// # Errors
    /// * [`Error::InvalidCalendarSpec`] if no line declares a year.
    /// * [`Error::IncompleteCalendarSpec`] if the years have gaps.
    /// * [`Error::MalformedCalendarLine`] for a line without a `YEAR:` head.
    /// * Any grammar error raised while expanding an item.
    ///
    /// ```
    /// use bizcal_time::Calendar;
    ///
    /// let cal = Calendar::from_lines(["2024: 0101, 0210-7, 0404-6"]).unwrap();
    /// assert_eq!(cal.year_sets()[0].len(), 12);
    /// ```
    pub fn from_lines<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut years: BTreeMap<i32, BTreeSet<u32>> = BTreeMap::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (year, items) = split_line(line)?;
            if years.contains_key(&year) {
                #[cfg(feature = "log")]
                log::warn!("calendar year {year} declared more than once, merging holidays");
            }
            let holidays = years.entry(year).or_default();
            for item in items.split(',').map(str::trim).filter(|item| !item.is_empty()) {
                holidays.extend(expand_year_period(year, item)?);
            }
        }

        let (min_year, max_year) = match (years.keys().next(), years.keys().next_back()) {
            (Some(&min_year), Some(&max_year)) => (min_year, max_year),
            _ => fail!(Error::InvalidCalendarSpec),
        };
        let count = years.len();
        ensure!(
            i64::from(max_year) - i64::from(min_year) + 1 == count as i64,
            Error::IncompleteCalendarSpec { min_year, max_year, count }
        );

        let table: Vec<BTreeSet<u32>> = years.into_values().collect();
        #[cfg(feature = "log")]
        log::debug!(
            "built calendar [{min_year}, {max_year}] with {} holidays",
            table.iter().map(BTreeSet::len).sum::<usize>()
        );
        Ok(Self { min_year, max_year, table })
    }

    /// First year covered.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Last year covered.
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Number of years covered, `max_year - min_year + 1`.
    pub fn year_count(&self) -> usize {
        self.table.len()
    }

    /// Holiday `MMDD` codes, one set per year starting at `min_year`.
    pub fn year_sets(&self) -> &[BTreeSet<u32>] {
        &self.table
    }

    /// Holidays of `year` in calendar order; empty outside the calendar.
    pub fn holidays(&self, year: i32) -> impl Iterator<Item = NaiveDate> + '_ {
        year.checked_sub(self.min_year)
            .and_then(|offset| usize::try_from(offset).ok())
            .and_then(|index| self.table.get(index))
            .into_iter()
            .flatten()
            .filter_map(move |&code| NaiveDate::from_ymd_opt(year, code / 100, code % 100))
    }

    /// Table row holding the holidays of `date`'s year.
    ///
    /// # Errors
    /// [`Error::DateOutOfRange`] if the year is not covered.
    pub fn resolve_year_index(&self, date: NaiveDate) -> Result<usize> {
        let year = date.year();
        ensure!(
            (self.min_year..=self.max_year).contains(&year),
            Error::DateOutOfRange { date, min_year: self.min_year, max_year: self.max_year }
        );
        usize::try_from(year - self.min_year).map_err(|_| Error::DateOutOfRange {
            date,
            min_year: self.min_year,
            max_year: self.max_year,
        })
    }

    pub(crate) fn is_listed(&self, year_index: usize, date: NaiveDate) -> bool {
        self.table
            .get(year_index)
            .is_some_and(|holidays| holidays.contains(&mmdd(date)))
    }

    /// Whether the day named by `spec` lies within the covered years.
    pub fn contains<'s>(&self, spec: impl Into<DateInput<'s>>) -> Result<bool> {
        let year = spec.into().resolve()?.year();
        Ok((self.min_year..=self.max_year).contains(&year))
    }

    /// Whether the day named by `spec` is a listed holiday.
    pub fn is_holiday<'s>(&self, spec: impl Into<DateInput<'s>>) -> Result<bool> {
        Ok(self.date(spec)?.is_holiday())
    }

    /// Whether the day named by `spec` is a business day.
    pub fn is_open<'s>(&self, spec: impl Into<DateInput<'s>>) -> Result<bool> {
        Ok(self.date(spec)?.is_open())
    }

    /// Bind the day named by `spec` to this calendar.
    ///
    /// A [`CalendarDate`] of this very calendar passes through with its
    /// cached flags; any other input is looked up afresh.
    ///
    /// ```
    /// use bizcal_time::Calendar;
    ///
    /// let cal = Calendar::from_lines(["2024: 0101"]).unwrap();
    /// assert!(cal.date(20240101).unwrap().is_holiday());
    /// assert!(cal.date("2024-01-02").unwrap().is_open());
    /// assert!(!cal.date((2024, 1, 6)).unwrap().is_open());
    /// assert!(cal.date(20250101).is_err());
    /// ```
    pub fn date<'s>(&self, spec: impl Into<DateInput<'s>>) -> Result<CalendarDate<'_>> {
        match spec.into() {
            DateInput::Bound(date) if std::ptr::eq(date.calendar(), self) => Ok(
                CalendarDate::from_parts(
                    self,
                    date.date(),
                    date.year_index(),
                    date.is_holiday(),
                    date.is_open(),
                ),
            ),
            spec => CalendarDate::new(self, spec.resolve()?),
        }
    }

    /// Bind `year-month-day` to this calendar.
    pub fn ymd(&self, year: i32, month: u32, day: u32) -> Result<CalendarDate<'_>> {
        CalendarDate::new(self, ymd(year, month, day)?)
    }

    /// The evaluation date, bound to this calendar.
    pub fn today(&self) -> Result<CalendarDate<'_>> {
        self.date("today")
    }

    /// The inclusive span named by `spec`.
    ///
    /// ```
    /// use bizcal_time::Calendar;
    ///
    /// let cal = Calendar::from_lines(["2024: 0101"]).unwrap();
    /// let span = cal.span("202401-3").unwrap();
    /// assert_eq!(span.since().numeric_code(), 20240101);
    /// assert_eq!(span.until().numeric_code(), 20240331);
    /// assert_eq!(cal.span("*").unwrap().spec(), "2024");
    /// ```
    ///
    /// # Errors
    /// [`Error::UnsupportedRangeShape`] for a bound sequence that is not a
    /// pair, besides every error of [`Calendar::date`] and the grammar.
    pub fn span<'s>(&self, spec: impl Into<SpanSpec<'s>>) -> Result<DateSpan<'_>> {
        match spec.into() {
            SpanSpec::Compact(text) if text.trim() == "*" => {
                let since = self.ymd(self.min_year, 1, 1)?;
                let until = self.ymd(self.max_year, 12, 31)?;
                Ok(DateSpan::new(since, until))
            }
            SpanSpec::Compact(text) => {
                let (since, until) = span_bounds(text)?;
                self.span_between(since, until)
            }
            SpanSpec::Pair(since, until) => self.span_between(since, until),
            SpanSpec::Sequence(bounds) => match <[DateInput<'_>; 2]>::try_from(bounds) {
                Ok([since, until]) => self.span_between(since, until),
                Err(bounds) => fail!(Error::UnsupportedRangeShape(format!(
                    "expected 2 bounds, got {}",
                    bounds.len()
                ))),
            },
        }
    }

    /// The inclusive span from `since` to `until`.
    pub fn span_between<'a, 'b>(
        &self,
        since: impl Into<DateInput<'a>>,
        until: impl Into<DateInput<'b>>,
    ) -> Result<DateSpan<'_>> {
        Ok(DateSpan::new(self.date(since)?, self.date(until)?))
    }
}

impl FromStr for Calendar {
    type Err = Error;

    /// Parse one calendar line per text line.
    fn from_str(text: &str) -> Result<Self> {
        Self::from_lines(text.lines())
    }
}

fn split_line(line: &str) -> Result<(i32, &str)> {
    let malformed = || Error::MalformedCalendarLine(line.to_string());
    let (year, items) = line.split_once(':').ok_or_else(malformed)?;
    ensure!(!items.contains(':'), malformed());
    let year = year.trim().parse::<i32>().map_err(|_| malformed())?;
    Ok((year, items))
}
