//! `CalendarDate` type: a day bound to a [`Calendar`].
//!
//! A calendar date looks itself up once when it is created and caches
//! whether it is a listed holiday and whether it is open (a Monday to
//! Friday that is not a holiday). It is a small `Copy` value; every
//! operation returns a new date.
//!
//! Dates are created only through the calendar factories
//! ([`Calendar::date`], [`Calendar::ymd`], [`Calendar::span`]), so a date
//! always lies within the years its calendar covers.
//!
//! # Arithmetic
//! * `date + n` / `date - n` shift by calendar days.
//! * `date >> n` / `date << n` shift by business days.
//!
//! All four yield `Result<CalendarDate>`, failing with
//! [`Error::DateOutOfRange`] when the walk leaves the calendar.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Shl, Shr, Sub};

use bizcal_core::errors::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::Calendar;
use crate::range_spec::end_of_month;

/// A date with its business-day status under one calendar.
#[derive(Clone, Copy)]
pub struct CalendarDate<'c> {
    date: NaiveDate,
    calendar: &'c Calendar,
    year_index: usize,
    holiday: bool,
    open: bool,
}

impl<'c> CalendarDate<'c> {
    pub(crate) fn new(calendar: &'c Calendar, date: NaiveDate) -> Result<Self> {
        let year_index = calendar.resolve_year_index(date)?;
        Ok(Self::with_index(calendar, date, year_index))
    }

    pub(crate) fn from_parts(
        calendar: &'c Calendar,
        date: NaiveDate,
        year_index: usize,
        holiday: bool,
        open: bool,
    ) -> Self {
        Self { date, calendar, year_index, holiday, open }
    }

    fn with_index(calendar: &'c Calendar, date: NaiveDate, year_index: usize) -> Self {
        let holiday = calendar.is_listed(year_index, date);
        let open = !holiday && !matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        Self { date, calendar, year_index, holiday, open }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The plain date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The calendar this date is bound to.
    pub fn calendar(&self) -> &'c Calendar {
        self.calendar
    }

    /// Year.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month (1–12).
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of the month (1–31).
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Row of the calendar table for this date's year.
    pub fn year_index(&self) -> usize {
        self.year_index
    }

    /// Whether this day is listed as a holiday.
    pub fn is_holiday(&self) -> bool {
        self.holiday
    }

    /// Whether this is a business day: a weekday that is not a holiday.
    ///
    /// This is the truth value of a calendar date.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// `YYYYMMDD` as a number.
    pub fn numeric_code(&self) -> i64 {
        i64::from(self.year()) * 10_000 + i64::from(self.month() * 100 + self.day())
    }

    /// `YYYY{sep}MM{sep}DD`.
    ///
    /// ```
    /// use bizcal_time::Calendar;
    ///
    /// let cal = Calendar::from_lines(["2024: 0101"]).unwrap();
    /// let day = cal.ymd(2024, 3, 5).unwrap();
    /// assert_eq!(day.compact_text(""), "20240305");
    /// assert_eq!(day.compact_text("-"), "2024-03-05");
    /// ```
    pub fn compact_text(&self, sep: &str) -> String {
        format!("{:04}{sep}{:02}{sep}{:02}", self.year(), self.month(), self.day())
    }

    /// Whether this is the last day of its month.
    ///
    /// Works on a scratch date, so it holds in the last covered December too.
    pub fn is_end_of_month(&self) -> bool {
        self.day() == 31 || end_of_month(self.date) == Some(self.date)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift by `n` calendar days.
    ///
    /// The table row is looked up again only when the year changes; the
    /// holiday and open flags are always those of the new day.
    ///
    /// # Errors
    /// [`Error::DateOutOfRange`] if the new day is outside the calendar. When
    /// the shift leaves chrono's date range the error names the starting day.
    pub fn shift_days(&self, n: i32) -> Result<Self> {
        if n == 0 {
            return Ok(*self);
        }
        let date = self
            .date
            .num_days_from_ce()
            .checked_add(n)
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| self.out_of_range(self.date))?;
        let year_index = if date.year() == self.year() {
            self.year_index
        } else {
            self.calendar.resolve_year_index(date)?
        };
        Ok(Self::with_index(self.calendar, date, year_index))
    }

    /// Shift by `n` business days.
    ///
    /// Walks one calendar day at a time in the direction of `n` and stops on
    /// the `|n|`-th open day. The starting day never counts.
    ///
    /// ```
    /// use bizcal_time::Calendar;
    ///
    /// let cal = Calendar::from_lines(["2024: 0101"]).unwrap();
    /// let tue = cal.ymd(2024, 1, 2).unwrap();
    /// assert_eq!(tue.shift_business_days(4).unwrap().compact_text("-"), "2024-01-08");
    /// assert!(tue.shift_business_days(-1).is_err());
    /// ```
    ///
    /// # Errors
    /// [`Error::DateOutOfRange`] as soon as the walk leaves the calendar.
    pub fn shift_business_days(&self, n: i32) -> Result<Self> {
        if n == 0 {
            return Ok(*self);
        }
        let step = n.signum();
        let mut remaining = n.unsigned_abs();
        let mut day = *self;
        while remaining > 0 {
            let next = day.shift_days(step)?;
            if next.year_index != day.year_index {
                #[cfg(feature = "log")]
                log::trace!("business-day walk from {} crossed into {}", self, next.year());
            }
            day = next;
            if day.open {
                remaining -= 1;
            }
        }
        Ok(day)
    }

    fn out_of_range(&self, date: NaiveDate) -> Error {
        Error::DateOutOfRange {
            date,
            min_year: self.calendar.min_year(),
            max_year: self.calendar.max_year(),
        }
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl<'c> Add<i32> for CalendarDate<'c> {
    type Output = Result<CalendarDate<'c>>;

    fn add(self, days: i32) -> Self::Output {
        self.shift_days(days)
    }
}

impl<'c> Sub<i32> for CalendarDate<'c> {
    type Output = Result<CalendarDate<'c>>;

    fn sub(self, days: i32) -> Self::Output {
        self.shift_days(days.saturating_neg())
    }
}

/// Signed number of calendar days from `rhs` to `self`.
impl Sub for CalendarDate<'_> {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        (self.date - rhs.date).num_days()
    }
}

impl<'c> Shr<i32> for CalendarDate<'c> {
    type Output = Result<CalendarDate<'c>>;

    fn shr(self, days: i32) -> Self::Output {
        self.shift_business_days(days)
    }
}

impl<'c> Shl<i32> for CalendarDate<'c> {
    type Output = Result<CalendarDate<'c>>;

    fn shl(self, days: i32) -> Self::Output {
        self.shift_business_days(days.saturating_neg())
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

impl PartialEq for CalendarDate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for CalendarDate<'_> {}

impl PartialEq<NaiveDate> for CalendarDate<'_> {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.date == *other
    }
}

impl PartialOrd for CalendarDate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Hash for CalendarDate<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for CalendarDate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.compact_text(""))
    }
}

impl std::fmt::Debug for CalendarDate<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.holiday {
            "holiday"
        } else if self.open {
            "open"
        } else {
            "closed"
        };
        write!(f, "CalendarDate({}, {status})", self.date)
    }
}
