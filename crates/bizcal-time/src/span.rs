//! `DateSpan` type: an inclusive range of calendar dates.
//!
//! Spans come from [`Calendar::span`](crate::Calendar::span) or
//! [`Calendar::span_between`](crate::Calendar::span_between). A span whose
//! `since` lies after its `until` is empty: it enumerates and counts
//! nothing.

use std::iter::FusedIterator;

use crate::date::CalendarDate;
use crate::range_spec::join_range_spec;

/// Inclusive `[since, until]` pair of dates of one calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSpan<'c> {
    since: CalendarDate<'c>,
    until: CalendarDate<'c>,
}

impl<'c> DateSpan<'c> {
    pub(crate) fn new(since: CalendarDate<'c>, until: CalendarDate<'c>) -> Self {
        Self { since, until }
    }

    /// First day.
    pub fn since(&self) -> CalendarDate<'c> {
        self.since
    }

    /// Last day.
    pub fn until(&self) -> CalendarDate<'c> {
        self.until
    }

    /// Whether the span holds no day at all.
    pub fn is_empty(&self) -> bool {
        self.since > self.until
    }

    /// Every day of the span, open or not.
    pub fn days(&self) -> Days<'c> {
        Days { next: Some(self.since), until: self.until }
    }

    /// The business days of the span.
    pub fn business_days(&self) -> BusinessDays<'c> {
        BusinessDays(self.days())
    }

    /// Number of business days in the span.
    pub fn count_business_days(&self) -> usize {
        self.days().filter(CalendarDate::is_open).count()
    }

    /// The most compact range spec naming this span.
    ///
    /// Whole years render as `YYYY` ranges, whole months as `YYYYMM` ranges
    /// and anything else as `YYYYMMDD` ranges, each with the common prefix of
    /// the right side elided.
    ///
    /// ```
    /// use bizcal_time::Calendar;
    ///
    /// let cal = Calendar::from_lines(["2024: 0101"]).unwrap();
    /// assert_eq!(cal.span("202401-2").unwrap().spec(), "202401-2");
    /// assert_eq!(cal.span((20240101, 20241231)).unwrap().spec(), "2024");
    /// assert_eq!(cal.span((20240201, 20240205)).unwrap().spec(), "20240201-5");
    /// ```
    pub fn spec(&self) -> String {
        let (since, until) = (self.since, self.until);
        if since.day() == 1 && until.is_end_of_month() {
            if since.month() == 1 && until.month() == 12 {
                return join_range_spec(&since.year().to_string(), &until.year().to_string());
            }
            return join_range_spec(
                &format!("{:04}{:02}", since.year(), since.month()),
                &format!("{:04}{:02}", until.year(), until.month()),
            );
        }
        join_range_spec(&since.compact_text(""), &until.compact_text(""))
    }
}

impl std::fmt::Display for DateSpan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.spec())
    }
}

impl<'c> IntoIterator for DateSpan<'c> {
    type Item = CalendarDate<'c>;
    type IntoIter = BusinessDays<'c>;

    fn into_iter(self) -> Self::IntoIter {
        self.business_days()
    }
}

impl<'c> IntoIterator for &DateSpan<'c> {
    type Item = CalendarDate<'c>;
    type IntoIter = BusinessDays<'c>;

    fn into_iter(self) -> Self::IntoIter {
        self.business_days()
    }
}

/// Iterator over every day of a [`DateSpan`].
#[derive(Debug, Clone)]
pub struct Days<'c> {
    next: Option<CalendarDate<'c>>,
    until: CalendarDate<'c>,
}

impl<'c> Iterator for Days<'c> {
    type Item = CalendarDate<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.next.take()?;
        if day > self.until {
            return None;
        }
        if day != self.until {
            // Both bounds are inside the calendar, so is every day between.
            self.next = day.shift_days(1).ok();
        }
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self
            .next
            .map_or(0, |day| usize::try_from(self.until - day + 1).unwrap_or(0));
        (left, Some(left))
    }
}

impl ExactSizeIterator for Days<'_> {}

impl FusedIterator for Days<'_> {}

/// Iterator over the business days of a [`DateSpan`].
#[derive(Debug, Clone)]
pub struct BusinessDays<'c>(Days<'c>);

impl<'c> Iterator for BusinessDays<'c> {
    type Item = CalendarDate<'c>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.find(CalendarDate::is_open)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.0.size_hint().1)
    }
}

impl FusedIterator for BusinessDays<'_> {}
