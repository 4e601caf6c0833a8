//! Integration tests for building and querying a `Calendar`.

use bizcal_core::Error;
use bizcal_time::{Calendar, DateInput, SpanSpec};
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

const SPEC: [&str; 2] = [
    "2023: 0101-2, 0121-27, 0405, 0429-0503, 0622-24, 0929-1006",
    "2024: 0101, 0210-7, 0404-6, 0501-5, 0610, 0915-7, 1001-7",
];

fn calendar() -> Calendar {
    Calendar::from_lines(SPEC).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ─── Construction ─────────────────────────────────────────────────────────────

#[test]
fn single_year_scenario() {
    let cal = Calendar::from_lines([SPEC[1]]).unwrap();
    assert_eq!(cal.year_count(), 1);
    assert_eq!(cal.year_sets()[0].len(), 1 + 8 + 3 + 5 + 1 + 3 + 7);
}

#[test]
fn whitespace_is_insignificant() {
    let tight = Calendar::from_lines(["2024:0101,0210-7"]).unwrap();
    let loose = Calendar::from_lines(["  2024 :  0101 ,  0210-7  "]).unwrap();
    assert_eq!(tight, loose);
}

#[test]
fn from_multiline_text() {
    let text = SPEC.join("\n");
    let cal: Calendar = text.parse().unwrap();
    assert_eq!(cal, calendar());
}

#[test]
fn construction_errors() {
    assert_eq!(Calendar::from_lines(Vec::<&str>::new()), Err(Error::InvalidCalendarSpec));
    assert!(matches!(
        Calendar::from_lines(["2021: 0101", "2023: 0101"]),
        Err(Error::IncompleteCalendarSpec { min_year: 2021, max_year: 2023, count: 2 })
    ));
    assert!(matches!(
        Calendar::from_lines(["2024: 0101-02-03"]),
        Err(Error::InvalidRangeSpec(_))
    ));
    assert!(matches!(
        Calendar::from_lines(["2023: 0229"]),
        Err(Error::InvalidDate { year: 2023, month: 2, day: 29 })
    ));
    assert!(matches!(
        "2024 0101".parse::<Calendar>(),
        Err(Error::MalformedCalendarLine(_))
    ));
}

proptest! {
    #[test]
    fn table_length_matches_year_range(first in 1950i32..2200, count in 1usize..40) {
        let lines: Vec<String> = (first..)
            .take(count)
            .map(|year| format!("{year}: 0101, 1224-6"))
            .collect();
        let cal = Calendar::from_lines(&lines).unwrap();
        prop_assert_eq!(cal.year_count(), count);
        prop_assert_eq!(
            cal.year_count() as i64,
            i64::from(cal.max_year()) - i64::from(cal.min_year()) + 1
        );
        prop_assert!(cal.year_sets().iter().all(|holidays| holidays.len() == 4));
    }
}

// ─── Lookups ──────────────────────────────────────────────────────────────────

#[test]
fn lookups_accept_every_input_shape() {
    let cal = calendar();
    assert!(cal.is_holiday(20240101).unwrap());
    assert!(cal.is_holiday(20240101_i64).unwrap());
    assert!(cal.is_holiday(20240101_u32).unwrap());
    assert!(cal.is_holiday("2024-01-01").unwrap());
    assert!(cal.is_holiday(&"20240101".to_string()).unwrap());
    assert!(cal.is_holiday((2024, 1, 1)).unwrap());
    assert!(cal.is_holiday(&[2024, 1, 1]).unwrap());
    assert!(cal.is_holiday(&vec![2024, 1, 1]).unwrap());
    assert!(cal.is_holiday(date(2024, 1, 1)).unwrap());

    assert!(cal.is_open("20240102").unwrap());
    // 2024-01-06 is a Saturday
    assert!(!cal.is_open("20240106").unwrap());
    assert!(!cal.is_holiday("20240106").unwrap());
}

#[test]
fn lookup_errors() {
    let cal = calendar();
    assert!(matches!(cal.is_open(20250102), Err(Error::DateOutOfRange { .. })));
    assert_eq!(cal.is_open(123), Err(Error::InvalidDateNumber(123)));
    assert_eq!(cal.is_open(30000101_i64), Err(Error::InvalidDateNumber(30000101)));
    assert!(matches!(cal.date("1/2"), Err(Error::InvalidDateNumber(12))));
    assert!(matches!(cal.ymd(2024, 2, 30), Err(Error::InvalidDate { .. })));
}

#[test]
fn contains_checks_years_only() {
    let cal = calendar();
    assert!(cal.contains(20230101).unwrap());
    assert!(cal.contains("2024-12-31").unwrap());
    assert!(!cal.contains(20221231).unwrap());
    assert!(!cal.contains((2025, 1, 1)).unwrap());
    assert!(cal.contains("junk").is_err());
}

#[test]
fn bound_dates_pass_through() {
    let cal = calendar();
    let day = cal.ymd(2024, 2, 12).unwrap();
    let again = cal.date(day).unwrap();
    assert_eq!(again, day);
    assert_eq!(again.is_holiday(), day.is_holiday());
    assert_eq!(again.year_index(), day.year_index());
    assert!(std::ptr::eq(again.calendar(), &cal));
}

#[test]
fn foreign_dates_are_rebound() {
    let cal = calendar();
    let other = Calendar::from_lines(["2024: 0220"]).unwrap();
    let day = other.ymd(2024, 2, 20).unwrap();
    assert!(day.is_holiday());
    assert_eq!(day.year_index(), 0);

    let rebound = cal.date(&day).unwrap();
    assert_eq!(rebound, day);
    assert!(!rebound.is_holiday());
    assert!(rebound.is_open());
    assert_eq!(rebound.year_index(), 1);

    let outside = other.date(cal.ymd(2023, 5, 2).unwrap());
    assert!(matches!(outside, Err(Error::DateOutOfRange { .. })));
}

#[test]
fn holidays_list_dates() {
    let cal = calendar();
    let may: Vec<_> = cal.holidays(2023).filter(|d| d.month() == 5).collect();
    assert_eq!(may, [date(2023, 5, 1), date(2023, 5, 2), date(2023, 5, 3)]);
}

// ─── Spans ────────────────────────────────────────────────────────────────────

#[test]
fn compact_spans() {
    let cal = calendar();
    let span = cal.span("202402").unwrap();
    assert_eq!(span.since(), date(2024, 2, 1));
    assert_eq!(span.until(), date(2024, 2, 29));

    let span = cal.span("202401-3").unwrap();
    assert_eq!(span.since(), date(2024, 1, 1));
    assert_eq!(span.until(), date(2024, 3, 31));

    let span = cal.span("2023-4").unwrap();
    assert_eq!(span.since(), date(2023, 1, 1));
    assert_eq!(span.until(), date(2024, 12, 31));
}

#[test]
fn whole_calendar_span() {
    let cal = calendar();
    let span = cal.span("*").unwrap();
    assert_eq!(span.since(), date(2023, 1, 1));
    assert_eq!(span.until(), date(2024, 12, 31));
    assert_eq!(span.spec(), "2023-4");
}

#[test]
fn explicit_spans() {
    let cal = calendar();
    let a = cal.span((20240101, "2024-01-31")).unwrap();
    let b = cal.span_between((2024, 1, 1), date(2024, 1, 31)).unwrap();
    let c = cal.span(SpanSpec::Pair(DateInput::Number(20240101), DateInput::Text("20240131")))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.spec(), "202401");
}

#[test]
fn span_errors() {
    let cal = calendar();
    assert!(matches!(cal.span("2022"), Err(Error::DateOutOfRange { .. })));
    assert!(matches!(cal.span("2024-01-01"), Err(Error::InvalidRangeSpec(_))));
    assert!(matches!(cal.span("20241"), Err(Error::InvalidDateSpec(_))));
    assert!(matches!(
        cal.span(Vec::<i32>::new()),
        Err(Error::UnsupportedRangeShape(_))
    ));
    assert!(matches!(
        cal.span(vec!["20240101", "20240102", "20240103"]),
        Err(Error::UnsupportedRangeShape(_))
    ));
}
