//! # bizcal-time
//!
//! Holiday tables, calendar-bound dates, date spans, and the compact range
//! grammar that ties them together.
//!
//! ```
//! use bizcal_time::Calendar;
//!
//! let cal = Calendar::from_lines([
//!     "2024: 0101, 0210-7, 0404-6, 0501-5, 0610, 0915-7, 1001-7",
//! ])
//! .unwrap();
//!
//! let friday = cal.date(20240209).unwrap();
//! assert!(friday.is_open());
//! assert_eq!((friday >> 1).unwrap().to_string(), "20240219");
//!
//! let january = cal.span("202401").unwrap();
//! assert_eq!(january.count_business_days(), 22);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar`: per-year holiday table and date factory.
pub mod calendar;

/// `CalendarDate`: a day bound to a calendar.
pub mod date;

/// Inputs accepted by the calendar factories.
pub mod date_input;

/// Compact date and range grammar.
pub mod range_spec;

/// `DateSpan`: an inclusive range of calendar dates.
pub mod span;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use date::CalendarDate;
pub use date_input::{DateInput, SpanSpec};
pub use span::{BusinessDays, DateSpan, Days};
