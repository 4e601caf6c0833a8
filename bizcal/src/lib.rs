//! # bizcal
//!
//! A business-day calendar engine. A calendar is a table of holidays per
//! year; dates bound to it know whether they are business days and shift by
//! calendar or business days, and spans of them count and enumerate
//! business days and print as compact range specs.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use bizcal::time::Calendar;
//!
//! let cal: Calendar = "
//!     2023: 0101-2, 0121-27, 0405, 0429-0503, 0622-24, 0929-1006
//!     2024: 0101, 0210-7, 0404-6, 0501-5, 0610, 0915-7, 1001-7
//! "
//! .parse()?;
//!
//! let day = cal.date("2024-02-09")?;
//! assert!(day.is_open());
//! assert_eq!((day >> 1)?.to_string(), "20240219");
//! assert_eq!((day + 1)?.is_holiday(), true);
//!
//! let span = cal.span("202401-2")?;
//! assert_eq!(span.count_business_days(), 22 + 16);
//! assert_eq!(span.spec(), "202401-2");
//! # Ok::<(), bizcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and evaluation-date settings.
pub use bizcal_core as core;

/// Calendars, calendar dates, spans, and the range grammar.
pub use bizcal_time as time;

pub use bizcal_core::{Error, Result, ScopedEvaluationDate, Settings};
pub use bizcal_time::{Calendar, CalendarDate, DateSpan};
