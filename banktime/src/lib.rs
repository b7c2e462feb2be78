//! # banktime
//!
//! US Federal Reserve banking-day calculations.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates.  Application code should depend on this crate rather
//! than on the individual `bt-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use banktime::BankDate;
//! use chrono::TimeZone;
//! use chrono_tz::America::New_York;
//!
//! // Thursday before Martin Luther King Jr. Day 2018.
//! let thursday = New_York.with_ymd_and_hms(2018, 1, 11, 1, 0, 0).unwrap();
//! let mut bd = BankDate::from_instant(thursday);
//! assert!(bd.is_banking_day());
//!
//! let settles = bd.add_banking_days(2).unwrap();
//! assert_eq!(settles, New_York.with_ymd_and_hms(2018, 1, 16, 1, 0, 0).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and process-wide settings.
pub use bt_core as core;

/// Holiday rules, calendars, and `BankDate`.
pub use bt_time as time;

pub use bt_core::{Error, Result, Settings};
pub use bt_time::{BankDate, Calendar, HolidayCalendar, Observance};
