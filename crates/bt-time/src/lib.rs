//! # bt-time
//!
//! Holiday rules, holiday calendars, and the `BankDate` banking-day type.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `BankDate` — a zoned instant with banking-day queries.
pub mod bank_date;

/// Calendar trait and the rule-driven `HolidayCalendar`.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// Holiday date rules.
pub mod holiday;

/// Weekend observance policy.
pub mod observance;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bank_date::BankDate;
pub use calendar::{Calendar, HolidayCalendar, WeekendsOnly};
pub use calendars::{united_states_federal_reserve, us_federal_holidays};
pub use holiday::{Holiday, HolidayRule};
pub use observance::Observance;
