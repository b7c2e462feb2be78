//! `Calendar` trait and the rule-driven [`HolidayCalendar`].
//!
//! A calendar knows which dates are holidays and, from that, which dates are
//! business days.  [`HolidayCalendar`] evaluates a table of [`Holiday`]
//! rules under an [`Observance`] policy.

use bt_core::errors::{Error, Result};
use chrono::{Datelike, NaiveDate, Weekday};

use crate::holiday::Holiday;
use crate::observance::Observance;

/// A holiday calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US (Federal Reserve)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a holiday, either on its actual date or on
    /// the weekday it is observed.
    fn is_holiday(&self, date: NaiveDate) -> bool;

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Advance `date` by `n` business days (backwards if `n` is negative).
    ///
    /// # Errors
    /// Returns `Error::Date` if the walk leaves chrono's date range.
    fn advance_business_days(&self, mut date: NaiveDate, n: i32) -> Result<NaiveDate> {
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = if n > 0 { date.succ_opt() } else { date.pred_opt() }
                .ok_or_else(|| Error::Date(format!("no day adjacent to {date}")))?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: NaiveDate, d2: NaiveDate) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = start
            .iter_days()
            .skip(1)
            .take_while(|d| *d <= end)
            .filter(|d| self.is_business_day(*d))
            .count();
        sign * saturating_count(count)
    }

    /// Collect the holidays in the inclusive range `[from, to]` that fall on
    /// weekdays, i.e. the days a holiday actually closes.
    fn holidays_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| !self.is_weekend(*d) && self.is_holiday(*d))
            .collect()
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// A calendar driven by a table of holiday rules and an observance policy.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    holidays: Vec<Holiday>,
    observance: Observance,
}

impl HolidayCalendar {
    /// Create a calendar with the given name and policy and no holidays.
    pub fn new(name: impl Into<String>, observance: Observance) -> Self {
        Self {
            name: name.into(),
            holidays: Vec::new(),
            observance,
        }
    }

    /// Add a holiday to the table.
    pub fn add_holiday(&mut self, holiday: Holiday) {
        self.holidays.push(holiday);
    }

    /// Builder form of [`add_holiday`](Self::add_holiday) for several
    /// holidays at once.
    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = Holiday>) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// Replace the observance policy.
    pub fn with_observance(mut self, observance: Observance) -> Self {
        self.observance = observance;
        self
    }

    /// The observance policy.
    pub fn observance(&self) -> Observance {
        self.observance
    }

    /// The holiday table.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Return the holiday that closes `date`, if any.
    pub fn holiday_on(&self, date: NaiveDate) -> Option<&Holiday> {
        // Observance moves a holiday by at most one day, so a date can only
        // be claimed by its own year's holiday or by a neighbouring year's
        // (e.g. Jan 1 on a Saturday observed on Dec 31).
        let year = date.year();
        self.holidays.iter().find(|h| {
            (year - 1..=year + 1)
                .filter_map(|y| h.date_in(y))
                .any(|actual| actual == date || self.observance.observed(actual) == date)
        })
    }

    /// Return the name of the holiday that closes `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holiday_on(date).map(Holiday::name)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_on(date).is_some()
    }
}

/// Narrow a day count to `i32`, saturating at `i32::MAX`.
fn saturating_count(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
