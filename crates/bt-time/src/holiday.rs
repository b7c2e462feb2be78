//! Holiday date rules.
//!
//! A [`Holiday`] pairs a name with a [`HolidayRule`] that yields the actual
//! (unshifted) holiday date in any given year.  Weekend observance is not a
//! property of the rule; it is applied by the calendar that owns it.

use bt_core::errors::{Error, Result};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// How the actual date of a holiday is determined in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayRule {
    /// The same month and day every year (e.g. July 4).
    Fixed {
        /// Month (1–12).
        month: u32,
        /// Day of the month (1–31).
        day: u32,
    },
    /// The *n*-th occurrence of a weekday in a month (e.g. the 4th Thursday
    /// of November).
    NthWeekday {
        /// Month (1–12).
        month: u32,
        /// Day of the week.
        weekday: Weekday,
        /// Occurrence (1–5).
        n: u8,
    },
    /// The last occurrence of a weekday in a month (e.g. the last Monday of
    /// May).
    LastWeekday {
        /// Month (1–12).
        month: u32,
        /// Day of the week.
        weekday: Weekday,
    },
}

impl HolidayRule {
    /// A holiday on the same month and day every year.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if the month/day pair never exists.
    /// February 29 is accepted and only occurs in leap years.
    pub fn fixed(month: u32, day: u32) -> Result<Self> {
        check_month(month)?;
        // 2000 is a leap year, so every month/day pair that can ever exist
        // exists in it.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(Error::InvalidArgument(format!(
                "day {day} never occurs in month {month}"
            )));
        }
        Ok(HolidayRule::Fixed { month, day })
    }

    /// The `n`-th `weekday` of `month`.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `month` is out of range or `n` is
    /// not in 1–5.
    pub fn nth_weekday(n: u8, weekday: Weekday, month: u32) -> Result<Self> {
        check_month(month)?;
        if !(1..=5).contains(&n) {
            return Err(Error::InvalidArgument(format!(
                "occurrence {n} out of range [1, 5]"
            )));
        }
        Ok(HolidayRule::NthWeekday { month, weekday, n })
    }

    /// The last `weekday` of `month`.
    ///
    /// # Errors
    /// Returns `Error::InvalidArgument` if `month` is out of range.
    pub fn last_weekday(weekday: Weekday, month: u32) -> Result<Self> {
        check_month(month)?;
        Ok(HolidayRule::LastWeekday { month, weekday })
    }

    /// Return the actual date of the holiday in `year`, if it occurs.
    ///
    /// A fixed February 29 does not occur in common years, and a 5th
    /// weekday does not occur in every month.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            HolidayRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            HolidayRule::NthWeekday { month, weekday, n } => {
                NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
            }
            HolidayRule::LastWeekday { month, weekday } => {
                let last = last_day_of_month(year, month)?;
                let back = (7 + last.weekday().num_days_from_monday()
                    - weekday.num_days_from_monday())
                    % 7;
                last.checked_sub_days(Days::new(u64::from(back)))
            }
        }
    }
}

/// A named holiday, optionally limited to a range of years.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    name: String,
    rule: HolidayRule,
    #[cfg_attr(feature = "serde", serde(default))]
    since: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    until: Option<i32>,
}

impl Holiday {
    /// A holiday observed in every year.
    pub fn new(name: impl Into<String>, rule: HolidayRule) -> Self {
        Self {
            name: name.into(),
            rule,
            since: None,
            until: None,
        }
    }

    /// Restrict the holiday to years on or after `year`.
    pub fn since(mut self, year: i32) -> Self {
        self.since = Some(year);
        self
    }

    /// Restrict the holiday to years on or before `year`.
    pub fn until(mut self, year: i32) -> Self {
        self.until = Some(year);
        self
    }

    /// Holiday name (e.g. `"Independence Day"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The date rule.
    pub fn rule(&self) -> HolidayRule {
        self.rule
    }

    /// Return `true` if the holiday is in force in `year`.
    pub fn is_active_in(&self, year: i32) -> bool {
        self.since.map_or(true, |s| year >= s) && self.until.map_or(true, |u| year <= u)
    }

    /// Return the actual date of the holiday in `year`, or `None` if it is
    /// not in force or does not occur that year.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        if !self.is_active_in(year) {
            return None;
        }
        self.rule.date_in(year)
    }
}

fn check_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidArgument(format!(
            "month {month} out of range [1, 12]"
        )));
    }
    Ok(())
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    first_of_next.pred_opt()
}
