//! `BankDate` — a zoned instant that knows US Federal Reserve processing
//! days.
//!
//! ACH and FedWire payments are not processed on weekends or on Federal
//! Reserve holidays.  All checks are made on the local calendar date of the
//! instant in its zone, which defaults to US Eastern time because that is
//! the zone the Federal Reserve publishes its schedules in.

use bt_core::errors::{Error, Result};
use bt_core::Settings;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Weekday};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::calendar::{Calendar, HolidayCalendar};
use crate::calendars::united_states_federal_reserve;

/// A zoned instant paired with the holiday calendar used to judge it.
///
/// The zone is fixed at construction.  The only mutation is
/// [`add_banking_days`](Self::add_banking_days), which moves the instant.
#[derive(Debug, Clone)]
pub struct BankDate<C = HolidayCalendar> {
    instant: DateTime<Tz>,
    calendar: C,
}

impl BankDate {
    /// Create a `BankDate` in `zone`, or in the process-wide default zone
    /// (`America/New_York` unless configured otherwise) when `zone` is
    /// `None`.  The Federal Reserve calendar is attached.
    pub fn new<T: TimeZone>(instant: DateTime<T>, zone: Option<Tz>) -> Self {
        Self::with_calendar(instant, zone, united_states_federal_reserve())
    }

    /// Create a `BankDate` in the process-wide default zone.
    pub fn from_instant<T: TimeZone>(instant: DateTime<T>) -> Self {
        Self::new(instant, None)
    }

    /// Create a `BankDate` in the zone named by an IANA identifier such as
    /// `"America/Chicago"`.
    ///
    /// # Errors
    /// Returns `Error::UnknownZone` if `name` is not in the zone database.
    pub fn with_zone_name<T: TimeZone>(instant: DateTime<T>, name: &str) -> Result<Self> {
        let zone: Tz = name.parse().map_err(|_| Error::UnknownZone {
            name: name.to_owned(),
        })?;
        Ok(Self::new(instant, Some(zone)))
    }
}

impl<C: Calendar> BankDate<C> {
    /// Create a `BankDate` judged against a caller-supplied calendar.
    pub fn with_calendar<T: TimeZone>(
        instant: DateTime<T>,
        zone: Option<Tz>,
        calendar: C,
    ) -> Self {
        let zone = zone.unwrap_or_else(|| Settings::instance().default_zone());
        Self {
            instant: instant.with_timezone(&zone),
            calendar,
        }
    }

    /// The zoned instant.
    pub fn instant(&self) -> DateTime<Tz> {
        self.instant
    }

    /// The local calendar date of the instant.
    pub fn date(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// The zone the instant is evaluated in.
    pub fn zone(&self) -> Tz {
        self.instant.timezone()
    }

    /// The holiday calendar.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Return `true` if the local date is a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.instant.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `true` if the Federal Reserve processes payments on the local
    /// date: not a weekend, not an observed holiday, and not a Monday that
    /// follows a Sunday holiday.
    pub fn is_banking_day(&self) -> bool {
        self.is_banking_date(self.date())
    }

    fn is_banking_date(&self, date: NaiveDate) -> bool {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        if self.calendar.is_holiday(date) {
            return false;
        }
        if date.weekday() == Weekday::Mon {
            return date.pred_opt().map_or(true, |sun| !self.calendar.is_holiday(sun));
        }
        true
    }

    /// Move the instant by `days` banking days and return the new instant.
    ///
    /// The instant steps one calendar day at a time, keeping the local
    /// wall-clock time it started at, and only banking days are counted; the
    /// result is the `days`-th banking day reached.  A negative count walks
    /// backward the same way and zero leaves the instant where it is.
    ///
    /// A wall-clock time that falls in a daylight-saving gap on some day is
    /// read with the offset in force before the gap, which moves it just
    /// past the gap on the same date.
    ///
    /// # Errors
    /// Returns `Error::Date` if the walk leaves chrono's date range.  The
    /// instant is then left unchanged.
    pub fn add_banking_days(&mut self, days: i32) -> Result<DateTime<Tz>> {
        let forward = days > 0;
        let wall_clock = self.instant.time();
        let mut instant = self.instant;
        let mut remaining = days.unsigned_abs();
        while remaining > 0 {
            instant = step_one_day(&instant, wall_clock, forward)?;
            if self.is_banking_date(instant.date_naive()) {
                remaining -= 1;
            } else {
                trace!(date = %instant.date_naive(), "skipping non-banking day");
            }
        }
        self.instant = instant;
        debug!(days, instant = %self.instant, "advanced by banking days");
        Ok(self.instant)
    }
}

impl<C: Calendar + Clone> BankDate<C> {
    /// Return the first banking day strictly after the current date,
    /// leaving `self` untouched.
    ///
    /// # Errors
    /// See [`add_banking_days`](Self::add_banking_days).
    pub fn next_banking_day(&self) -> Result<DateTime<Tz>> {
        self.clone().add_banking_days(1)
    }
}

impl<C> std::fmt::Display for BankDate<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.instant.to_rfc3339())
    }
}

/// Move `instant` to the neighbouring local date at `wall_clock`.
fn step_one_day(
    instant: &DateTime<Tz>,
    wall_clock: NaiveTime,
    forward: bool,
) -> Result<DateTime<Tz>> {
    let date = instant.date_naive();
    let next = if forward {
        date.succ_opt()
    } else {
        date.pred_opt()
    }
    .ok_or_else(|| Error::Date(format!("cannot step one day from {instant}")))?;
    resolve_local(instant.timezone(), next.and_time(wall_clock))
}

/// Attach `zone` to a local date-time.  An ambiguous time resolves to the
/// earlier instant; a time inside a gap is read with the pre-gap offset.
fn resolve_local(zone: Tz, local: NaiveDateTime) -> Result<DateTime<Tz>> {
    if let Some(resolved) = zone.from_local_datetime(&local).earliest() {
        return Ok(resolved);
    }
    // A day earlier, taken as UTC, is always before the transition that
    // opened the gap and after the previous one.
    let before_gap = local
        .checked_sub_days(Days::new(1))
        .map(|as_utc| zone.offset_from_utc_datetime(&as_utc).fix())
        .and_then(|offset| {
            local.checked_sub_signed(chrono::TimeDelta::seconds(i64::from(
                offset.local_minus_utc(),
            )))
        })
        .ok_or_else(|| Error::Date(format!("cannot resolve {local} in {}", zone.name())))?;
    Ok(zone.from_utc_datetime(&before_gap))
}
