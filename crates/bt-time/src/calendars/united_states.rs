//! United States Federal Reserve holiday calendar.
//!
//! ACH and FedWire payments are not processed on weekends or on the
//! holidays below.  For holidays falling on Saturday, Federal Reserve Banks
//! and Branches are open the preceding Friday; for holidays falling on
//! Sunday, they are closed the following Monday.  See
//! <https://www.frbservices.org/about/holiday-schedules>.

use chrono::Weekday;

use crate::calendar::HolidayCalendar;
use crate::holiday::{Holiday, HolidayRule};
use crate::observance::Observance;

/// Name reported by [`united_states_federal_reserve`].
pub const FEDERAL_RESERVE_NAME: &str = "US (Federal Reserve)";

/// Build the Federal Reserve calendar: US federal holidays with the
/// observed-Monday policy.
///
/// Holidays:
/// * New Year's Day (Jan 1)
/// * Martin Luther King Jr. Day (3rd Mon in Jan, from 1986)
/// * Presidents' Day (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, from 2022)
/// * Independence Day (Jul 4)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans Day (Nov 11)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25)
pub fn united_states_federal_reserve() -> HolidayCalendar {
    HolidayCalendar::new(FEDERAL_RESERVE_NAME, Observance::Monday)
        .with_holidays(us_federal_holidays())
}

/// The US federal holiday table, without any observance policy attached.
pub fn us_federal_holidays() -> Vec<Holiday> {
    use HolidayRule::{Fixed, LastWeekday, NthWeekday};
    use Weekday::{Mon, Thu};

    vec![
        Holiday::new("New Year's Day", Fixed { month: 1, day: 1 }),
        Holiday::new(
            "Martin Luther King Jr. Day",
            NthWeekday { month: 1, weekday: Mon, n: 3 },
        )
        .since(1986),
        Holiday::new("Presidents' Day", NthWeekday { month: 2, weekday: Mon, n: 3 }),
        Holiday::new("Memorial Day", LastWeekday { month: 5, weekday: Mon }),
        Holiday::new("Juneteenth", Fixed { month: 6, day: 19 }).since(2022),
        Holiday::new("Independence Day", Fixed { month: 7, day: 4 }),
        Holiday::new("Labor Day", NthWeekday { month: 9, weekday: Mon, n: 1 }),
        Holiday::new("Columbus Day", NthWeekday { month: 10, weekday: Mon, n: 2 }),
        Holiday::new("Veterans Day", Fixed { month: 11, day: 11 }),
        Holiday::new("Thanksgiving Day", NthWeekday { month: 11, weekday: Thu, n: 4 }),
        Holiday::new("Christmas Day", Fixed { month: 12, day: 25 }),
    ]
}
