//! Integration tests for `BankDate`.
//!
//! Every table case is checked twice: once through the default-zone
//! constructor and once with the Eastern zone passed explicitly.

use bt_time::{BankDate, Calendar};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::America::New_York;
use chrono_tz::Tz;
use proptest::prelude::*;

fn est(y: i32, m: u32, d: u32) -> DateTime<Tz> {
    New_York.with_ymd_and_hms(y, m, d, 1, 0, 0).unwrap()
}

fn both(instant: DateTime<Tz>) -> [BankDate; 2] {
    [
        BankDate::from_instant(instant),
        BankDate::new(instant, Some(New_York)),
    ]
}

#[test]
fn test_is_banking_day() {
    let cases = [
        // New Year's Day
        (est(2018, 1, 1), false),
        // Wednesday canary
        (est(2018, 1, 3), true),
        // Saturday
        (est(2018, 1, 6), false),
        // Sunday
        (est(2018, 1, 7), false),
        // Martin Luther King Jr. Day
        (est(2018, 1, 15), false),
        // Presidents' Day
        (est(2018, 2, 19), false),
        // Memorial Day
        (est(2018, 5, 28), false),
        // Independence Day
        (est(2018, 7, 4), false),
        // Labor Day
        (est(2018, 9, 3), false),
        // Columbus Day
        (est(2018, 10, 8), false),
        // Veterans Day observed on the Monday
        (est(2018, 11, 12), false),
        // Thanksgiving Day
        (est(2018, 11, 22), false),
        // Christmas Day
        (est(2018, 12, 25), false),
        // Friday before a Saturday Independence Day stays open
        (est(2020, 7, 3), true),
        // Monday after a Sunday Christmas
        (est(2022, 12, 26), false),
    ];
    for (instant, expected) in cases {
        for bd in both(instant) {
            assert_eq!(
                bd.is_banking_day(),
                expected,
                "date {instant}: expected {expected}"
            );
        }
    }
}

#[test]
fn test_is_weekend() {
    let cases = [
        (est(2018, 1, 6), true),
        (est(2018, 1, 7), true),
        // Tuesday
        (est(2018, 1, 9), false),
    ];
    for (instant, expected) in cases {
        for bd in both(instant) {
            assert_eq!(bd.is_weekend(), expected, "date {instant}");
        }
    }
}

#[test]
fn test_add_banking_days() {
    // Thursday plus two banking days over the MLK Monday holiday is the
    // following Tuesday.
    let cases = [(est(2018, 1, 11), est(2018, 1, 16), 2)];
    for (start, future, days) in cases {
        for mut bd in both(start) {
            let actual = bd.add_banking_days(days).unwrap();
            assert_eq!(actual, future, "adding {days} days: expected {}", future.weekday());
            assert_eq!(bd.instant(), future);
        }
    }
}

#[test]
fn test_eastern_date_wins_over_utc_date() {
    // 03:00 UTC on Tuesday 2018-01-16 is still MLK Day in New York.
    let utc = Utc.with_ymd_and_hms(2018, 1, 16, 3, 0, 0).unwrap();
    let eastern = BankDate::from_instant(utc);
    assert_eq!(eastern.date(), NaiveDate::from_ymd_opt(2018, 1, 15).unwrap());
    assert!(!eastern.is_banking_day());

    let in_utc = BankDate::new(utc, Some(Tz::UTC));
    assert_eq!(in_utc.date(), NaiveDate::from_ymd_opt(2018, 1, 16).unwrap());
    assert!(in_utc.is_banking_day());
}

#[test]
fn test_result_keeps_construction_zone() {
    let utc = Utc.with_ymd_and_hms(2018, 1, 11, 18, 0, 0).unwrap();
    let mut bd = BankDate::with_zone_name(utc, "America/Los_Angeles").unwrap();
    let out = bd.add_banking_days(1).unwrap();
    assert_eq!(out.timezone(), chrono_tz::America::Los_Angeles);
    assert_eq!(out.date_naive(), NaiveDate::from_ymd_opt(2018, 1, 12).unwrap());
}

#[test]
fn test_queries_are_idempotent() {
    let bd = BankDate::from_instant(est(2018, 1, 15));
    let first = (bd.is_banking_day(), bd.is_weekend());
    let second = (bd.is_banking_day(), bd.is_weekend());
    assert_eq!(first, second);
    assert_eq!(bd.instant(), est(2018, 1, 15));
}

#[test]
fn test_crossing_dst_start_weekend() {
    // Clocks jump 02:00 -> 03:00 in New York and 00:00 -> 01:00 in Havana
    // on Sunday 2018-03-11; both wall-clock times below vanish that day.
    let zones = [
        (New_York, NaiveTime::from_hms_opt(2, 30, 0).unwrap()),
        (chrono_tz::America::Havana, NaiveTime::from_hms_opt(0, 30, 0).unwrap()),
    ];
    for (zone, wall_clock) in zones {
        let at = |d: u32| {
            zone.from_local_datetime(&NaiveDate::from_ymd_opt(2018, 3, d).unwrap().and_time(wall_clock))
                .single()
                .unwrap()
        };
        let friday = at(9);
        let monday = at(12);

        let mut bd = BankDate::new(friday, Some(zone));
        assert_eq!(bd.add_banking_days(1).unwrap(), monday, "{zone}: forward");
        assert!(bd.is_banking_day());
        assert_eq!(bd.date(), NaiveDate::from_ymd_opt(2018, 3, 12).unwrap());

        assert_eq!(bd.add_banking_days(-1).unwrap(), friday, "{zone}: backward");
        assert!(bd.is_banking_day());
        assert_eq!(bd.date(), NaiveDate::from_ymd_opt(2018, 3, 9).unwrap());
    }
}

// ─── Properties ──────────────────────────────────────────────────────────────

fn any_instant() -> impl Strategy<Value = DateTime<Tz>> {
    // Any second from 1990 to mid-2044, daylight-saving gaps included.
    (0i64..20_000 * 86_400).prop_map(|secs| {
        (Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs))
            .with_timezone(&New_York)
    })
}

proptest! {
    #[test]
    fn weekends_are_never_banking_days(instant in any_instant()) {
        let bd = BankDate::from_instant(instant);
        if matches!(instant.weekday(), Weekday::Sat | Weekday::Sun) {
            prop_assert!(bd.is_weekend());
            prop_assert!(!bd.is_banking_day());
        }
    }

    #[test]
    fn banking_day_agrees_with_calendar(instant in any_instant()) {
        let bd = BankDate::from_instant(instant);
        // The observed-Monday policy already closes Mondays after Sunday
        // holidays, so the calendar's own verdict matches.
        prop_assert_eq!(bd.is_banking_day(), bd.calendar().is_business_day(bd.date()));
    }

    #[test]
    fn advancing_is_monotone_and_lands_on_banking_days(
        instant in any_instant(),
        days in 1i32..30,
    ) {
        let mut bd = BankDate::from_instant(instant);
        let before = bd.instant();
        let after = bd.add_banking_days(days).unwrap();
        prop_assert!(after > before);
        prop_assert!(bd.is_banking_day());
        prop_assert_eq!(
            bd.calendar().business_days_between(before.date_naive(), after.date_naive()),
            days
        );
    }

    #[test]
    fn forward_then_back_returns_to_banking_start(instant in any_instant(), days in 1i32..30) {
        let mut bd = BankDate::from_instant(instant);
        if bd.is_banking_day() {
            bd.add_banking_days(days).unwrap();
            let back = bd.add_banking_days(-days).unwrap();
            prop_assert_eq!(back, instant);
        }
    }
}
