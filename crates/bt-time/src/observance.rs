//! Weekend observance policy for holidays.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// How a holiday that falls on a weekend is observed on a business day.
///
/// The actual holiday date is always a holiday; the policy decides which
/// *additional* weekday, if any, is closed in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observance {
    /// No shifting: only the actual date is a holiday.
    Exact,
    /// Saturday holidays are observed the preceding Friday, Sunday holidays
    /// the following Monday.
    Nearest,
    /// Sunday holidays are observed the following Monday.  Saturday
    /// holidays are not moved, so the preceding Friday stays open.
    ///
    /// This is the Federal Reserve Banks' rule.  Note that the general
    /// "observed Monday" convention found in other calendar libraries also
    /// moves Saturday holidays to the following Monday; this variant does
    /// not.
    #[default]
    Monday,
}

impl Observance {
    /// Return the weekday on which a holiday with `actual` date is observed.
    ///
    /// Returns `actual` itself when the policy does not shift it.
    pub fn observed(self, actual: NaiveDate) -> NaiveDate {
        let shifted = match (self, actual.weekday()) {
            (Observance::Nearest, Weekday::Sat) => actual.checked_sub_days(Days::new(1)),
            (Observance::Nearest | Observance::Monday, Weekday::Sun) => {
                actual.checked_add_days(Days::new(1))
            }
            _ => None,
        };
        shifted.unwrap_or(actual)
    }
}

impl std::fmt::Display for Observance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Observance::Exact => "Exact",
            Observance::Nearest => "Nearest",
            Observance::Monday => "Monday",
        };
        write!(f, "{s}")
    }
}
