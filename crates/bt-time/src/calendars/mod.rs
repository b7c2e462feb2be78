//! Concrete holiday calendars.

/// United States Federal Reserve calendar.
pub mod united_states;

pub use united_states::{united_states_federal_reserve, us_federal_holidays};
