//! Process-wide library settings.
//!
//! [`Settings`] holds the **default time zone** — the zone a `BankDate` is
//! evaluated in when the caller does not supply one.  The process-wide
//! instance is a singleton accessed via a `std::sync::OnceLock`.
//!
//! The default zone is resolved at most once.  The first call to either
//! [`Settings::default_zone`] or [`Settings::set_default_zone`] fixes it;
//! afterwards it is read-only and can be shared freely between threads.

use std::sync::OnceLock;

use chrono_tz::Tz;
use tracing::debug;

use crate::ensure;
use crate::errors::Result;

/// IANA identifier of the zone the Federal Reserve schedules are published in.
pub const DEFAULT_ZONE_NAME: &str = "America/New_York";

/// Process-wide settings used by the banktime library.
#[derive(Debug, Default)]
pub struct Settings {
    default_zone: OnceLock<Tz>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Create a standalone settings value, independent of the global one.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(Settings::new)
    }

    /// Return the default zone, initialising it to `America/New_York` on
    /// first use.
    pub fn default_zone(&self) -> Tz {
        *self.default_zone.get_or_init(|| {
            debug!(zone = DEFAULT_ZONE_NAME, "initialising default time zone");
            chrono_tz::America::New_York
        })
    }

    /// Inject the default zone before anything has read it.
    ///
    /// Setting the zone it already holds is a no-op.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if a different zone was already fixed.
    pub fn set_default_zone(&self, zone: Tz) -> Result<()> {
        let current = *self.default_zone.get_or_init(|| {
            debug!(zone = zone.name(), "default time zone injected");
            zone
        });
        ensure!(
            current == zone,
            "default time zone is already fixed to {}",
            current.name()
        );
        Ok(())
    }

    /// Return `true` once the default zone has been fixed.
    pub fn is_default_zone_fixed(&self) -> bool {
        self.default_zone.get().is_some()
    }
}
