//! Sources of the current instant.
//!
//! The calculator never reads the host clock itself. Callers pass an instant, or a
//! [`Clock`] to take one from, which keeps the math reproducible under test.

use crate::{NextSolarNoon, Result, SolarCalculator, SolarPosition};
use chrono::{DateTime, TimeDelta, TimeZone};

/// Something that can tell the current date and time.
pub trait Clock {
    /// Time zone of the instants this clock reports.
    type Tz: TimeZone;

    /// Returns the current instant.
    fn now(&self) -> DateTime<Self::Tz>;

    /// Lets a pinned clock follow a render loop that just spent `by`.
    ///
    /// Clocks that read real time ignore this.
    fn advance(&mut self, _by: TimeDelta) {}
}

/// The host's wall clock in the host's local time zone.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    type Tz = chrono::Local;

    fn now(&self) -> DateTime<chrono::Local> {
        chrono::Local::now()
    }
}

/// A clock pinned to a chosen instant.
///
/// # Example
/// ```
/// # use solar_noon::{Clock, FixedClock};
/// use chrono::{TimeDelta, TimeZone, Utc};
///
/// let mut clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 6, 0, 0).unwrap());
/// clock.advance(TimeDelta::minutes(90));
/// assert_eq!(clock.now(), Utc.with_ymd_and_hms(2025, 1, 1, 7, 30, 0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedClock<Tz: TimeZone> {
    instant: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.instant.clone()
    }

    /// Moves the pinned instant forward (or backward, for a negative delta).
    fn advance(&mut self, by: TimeDelta) {
        self.instant = self.instant.clone() + by;
    }
}

impl SolarCalculator {
    /// Counts down to the next solar noon as seen from `clock`'s current instant.
    ///
    /// # Errors
    /// See [`SolarCalculator::time_to_next_solar_noon`].
    pub fn time_to_next_solar_noon_from<C: Clock + ?Sized>(
        &self,
        clock: &C,
    ) -> Result<NextSolarNoon<C::Tz>> {
        self.time_to_next_solar_noon(&clock.now())
    }

    /// Calculates the sun position at `clock`'s current instant.
    #[must_use]
    pub fn solar_position_from<C: Clock + ?Sized>(&self, clock: &C) -> SolarPosition {
        self.solar_position(&clock.now())
    }
}
