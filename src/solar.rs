//! Solar noon and approximate sun position.
//!
//! Uses a low-order Fourier approximation of the equation of time and the classic
//! `23.45° · sin(360/365 · (d − 81))` declination model. Accuracy is in the order of
//! a minute of time and a fraction of a degree, which is plenty for a countdown but
//! not an ephemeris: there is no refraction, nutation or precession.
//!
//! Every computation is available through a numeric API taking the day of the year
//! and local clock hours, and (with the `chrono` feature) through `DateTime<Tz>`
//! wrappers that read those values from the instant's own wall clock.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    abs, acos, asin, clamp_unit, cos, degrees_to_radians, normalize_degrees_0_to_360,
    radians_to_degrees, sin,
};
#[cfg(feature = "chrono")]
use crate::math::{floor, round};
use crate::{Location, SolarPosition};
#[cfg(feature = "chrono")]
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike};

/// Day of the year closest to the March equinox in this model.
const EQUINOX_DAY: f64 = 81.0;

/// Maximum solar declination (obliquity of the ecliptic, rounded) in degrees.
pub const MAX_DECLINATION: f64 = 23.45;

/// Degrees of hour angle per hour of time.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Civil noon in decimal hours.
const NOON_HOURS: f64 = 12.0;

/// Below this, `cos(latitude) · cos(elevation)` is treated as zero and the azimuth is undefined.
const AZIMUTH_DIVISOR_EPSILON: f64 = 1e-12;

/// Seasonal angle B in radians for a day of the year.
fn seasonal_angle(day_of_year: u32) -> f64 {
    degrees_to_radians((360.0 / 365.0) * (f64::from(day_of_year) - EQUINOX_DAY))
}

/// Equation of time in minutes for a day of the year (1 = 1 January).
///
/// Positive values mean the sundial runs ahead of the clock. Day 366 of a leap
/// year is used as-is, which shifts the seasonal phase by about one day.
///
/// # Example
/// ```
/// # use solar_noon::solar::equation_of_time_for_day;
/// let eot = equation_of_time_for_day(81);
/// assert!((eot + 7.53).abs() < 1e-9);
/// ```
#[must_use]
pub fn equation_of_time_for_day(day_of_year: u32) -> f64 {
    let b = seasonal_angle(day_of_year);
    9.87 * sin(2.0 * b) - 7.53 * cos(b) - 1.5 * sin(b)
}

/// Approximate solar declination in degrees for a day of the year.
#[must_use]
pub fn declination_for_day(day_of_year: u32) -> f64 {
    MAX_DECLINATION * sin(seasonal_angle(day_of_year))
}

/// Result of a countdown query: the upcoming solar noon and how long until it.
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSolarNoon<Tz: TimeZone> {
    remaining: TimeDelta,
    solar_noon: DateTime<Tz>,
}

#[cfg(feature = "chrono")]
impl<Tz: TimeZone> NextSolarNoon<Tz> {
    /// Time left until [`Self::solar_noon`]. Never negative.
    #[must_use]
    pub const fn remaining(&self) -> TimeDelta {
        self.remaining
    }

    /// Time left in whole milliseconds.
    #[must_use]
    pub fn remaining_millis(&self) -> i64 {
        self.remaining.num_milliseconds()
    }

    /// The solar noon being counted down to, in the caller's time zone.
    #[must_use]
    pub const fn solar_noon(&self) -> &DateTime<Tz> {
        &self.solar_noon
    }

    /// Splits the result into its parts.
    pub fn into_parts(self) -> (TimeDelta, DateTime<Tz>) {
        (self.remaining, self.solar_noon)
    }
}

/// Solar noon and sun position calculator for a fixed [`Location`].
///
/// Stateless and `Copy`; every call recomputes from its inputs, so it can be
/// shared freely and queried once per display frame.
///
/// # Example
/// ```
/// # #[cfg(feature = "chrono")] {
/// use chrono::{FixedOffset, TimeZone};
/// use solar_noon::SolarCalculator;
///
/// let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
/// let now = ist.with_ymd_and_hms(2025, 3, 22, 9, 0, 0).unwrap();
///
/// let calculator = SolarCalculator::default();
/// let next = calculator.time_to_next_solar_noon(&now).unwrap();
/// assert_eq!(next.solar_noon().format("%H:%M:%S%.3f").to_string(), "12:31:59.160");
///
/// let position = calculator.solar_position(&now);
/// assert!(position.azimuth() < 180.0); // morning sun is in the east
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarCalculator {
    location: Location,
}

impl SolarCalculator {
    /// Creates a calculator for the given location.
    #[must_use]
    pub const fn new(location: Location) -> Self {
        Self { location }
    }

    /// Gets the location this calculator is bound to.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Minutes to add to 12:00 civil time to reach solar noon on the given day.
    ///
    /// Longitude correction minus the equation of time.
    #[must_use]
    pub fn solar_noon_correction_minutes(&self, day_of_year: u32) -> f64 {
        self.location.longitude_correction_minutes() - equation_of_time_for_day(day_of_year)
    }

    /// Local clock time of solar noon on the given day, in decimal hours.
    #[must_use]
    pub fn solar_noon_hours(&self, day_of_year: u32) -> f64 {
        NOON_HOURS + self.solar_noon_correction_minutes(day_of_year) / 60.0
    }

    /// Calculates the sun position from a day of the year and local clock time.
    ///
    /// # Arguments
    /// * `day_of_year` - Day of the year (1 = 1 January)
    /// * `local_hours` - Local standard time in decimal hours (e.g. 13.5 for 13:30)
    #[must_use]
    pub fn solar_position_at(&self, day_of_year: u32, local_hours: f64) -> SolarPosition {
        let latitude_rad = degrees_to_radians(self.location.latitude());
        let declination = declination_for_day(day_of_year);
        let declination_rad = degrees_to_radians(declination);

        let eot = equation_of_time_for_day(day_of_year);
        let solar_time = local_hours
            + (self.location.longitude() - self.location.standard_meridian()) / DEGREES_PER_HOUR
            + eot / 60.0;

        // Negative in the morning, positive in the afternoon
        let hour_angle = (solar_time - NOON_HOURS) * DEGREES_PER_HOUR;
        let hour_angle_rad = degrees_to_radians(hour_angle);

        let sin_elevation = sin(latitude_rad) * sin(declination_rad)
            + cos(latitude_rad) * cos(declination_rad) * cos(hour_angle_rad);
        let elevation_rad = asin(clamp_unit(sin_elevation));

        let azimuth = azimuth_degrees(latitude_rad, declination_rad, elevation_rad, hour_angle);

        SolarPosition::new(azimuth, radians_to_degrees(elevation_rad), declination)
    }
}

/// Azimuth clockwise from north, in [0, 360).
///
/// Falls back to 0° when the sun is at the zenith or nadir (or the observer at a
/// pole), where the bearing is undefined.
fn azimuth_degrees(
    latitude_rad: f64,
    declination_rad: f64,
    elevation_rad: f64,
    hour_angle: f64,
) -> f64 {
    let divisor = cos(latitude_rad) * cos(elevation_rad);
    if abs(divisor) < AZIMUTH_DIVISOR_EPSILON {
        return 0.0;
    }

    let cos_azimuth =
        (sin(declination_rad) - sin(latitude_rad) * sin(elevation_rad)) / divisor;
    let azimuth = radians_to_degrees(acos(clamp_unit(cos_azimuth)));

    let azimuth = if hour_angle > 0.0 {
        360.0 - azimuth
    } else {
        azimuth
    };
    normalize_degrees_0_to_360(azimuth)
}

/// Splits a correction in minutes into whole minutes plus the fractional part in
/// milliseconds, so sub-minute precision survives.
#[cfg(feature = "chrono")]
fn correction_delta(minutes: f64) -> TimeDelta {
    let whole = floor(minutes);
    let fraction_millis = round((minutes - whole) * 60_000.0);
    TimeDelta::minutes(whole as i64) + TimeDelta::milliseconds(fraction_millis as i64)
}

#[cfg(feature = "chrono")]
impl SolarCalculator {
    /// Equation of time in minutes for the local calendar day of `date`.
    #[must_use]
    pub fn equation_of_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> f64 {
        equation_of_time_for_day(date.ordinal())
    }

    /// Calculates solar noon on the local calendar day of `date`.
    ///
    /// The result is in the same time zone as `date`; `date` itself is not modified.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if solar noon falls in a local time the zone skips
    /// (a DST gap) or outside chrono's representable range.
    pub fn solar_noon<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        self.solar_noon_on(date.date_naive(), &date.timezone())
    }

    /// Calculates solar noon on a local calendar date in the given time zone.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the local solar noon cannot be represented in `tz`.
    pub fn solar_noon_on<Tz: TimeZone>(&self, date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>> {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .ok_or(Error::invalid_datetime("cannot build local noon"))?;
        let correction = correction_delta(self.solar_noon_correction_minutes(date.ordinal()));
        let local = noon
            .checked_add_signed(correction)
            .ok_or(Error::invalid_datetime("solar noon is out of range"))?;

        tz.from_local_datetime(&local)
            .earliest()
            .ok_or(Error::invalid_datetime("solar noon falls in a skipped local time"))
    }

    /// Finds the next solar noon at or after `now` and the time remaining until it.
    ///
    /// Today's solar noon is returned while `now` has not passed it (so the
    /// remaining time is exactly zero at the instant itself); any later `now`
    /// rolls over to tomorrow's.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if either day's solar noon cannot be represented.
    pub fn time_to_next_solar_noon<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<NextSolarNoon<Tz>> {
        let tz = now.timezone();
        let today = now.date_naive();
        let mut solar_noon = self.solar_noon_on(today, &tz)?;

        if *now > solar_noon {
            let tomorrow = today
                .succ_opt()
                .ok_or(Error::invalid_datetime("no calendar day after today"))?;
            solar_noon = self.solar_noon_on(tomorrow, &tz)?;
            tracing::debug!(%tomorrow, "solar noon passed, counting down to tomorrow");
        }

        let remaining = solar_noon.clone().signed_duration_since(now.clone());
        Ok(NextSolarNoon {
            remaining,
            solar_noon,
        })
    }

    /// Calculates the sun position at `now`.
    ///
    /// Reads the day of the year and the wall-clock time of `now` in its own time
    /// zone; sub-second precision is ignored.
    #[must_use]
    pub fn solar_position<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> SolarPosition {
        let local = now.naive_local();
        let local_hours = f64::from(local.hour())
            + f64::from(local.minute()) / 60.0
            + f64::from(local.second()) / 3600.0;
        self.solar_position_at(local.ordinal(), local_hours)
    }
}
