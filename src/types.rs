//! Core data types for solar noon calculations.

use crate::error::check_location;
use crate::Result;

/// An observer's position together with the reference meridian of its civil time zone.
///
/// Values are fixed at construction and never change afterwards.
///
/// # Example
/// ```
/// # use solar_noon::Location;
/// let angamaly = Location::ANGAMALY;
/// assert_eq!(angamaly.latitude(), 10.1960);
/// assert_eq!(angamaly.standard_meridian(), 82.5);
///
/// let greenwich = Location::new(51.4779, -0.0015, 0.0).unwrap();
/// assert!(greenwich.longitude() < 0.0);
///
/// assert!(Location::new(91.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, positive north (-90 to +90)
    latitude: f64,
    /// Longitude in degrees, positive east (-180 to +180)
    longitude: f64,
    /// Reference meridian of the local civil time zone in degrees, positive east
    standard_meridian: f64,
}

impl Location {
    /// Angamaly, Kerala: 10.1960° N, 76.3860° E, on Indian Standard Time (82.5° E).
    pub const ANGAMALY: Self = Self {
        latitude: 10.1960,
        longitude: 76.3860,
        standard_meridian: 82.5,
    };

    /// Creates a new location.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidStandardMeridian`
    /// for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64, standard_meridian: f64) -> Result<Self> {
        check_location(latitude, longitude, standard_meridian)?;
        Ok(Self {
            latitude,
            longitude,
            standard_meridian,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the standard meridian in degrees.
    #[must_use]
    pub const fn standard_meridian(&self) -> f64 {
        self.standard_meridian
    }

    /// Minutes of clock time by which solar noon trails civil noon because the
    /// observer sits west of the standard meridian (4 minutes per degree).
    ///
    /// Negative when the observer is east of the meridian.
    #[must_use]
    pub fn longitude_correction_minutes(&self) -> f64 {
        (self.standard_meridian - self.longitude) * 4.0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::ANGAMALY
    }
}

/// Approximate apparent position of the sun for an observer.
///
/// - Azimuth: 0° = North, measured clockwise, always in [0°, 360°)
/// - Elevation: 0° = horizon, 90° = overhead, in [-90°, +90°]
/// - Declination: in [-23.45°, +23.45°]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    azimuth: f64,
    elevation: f64,
    declination: f64,
}

impl SolarPosition {
    pub(crate) const fn new(azimuth: f64, elevation: f64, declination: f64) -> Self {
        Self {
            azimuth,
            elevation,
            declination,
        }
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the elevation angle above the horizon in degrees.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the zenith angle in degrees (complement of the elevation).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Checks if the sun is above the horizon (elevation > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_angamaly_constant() {
        let location = Location::default();
        assert_eq!(location, Location::ANGAMALY);
        assert_eq!(location.latitude(), 10.1960);
        assert_eq!(location.longitude(), 76.3860);
        assert_eq!(location.standard_meridian(), 82.5);
    }

    #[test]
    fn test_location_validation() {
        assert!(Location::new(0.0, 0.0, 0.0).is_ok());
        assert!(Location::new(-90.0, 180.0, -180.0).is_ok());

        assert_eq!(
            Location::new(-95.0, 0.0, 0.0),
            Err(Error::invalid_latitude(-95.0))
        );
        assert_eq!(
            Location::new(0.0, 181.0, 0.0),
            Err(Error::invalid_longitude(181.0))
        );
        assert!(Location::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_longitude_correction_sign() {
        // West of the meridian: solar noon comes after civil noon
        let correction = Location::ANGAMALY.longitude_correction_minutes();
        assert!(correction > 0.0);
        assert!((correction - 24.456).abs() < 1e-9);

        // East of the meridian: solar noon comes first
        let east = Location::new(0.0, 90.0, 82.5).unwrap();
        assert!(east.longitude_correction_minutes() < 0.0);

        let on_meridian = Location::new(0.0, 82.5, 82.5).unwrap();
        assert_eq!(on_meridian.longitude_correction_minutes(), 0.0);
    }

    #[test]
    fn test_solar_position_accessors() {
        let pos = SolarPosition::new(180.0, 60.0, 10.0);
        assert_eq!(pos.azimuth(), 180.0);
        assert_eq!(pos.elevation(), 60.0);
        assert_eq!(pos.declination(), 10.0);
        assert_eq!(pos.zenith_angle(), 30.0);
        assert!(pos.is_sun_up());
        assert!(!pos.is_sun_down());
    }

    #[test]
    fn test_solar_position_sun_state() {
        let on_horizon = SolarPosition::new(90.0, 0.0, 0.0);
        assert!(!on_horizon.is_sun_up());
        assert!(on_horizon.is_sun_down());

        let below_horizon = SolarPosition::new(270.0, -30.0, 0.0);
        assert!(below_horizon.is_sun_down());
        assert_eq!(below_horizon.zenith_angle(), 120.0);
    }
}
