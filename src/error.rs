//! Error types for the solar noon library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while setting up or evaluating solar noon calculations.
///
/// The solar math itself never fails; numeric edge cases are clamped. Errors only
/// come from invalid construction parameters or from local times that a time zone
/// cannot represent.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid standard meridian (must be between -180 and +180 degrees).
    InvalidStandardMeridian {
        /// The invalid meridian value provided.
        value: f64,
    },
    /// A local date/time that cannot be represented in the requested time zone.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Invalid display or refresh configuration.
    InvalidConfig {
        /// Description of the configuration problem.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidStandardMeridian { value } => {
                write!(
                    f,
                    "invalid standard meridian {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidConfig { message } => {
                write!(f, "invalid configuration: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid standard meridian error.
    #[must_use]
    pub const fn invalid_standard_meridian(value: f64) -> Self {
        Self::InvalidStandardMeridian { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub const fn invalid_config(message: &'static str) -> Self {
        Self::InvalidConfig { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates a time zone's reference meridian (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidStandardMeridian` if the meridian is outside -180 to +180 degrees.
pub fn check_standard_meridian(meridian: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&meridian) {
        return Err(Error::invalid_standard_meridian(meridian));
    }
    Ok(())
}

/// Validates latitude, longitude and standard meridian together.
///
/// # Errors
/// Returns the error for the first out-of-range value.
pub fn check_location(latitude: f64, longitude: f64, standard_meridian: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    check_standard_meridian(standard_meridian)?;
    Ok(())
}
