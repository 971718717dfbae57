//! # Solar Noon
//!
//! Local solar noon countdown and approximate sun position for a fixed observer.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculator combines a longitude correction (4 minutes of clock time per degree
//! between the observer and the time zone's standard meridian) with a low-order
//! approximation of the equation of time to find the clock time at which the sun
//! crosses the local meridian. The same model gives the sun's declination, hour angle,
//! elevation and azimuth.
//!
//! It is deliberately simple: no refraction, nutation, precession or leap seconds.
//! Expect errors of about a minute of time and a fraction of a degree.
//!
//! ## Features
//!
//! - Pure numeric API from day-of-year and local clock hours (works in `no_std`)
//! - `DateTime<Tz>` API that reads the wall-clock fields of any chrono time zone
//! - Injected [`Clock`] so countdowns can be driven by a fixed instant in tests
//! - Thread-safe: stateless, `Copy` value types
//!
//! ## Feature Flags
//!
//! - `std` (default): native math functions, [`SystemClock`], text rendering
//! - `chrono` (default): `DateTime<Tz>` based API and [`Clock`]
//! - `libm`: pure Rust math for `no_std` environments
//! - `cli`: the `solar-noon` terminal countdown
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{FixedOffset, TimeZone};
//! use solar_noon::{Location, SolarCalculator};
//!
//! let ist = FixedOffset::east_opt(19_800).unwrap();
//! let now = ist.with_ymd_and_hms(2025, 3, 22, 9, 0, 0).unwrap();
//!
//! let calculator = SolarCalculator::new(Location::ANGAMALY);
//! let next = calculator.time_to_next_solar_noon(&now).unwrap();
//! println!("Solar noon at {} (in {} ms)", next.solar_noon(), next.remaining_millis());
//!
//! let position = calculator.solar_position(&now);
//! println!("Azimuth: {:.2}°", position.azimuth());
//! println!("Elevation: {:.2}°", position.elevation());
//! println!("Declination: {:.2}°", position.declination());
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use solar_noon::{SolarCalculator, solar::equation_of_time_for_day};
//!
//! let calculator = SolarCalculator::default();
//! let eot = equation_of_time_for_day(81); // around the March equinox
//! let noon = calculator.solar_noon_hours(81);
//! let position = calculator.solar_position_at(81, noon);
//!
//! assert!((eot + 7.53).abs() < 1e-9);
//! assert!((position.azimuth() - 180.0).abs() < 0.01);
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Elevation**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Declination**: positive north of the celestial equator (-23.45° to +23.45°)

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
#[cfg(feature = "chrono")]
pub use crate::clock::{Clock, FixedClock};
#[cfg(all(feature = "chrono", feature = "std"))]
pub use crate::clock::SystemClock;
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::solar::NextSolarNoon;
pub use crate::solar::SolarCalculator;
pub use crate::types::{Location, SolarPosition};

// Calculation modules
pub mod solar;

// Core modules
pub mod error;
pub mod types;

#[cfg(feature = "chrono")]
pub mod clock;

#[cfg(feature = "std")]
pub mod display;

// Internal modules
mod math;
