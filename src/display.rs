//! Text rendering for the countdown and the sun position readout.
//!
//! The calculator only produces numbers. This module turns them into the strings a
//! front end shows, and holds the validated refresh settings of such a front end.

use crate::{Error, Result, SolarPosition};
use core::fmt;
use std::time::Duration;

/// Label shown while solar noon is still ahead.
pub const LABEL_PENDING: &str = "ORBITAL ALIGNMENT IN";

/// Label shown when the countdown has gone negative.
pub const LABEL_PASSED: &str = "ALIGNMENT PASSED";

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// A signed millisecond difference broken into clock fields.
///
/// Fields hold the magnitude; the sign only selects the label. Hours are not
/// wrapped at 24.
///
/// # Example
/// ```
/// # use solar_noon::display::Countdown;
/// let countdown = Countdown::from_millis(12_719_160);
/// assert_eq!(countdown.clock_text(), "03:31:59");
/// assert_eq!(countdown.millis_text(), "160");
/// assert_eq!(countdown.label(), "ORBITAL ALIGNMENT IN");
/// assert_eq!(countdown.to_string(), "03:31:59.160");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    passed: bool,
    hours: u64,
    minutes: u64,
    seconds: u64,
    millis: u64,
}

impl Countdown {
    /// Splits a signed difference in milliseconds (`solar_noon − now`).
    #[must_use]
    pub const fn from_millis(diff: i64) -> Self {
        let magnitude = diff.unsigned_abs();
        Self {
            passed: diff < 0,
            hours: magnitude / MILLIS_PER_HOUR,
            minutes: (magnitude % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (magnitude % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
            millis: magnitude % MILLIS_PER_SECOND,
        }
    }

    /// Whether "now" is already past the target instant.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.passed
    }

    /// Whole hours of the magnitude.
    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.hours
    }

    /// Minutes within the hour.
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Seconds within the minute.
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Milliseconds within the second.
    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.millis
    }

    /// Heading to show above the countdown.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        if self.passed {
            LABEL_PASSED
        } else {
            LABEL_PENDING
        }
    }

    /// `HH:MM:SS`, zero padded.
    #[must_use]
    pub fn clock_text(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }

    /// `mmm`, zero padded.
    #[must_use]
    pub fn millis_text(&self) -> String {
        format!("{:03}", self.millis)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

/// Two-decimal rendering of a [`SolarPosition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionReadout(pub SolarPosition);

impl PositionReadout {
    /// Azimuth with two decimals.
    #[must_use]
    pub fn azimuth_text(&self) -> String {
        format!("{:.2}", self.0.azimuth())
    }

    /// Elevation with two decimals.
    #[must_use]
    pub fn elevation_text(&self) -> String {
        format!("{:.2}", self.0.elevation())
    }

    /// Declination with two decimals.
    #[must_use]
    pub fn declination_text(&self) -> String {
        format!("{:.2}", self.0.declination())
    }
}

impl fmt::Display for PositionReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AZ {:.2}°  EL {:.2}°  DEC {:.2}°",
            self.0.azimuth(),
            self.0.elevation(),
            self.0.declination()
        )
    }
}

/// Unvalidated front-end settings; `None` means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Refresh cadence in milliseconds. Default: 1000.
    pub refresh_interval_ms: Option<u64>,
    /// Render a single frame and stop. Default: `false`.
    pub once: Option<bool>,
    /// Also render the sun position. Default: `false`.
    pub show_position: Option<bool>,
}

/// Validated front-end settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    refresh_interval: Duration,
    once: bool,
    show_position: bool,
}

impl DisplayConfig {
    /// Default refresh cadence in milliseconds.
    pub const DEFAULT_REFRESH_MS: u64 = 1_000;
    /// Fastest accepted refresh cadence in milliseconds.
    pub const MIN_REFRESH_MS: u64 = 10;
    /// Slowest accepted refresh cadence in milliseconds.
    pub const MAX_REFRESH_MS: u64 = 60_000;

    /// Applies defaults to `options` and validates the result.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the refresh interval is outside
    /// [`Self::MIN_REFRESH_MS`]..=[`Self::MAX_REFRESH_MS`].
    pub fn from_options(options: DisplayOptions) -> Result<Self> {
        let refresh_ms = options
            .refresh_interval_ms
            .unwrap_or(Self::DEFAULT_REFRESH_MS);
        if refresh_ms < Self::MIN_REFRESH_MS {
            return Err(Error::invalid_config(
                "refresh interval must be at least 10 ms",
            ));
        }
        if refresh_ms > Self::MAX_REFRESH_MS {
            return Err(Error::invalid_config(
                "refresh interval must be at most 60000 ms",
            ));
        }

        Ok(Self {
            refresh_interval: Duration::from_millis(refresh_ms),
            once: options.once.unwrap_or(false),
            show_position: options.show_position.unwrap_or(false),
        })
    }

    /// Time to wait between frames.
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Whether to stop after one frame.
    #[must_use]
    pub const fn once(&self) -> bool {
        self.once
    }

    /// Whether frames include the sun position.
    #[must_use]
    pub const fn show_position(&self) -> bool {
        self.show_position
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(Self::DEFAULT_REFRESH_MS),
            once: false,
            show_position: false,
        }
    }
}

/// Renders one frame of the countdown for `now`.
///
/// The first line is the label and the countdown, the second the target instant,
/// and with `show_position` a third line carries the sun position.
///
/// # Errors
/// Propagates `InvalidDateTime` from the solar noon calculation.
#[cfg(feature = "chrono")]
pub fn render_frame<Tz>(
    calculator: &crate::SolarCalculator,
    now: &chrono::DateTime<Tz>,
    show_position: bool,
) -> Result<String>
where
    Tz: chrono::TimeZone,
    Tz::Offset: fmt::Display,
{
    let next = calculator.time_to_next_solar_noon(now)?;
    let countdown = Countdown::from_millis(next.remaining_millis());

    let mut frame = format!(
        "{} {}\nsolar noon {}",
        countdown.label(),
        countdown,
        next.solar_noon().format("%Y-%m-%d %H:%M:%S%.3f %:z")
    );
    if show_position {
        let readout = PositionReadout(calculator.solar_position(now));
        frame.push('\n');
        frame.push_str(&readout.to_string());
    }
    Ok(frame)
}

/// Renders the frame for `clock`'s current instant, then advances the clock by
/// one refresh interval.
///
/// A pinned clock therefore counts down across frames just like the system clock.
///
/// # Errors
/// Propagates `InvalidDateTime` from the solar noon calculation.
#[cfg(feature = "chrono")]
pub fn render_next_frame<C>(
    calculator: &crate::SolarCalculator,
    clock: &mut C,
    config: &DisplayConfig,
) -> Result<String>
where
    C: crate::Clock + ?Sized,
    <C::Tz as chrono::TimeZone>::Offset: fmt::Display,
{
    let frame = render_frame(calculator, &clock.now(), config.show_position())?;
    let step = chrono::TimeDelta::from_std(config.refresh_interval())
        .map_err(|_| Error::invalid_config("refresh interval out of range"))?;
    clock.advance(step);
    Ok(frame)
}
