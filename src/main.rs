//! Terminal countdown to the next local solar noon.

use std::error::Error;
use std::io::{self, Write};
use std::thread;

use chrono::{DateTime, TimeZone};
use clap::Parser;
use solar_noon::display::{DisplayConfig, DisplayOptions, render_next_frame};
use solar_noon::{Clock, FixedClock, SolarCalculator, SystemClock};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "solar-noon",
    version,
    about = "Counts down to local solar noon in Angamaly, Kerala"
)]
struct Args {
    /// Pin the clock to an RFC 3339 instant instead of reading the system clock
    #[arg(long = "at", value_name = "DATETIME")]
    at: Option<String>,

    /// Refresh interval in milliseconds (10-60000, default 1000)
    #[arg(short = 'i', long = "interval-ms", value_name = "MS")]
    interval_ms: Option<u64>,

    /// Print a single frame and exit
    #[arg(long = "once")]
    once: bool,

    /// Also print the sun's azimuth, elevation and declination
    #[arg(short = 'p', long = "position")]
    position: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

impl Args {
    fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            refresh_interval_ms: self.interval_ms,
            once: Some(self.once),
            show_position: Some(self.position),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = DisplayConfig::from_options(args.display_options())?;
    let calculator = SolarCalculator::default();
    let location = calculator.location();
    info!(
        latitude = location.latitude(),
        longitude = location.longitude(),
        standard_meridian = location.standard_meridian(),
        refresh_ms = config.refresh_interval().as_millis() as u64,
        "starting solar noon countdown"
    );

    match args.at.as_deref() {
        Some(at) => {
            let instant = DateTime::parse_from_rfc3339(at)?;
            info!(%instant, "clock pinned");
            run(&calculator, &mut FixedClock::new(instant), &config)
        }
        None => run(&calculator, &mut SystemClock, &config),
    }
}

fn run<C>(
    calculator: &SolarCalculator,
    clock: &mut C,
    config: &DisplayConfig,
) -> Result<(), Box<dyn Error>>
where
    C: Clock,
    <C::Tz as TimeZone>::Offset: std::fmt::Display,
{
    let mut stdout = io::stdout().lock();
    loop {
        debug!(now = %clock.now(), "frame");
        let frame = render_next_frame(calculator, clock, config)?;

        writeln!(stdout, "{frame}\n")?;
        stdout.flush()?;

        if config.once() {
            return Ok(());
        }
        thread::sleep(config.refresh_interval());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_noon::Error as SolarError;

    #[test]
    fn test_args_map_to_display_options() {
        let args =
            Args::try_parse_from(["solar-noon", "-i", "250", "--once", "--position"]).unwrap();
        let config = DisplayConfig::from_options(args.display_options()).unwrap();

        assert_eq!(config.refresh_interval().as_millis(), 250);
        assert!(config.once());
        assert!(config.show_position());
        assert!(args.at.is_none());
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_too_short_interval_is_rejected() {
        let args = Args::try_parse_from(["solar-noon", "--interval-ms", "5"]).unwrap();
        assert!(matches!(
            DisplayConfig::from_options(args.display_options()),
            Err(SolarError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_non_numeric_interval_fails_to_parse() {
        assert!(Args::try_parse_from(["solar-noon", "--interval-ms", "soon"]).is_err());
    }
}
