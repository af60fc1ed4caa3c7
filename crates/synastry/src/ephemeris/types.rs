use crate::catalog::Planet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::adapter::SwissEphemeris;
use super::calendar::CalendarLongitudes;

pub type UtcInstant = DateTime<Utc>;

/// Julian Day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Errors that can occur while computing longitudes
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Failed to calculate position for {planet} at {datetime}: {message}")]
    CalculationFailed {
        planet: Planet,
        datetime: UtcInstant,
        message: String,
    },
    #[error("Unknown longitude strategy: {name}. Valid strategies: {valid:?}")]
    UnknownStrategy { name: String, valid: Vec<String> },
}

/// Source of ecliptic longitudes.
///
/// Implementations must be pure in `(planet, instant)`: same inputs, same
/// answer, no interior state. `Ok(None)` means the provider has no
/// authoritative value for that body; the chart builder fills it from the
/// chart's seeded generator.
pub trait LongitudeProvider: Send + Sync {
    /// Short identifier used in logs and settings.
    fn name(&self) -> &'static str;

    /// Longitude in degrees, normalized to [0, 360).
    fn longitude(&self, planet: Planet, instant: UtcInstant)
        -> Result<Option<f64>, EphemerisError>;
}

/// Which longitude provider a chart builder is constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LongitudeStrategy {
    /// Sun from calendar boundaries, other bodies from the seeded generator.
    #[default]
    Calendar,
    /// Every body from the Swiss Ephemeris.
    Ephemeris,
}

impl LongitudeStrategy {
    pub const ALL: [LongitudeStrategy; 2] = [LongitudeStrategy::Calendar, LongitudeStrategy::Ephemeris];

    pub fn name(self) -> &'static str {
        match self {
            LongitudeStrategy::Calendar => "calendar",
            LongitudeStrategy::Ephemeris => "ephemeris",
        }
    }

    pub fn provider(self) -> Box<dyn LongitudeProvider> {
        match self {
            LongitudeStrategy::Calendar => Box::new(CalendarLongitudes),
            LongitudeStrategy::Ephemeris => Box::new(SwissEphemeris::new()),
        }
    }
}

impl fmt::Display for LongitudeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LongitudeStrategy {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s.trim().to_lowercase())
            .ok_or_else(|| EphemerisError::UnknownStrategy {
                name: s.to_string(),
                valid: Self::ALL.iter().map(|st| st.name().to_string()).collect(),
            })
    }
}

/// Julian Day (UT) for an instant.
pub fn julian_day(instant: UtcInstant) -> f64 {
    let seconds = instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 / 1e9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_julian_day_j2000() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day(j2000) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("Ephemeris".parse::<LongitudeStrategy>().unwrap(), LongitudeStrategy::Ephemeris);
        assert_eq!("calendar".parse::<LongitudeStrategy>().unwrap(), LongitudeStrategy::Calendar);
        assert!(matches!(
            "vsop".parse::<LongitudeStrategy>(),
            Err(EphemerisError::UnknownStrategy { .. })
        ));
    }
}
