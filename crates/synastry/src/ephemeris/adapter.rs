use super::ascendant::normalize_degrees;
use super::types::{julian_day, EphemerisError, LongitudeProvider, UtcInstant};
use crate::catalog::Planet;
use swisseph::swe::calc_ut;

// FLG_MOSEPH: Moshier analytical ephemeris, built into the library.
// No ephemeris data files are read.
const FLG_MOSEPH: u32 = 4;

/// Swiss Ephemeris adapter. Provides every body in the planet catalog.
#[derive(Debug, Clone, Copy)]
pub struct SwissEphemeris {
    flags: u32,
}

impl SwissEphemeris {
    pub fn new() -> Self {
        Self { flags: FLG_MOSEPH }
    }

    /// Geocentric tropical longitude of `planet` at Julian Day `jd` (UT).
    pub fn calc_longitude(
        &self,
        planet: Planet,
        jd: f64,
        instant: UtcInstant,
    ) -> Result<f64, EphemerisError> {
        let result = calc_ut(jd, planet.swiss_id() as u32, self.flags).map_err(|e| {
            EphemerisError::CalculationFailed {
                planet,
                datetime: instant,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                planet,
                datetime: instant,
                message: format!("non-finite longitude {}", longitude),
            });
        }
        Ok(normalize_degrees(longitude))
    }
}

impl Default for SwissEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl LongitudeProvider for SwissEphemeris {
    fn name(&self) -> &'static str {
        "ephemeris"
    }

    fn longitude(
        &self,
        planet: Planet,
        instant: UtcInstant,
    ) -> Result<Option<f64>, EphemerisError> {
        self.calc_longitude(planet, julian_day(instant), instant).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_longitude_matches_explicit_julian_day() {
        let swiss = SwissEphemeris::new();
        let instant = Utc.with_ymd_and_hms(1987, 4, 10, 19, 21, 0).unwrap();
        let via_provider = swiss.longitude(Planet::Mars, instant).unwrap().unwrap();
        let via_jd = swiss
            .calc_longitude(Planet::Mars, julian_day(instant), instant)
            .unwrap();
        assert_eq!(via_provider, via_jd);
    }

    #[test]
    fn test_uses_moshier_flag() {
        assert_eq!(SwissEphemeris::default().flags, FLG_MOSEPH);
    }
}
