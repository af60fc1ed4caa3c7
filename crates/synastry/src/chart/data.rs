use crate::catalog::{Planet, ZodiacSign, HOUSES};
use crate::ephemeris::{normalize_degrees, EphemerisError, UtcInstant};
use chrono::{NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while building a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid birth instant: date {date:?}, time {time:?}")]
    InvalidInstant { date: String, time: String },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

lazy_static! {
    // H:MM or HH:MM, 24-hour clock
    static ref BIRTH_TIME: Regex = Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap();
}

/// Birth data as entered upstream. Field presence is validated by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `H:MM` or `HH:MM`
    pub birth_time: String,
    pub birth_place: String,
}

impl BirthData {
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        birth_time: impl Into<String>,
        birth_place: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            birth_place: birth_place.into(),
        }
    }

    /// Birth date and time read as a single UTC instant.
    pub fn instant(&self) -> Result<UtcInstant, ChartError> {
        let invalid = || ChartError::InvalidInstant {
            date: self.birth_date.clone(),
            time: self.birth_time.clone(),
        };

        let date = NaiveDate::parse_from_str(self.birth_date.trim(), "%Y-%m-%d")
            .map_err(|_| invalid())?;

        let caps = BIRTH_TIME.captures(self.birth_time.trim()).ok_or_else(invalid)?;
        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;

        Ok(date.and_time(time).and_utc())
    }
}

/// Sign containing an absolute longitude.
pub fn sign_of(degree: f64) -> ZodiacSign {
    ZodiacSign::from_longitude(degree)
}

/// Equal-house number (1-12) of a longitude measured from the ascendant.
pub fn house_of(degree: f64, ascendant: f64) -> u8 {
    let from_ascendant = (degree - ascendant + 360.0).rem_euclid(360.0);
    ((from_ascendant / 30.0).floor() as u8) % 12 + 1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPlacement {
    pub planet: Planet,
    pub sign: ZodiacSign,
    /// Absolute ecliptic longitude, [0, 360)
    pub degree: f64,
    pub house: u8,
}

impl PlanetPlacement {
    /// Derive sign and house from the longitude and the chart's ascendant.
    pub fn new(planet: Planet, degree: f64, ascendant: f64) -> Self {
        let degree = normalize_degrees(degree);
        Self {
            planet,
            sign: sign_of(degree),
            degree,
            house: house_of(degree, ascendant),
        }
    }

    /// Degree within the sign, [0, 30).
    pub fn degree_in_sign(&self) -> f64 {
        self.degree - self.sign.start_degree()
    }
}

/// A natal chart. Immutable once built; aspects are always recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub id: Uuid,
    pub name: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
    pub color: String,
    pub ascendant: f64,
    /// One per planet, in catalog order
    pub placements: Vec<PlanetPlacement>,
}

impl NatalChart {
    pub fn placement(&self, planet: Planet) -> Option<&PlanetPlacement> {
        self.placements.iter().find(|p| p.planet == planet)
    }

    pub fn sun_sign(&self) -> Option<ZodiacSign> {
        self.placement(Planet::Sun).map(|p| p.sign)
    }

    pub fn rising_sign(&self) -> ZodiacSign {
        sign_of(self.ascendant)
    }

    pub fn birth_data(&self) -> BirthData {
        BirthData::new(
            self.name.clone(),
            self.birth_date.clone(),
            self.birth_time.clone(),
            self.birth_place.clone(),
        )
    }

    /// Checks the placement invariants: ten placements in catalog order,
    /// degrees in range, sign and house derived from degree and ascendant.
    pub fn is_consistent(&self) -> bool {
        if !(0.0..360.0).contains(&self.ascendant) || self.placements.len() != Planet::ALL.len() {
            return false;
        }
        self.placements.iter().zip(Planet::ALL.iter()).all(|(p, planet)| {
            p.planet == *planet
                && (0.0..360.0).contains(&p.degree)
                && p.sign == sign_of(p.degree)
                && HOUSES.contains(&p.house)
                && p.house == house_of(p.degree, self.ascendant)
        })
    }
}
