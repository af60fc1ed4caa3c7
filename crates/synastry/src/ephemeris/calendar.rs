//! Approximate Sun positions from calendar boundaries.
//!
//! Only the Sun gets a longitude here. Every other body is left to the chart
//! builder's seeded filler and is not astronomically meaningful.

use super::types::{EphemerisError, LongitudeProvider, UtcInstant};
use crate::catalog::{Planet, ZodiacSign};
use chrono::{Datelike, NaiveDate};

/// Tropical sign entry dates as (sign, month, day), in calendar order.
/// Capricorn appears twice so that early January has a preceding boundary.
const SIGN_BOUNDARIES: [(ZodiacSign, u32, u32); 13] = [
    (ZodiacSign::Capricorn, 1, 1),
    (ZodiacSign::Aquarius, 1, 20),
    (ZodiacSign::Pisces, 2, 19),
    (ZodiacSign::Aries, 3, 21),
    (ZodiacSign::Taurus, 4, 20),
    (ZodiacSign::Gemini, 5, 21),
    (ZodiacSign::Cancer, 6, 21),
    (ZodiacSign::Leo, 7, 23),
    (ZodiacSign::Virgo, 8, 23),
    (ZodiacSign::Libra, 9, 23),
    (ZodiacSign::Scorpio, 10, 23),
    (ZodiacSign::Sagittarius, 11, 22),
    (ZodiacSign::Capricorn, 12, 22),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarLongitudes;

impl CalendarLongitudes {
    /// Sun sign and absolute Sun degree for a calendar date.
    pub fn sun_position(date: NaiveDate) -> (ZodiacSign, f64) {
        let (month, day) = (date.month(), date.day());
        let (sign, entry_month, entry_day) = SIGN_BOUNDARIES
            .iter()
            .rev()
            .copied()
            .find(|&(_, m, d)| (month, day) >= (m, d))
            .unwrap_or(SIGN_BOUNDARIES[0]);

        let days_in = NaiveDate::from_ymd_opt(date.year(), entry_month, entry_day)
            .map(|entry| (date - entry).num_days().max(0))
            .unwrap_or(0);
        let degree_in_sign = days_in.min(29) as f64;

        (sign, sign.start_degree() + degree_in_sign)
    }
}

impl LongitudeProvider for CalendarLongitudes {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn longitude(
        &self,
        planet: Planet,
        instant: UtcInstant,
    ) -> Result<Option<f64>, EphemerisError> {
        match planet {
            Planet::Sun => Ok(Some(Self::sun_position(instant.date_naive()).1)),
            _ => Ok(None),
        }
    }
}
