//! Rising-degree approximation from sidereal time.
//!
//! Birth places are not geocoded, so the observer sits on the Greenwich
//! meridian at an assumed latitude. Local sidereal time is therefore the
//! Greenwich value.

use super::types::{julian_day, UtcInstant};

/// Mean obliquity of the ecliptic, degrees.
pub const OBLIQUITY_DEG: f64 = 23.4393;

/// Observer latitude used when the birth place carries no coordinates.
pub const DEFAULT_LATITUDE: f64 = 40.0;

const J2000_JD: f64 = 2_451_545.0;

/// Greenwich mean sidereal time in hours, [0, 24).
pub fn greenwich_sidereal_hours(instant: UtcInstant) -> f64 {
    let days = julian_day(instant) - J2000_JD;
    (18.697_374_558 + 24.065_709_824_419_08 * days).rem_euclid(24.0)
}

/// Ascendant longitude in degrees, [0, 360).
pub fn ascendant(instant: UtcInstant, latitude_deg: f64) -> f64 {
    let lst = (greenwich_sidereal_hours(instant) * 15.0).to_radians();
    let obliquity = OBLIQUITY_DEG.to_radians();
    let latitude = latitude_deg.to_radians();

    let y = lst.cos();
    let x = -(lst.sin() * obliquity.cos() + latitude.tan() * obliquity.sin());
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Fold any angle into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let value = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if value >= 360.0 {
        0.0
    } else {
        value
    }
}
