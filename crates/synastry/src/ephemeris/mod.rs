pub mod adapter;
pub mod ascendant;
pub mod calendar;
pub mod types;

pub use adapter::SwissEphemeris;
pub use ascendant::{
    ascendant, greenwich_sidereal_hours, normalize_degrees, DEFAULT_LATITUDE, OBLIQUITY_DEG,
};
pub use calendar::CalendarLongitudes;
pub use types::{julian_day, EphemerisError, LongitudeProvider, LongitudeStrategy, UtcInstant};
