use crate::catalog::{Planet, CHART_PALETTE};
use crate::chart::data::{BirthData, ChartError, NatalChart, PlanetPlacement};
use crate::chart::settings::ChartSettings;
use crate::ephemeris::{ascendant, LongitudeProvider};
use crate::rng::SeededRng;
use log::{debug, trace};
use uuid::Uuid;

/// Builds natal charts from birth data with one fixed longitude provider.
pub struct ChartBuilder {
    provider: Box<dyn LongitudeProvider>,
    latitude: f64,
}

impl ChartBuilder {
    pub fn new(settings: &ChartSettings) -> Self {
        Self::with_provider(settings.longitude_strategy.provider(), settings.latitude)
    }

    pub fn with_provider(provider: Box<dyn LongitudeProvider>, latitude: f64) -> Self {
        Self { provider, latitude }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Build a chart. Fails only when the date or time does not parse, or
    /// when the ephemeris library reports an error.
    ///
    /// The chart's seeded stream is drawn in a fixed order: palette colour
    /// first, then one value per planet without an authoritative longitude,
    /// in catalog order.
    pub fn build(&self, birth: &BirthData) -> Result<NatalChart, ChartError> {
        let instant = birth.instant()?;
        let asc = ascendant(instant, self.latitude);

        let mut rng = SeededRng::from_birth(birth);
        let color = CHART_PALETTE[rng.next_below(CHART_PALETTE.len())].to_string();

        let mut placements = Vec::with_capacity(Planet::ALL.len());
        for planet in Planet::ALL {
            let degree = match self.provider.longitude(planet, instant)? {
                Some(lon) => lon,
                None => {
                    // Illustrative filler, not an astronomical position.
                    let lon = (asc + rng.next_below(360) as f64).rem_euclid(360.0);
                    trace!("{}: filler longitude {:.2} for {}", birth.name, lon, planet);
                    lon
                }
            };
            placements.push(PlanetPlacement::new(planet, degree, asc));
        }

        debug!(
            "Built chart for {} ({} strategy): ascendant {:.2}, sun {:.2}",
            birth.name,
            self.provider.name(),
            asc,
            placements[0].degree
        );

        Ok(NatalChart {
            id: Uuid::new_v4(),
            name: birth.name.clone(),
            birth_date: birth.birth_date.clone(),
            birth_time: birth.birth_time.clone(),
            birth_place: birth.birth_place.clone(),
            color,
            ascendant: asc,
            placements,
        })
    }
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new(&ChartSettings::default())
    }
}
