pub mod aspects;
pub mod catalog;
pub mod chart;
pub mod ephemeris;
pub mod interpretation;
pub mod report;
pub mod rng;

pub use aspects::{Aspect, AspectCalculator, AspectTone, AspectType};
pub use catalog::{CatalogError, Element, Planet, ZodiacSign, CHART_PALETTE};
pub use chart::{BirthData, ChartBuilder, ChartError, ChartSettings, NatalChart, PlanetPlacement};
pub use ephemeris::{LongitudeProvider, LongitudeStrategy};
pub use interpretation::{natal_interpretation, relationship_summary, synastry_interpretation};
pub use report::{InterpretedAspect, SynastryReport};

/// Build a chart with the default settings: calendar strategy, latitude 40.
pub fn build_chart(
    name: &str,
    birth_date: &str,
    birth_time: &str,
    birth_place: &str,
) -> Result<NatalChart, ChartError> {
    ChartBuilder::default().build(&BirthData::new(name, birth_date, birth_time, birth_place))
}

/// The 15 tightest aspects between two charts.
pub fn aspects(chart_a: &NatalChart, chart_b: &NatalChart) -> Vec<Aspect> {
    AspectCalculator::new().aspects(chart_a, chart_b)
}

/// Compatibility score in [0, 100].
pub fn score(chart_a: &NatalChart, chart_b: &NatalChart) -> u8 {
    AspectCalculator::new().score(chart_a, chart_b)
}
