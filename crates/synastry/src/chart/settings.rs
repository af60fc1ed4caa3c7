use crate::ephemeris::{LongitudeStrategy, DEFAULT_LATITUDE};
use serde::{Deserialize, Serialize};

/// Default cap on the number of aspects kept per comparison.
pub const DEFAULT_MAX_ASPECTS: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Longitude provider chosen when the builder is constructed
    pub longitude_strategy: LongitudeStrategy,
    /// Observer latitude for the ascendant, degrees north
    pub latitude: f64,
    /// Aspects kept after sorting by orb
    pub max_aspects: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            longitude_strategy: LongitudeStrategy::Calendar,
            latitude: DEFAULT_LATITUDE,
            max_aspects: DEFAULT_MAX_ASPECTS,
        }
    }
}
