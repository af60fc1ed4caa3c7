use crate::aspects::types::{Aspect, AspectType};
use crate::chart::{NatalChart, PlanetPlacement, DEFAULT_MAX_ASPECTS};
use log::trace;

/// Minimal angular distance between two longitudes, [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// True when no separation can fall inside two aspect windows at once.
pub fn orb_windows_disjoint() -> bool {
    AspectType::ALL.windows(2).all(|pair| {
        let (lower, upper) = (pair[0], pair[1]);
        lower.angle() + lower.max_orb() < upper.angle() - upper.max_orb()
    })
}

fn round_orb(orb: f64) -> f64 {
    (orb * 10.0).round() / 10.0
}

/// Aspect calculator
#[derive(Debug, Clone, Copy)]
pub struct AspectCalculator {
    max_aspects: usize,
}

impl AspectCalculator {
    /// Calculator keeping the 15 tightest aspects
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_ASPECTS)
    }

    pub fn with_limit(max_aspects: usize) -> Self {
        Self { max_aspects }
    }

    pub fn max_aspects(&self) -> usize {
        self.max_aspects
    }

    /// Classify the separation of two longitudes. Returns the matching
    /// aspect and its unrounded orb. Windows are disjoint, so at most one
    /// aspect matches.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(AspectType, f64)> {
        let angle_diff = angular_separation(lon1, lon2);

        AspectType::ALL.iter().find_map(|&aspect_type| {
            let orb = (angle_diff - aspect_type.angle()).abs();
            (orb <= aspect_type.max_orb()).then_some((aspect_type, orb))
        })
    }

    /// Synastry aspects between every placement of `chart_a` and every
    /// placement of `chart_b`, tightest first. Sorting is stable, so equal
    /// orbs keep catalog order of chart A's planet, then chart B's.
    pub fn aspects(&self, chart_a: &NatalChart, chart_b: &NatalChart) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for p1 in &chart_a.placements {
            for p2 in &chart_b.placements {
                if let Some(aspect) = self.pair_aspect(p1, p2, chart_a, chart_b) {
                    aspects.push(aspect);
                }
            }
        }
        self.finish(aspects)
    }

    /// Aspects between distinct placements of a single chart, each
    /// unordered pair once.
    pub fn natal_aspects(&self, chart: &NatalChart) -> Vec<Aspect> {
        let placements = &chart.placements;
        let mut aspects = Vec::new();
        for i in 0..placements.len() {
            for j in (i + 1)..placements.len() {
                if let Some(aspect) = self.pair_aspect(&placements[i], &placements[j], chart, chart)
                {
                    aspects.push(aspect);
                }
            }
        }
        self.finish(aspects)
    }

    fn pair_aspect(
        &self,
        p1: &PlanetPlacement,
        p2: &PlanetPlacement,
        chart_a: &NatalChart,
        chart_b: &NatalChart,
    ) -> Option<Aspect> {
        let (aspect_type, orb) = self.calculate_aspect(p1.degree, p2.degree)?;
        trace!(
            "{} {} {} {} {} (orb {:.2})",
            chart_a.name,
            p1.planet,
            aspect_type,
            chart_b.name,
            p2.planet,
            orb
        );
        Some(Aspect {
            planet1: p1.planet,
            planet2: p2.planet,
            aspect_type,
            orb: round_orb(orb),
            chart1_name: chart_a.name.clone(),
            chart2_name: chart_b.name.clone(),
        })
    }

    fn finish(&self, mut aspects: Vec<Aspect>) -> Vec<Aspect> {
        aspects.sort_by(|a, b| a.orb.total_cmp(&b.orb));
        aspects.truncate(self.max_aspects);
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
