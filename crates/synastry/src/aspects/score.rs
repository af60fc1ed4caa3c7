use crate::aspects::calculator::AspectCalculator;
use crate::aspects::types::Aspect;
use crate::chart::NatalChart;

const BASE_SCORE: i32 = 50;

/// Harmony score in [0, 100] for an already truncated aspect list.
pub fn compatibility_score(aspects: &[Aspect]) -> u8 {
    let raw = aspects
        .iter()
        .fold(BASE_SCORE, |score, aspect| score + aspect.aspect_type.score_weight());
    raw.clamp(0, 100) as u8
}

impl AspectCalculator {
    /// Score over the aspects that survive this calculator's limit.
    pub fn score(&self, chart_a: &NatalChart, chart_b: &NatalChart) -> u8 {
        compatibility_score(&self.aspects(chart_a, chart_b))
    }
}
