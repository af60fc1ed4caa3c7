use crate::aspects::Aspect;

pub const NO_DATA_SUMMARY: &str =
    "Not enough planetary connections to read. Try adding birth times for more detail.";

// (ratio strictly above, text), checked top-down
const BANDS: [(f64, &str); 3] = [
    (0.7, "A deeply harmonious connection. You naturally understand and uplift each other; this bond feels effortless and nurturing."),
    (0.5, "A balanced relationship with strong compatibility and just enough creative tension to keep things interesting."),
    (0.3, "A dynamic connection full of growth opportunities. The friction between you sparks transformation and deeper understanding."),
];

const CATALYTIC: &str = "An intense, catalytic bond. You challenge each other profoundly, and this relationship demands growth and self-awareness.";

/// Share of aspects that are Trine, Sextile or Conjunction. `None` when empty.
pub fn harmony_ratio(aspects: &[Aspect]) -> Option<f64> {
    if aspects.is_empty() {
        return None;
    }
    let harmonious = aspects
        .iter()
        .filter(|a| a.aspect_type.is_harmonious())
        .count();
    Some(harmonious as f64 / aspects.len() as f64)
}

pub fn relationship_summary(aspects: &[Aspect]) -> &'static str {
    let Some(ratio) = harmony_ratio(aspects) else {
        return NO_DATA_SUMMARY;
    };
    BANDS
        .iter()
        .find(|(threshold, _)| ratio > *threshold)
        .map(|(_, text)| *text)
        .unwrap_or(CATALYTIC)
}
