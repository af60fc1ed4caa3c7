//! Combined comparison of two charts: score, summary and annotated aspects.

use crate::aspects::{Aspect, AspectCalculator};
use crate::chart::NatalChart;
use crate::interpretation::{relationship_summary, synastry_interpretation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpretedAspect {
    #[serde(flatten)]
    pub aspect: Aspect,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynastryReport {
    pub chart1_name: String,
    pub chart2_name: String,
    pub score: u8,
    pub summary: String,
    pub aspects: Vec<InterpretedAspect>,
}

impl SynastryReport {
    pub fn compare(calculator: &AspectCalculator, chart_a: &NatalChart, chart_b: &NatalChart) -> Self {
        let aspects = calculator.aspects(chart_a, chart_b);
        let score = crate::aspects::compatibility_score(&aspects);
        let summary = relationship_summary(&aspects).to_string();
        let aspects = aspects
            .into_iter()
            .map(|aspect| InterpretedAspect {
                interpretation: synastry_interpretation(
                    aspect.planet1,
                    aspect.planet2,
                    aspect.aspect_type,
                ),
                aspect,
            })
            .collect();

        Self {
            chart1_name: chart_a.name.clone(),
            chart2_name: chart_b.name.clone(),
            score,
            summary,
            aspects,
        }
    }
}
