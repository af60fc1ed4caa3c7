use synastry::aspects::AspectType;
use synastry::catalog::{Planet, ZodiacSign};
use synastry::interpretation::{
    curated_synastry, natal_interpretation, relationship_summary, synastry_interpretation,
    NO_DATA_SUMMARY,
};
use synastry::{AspectCalculator, SynastryReport};

#[test]
fn test_mercury_uranus_trine_fallback() {
    assert!(curated_synastry(Planet::Mercury, Planet::Uranus, AspectType::Trine).is_none());
    assert!(curated_synastry(Planet::Uranus, Planet::Mercury, AspectType::Trine).is_none());

    let forward = synastry_interpretation(Planet::Mercury, Planet::Uranus, AspectType::Trine);
    let backward = synastry_interpretation(Planet::Uranus, Planet::Mercury, AspectType::Trine);
    assert!(!forward.is_empty());
    assert!(forward.contains("Mercury"));
    assert!(forward.contains("Uranus"));
    assert_eq!(forward, backward);
    assert_eq!(
        forward,
        "A supportive link: Mercury's communication and thinking flows naturally with Uranus's excitement and unpredictability."
    );
}

#[test]
fn test_every_combination_has_text() {
    for p1 in Planet::ALL {
        for p2 in Planet::ALL {
            for aspect in AspectType::ALL {
                let text = synastry_interpretation(p1, p2, aspect);
                assert!(!text.is_empty());
                assert_eq!(text, synastry_interpretation(p2, p1, aspect));
            }
        }
        for sign in ZodiacSign::ALL {
            assert!(!natal_interpretation(p1, sign).is_empty());
        }
    }
}

#[test]
fn test_curated_natal_text() {
    let text = natal_interpretation(Planet::Sun, ZodiacSign::Leo);
    assert!(text.starts_with("Generous and radiant"));
}

#[test]
fn test_report_for_unrelated_charts() {
    let a = synastry::build_chart("Ada", "1815-12-10", "13:00", "London").unwrap();
    let b = synastry::build_chart("Alan", "1912-06-23", "02:15", "London").unwrap();
    let calculator = AspectCalculator::new();

    let report = SynastryReport::compare(&calculator, &a, &b);
    assert_eq!(report.chart1_name, "Ada");
    assert_eq!(report.chart2_name, "Alan");
    assert_eq!(report.score, synastry::score(&a, &b));
    assert_eq!(report.aspects.len(), synastry::aspects(&a, &b).len());
    for item in &report.aspects {
        assert_eq!(
            item.interpretation,
            synastry_interpretation(item.aspect.planet1, item.aspect.planet2, item.aspect.aspect_type)
        );
    }
    let raw: Vec<_> = report.aspects.iter().map(|i| i.aspect.clone()).collect();
    assert_eq!(report.summary, relationship_summary(&raw));
    if raw.is_empty() {
        assert_eq!(report.summary, NO_DATA_SUMMARY);
    }

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["score"].is_u64());
    if let Some(first) = json["aspects"].get(0) {
        assert!(first["type"].is_string());
        assert!(first["interpretation"].is_string());
    }
}
