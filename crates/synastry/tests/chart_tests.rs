use synastry::catalog::{Planet, ZodiacSign, CHART_PALETTE};
use synastry::chart::{house_of, BirthData, ChartBuilder, ChartError, ChartSettings};
use synastry::ephemeris::{ascendant, DEFAULT_LATITUDE};
use synastry::rng::{birth_seed, SeededRng};

fn sample_births() -> Vec<BirthData> {
    let mut births = Vec::new();
    for (i, month) in (1..=12).enumerate() {
        for day in [1, 9, 17, 28] {
            births.push(BirthData::new(
                format!("Person {}", i),
                format!("19{:02}-{:02}-{:02}", 50 + i, month, day),
                format!("{}:{:02}", (i * 5 + day) % 24, (day * 7) % 60),
                "Somewhere",
            ));
        }
    }
    births
}

#[test]
fn test_deterministic_rebuild() {
    let builder = ChartBuilder::default();
    let birth = BirthData::new("Marie", "1867-11-07", "14:30", "Warsaw");

    let first = builder.build(&birth).unwrap();
    let second = builder.build(&birth).unwrap();

    assert_eq!(first.ascendant, second.ascendant);
    assert_eq!(first.color, second.color);
    assert_eq!(first.placements, second.placements);
    assert_ne!(first.id, second.id);
}

#[test]
fn test_rebuild_from_stored_birth_data() {
    let builder = ChartBuilder::default();
    let chart = builder
        .build(&BirthData::new("Marie", "1867-11-07", "14:30", "Warsaw"))
        .unwrap();
    let birth = chart.birth_data();
    assert_eq!(birth, BirthData::new("Marie", "1867-11-07", "14:30", "Warsaw"));

    let rebuilt = builder.build(&birth).unwrap();
    assert_eq!(rebuilt.placements, chart.placements);
    assert_eq!(rebuilt.color, chart.color);
}

#[test]
fn test_free_function_matches_default_builder() {
    let chart = synastry::build_chart("Alan", "1912-06-23", "02:15", "London").unwrap();
    let again = ChartBuilder::default()
        .build(&BirthData::new("Alan", "1912-06-23", "02:15", "London"))
        .unwrap();
    assert_eq!(chart.placements, again.placements);
    assert_eq!(chart.name, "Alan");
    assert_eq!(chart.birth_place, "London");
}

#[test]
fn test_degree_ranges_and_derivations() {
    let builder = ChartBuilder::default();
    for birth in sample_births() {
        let chart = builder.build(&birth).unwrap();
        assert!((0.0..360.0).contains(&chart.ascendant));
        assert_eq!(chart.placements.len(), 10);
        for (placement, planet) in chart.placements.iter().zip(Planet::ALL) {
            assert_eq!(placement.planet, planet);
            assert!((0.0..360.0).contains(&placement.degree));
            assert_eq!(
                placement.sign,
                ZodiacSign::ALL[(placement.degree / 30.0).floor() as usize]
            );
            assert_eq!(placement.house, house_of(placement.degree, chart.ascendant));
            assert!((1..=12).contains(&placement.house));
        }
        assert!(chart.is_consistent());
        assert!(CHART_PALETTE.contains(&chart.color.as_str()));
    }
}

#[test]
fn test_ascendant_from_sidereal_time() {
    let birth = BirthData::new("Ada", "1815-12-10", "13:00", "London");
    let chart = ChartBuilder::default().build(&birth).unwrap();
    let expected = ascendant(birth.instant().unwrap(), DEFAULT_LATITUDE);
    assert_eq!(chart.ascendant, expected);
    assert_eq!(chart.rising_sign(), ZodiacSign::from_longitude(expected));
}

#[test]
fn test_latitude_setting_changes_ascendant() {
    let birth = BirthData::new("Ada", "1815-12-10", "13:00", "London");
    let north_builder = ChartBuilder::new(&ChartSettings { latitude: 51.5, ..ChartSettings::default() });
    assert_eq!(north_builder.latitude(), 51.5);
    assert_eq!(ChartBuilder::default().latitude(), DEFAULT_LATITUDE);

    let north = north_builder.build(&birth).unwrap();
    let default = ChartBuilder::default().build(&birth).unwrap();
    assert_ne!(north.ascendant, default.ascendant);
}

#[test]
fn test_calendar_sun_sign() {
    let chart = synastry::build_chart("Leo", "1994-08-01", "10:00", "Rome").unwrap();
    let sun = chart.placement(Planet::Sun).unwrap();
    assert_eq!(sun.sign, ZodiacSign::Leo);
    assert_eq!(sun.degree, 129.0);
    assert_eq!(chart.sun_sign(), Some(ZodiacSign::Leo));
}

#[test]
fn test_sun_independent_of_time_and_name_in_calendar_strategy() {
    let a = synastry::build_chart("One", "1994-08-01", "00:05", "Rome").unwrap();
    let b = synastry::build_chart("Two", "1994-08-01", "23:55", "Oslo").unwrap();
    assert_eq!(a.placements[0].degree, b.placements[0].degree);
}

#[test]
fn test_colour_is_first_seeded_draw() {
    for birth in sample_births() {
        let chart = ChartBuilder::default().build(&birth).unwrap();
        let mut rng = SeededRng::from_birth(&birth);
        assert_eq!(chart.color, CHART_PALETTE[rng.next_below(CHART_PALETTE.len())]);
    }
}

#[test]
fn test_identical_concatenation_collides() {
    let a = BirthData::new("ab", "1990-01-01", "10:00", "x");
    let b = BirthData::new("a", "b1990-01-01", "10:00", "x");
    assert_eq!(birth_seed(&a), birth_seed(&b));
}

#[test]
fn test_invalid_instant_is_rejected() {
    let builder = ChartBuilder::default();
    for (date, time) in [("1990-13-01", "10:00"), ("1990-02-29", "10:00"), ("1990-01-01", "25:00")] {
        let result = builder.build(&BirthData::new("X", date, time, "Y"));
        assert!(matches!(result, Err(ChartError::InvalidInstant { .. })));
    }
}

#[test]
fn test_chart_serializes_camel_case() {
    let chart = synastry::build_chart("Ada", "1990-07-04", "9:05", "Lisbon").unwrap();
    let value = serde_json::to_value(&chart).unwrap();
    assert_eq!(value["birthDate"], "1990-07-04");
    assert_eq!(value["placements"][0]["planet"], "Sun");
    assert_eq!(value["placements"][0]["sign"], "Cancer");
    let back: synastry::NatalChart = serde_json::from_value(value).unwrap();
    assert_eq!(back, chart);
}
