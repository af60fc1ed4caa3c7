use super::planet_keyword;
use crate::aspects::AspectType;
use crate::catalog::Planet;
use lazy_static::lazy_static;
use std::collections::HashMap;

use AspectType::{Conjunction, Opposition, Sextile, Square, Trine};
use Planet::{Jupiter, Mars, Mercury, Moon, Neptune, Pluto, Saturn, Sun, Venus};

/// Notable pairings with custom text. A key applies to both orderings.
const SPECIAL_PAIRINGS: &[(Planet, AspectType, Planet, &str)] = &[
    (Sun, Conjunction, Moon, "A profound soul bond: one person's core self illuminates the other's emotional world."),
    (Venus, Conjunction, Mars, "Magnetic physical and romantic attraction; passion runs deep between you."),
    (Venus, Trine, Mars, "An effortless romantic chemistry. Affection and desire blend harmoniously."),
    (Venus, Square, Mars, "Intense attraction mixed with friction; sparks fly but so do arguments."),
    (Moon, Conjunction, Moon, "You feel emotionally at home with each other, with deep mutual understanding."),
    (Moon, Trine, Venus, "Tender emotional warmth; you naturally comfort and nurture one another."),
    (Sun, Conjunction, Sun, "You recognise yourselves in each other: a powerful sense of kinship."),
    (Sun, Opposition, Moon, "A yin-yang dynamic; you balance each other but may pull in opposite directions."),
    (Venus, Conjunction, Venus, "You share the same love language. Affection and appreciation come easily."),
    (Mars, Conjunction, Mars, "High energy together; you push each other forward but may clash over control."),
    (Sun, Square, Saturn, "Growth through friction. One may feel restricted by the other's expectations."),
    (Moon, Square, Saturn, "Emotional walls can arise; patience is needed to build lasting trust."),
    (Venus, Conjunction, Jupiter, "A joyful, generous connection. You uplift and celebrate each other."),
    (Sun, Trine, Jupiter, "Mutual encouragement and optimism; you bring out each other's confidence."),
    (Moon, Conjunction, Neptune, "A dreamy, almost psychic bond. You intuit each other's feelings deeply."),
    (Venus, Opposition, Pluto, "Obsessive attraction and deep emotional undercurrents; transformative love."),
    (Sun, Conjunction, Pluto, "An intense, life-changing connection where power dynamics require awareness."),
    (Mercury, Conjunction, Mercury, "You think alike and finish each other's sentences. Communication is easy."),
    (Mercury, Square, Mercury, "Different communication styles lead to misunderstandings; active listening helps."),
    (Mercury, Sextile, Venus, "Kind words come easily; you enjoy talking about what you both love."),
];

lazy_static! {
    static ref PAIRING_TABLE: HashMap<(Planet, AspectType, Planet), &'static str> = SPECIAL_PAIRINGS
        .iter()
        .map(|&(p1, aspect, p2, text)| ((p1, aspect, p2), text))
        .collect();
}

/// Curated text for the exact ordering `planet1-aspect-planet2`.
pub fn curated_synastry(planet1: Planet, planet2: Planet, aspect: AspectType) -> Option<&'static str> {
    PAIRING_TABLE.get(&(planet1, aspect, planet2)).copied()
}

/// Generic sentence built from planet keywords and the aspect's tone.
/// Planets are ordered by catalog position, so swapping them gives the
/// same sentence.
pub fn synthesize_synastry(planet1: Planet, planet2: Planet, aspect: AspectType) -> String {
    let (first, second) = if planet1 <= planet2 {
        (planet1, planet2)
    } else {
        (planet2, planet1)
    };
    format!(
        "{} {}'s {} {} {}'s {}.",
        aspect.tone().prefix(),
        first,
        planet_keyword(first),
        aspect.verb(),
        second,
        planet_keyword(second)
    )
}

/// Interpretation of `planet1 aspect planet2`: curated text under either
/// ordering, otherwise a synthesized sentence.
pub fn synastry_interpretation(planet1: Planet, planet2: Planet, aspect: AspectType) -> String {
    curated_synastry(planet1, planet2, aspect)
        .or_else(|| curated_synastry(planet2, planet1, aspect))
        .map(str::to_string)
        .unwrap_or_else(|| synthesize_synastry(planet1, planet2, aspect))
}
