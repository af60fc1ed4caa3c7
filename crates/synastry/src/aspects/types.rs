use crate::catalog::Planet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five major aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Broad character of an aspect, used for interpretation text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectTone {
    Harmonious,
    Challenging,
    Intense,
}

impl AspectType {
    /// In order of exact angle.
    pub const ALL: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AspectType::Conjunction => "Conjunction",
            AspectType::Sextile => "Sextile",
            AspectType::Square => "Square",
            AspectType::Trine => "Trine",
            AspectType::Opposition => "Opposition",
        }
    }

    /// Exact angle in degrees.
    pub fn angle(self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Sextile => 60.0,
            AspectType::Square => 90.0,
            AspectType::Trine => 120.0,
            AspectType::Opposition => 180.0,
        }
    }

    /// Largest allowed deviation from the exact angle.
    pub fn max_orb(self) -> f64 {
        match self {
            AspectType::Conjunction => 8.0,
            AspectType::Sextile => 6.0,
            AspectType::Square => 7.0,
            AspectType::Trine => 8.0,
            AspectType::Opposition => 8.0,
        }
    }

    pub fn tone(self) -> AspectTone {
        match self {
            AspectType::Conjunction => AspectTone::Intense,
            AspectType::Trine | AspectType::Sextile => AspectTone::Harmonious,
            AspectType::Square | AspectType::Opposition => AspectTone::Challenging,
        }
    }

    /// Counted as harmonious by the relationship summary.
    /// Conjunctions count here even though their tone is "intense".
    pub fn is_harmonious(self) -> bool {
        matches!(
            self,
            AspectType::Trine | AspectType::Sextile | AspectType::Conjunction
        )
    }

    /// Adjustment applied to the compatibility score. Opposition is net
    /// positive; Square is the only penalty.
    pub fn score_weight(self) -> i32 {
        match self {
            AspectType::Conjunction | AspectType::Trine => 3,
            AspectType::Sextile => 2,
            AspectType::Opposition => 1,
            AspectType::Square => -1,
        }
    }

    /// Phrase joining two planets in synthesized interpretations.
    pub fn verb(self) -> &'static str {
        match self {
            AspectType::Conjunction => "merges with",
            AspectType::Trine => "flows naturally with",
            AspectType::Sextile => "gently supports",
            AspectType::Square => "challenges",
            AspectType::Opposition => "mirrors and polarises",
        }
    }
}

impl AspectTone {
    pub fn prefix(self) -> &'static str {
        match self {
            AspectTone::Harmonious => "A supportive link:",
            AspectTone::Challenging => "A growth edge:",
            AspectTone::Intense => "A potent connection:",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for AspectType {
    type Err = crate::catalog::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::catalog::CatalogError::UnknownEntry {
                kind: "aspect",
                name: s.to_string(),
            })
    }
}

/// An aspect between a planet of chart 1 and a planet of chart 2
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub planet1: Planet,
    pub planet2: Planet,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    /// Deviation from the exact angle, rounded to 0.1 degree
    pub orb: f64,
    pub chart1_name: String,
    pub chart2_name: String,
}
