//! Fixed zodiac and planet catalogs.
//!
//! Both catalogs are closed enumerations. Variant order is significant: signs
//! are ordered by start degree and planets by catalog order, which drives
//! placement iteration and tie-breaking in aspect sorting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a name falls outside the 10-planet / 12-sign catalogs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown {kind}: {name}")]
    UnknownEntry { kind: &'static str, name: String },
}

/// Chart colours handed out by the chart builder.
pub const CHART_PALETTE: [&str; 6] = [
    "hsl(40, 75%, 55%)",
    "hsl(200, 70%, 55%)",
    "hsl(330, 55%, 55%)",
    "hsl(150, 55%, 50%)",
    "hsl(280, 50%, 55%)",
    "hsl(15, 70%, 55%)",
];

/// House numbers of the equal-house system.
pub const HOUSES: std::ops::RangeInclusive<u8> = 1..=12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

// (name, symbol, element)
const SIGN_META: [(&str, &str, Element); 12] = [
    ("Aries", "♈", Element::Fire),
    ("Taurus", "♉", Element::Earth),
    ("Gemini", "♊", Element::Air),
    ("Cancer", "♋", Element::Water),
    ("Leo", "♌", Element::Fire),
    ("Virgo", "♍", Element::Earth),
    ("Libra", "♎", Element::Air),
    ("Scorpio", "♏", Element::Water),
    ("Sagittarius", "♐", Element::Fire),
    ("Capricorn", "♑", Element::Earth),
    ("Aquarius", "♒", Element::Air),
    ("Pisces", "♓", Element::Water),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Position in the catalog (0 = Aries).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> ZodiacSign {
        Self::ALL[index % 12]
    }

    /// Sign containing an ecliptic longitude, `floor(deg / 30)`.
    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        let normalized = longitude.rem_euclid(360.0);
        Self::from_index((normalized / 30.0).floor() as usize)
    }

    pub fn name(self) -> &'static str {
        SIGN_META[self.index()].0
    }

    pub fn symbol(self) -> &'static str {
        SIGN_META[self.index()].1
    }

    pub fn element(self) -> Element {
        SIGN_META[self.index()].2
    }

    /// Ecliptic longitude at which the sign begins (multiple of 30).
    pub fn start_degree(self) -> f64 {
        (self.index() * 30) as f64
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownEntry {
                kind: "zodiac sign",
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

// (name, symbol, colour, Swiss Ephemeris body number)
const PLANET_META: [(&str, &str, &str, i32); 10] = [
    ("Sun", "☉", "hsl(40, 75%, 55%)", 0),
    ("Moon", "☽", "hsl(220, 20%, 80%)", 1),
    ("Mercury", "☿", "hsl(180, 40%, 60%)", 2),
    ("Venus", "♀", "hsl(330, 50%, 65%)", 3),
    ("Mars", "♂", "hsl(0, 60%, 55%)", 4),
    ("Jupiter", "♃", "hsl(30, 50%, 55%)", 5),
    ("Saturn", "♄", "hsl(45, 20%, 50%)", 6),
    ("Uranus", "♅", "hsl(190, 60%, 55%)", 7),
    ("Neptune", "♆", "hsl(230, 60%, 60%)", 8),
    ("Pluto", "♇", "hsl(280, 30%, 50%)", 9),
];

impl Planet {
    /// Catalog order. Chart placements always follow this order.
    pub const ALL: [Planet; 10] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        PLANET_META[self.index()].0
    }

    pub fn symbol(self) -> &'static str {
        PLANET_META[self.index()].1
    }

    pub fn color(self) -> &'static str {
        PLANET_META[self.index()].2
    }

    /// Body number understood by the Swiss Ephemeris.
    pub fn swiss_id(self) -> i32 {
        PLANET_META[self.index()].3
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|planet| planet.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownEntry {
                kind: "planet",
                name: s.to_string(),
            })
    }
}
