//! Interpretation text for placements and aspects.
//!
//! Each lookup tries a curated table first and otherwise assembles a
//! sentence from keyword fragments, so every lookup returns text.

pub mod natal;
pub mod summary;
pub mod synastry;

use crate::catalog::{Planet, ZodiacSign};

pub use natal::{curated_natal, natal_interpretation};
pub use summary::{harmony_ratio, relationship_summary, NO_DATA_SUMMARY};
pub use synastry::{curated_synastry, synastry_interpretation, synthesize_synastry};

/// What a planet signifies, as a short noun phrase.
pub fn planet_keyword(planet: Planet) -> &'static str {
    match planet {
        Planet::Sun => "identity and ego",
        Planet::Moon => "emotions and inner needs",
        Planet::Mercury => "communication and thinking",
        Planet::Venus => "love and values",
        Planet::Mars => "desire and drive",
        Planet::Jupiter => "growth and optimism",
        Planet::Saturn => "commitment and boundaries",
        Planet::Uranus => "excitement and unpredictability",
        Planet::Neptune => "dreams and spiritual connection",
        Planet::Pluto => "transformation and intensity",
    }
}

/// How a sign colours whatever occupies it.
pub fn sign_keyword(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => "bold, pioneering spirit",
        ZodiacSign::Taurus => "steady, sensual patience",
        ZodiacSign::Gemini => "curious, restless wit",
        ZodiacSign::Cancer => "protective, nurturing care",
        ZodiacSign::Leo => "warm, theatrical confidence",
        ZodiacSign::Virgo => "discerning, practical devotion",
        ZodiacSign::Libra => "graceful sense of balance",
        ZodiacSign::Scorpio => "deep, unflinching focus",
        ZodiacSign::Sagittarius => "expansive, truth-seeking optimism",
        ZodiacSign::Capricorn => "disciplined ambition",
        ZodiacSign::Aquarius => "independent, inventive vision",
        ZodiacSign::Pisces => "dreamy, compassionate intuition",
    }
}
