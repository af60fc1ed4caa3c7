use super::{planet_keyword, sign_keyword};
use crate::catalog::{Planet, ZodiacSign};
use lazy_static::lazy_static;
use std::collections::HashMap;

const CURATED: &[(Planet, ZodiacSign, &str)] = &[
    (Planet::Sun, ZodiacSign::Aries, "A born initiator: you meet life head-on and feel most yourself when you are first through the door."),
    (Planet::Sun, ZodiacSign::Taurus, "Grounded and loyal, you build a life slowly and make it last; comfort and beauty are not luxuries to you."),
    (Planet::Sun, ZodiacSign::Gemini, "Your identity lives in conversation. Ideas, people and news keep you bright and moving."),
    (Planet::Sun, ZodiacSign::Cancer, "You shine by sheltering others. Home, memory and family shape who you are."),
    (Planet::Sun, ZodiacSign::Leo, "Generous and radiant, you are meant to be seen, and you warm every room you enter."),
    (Planet::Sun, ZodiacSign::Virgo, "You find meaning in being useful. Careful craft and quiet service are your signature."),
    (Planet::Sun, ZodiacSign::Libra, "You come alive in partnership, weighing every side in search of fairness and harmony."),
    (Planet::Sun, ZodiacSign::Scorpio, "Intense and private, you seek the truth beneath the surface and are remade by it."),
    (Planet::Sun, ZodiacSign::Sagittarius, "An explorer at heart, you need wide horizons, big questions and room to roam."),
    (Planet::Sun, ZodiacSign::Capricorn, "Patient and ambitious, you climb steadily and earn your authority over time."),
    (Planet::Sun, ZodiacSign::Aquarius, "You are yourself most fully among your chosen community, following your own original line."),
    (Planet::Sun, ZodiacSign::Pisces, "Sensitive and imaginative, you feel the undercurrents others miss and dissolve easily into art or empathy."),
    (Planet::Moon, ZodiacSign::Cancer, "Emotionally at home: your feelings run deep and you instinctively care for those around you."),
    (Planet::Moon, ZodiacSign::Taurus, "You need calm, touch and routine to feel safe, and your moods are steady once settled."),
    (Planet::Moon, ZodiacSign::Scorpio, "Your feelings are all-or-nothing. Trust comes slowly, but once given it is total."),
    (Planet::Moon, ZodiacSign::Capricorn, "You keep your emotions contained and feel secure when life is ordered and responsibilities are met."),
    (Planet::Moon, ZodiacSign::Aries, "Quick to feel and quick to move on, you need freedom to react honestly."),
    (Planet::Venus, ZodiacSign::Taurus, "You love through presence and loyalty, and you savour every pleasure of the senses."),
    (Planet::Venus, ZodiacSign::Libra, "Romance and courtesy come naturally; you are drawn to beauty, balance and good company."),
    (Planet::Venus, ZodiacSign::Pisces, "You love without conditions, sometimes to a fault, and romance feels like a spiritual calling."),
    (Planet::Venus, ZodiacSign::Scorpio, "You love intensely and privately, wanting nothing less than complete emotional honesty."),
    (Planet::Mars, ZodiacSign::Aries, "Raw, direct energy: you act fast, fight fair and recover quickly."),
    (Planet::Mars, ZodiacSign::Capricorn, "Your drive is strategic and tireless, aimed at goals you intend to reach."),
    (Planet::Mercury, ZodiacSign::Gemini, "A nimble mind that loves language, puzzles and conversation for its own sake."),
];

lazy_static! {
    static ref NATAL_TABLE: HashMap<(Planet, ZodiacSign), &'static str> = CURATED
        .iter()
        .map(|&(planet, sign, text)| ((planet, sign), text))
        .collect();
}

/// Curated text for a placement, when one exists.
pub fn curated_natal(planet: Planet, sign: ZodiacSign) -> Option<&'static str> {
    NATAL_TABLE.get(&(planet, sign)).copied()
}

/// Interpretation of a planet in a sign. Never empty.
pub fn natal_interpretation(planet: Planet, sign: ZodiacSign) -> String {
    match curated_natal(planet, sign) {
        Some(text) => text.to_string(),
        None => format!(
            "{} in {}: the realm of {} takes on {}'s {}, colored by {} energy.",
            planet,
            sign,
            planet_keyword(planet),
            sign,
            sign_keyword(sign),
            sign.element().name().to_lowercase()
        ),
    }
}
