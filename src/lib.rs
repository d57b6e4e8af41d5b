// src/lib.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod aspects;
pub mod forecast;
pub mod influence;
pub mod positions;
pub mod themes;
pub mod transits;

pub use aspects::{classify, Aspect, AspectHit, Nature, Strength};
pub use forecast::{assemble, ForecastType, PersonalHoroscope};
pub use influence::influence_text;
pub use positions::{DayOfYearPositions, PlanetaryPositionProvider};
pub use themes::{score_themes, LifeThemes};
pub use transits::{enumerate_transits, Transit};

// ---------------------------
// ## Enumerations
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    #[serde(rename = "Овен")]
    Aries = 0,
    #[serde(rename = "Телец")]
    Taurus,
    #[serde(rename = "Близнаци")]
    Gemini,
    #[serde(rename = "Рак")]
    Cancer,
    #[serde(rename = "Лъв")]
    Leo,
    #[serde(rename = "Дева")]
    Virgo,
    #[serde(rename = "Везни")]
    Libra,
    #[serde(rename = "Скорпион")]
    Scorpio,
    #[serde(rename = "Стрелец")]
    Sagittarius,
    #[serde(rename = "Козирог")]
    Capricorn,
    #[serde(rename = "Водолей")]
    Aquarius,
    #[serde(rename = "Риби")]
    Pisces,
}

impl ZodiacSign {
    /// Aries-first index, 0..=11.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_longitude(longitude: f64) -> Self {
        let normalized_longitude = longitude.rem_euclid(360.0);
        let sign_index = (normalized_longitude / 30.0).floor() as usize;
        match sign_index {
            0 => ZodiacSign::Aries,
            1 => ZodiacSign::Taurus,
            2 => ZodiacSign::Gemini,
            3 => ZodiacSign::Cancer,
            4 => ZodiacSign::Leo,
            5 => ZodiacSign::Virgo,
            6 => ZodiacSign::Libra,
            7 => ZodiacSign::Scorpio,
            8 => ZodiacSign::Sagittarius,
            9 => ZodiacSign::Capricorn,
            10 => ZodiacSign::Aquarius,
            11 => ZodiacSign::Pisces,
            _ => ZodiacSign::Aries, // Fallback
        }
    }

    pub fn all() -> impl Iterator<Item = ZodiacSign> {
        [
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
        ]
        .iter()
        .copied()
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign_str = match self {
            ZodiacSign::Aries => "Овен",
            ZodiacSign::Taurus => "Телец",
            ZodiacSign::Gemini => "Близнаци",
            ZodiacSign::Cancer => "Рак",
            ZodiacSign::Leo => "Лъв",
            ZodiacSign::Virgo => "Дева",
            ZodiacSign::Libra => "Везни",
            ZodiacSign::Scorpio => "Скорпион",
            ZodiacSign::Sagittarius => "Стрелец",
            ZodiacSign::Capricorn => "Козирог",
            ZodiacSign::Aquarius => "Водолей",
            ZodiacSign::Pisces => "Риби",
        };
        write!(f, "{}", sign_str)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    #[serde(rename = "Слънце")]
    Sun,
    #[serde(rename = "Луна")]
    Moon,
    #[serde(rename = "Меркурий")]
    Mercury,
    #[serde(rename = "Венера")]
    Venus,
    #[serde(rename = "Марс")]
    Mars,
    #[serde(rename = "Юпитер")]
    Jupiter,
    #[serde(rename = "Сатурн")]
    Saturn,
    #[serde(rename = "Уран")]
    Uranus,
    #[serde(rename = "Нептун")]
    Neptune,
    #[serde(rename = "Плутон")]
    Pluto,
}

impl Planet {
    pub fn iter() -> impl Iterator<Item = Planet> {
        [
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
        ]
        .iter()
        .copied()
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Planet::Sun => "Слънце",
            Planet::Moon => "Луна",
            Planet::Mercury => "Меркурий",
            Planet::Venus => "Венера",
            Planet::Mars => "Марс",
            Planet::Jupiter => "Юпитер",
            Planet::Saturn => "Сатурн",
            Planet::Uranus => "Уран",
            Planet::Neptune => "Нептун",
            Planet::Pluto => "Плутон",
        };
        write!(f, "{}", name)
    }
}

// ---------------------------
// ## Structures
// ---------------------------

/// A celestial body's place in the zodiac: sign, degree within the sign,
/// and house. The degree is re-normalized modulo 30 on every read, so a
/// stored value of 34.5 behaves as 4.5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    pub degree: f64,
    pub house: u8,
}

impl ZodiacPosition {
    pub fn new(sign: ZodiacSign, degree: f64, house: u8) -> Self {
        ZodiacPosition {
            sign,
            degree,
            house,
        }
    }

    /// Degree within the sign, folded into [0, 30).
    pub fn normalized_degree(&self) -> f64 {
        self.degree.rem_euclid(30.0)
    }

    /// Absolute ecliptic longitude in [0, 360), Aries 0° first.
    pub fn absolute_degree(&self) -> f64 {
        self.sign.index() as f64 * 30.0 + self.normalized_degree()
    }
}

/// The fixed snapshot of planetary positions at birth. Read-only input to
/// every calculation; the surrounding service owns its persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub planets: HashMap<Planet, ZodiacPosition>,
}

impl NatalChart {
    pub fn new(planets: HashMap<Planet, ZodiacPosition>) -> Self {
        NatalChart { planets }
    }

    pub fn position(&self, planet: Planet) -> Option<&ZodiacPosition> {
        self.planets.get(&planet)
    }
}

// ---------------------------
// ## Entry point
// ---------------------------

/// Builds a full personal horoscope for a user from their natal chart,
/// using the built-in day-of-year position provider for the transiting
/// planets. The surrounding request handler serializes the result and
/// forwards it to the prose-generation step.
pub fn generate_personal_horoscope(
    user_name: &str,
    natal_chart: &NatalChart,
    forecast_type: ForecastType,
    start_date: DateTime<Utc>,
) -> PersonalHoroscope {
    let provider = DayOfYearPositions::default();
    forecast::assemble(user_name, natal_chart, forecast_type, start_date, &provider)
}
