//! Current planetary positions. The classification pipeline only sees the
//! `PlanetaryPositionProvider` trait, so the shipped day-of-year stub can be
//! swapped for a real ephemeris backend without touching the aspect logic.

use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;

use crate::{Planet, ZodiacPosition, ZodiacSign};

pub trait PlanetaryPositionProvider {
    /// Positions of the ten bodies on the given date.
    fn positions(&self, date: DateTime<Utc>) -> HashMap<Planet, ZodiacPosition>;
}

/// Deterministic placeholder ephemeris: per-planet base longitude plus mean
/// daily motion times day-of-year, wrapped into [0, 360). Crude on purpose;
/// the forecast only needs plausible, reproducible positions.
#[derive(Debug, Default, Clone, Copy)]
pub struct DayOfYearPositions;

// (planet, longitude on January 1st, mean daily motion in degrees)
const MOTION_TABLE: &[(Planet, f64, f64)] = &[
    (Planet::Sun, 280.0, 0.9856),
    (Planet::Moon, 134.0, 13.1764),
    (Planet::Mercury, 265.0, 1.383),
    (Planet::Venus, 310.0, 1.2),
    (Planet::Mars, 150.0, 0.524),
    (Planet::Jupiter, 34.0, 0.083),
    (Planet::Saturn, 320.0, 0.0334),
    (Planet::Uranus, 41.0, 0.0117),
    (Planet::Neptune, 354.0, 0.006),
    (Planet::Pluto, 297.0, 0.004),
];

impl PlanetaryPositionProvider for DayOfYearPositions {
    fn positions(&self, date: DateTime<Utc>) -> HashMap<Planet, ZodiacPosition> {
        let day = date.ordinal0() as f64;
        MOTION_TABLE
            .iter()
            .map(|&(planet, base, speed)| {
                let longitude = (base + speed * day).rem_euclid(360.0);
                let sign = ZodiacSign::from_longitude(longitude);
                let degree = longitude.rem_euclid(30.0);
                // Whole-sign placeholder house, like the rest of the stub.
                let house = sign.index() as u8 + 1;
                (planet, ZodiacPosition::new(sign, degree, house))
            })
            .collect()
    }
}
