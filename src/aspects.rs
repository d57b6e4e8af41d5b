//! Aspect classification: which of the five named aspects, if any, two
//! absolute ecliptic degrees form, and how tight the match is.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

/// Tie-break priority when an angular difference falls inside more than one
/// orb window. Smallest orb wins first; this order only decides exact ties.
/// With the shipped orb table the windows are disjoint.
pub const ASPECT_PRIORITY: [Aspect; 5] = [
    Aspect::Conjunction,
    Aspect::Opposition,
    Aspect::Trine,
    Aspect::Square,
    Aspect::Sextile,
];

impl Aspect {
    /// Canonical angle in degrees.
    pub fn angle(&self) -> f64 {
        match self {
            Aspect::Conjunction => 0.0,
            Aspect::Sextile => 60.0,
            Aspect::Square => 90.0,
            Aspect::Trine => 120.0,
            Aspect::Opposition => 180.0,
        }
    }

    /// Maximum allowed deviation from the canonical angle.
    pub fn max_orb(&self) -> f64 {
        match self {
            Aspect::Conjunction => 8.0,
            Aspect::Sextile => 6.0,
            Aspect::Square => 7.0,
            Aspect::Trine => 8.0,
            Aspect::Opposition => 8.0,
        }
    }

    pub fn nature(&self) -> Nature {
        match self {
            Aspect::Trine | Aspect::Sextile => Nature::Harmonious,
            Aspect::Square | Aspect::Opposition => Nature::Challenging,
            Aspect::Conjunction => Nature::Neutral,
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Aspect::Conjunction => "съвпад",
            Aspect::Sextile => "секстил",
            Aspect::Square => "квадратура",
            Aspect::Trine => "тригон",
            Aspect::Opposition => "опозиция",
        };
        write!(f, "{}", name)
    }
}

/// Strength tier, derived from the orb as a fraction of the aspect's
/// maximum orb. The variant order gives the sort order: strong transits
/// come first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

impl Strength {
    fn from_orb(orb: f64, max_orb: f64) -> Self {
        if orb <= 0.3 * max_orb {
            Strength::Strong
        } else if orb <= 0.6 * max_orb {
            Strength::Moderate
        } else {
            Strength::Weak
        }
    }

    /// Scoring weight used by the life-theme accumulator.
    pub fn weight(&self) -> f64 {
        match self {
            Strength::Strong => 1.5,
            Strength::Moderate => 1.0,
            Strength::Weak => 0.5,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Harmonious,
    Challenging,
    Neutral,
}

impl Nature {
    /// Scoring direction: harmonious transits push a theme up,
    /// challenging ones push it down, conjunctions are neutral.
    pub fn modifier(&self) -> f64 {
        match self {
            Nature::Harmonious => 1.0,
            Nature::Challenging => -1.0,
            Nature::Neutral => 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectHit {
    pub aspect: Aspect,
    pub orb: f64,
    pub strength: Strength,
    pub nature: Nature,
}

impl AspectHit {
    fn new(aspect: Aspect, orb: f64) -> Self {
        AspectHit {
            aspect,
            orb,
            strength: Strength::from_orb(orb, aspect.max_orb()),
            nature: aspect.nature(),
        }
    }
}

/// Classifies the angular relationship between two absolute degrees.
/// Returns `None` when the separation falls outside every orb window;
/// that pair simply contributes nothing.
pub fn classify(degree_a: f64, degree_b: f64) -> Option<AspectHit> {
    let mut diff = (degree_a - degree_b).abs();
    if diff > 180.0 {
        diff = 360.0 - diff; // shortest angular separation
    }

    let mut best: Option<AspectHit> = None;
    for aspect in ASPECT_PRIORITY {
        let orb = (diff - aspect.angle()).abs();
        if orb > aspect.max_orb() {
            continue;
        }
        match best {
            Some(ref hit) if hit.orb <= orb => {}
            _ => best = Some(AspectHit::new(aspect, orb)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn classify_is_symmetric() {
        let samples = [
            (10.0, 10.0),
            (45.0, 135.0),
            (0.0, 180.0),
            (359.0, 1.0),
            (12.5, 71.0),
            (200.0, 80.5),
        ];
        for (a, b) in samples {
            assert_eq!(classify(a, b), classify(b, a), "asymmetric for ({a}, {b})");
        }
    }

    #[test]
    fn identical_degrees_give_an_exact_strong_conjunction() {
        for a in [0.0, 10.0, 123.45, 359.999] {
            let hit = classify(a, a).unwrap();
            assert_eq!(hit.aspect, Aspect::Conjunction);
            assert_relative_eq!(hit.orb, 0.0);
            assert_eq!(hit.strength, Strength::Strong);
            assert_eq!(hit.nature, Nature::Neutral);
        }
    }

    #[test]
    fn half_circle_apart_is_an_exact_opposition() {
        for a in [0.0, 33.0, 179.0, 300.0] {
            let hit = classify(a, (a + 180.0).rem_euclid(360.0)).unwrap();
            assert_eq!(hit.aspect, Aspect::Opposition);
            assert_relative_eq!(hit.orb, 0.0);
            assert_eq!(hit.nature, Nature::Challenging);
        }
    }

    #[test]
    fn square_example_from_the_chart_model() {
        // Natal Venus at Taurus 15° (45.0), transiting Mars at Leo 15° (135.0).
        let hit = classify(135.0, 45.0).unwrap();
        assert_eq!(hit.aspect, Aspect::Square);
        assert_relative_eq!(hit.orb, 0.0);
        assert_eq!(hit.strength, Strength::Strong);
        assert_eq!(hit.nature, Nature::Challenging);
    }

    #[test]
    fn separation_wraps_around_zero() {
        let hit = classify(359.0, 1.0).unwrap();
        assert_eq!(hit.aspect, Aspect::Conjunction);
        assert_relative_eq!(hit.orb, 2.0);
    }

    #[test]
    fn strength_tier_boundaries_are_inclusive() {
        // Conjunction max orb is 8: strong up to 2.4, moderate up to 4.8.
        assert_eq!(classify(0.0, 2.4).unwrap().strength, Strength::Strong);
        assert_eq!(classify(0.0, 2.5).unwrap().strength, Strength::Moderate);
        assert_eq!(classify(0.0, 4.8).unwrap().strength, Strength::Moderate);
        assert_eq!(classify(0.0, 4.9).unwrap().strength, Strength::Weak);
        assert_eq!(classify(0.0, 8.0).unwrap().strength, Strength::Weak);
    }

    #[test]
    fn separations_outside_every_window_yield_nothing() {
        assert_eq!(classify(0.0, 30.0), None);
        assert_eq!(classify(0.0, 45.0), None);
        assert_eq!(classify(0.0, 105.0), None);
        assert_eq!(classify(0.0, 8.1), None);
    }

    #[test]
    fn every_hit_respects_the_orb_table() {
        let mut a = 0.0;
        while a < 360.0 {
            if let Some(hit) = classify(a, 0.0) {
                assert!(hit.orb <= hit.aspect.max_orb());
            }
            a += 0.25;
        }
    }

    #[test]
    fn strength_sorts_strong_first() {
        assert!(Strength::Strong < Strength::Moderate);
        assert!(Strength::Moderate < Strength::Weak);
    }
}
