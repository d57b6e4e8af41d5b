//! Life-theme scoring: a heuristic weighted accumulator that nudges five
//! life-domain scores based on which planets and aspects show up in the
//! transit list. The coefficients and membership lists are tunable product
//! constants, not astrological doctrine.

use serde::{Deserialize, Serialize};

use crate::transits::Transit;
use crate::Planet;

/// Five life-domain scores, each seeded at the 5.0 midpoint and clamped
/// to [0, 10] after accumulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifeThemes {
    pub career: f64,
    pub love: f64,
    pub health: f64,
    pub finances: f64,
    pub personal_growth: f64,
}

pub const THEME_SEED: f64 = 5.0;

impl Default for LifeThemes {
    fn default() -> Self {
        LifeThemes {
            career: THEME_SEED,
            love: THEME_SEED,
            health: THEME_SEED,
            finances: THEME_SEED,
            personal_growth: THEME_SEED,
        }
    }
}

/// A domain reacts to a transit when the transiting planet is in its list
/// and, where a natal list is given, the natal planet is in that list too.
struct DomainRule {
    transiting: &'static [Planet],
    natal: Option<&'static [Planet]>,
    coefficient: f64,
}

impl DomainRule {
    fn applies(&self, transit: &Transit) -> bool {
        self.transiting.contains(&transit.transiting_planet)
            && self
                .natal
                .map_or(true, |natal| natal.contains(&transit.natal_planet))
    }
}

const CAREER: DomainRule = DomainRule {
    transiting: &[Planet::Sun, Planet::Saturn, Planet::Mars, Planet::Jupiter],
    natal: None,
    coefficient: 0.8,
};

const LOVE: DomainRule = DomainRule {
    transiting: &[Planet::Venus, Planet::Mars],
    natal: Some(&[Planet::Sun, Planet::Moon, Planet::Venus]),
    coefficient: 0.9,
};

const HEALTH: DomainRule = DomainRule {
    transiting: &[Planet::Mars, Planet::Saturn, Planet::Sun],
    natal: Some(&[Planet::Sun, Planet::Moon, Planet::Mars]),
    coefficient: 0.7,
};

const FINANCES: DomainRule = DomainRule {
    transiting: &[Planet::Venus, Planet::Jupiter, Planet::Saturn],
    natal: Some(&[Planet::Venus, Planet::Jupiter, Planet::Saturn]),
    coefficient: 0.8,
};

const PERSONAL_GROWTH: DomainRule = DomainRule {
    transiting: &[
        Planet::Jupiter,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ],
    natal: None,
    coefficient: 0.6,
};

/// Accumulates the five domain scores over a transit list. Each matching
/// transit contributes `weight * modifier * coefficient`, where the weight
/// comes from the strength tier and the modifier from the aspect nature.
pub fn score_themes(transits: &[Transit]) -> LifeThemes {
    let mut themes = LifeThemes::default();

    for transit in transits {
        let delta = transit.strength.weight() * transit.nature.modifier();
        if delta == 0.0 {
            continue;
        }
        if CAREER.applies(transit) {
            themes.career += delta * CAREER.coefficient;
        }
        if LOVE.applies(transit) {
            themes.love += delta * LOVE.coefficient;
        }
        if HEALTH.applies(transit) {
            themes.health += delta * HEALTH.coefficient;
        }
        if FINANCES.applies(transit) {
            themes.finances += delta * FINANCES.coefficient;
        }
        if PERSONAL_GROWTH.applies(transit) {
            themes.personal_growth += delta * PERSONAL_GROWTH.coefficient;
        }
    }

    themes.career = themes.career.clamp(0.0, 10.0);
    themes.love = themes.love.clamp(0.0, 10.0);
    themes.health = themes.health.clamp(0.0, 10.0);
    themes.finances = themes.finances.clamp(0.0, 10.0);
    themes.personal_growth = themes.personal_growth.clamp(0.0, 10.0);

    themes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::{Aspect, Nature, Strength};
    use approx::assert_relative_eq;

    fn transit(
        transiting: Planet,
        natal: Planet,
        aspect: Aspect,
        strength: Strength,
    ) -> Transit {
        Transit {
            transiting_planet: transiting,
            natal_planet: natal,
            angle: aspect.angle(),
            aspect_type: aspect,
            orb: 0.0,
            strength,
            nature: aspect.nature(),
            influence: String::new(),
        }
    }

    #[test]
    fn no_transits_leave_every_theme_at_the_seed() {
        let themes = score_themes(&[]);
        assert_relative_eq!(themes.career, THEME_SEED);
        assert_relative_eq!(themes.love, THEME_SEED);
        assert_relative_eq!(themes.health, THEME_SEED);
        assert_relative_eq!(themes.finances, THEME_SEED);
        assert_relative_eq!(themes.personal_growth, THEME_SEED);
    }

    #[test]
    fn a_strong_jupiter_trine_lifts_career_and_growth_only() {
        let transits = vec![transit(
            Planet::Jupiter,
            Planet::Sun,
            Aspect::Trine,
            Strength::Strong,
        )];
        let themes = score_themes(&transits);

        // 1.5 weight * +1 modifier * domain coefficient.
        assert_relative_eq!(themes.career, 5.0 + 1.5 * 0.8);
        assert_relative_eq!(themes.personal_growth, 5.0 + 1.5 * 0.6);
        assert_relative_eq!(themes.love, THEME_SEED);
        assert_relative_eq!(themes.health, THEME_SEED);
        assert_relative_eq!(themes.finances, THEME_SEED);
    }

    #[test]
    fn love_reacts_only_to_venus_or_mars_on_personal_planets() {
        let hit = vec![transit(
            Planet::Venus,
            Planet::Moon,
            Aspect::Sextile,
            Strength::Moderate,
        )];
        assert_relative_eq!(score_themes(&hit).love, 5.0 + 1.0 * 0.9);

        // Venus aspecting natal Saturn is outside the love membership list.
        let miss = vec![transit(
            Planet::Venus,
            Planet::Saturn,
            Aspect::Sextile,
            Strength::Moderate,
        )];
        assert_relative_eq!(score_themes(&miss).love, THEME_SEED);
    }

    #[test]
    fn challenging_aspects_push_scores_down() {
        let transits = vec![transit(
            Planet::Saturn,
            Planet::Sun,
            Aspect::Square,
            Strength::Strong,
        )];
        let themes = score_themes(&transits);
        assert_relative_eq!(themes.career, 5.0 - 1.5 * 0.8);
        assert_relative_eq!(themes.health, 5.0 - 1.5 * 0.7);
    }

    #[test]
    fn neutral_conjunctions_move_nothing() {
        let transits = vec![transit(
            Planet::Sun,
            Planet::Sun,
            Aspect::Conjunction,
            Strength::Strong,
        )];
        let themes = score_themes(&transits);
        assert_relative_eq!(themes.career, THEME_SEED);
        assert_relative_eq!(themes.health, THEME_SEED);
    }

    #[test]
    fn scores_stay_clamped_under_adversarial_volume() {
        let flood: Vec<Transit> = (0..200)
            .map(|_| transit(Planet::Jupiter, Planet::Sun, Aspect::Trine, Strength::Strong))
            .collect();
        let themes = score_themes(&flood);
        assert_relative_eq!(themes.career, 10.0);
        assert_relative_eq!(themes.personal_growth, 10.0);

        let crash: Vec<Transit> = (0..200)
            .map(|_| transit(Planet::Saturn, Planet::Sun, Aspect::Square, Strength::Strong))
            .collect();
        let themes = score_themes(&crash);
        assert_relative_eq!(themes.career, 0.0);
        assert_relative_eq!(themes.health, 0.0);
    }
}
