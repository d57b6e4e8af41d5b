//! Transit enumeration: cross-product of current planetary positions
//! against the natal chart, one `Transit` per classified pair.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::aspects::{classify, Aspect, Nature, Strength};
use crate::influence::influence_text;
use crate::{NatalChart, Planet, ZodiacPosition};

/// A single angular relationship between a transiting planet and a natal
/// position. Value object, created fresh per calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transit {
    pub transiting_planet: Planet,
    pub natal_planet: Planet,
    pub angle: f64,
    pub aspect_type: Aspect,
    pub orb: f64,
    pub strength: Strength,
    pub nature: Nature,
    pub influence: String,
}

/// Classifies every (transiting, natal) pair and returns the matches,
/// sorted so strong transits come first (stable within a tier). A planet
/// missing from either map contributes nothing; that is not an error.
pub fn enumerate_transits(
    natal_chart: &NatalChart,
    current_positions: &HashMap<Planet, ZodiacPosition>,
) -> Vec<Transit> {
    let mut transits = Vec::new();

    for transiting in Planet::iter() {
        let current_pos = match current_positions.get(&transiting) {
            Some(pos) => pos,
            None => continue,
        };
        for natal_planet in Planet::iter() {
            let natal_pos = match natal_chart.planets.get(&natal_planet) {
                Some(pos) => pos,
                None => continue,
            };
            let hit = match classify(current_pos.absolute_degree(), natal_pos.absolute_degree()) {
                Some(hit) => hit,
                None => continue,
            };
            transits.push(Transit {
                transiting_planet: transiting,
                natal_planet,
                angle: hit.aspect.angle(),
                aspect_type: hit.aspect,
                orb: hit.orb,
                strength: hit.strength,
                nature: hit.nature,
                influence: influence_text(transiting, natal_planet, hit.aspect),
            });
        }
    }

    transits.sort_by_key(|t| t.strength);
    transits
}
