//! Forecast assembly: runs the transit enumeration and theme scoring for a
//! date window and packages the result into a `PersonalHoroscope`.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::aspects::{Nature, Strength};
use crate::positions::PlanetaryPositionProvider;
use crate::themes::{score_themes, LifeThemes};
use crate::transits::{enumerate_transits, Transit};
use crate::NatalChart;

const HIGHLIGHT_LIMIT: usize = 3;
const CHALLENGE_LIMIT: usize = 3;
const OPPORTUNITY_LIMIT: usize = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastType {
    Monthly,
    Yearly,
}

impl ForecastType {
    /// End of the forecast window: exactly one calendar month or one
    /// calendar year after the start (day-of-month clamped by the shorter
    /// target month, e.g. Jan 31 -> Feb 28).
    pub fn end_date(&self, start_date: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            ForecastType::Monthly => start_date + Months::new(1),
            ForecastType::Yearly => start_date + Months::new(12),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseForecastTypeError {
    pub input: String,
}

impl fmt::Display for ParseForecastTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown forecast type: {:?} (expected \"monthly\" or \"yearly\")",
            self.input
        )
    }
}

impl Error for ParseForecastTypeError {}

impl FromStr for ForecastType {
    type Err = ParseForecastTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(ForecastType::Monthly),
            "yearly" => Ok(ForecastType::Yearly),
            other => Err(ParseForecastTypeError {
                input: other.to_string(),
            }),
        }
    }
}

/// The aggregate a forecast request produces: transits, theme scores and
/// display buckets over a date range. Constructed once, then serialized to
/// storage and into the prose-generation prompt; never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalHoroscope {
    pub user_name: String,
    pub natal_chart: NatalChart,
    pub transits: Vec<Transit>,
    pub themes: LifeThemes,
    pub highlights: Vec<String>,
    pub challenges: Vec<String>,
    pub opportunities: Vec<String>,
    pub forecast_type: ForecastType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

fn bucket_line(transit: &Transit) -> String {
    format!(
        "{} {} {}: {}",
        transit.transiting_planet, transit.aspect_type, transit.natal_planet, transit.influence
    )
}

/// Runs the whole pipeline for one forecast request. Deterministic given
/// the inputs and the provider; no I/O.
pub fn assemble(
    user_name: &str,
    natal_chart: &NatalChart,
    forecast_type: ForecastType,
    start_date: DateTime<Utc>,
    provider: &dyn PlanetaryPositionProvider,
) -> PersonalHoroscope {
    let current_positions = provider.positions(start_date);
    let transits = enumerate_transits(natal_chart, &current_positions);
    let themes = score_themes(&transits);

    let highlights = transits
        .iter()
        .filter(|t| t.strength == Strength::Strong && t.nature == Nature::Harmonious)
        .take(HIGHLIGHT_LIMIT)
        .map(bucket_line)
        .collect();

    let challenges = transits
        .iter()
        .filter(|t| t.strength == Strength::Strong && t.nature == Nature::Challenging)
        .take(CHALLENGE_LIMIT)
        .map(bucket_line)
        .collect();

    let opportunities = transits
        .iter()
        .filter(|t| {
            matches!(t.strength, Strength::Strong | Strength::Moderate)
                && t.nature == Nature::Harmonious
        })
        .take(OPPORTUNITY_LIMIT)
        .map(bucket_line)
        .collect();

    PersonalHoroscope {
        user_name: user_name.to_string(),
        natal_chart: natal_chart.clone(),
        transits,
        themes,
        highlights,
        challenges,
        opportunities,
        forecast_type,
        start_date,
        end_date: forecast_type.end_date(start_date),
    }
}
