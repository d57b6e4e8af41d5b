use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use zodiak_core::{
    generate_personal_horoscope, ForecastType, NatalChart, Planet, ZodiacPosition, ZodiacSign,
};

fn main() {
    // Example usage: a stored natal chart and a monthly forecast window.
    let mut planets = HashMap::new();
    planets.insert(Planet::Sun, ZodiacPosition::new(ZodiacSign::Aries, 10.0, 1));
    planets.insert(Planet::Moon, ZodiacPosition::new(ZodiacSign::Cancer, 22.5, 4));
    planets.insert(
        Planet::Mercury,
        ZodiacPosition::new(ZodiacSign::Pisces, 28.0, 12),
    );
    planets.insert(
        Planet::Venus,
        ZodiacPosition::new(ZodiacSign::Taurus, 15.0, 2),
    );
    planets.insert(Planet::Mars, ZodiacPosition::new(ZodiacSign::Leo, 3.7, 5));
    planets.insert(
        Planet::Jupiter,
        ZodiacPosition::new(ZodiacSign::Sagittarius, 11.2, 9),
    );
    planets.insert(
        Planet::Saturn,
        ZodiacPosition::new(ZodiacSign::Capricorn, 19.8, 10),
    );
    planets.insert(
        Planet::Uranus,
        ZodiacPosition::new(ZodiacSign::Aquarius, 6.4, 11),
    );
    planets.insert(
        Planet::Neptune,
        ZodiacPosition::new(ZodiacSign::Scorpio, 25.1, 8),
    );
    planets.insert(
        Planet::Pluto,
        ZodiacPosition::new(ZodiacSign::Virgo, 14.9, 6),
    );
    let natal_chart = NatalChart::new(planets);

    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let horoscope =
        generate_personal_horoscope("Мария", &natal_chart, ForecastType::Monthly, start);

    match serde_json::to_string_pretty(&horoscope) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {:?}", e),
    }
}
