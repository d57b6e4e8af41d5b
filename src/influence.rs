//! Influence texts for (transiting planet, natal planet, aspect) triples.
//! A static data table with a generic templated fallback; content, not logic.

use crate::aspects::{Aspect, Nature};
use crate::Planet;

static INFLUENCES: &[(Planet, Planet, Aspect, &str)] = &[
    (
        Planet::Sun,
        Planet::Sun,
        Aspect::Conjunction,
        "Слънчево завръщане - начало на нов личен цикъл и прилив на жизненост.",
    ),
    (
        Planet::Sun,
        Planet::Moon,
        Aspect::Trine,
        "Вътрешният и външният ви свят са в съзвучие - добър момент за важни разговори.",
    ),
    (
        Planet::Mars,
        Planet::Sun,
        Aspect::Conjunction,
        "Прилив на енергия и решителност - действайте, но премерено.",
    ),
    (
        Planet::Mars,
        Planet::Mars,
        Aspect::Square,
        "Раздразнителност и припряност - избягвайте конфликти на инат.",
    ),
    (
        Planet::Mars,
        Planet::Venus,
        Aspect::Conjunction,
        "Страстта се пробужда - силен период за романтика и творчество.",
    ),
    (
        Planet::Venus,
        Planet::Sun,
        Aspect::Trine,
        "Чар и лекота в общуването - обкръжението ви откликва топло.",
    ),
    (
        Planet::Venus,
        Planet::Moon,
        Aspect::Sextile,
        "Емоционална мекота и сближаване с близките хора.",
    ),
    (
        Planet::Venus,
        Planet::Venus,
        Aspect::Conjunction,
        "Обновяване на отношенията и на усета ви за красота.",
    ),
    (
        Planet::Mercury,
        Planet::Mercury,
        Aspect::Conjunction,
        "Умът е бърз и ясен - подходящ момент за преговори и планиране.",
    ),
    (
        Planet::Jupiter,
        Planet::Sun,
        Aspect::Trine,
        "Врати се отварят - разширяване, признание и късмет в начинанията.",
    ),
    (
        Planet::Jupiter,
        Planet::Moon,
        Aspect::Sextile,
        "Оптимизъм и щедрост - емоционален подем и подкрепа от жени в обкръжението.",
    ),
    (
        Planet::Jupiter,
        Planet::Venus,
        Aspect::Conjunction,
        "Един от най-благоприятните транзити за любов и финанси.",
    ),
    (
        Planet::Saturn,
        Planet::Sun,
        Aspect::Square,
        "Изпитание на волята - поемете отговорност и режете излишното.",
    ),
    (
        Planet::Saturn,
        Planet::Moon,
        Aspect::Conjunction,
        "Емоционална сериозност и нужда от уединение - не взимайте всичко присърце.",
    ),
    (
        Planet::Saturn,
        Planet::Venus,
        Aspect::Opposition,
        "Отношенията се проверяват на здравина - остава само същественото.",
    ),
    (
        Planet::Saturn,
        Planet::Saturn,
        Aspect::Opposition,
        "Среда на голям жизнен цикъл - равносметка и преподреждане на приоритетите.",
    ),
    (
        Planet::Uranus,
        Planet::Sun,
        Aspect::Opposition,
        "Неочаквани обрати разклащат статуквото - гъвкавостта е вашият съюзник.",
    ),
    (
        Planet::Uranus,
        Planet::Venus,
        Aspect::Square,
        "Внезапни трусове в отношенията и финансите - не прибързвайте с обещания.",
    ),
    (
        Planet::Neptune,
        Planet::Moon,
        Aspect::Square,
        "Мъгла в чувствата - доверявайте се на фактите, не на впечатленията.",
    ),
    (
        Planet::Pluto,
        Planet::Sun,
        Aspect::Conjunction,
        "Дълбока трансформация на идентичността - старото си отива безвъзвратно.",
    ),
    (
        Planet::Pluto,
        Planet::Sun,
        Aspect::Square,
        "Борба за контрол - силите са големи, насочете ги съзидателно.",
    ),
];

/// Returns the influence text for a transit, falling back to a generic
/// template when the table has no specific entry for the triple.
pub fn influence_text(transiting: Planet, natal: Planet, aspect: Aspect) -> String {
    if let Some((_, _, _, text)) = INFLUENCES
        .iter()
        .find(|(t, n, a, _)| *t == transiting && *n == natal && *a == aspect)
    {
        return (*text).to_string();
    }

    match aspect.nature() {
        Nature::Harmonious => format!(
            "Транзитът на {} подкрепя темите на натална {}.",
            transiting, natal
        ),
        Nature::Challenging => format!(
            "Транзитът на {} поставя на изпитание темите на натална {}.",
            transiting, natal
        ),
        Nature::Neutral => format!(
            "Транзитът на {} поставя акцент върху темите на натална {}.",
            transiting, natal
        ),
    }
}
