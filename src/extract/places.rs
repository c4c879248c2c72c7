use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::CITIES;

/// One compiled pattern per city, in list order. The stem drops a single
/// final vowel so declined forms ("в Москве", "в Генуе") still match;
/// the canonical list spelling is what gets returned.
static CITY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CITIES
        .iter()
        .map(|&city| {
            let pattern = format!(
                r"\b(?:в|на)\s{}[а-яё]{{0,3}}\b",
                regex::escape(&stem(city))
            );
            (city, Regex::new(&pattern).unwrap())
        })
        .collect()
});

// Final vowel or soft sign, the part that declension rewrites.
const TRIMMABLE: &str = "аеёиоуыэюяь";

fn stem(city: &str) -> String {
    match city.chars().last() {
        Some(last) if TRIMMABLE.contains(last.to_lowercase().next().unwrap_or(last)) => {
            let mut chars: Vec<char> = city.chars().collect();
            chars.pop();
            chars.into_iter().collect()
        }
        _ => city.to_string(),
    }
}

/// First city, in list-iteration order (not text order), that appears as
/// a whole word right after the preposition "в" or "на".
pub fn extract_place(text: &str) -> Option<String> {
    CITY_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(city, _)| (*city).to_string())
}

// ── Tests ──
