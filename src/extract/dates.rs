use std::sync::LazyLock;

use regex::Regex;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b([1-3]?\d)\s(января|февраля|марта|апреля|мая|июня|июля|августа|сентября|октября|ноября|декабря)\s(\d{4})\b",
    )
    .unwrap()
});

/// First `<day> <month> <year>` literal in the whole text, if any.
/// Not scoped to any sentence; the first match anywhere wins.
pub fn extract_date(text: &str) -> Option<String> {
    DATE_RE.find(text).map(|m| m.as_str().to_string())
}

// ── Tests ──
