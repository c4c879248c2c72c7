use crate::lexicon;

/// Coarse precision filter over a "First Last" candidate: exactly two
/// whitespace-separated parts, at least one of which is a common Russian
/// given name. Either position counts, so a name-shaped surname can
/// slip through; rare and foreign first names are lost.
pub fn is_likely_person(name: &str) -> bool {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [first, last] => lexicon::is_given_name(first) || lexicon::is_given_name(last),
        _ => false,
    }
}

// ── Tests ──
