pub mod dates;
pub mod person;
pub mod places;

use serde::Serialize;

use crate::grammar::NameGrammar;
use crate::reader::Record;

/// One output record. Declaration order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
}

/// Every grammar span that survives the roster filter yields one entry.
/// Date and place are looked up in the whole record text, not scoped to
/// the sentence the name came from; no dedup, no per-record limit.
pub fn extract_from_record(grammar: &dyn NameGrammar, record: &Record) -> Vec<Entry> {
    let mut entries = Vec::new();

    for span in grammar.find_name_spans(&record.text) {
        let name = format!("{} {}", span.first, span.last);
        if !person::is_likely_person(&name) {
            continue;
        }
        entries.push(Entry {
            name,
            birth_date: dates::extract_date(&record.text),
            birth_place: places::extract_place(&record.text),
        });
    }

    entries
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{MorphGrammar, NameSpan};
    use crate::reader;

    /// Canned spans, independent of any real grammar.
    struct StubGrammar(Vec<NameSpan>);

    impl NameGrammar for StubGrammar {
        fn find_name_spans(&self, _text: &str) -> Vec<NameSpan> {
            self.0.clone()
        }
    }

    fn record(text: &str) -> Record {
        Record {
            category: "bio".to_string(),
            title: "Title".to_string(),
            text: text.to_string(),
        }
    }

    fn span(first: &str, last: &str) -> NameSpan {
        NameSpan {
            first: first.to_string(),
            last: last.to_string(),
        }
    }

    #[test]
    fn full_entry_via_stub() {
        let grammar = StubGrammar(vec![span("Иван", "Петров")]);
        let entries = extract_from_record(
            &grammar,
            &record("Иван Петров родился 5 мая 1990 в Москве."),
        );
        assert_eq!(
            entries,
            vec![Entry {
                name: "Иван Петров".to_string(),
                birth_date: Some("5 мая 1990".to_string()),
                birth_place: Some("Москва".to_string()),
            }]
        );
    }

    #[test]
    fn roster_filter_applies_to_stub_spans() {
        let grammar = StubGrammar(vec![span("Смирнов", "Кузнецов")]);
        let entries = extract_from_record(&grammar, &record("что угодно"));
        assert!(entries.is_empty());
    }

    #[test]
    fn missing_date_and_place_stay_absent() {
        let grammar = StubGrammar(vec![span("Иван", "Петров")]);
        let entries = extract_from_record(&grammar, &record("Иван Петров выступил."));
        assert_eq!(entries[0].birth_date, None);
        assert_eq!(entries[0].birth_place, None);
    }

    #[test]
    fn one_entry_per_accepted_span() {
        let grammar = StubGrammar(vec![
            span("Иван", "Петров"),
            span("Мария", "Шарапова"),
            span("Иван", "Петров"),
        ]);
        let entries = extract_from_record(&grammar, &record("текст в Москве"));
        // No deduplication: the repeated span produces a second entry.
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, entries[2].name);
    }

    #[test]
    fn name_shape_invariant() {
        let grammar = MorphGrammar::new();
        let records =
            reader::read_records(std::path::Path::new("tests/fixtures/news.tsv"), None).unwrap();
        for r in &records {
            for e in extract_from_record(&grammar, r) {
                let parts: Vec<&str> = e.name.split(' ').collect();
                assert_eq!(parts.len(), 2, "bad name shape: {}", e.name);
                assert!(parts.iter().all(|p| !p.is_empty()));
            }
        }
    }

    #[test]
    fn fixture_end_to_end() {
        let grammar = MorphGrammar::new();
        let records =
            reader::read_records(std::path::Path::new("tests/fixtures/news.tsv"), None).unwrap();
        let entries: Vec<Entry> = records
            .iter()
            .flat_map(|r| extract_from_record(&grammar, r))
            .collect();

        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].name, "Иван Петров");
        assert_eq!(entries[0].birth_date.as_deref(), Some("5 мая 1990"));
        assert_eq!(entries[0].birth_place.as_deref(), Some("Москва"));

        assert_eq!(entries[1].name, "Мария Шарапова");
        assert_eq!(entries[1].birth_date, None);
        assert_eq!(entries[1].birth_place.as_deref(), Some("Париж"));

        assert_eq!(entries[2].name, "Дмитрий Иванов");
        assert_eq!(entries[2].birth_date.as_deref(), Some("12 января 1985"));
        assert_eq!(entries[2].birth_place, None);
    }
}
