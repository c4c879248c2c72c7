use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// One input line: `category<TAB>title<TAB>text`.
#[derive(Debug, Clone)]
pub struct Record {
    pub category: String,
    pub title: String,
    pub text: String,
}

/// Split a line into exactly three tab-separated fields.
/// Anything else is dropped silently (debug trace only, no counter).
pub fn parse_line(line: &str) -> Option<Record> {
    let trimmed = line.trim();
    let mut fields = trimmed.split('\t');
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(category), Some(title), Some(text), None) => Some(Record {
            category: category.to_string(),
            title: title.to_string(),
            text: text.to_string(),
        }),
        _ => {
            debug!(
                "skipping malformed line ({} fields)",
                trimmed.split('\t').count()
            );
            None
        }
    }
}

/// Read all well-formed records from `path`, in line order.
/// Open and read errors are fatal.
pub fn read_records(path: &Path, limit: Option<usize>) -> Result<Vec<Record>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut records = Vec::new();

    for line in BufReader::new(file).lines() {
        let line = line?;
        if let Some(record) = parse_line(&line) {
            records.push(record);
        }
        if limit.is_some_and(|n| records.len() >= n) {
            break;
        }
    }

    Ok(records)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_line() {
        let r = parse_line("bio\tTitle\tИван Петров родился в Москве.").unwrap();
        assert_eq!(r.category, "bio");
        assert_eq!(r.title, "Title");
        assert_eq!(r.text, "Иван Петров родился в Москве.");
    }

    #[test]
    fn trailing_newline_trimmed() {
        let r = parse_line("bio\tTitle\ttext\r\n").unwrap();
        assert_eq!(r.text, "text");
    }

    #[test]
    fn too_few_fields() {
        assert!(parse_line("bio\tTitle").is_none());
        assert!(parse_line("no tabs at all").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn too_many_fields() {
        assert!(parse_line("bio\tTitle\ttext\textra").is_none());
    }

    #[test]
    fn fixture_drops_malformed_lines() {
        let records =
            read_records(Path::new("tests/fixtures/news.tsv"), None).unwrap();
        // Fixture has 6 lines, one of them malformed.
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| !r.category.is_empty()));
    }
}
