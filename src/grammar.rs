use crate::lexicon::{self, Gender};

/// One name match: a given-name token followed by a surname token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSpan {
    pub first: String,
    pub last: String,
}

/// Seam between the extraction glue and the morphology-aware matcher.
/// Implementations yield spans in left-to-right occurrence order and do
/// not deduplicate overlapping matches.
pub trait NameGrammar {
    fn find_name_spans(&self, text: &str) -> Vec<NameSpan>;
}

/// Rule-based grammar over coarsely tagged Cyrillic tokens.
///
/// Two adjacent capitalized tokens form a span when the left one is
/// given-name-shaped, the right one is surname-shaped, neither is an
/// abbreviation, and their grammatical genders agree. Only nominative
/// forms are tagged, so case agreement holds by construction; matches
/// are single tokens per slot, so number is trivially singular.
pub struct MorphGrammar;

impl MorphGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MorphGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl NameGrammar for MorphGrammar {
    fn find_name_spans(&self, text: &str) -> Vec<NameSpan> {
        let tokens = tokenize(text);
        let mut spans = Vec::new();

        for pair in tokens.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            // Tokens must be separated by whitespace only, nothing like
            // "Иван, Петров" counts as a name.
            if !text[left.end..right.start].chars().all(char::is_whitespace) {
                continue;
            }
            let (Some(first), Some(last)) = (given_tag(left), surname_tag(right)) else {
                continue;
            };
            if first.agrees(last) {
                spans.push(NameSpan {
                    first: left.text.to_string(),
                    last: right.text.to_string(),
                });
            }
        }

        spans
    }
}

struct Token<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    abbr: bool,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some(&(start, ch)) = iter.peek() {
        if !ch.is_alphabetic() {
            iter.next();
            continue;
        }

        let mut end = start;
        while let Some(&(i, c)) = iter.peek() {
            if c.is_alphabetic() || c == '-' {
                end = i + c.len_utf8();
                iter.next();
            } else {
                break;
            }
        }

        let mut word = &text[start..end];
        // A trailing hyphen belongs to punctuation, not the word.
        while let Some(stripped) = word.strip_suffix('-') {
            word = stripped;
            end -= '-'.len_utf8();
        }
        if word.is_empty() {
            continue;
        }

        let nchars = word.chars().count();
        let followed_by_dot = text[end..].starts_with('.');
        let all_caps = word.chars().all(char::is_uppercase);
        let abbr = (followed_by_dot && nchars <= 3) || (all_caps && nchars <= 4);

        tokens.push(Token {
            text: word,
            start,
            end,
            abbr,
        });
    }

    tokens
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Given-name slot. Surname-shaped tokens may fill it too; the roster
/// filter downstream decides whether the pair survives.
fn given_tag(token: &Token) -> Option<Gender> {
    if token.abbr || !is_capitalized(token.text) {
        return None;
    }
    lexicon::given_name_gender(token.text).or_else(|| lexicon::surname_gender(token.text))
}

fn surname_tag(token: &Token) -> Option<Gender> {
    if token.abbr || !is_capitalized(token.text) {
        return None;
    }
    lexicon::surname_gender(token.text)
}

// ── Tests ──
