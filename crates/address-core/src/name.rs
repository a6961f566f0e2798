//! Addressee name guessing and splitting

use crate::extractors::Match;
use crate::normalizer::normalize;
use crate::tables::{CompiledTables, BUILT_IN};
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_NAME_TOKENS: usize = 6;

static DIGIT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{3,}").expect("Failed to compile digit run regex")
});

/// First line that looks like a person's name.
///
/// Lines are split on newlines and commas. A line qualifies when it has no
/// run of three or more digits, does not start with a denylisted address
/// word and has at most six tokens. The value keeps only letters (any
/// script), periods, hyphens and spaces; the span is the whole source line.
pub fn find_name(tables: &CompiledTables, text: &str) -> Option<Match> {
    text.split(['\n', ','])
        .map(normalize)
        .filter(|line| !line.is_empty())
        .filter(|line| !DIGIT_RUN_REGEX.is_match(line))
        .filter(|line| !tables.name_denylist().is_some_and(|deny| deny.is_match(line)))
        .filter(|line| line.split(' ').count() <= MAX_NAME_TOKENS)
        .find_map(|line| {
            let cleaned: String = line
                .chars()
                .filter(|c| c.is_alphabetic() || matches!(c, '.' | '-') || c.is_whitespace())
                .collect();
            let cleaned = normalize(&cleaned);
            if cleaned.is_empty() {
                None
            } else {
                Some(Match { value: cleaned, span: line })
            }
        })
}

/// Guessed full name from the built-in tables, or empty
pub fn guess_name(text: &str) -> String {
    find_name(&BUILT_IN, text).map(|m| m.value).unwrap_or_default()
}

/// Split a full name into `(given, family)`.
///
/// The last token is the family name; everything before it is the given
/// name. A single token is a given name only.
pub fn split_name(full_name: &str) -> (String, String) {
    let parts: Vec<&str> = full_name.split_whitespace().collect();
    match parts.split_last() {
        None => (String::new(), String::new()),
        Some((only, [])) => (only.to_string(), String::new()),
        Some((last, given)) => (given.join(" "), last.to_string()),
    }
}
