//! Residual line composition

use crate::normalizer::normalize;
use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s,.:;\-]+").expect("Failed to compile separator regex")
});

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | ':' | ';' | '-')
}

/// Case-insensitive literal pattern for a span; any run of whitespace or
/// separator punctuation in the text matches the gap between two words.
fn removal_pattern(span: &str) -> Option<Regex> {
    if span.chars().all(is_separator) {
        return None;
    }
    let words: Vec<String> = span.split_whitespace().map(regex::escape).collect();

    match Regex::new(&format!("(?i){}", words.join(r"[\s,.:;\-]+"))) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Skipping residual span {:?}: {}", span, e);
            None
        }
    }
}

/// Remove every span from `text` and tidy up what is left.
///
/// Spans are removed in the order given, each occurrence replaced by a
/// space, then runs of `, . : ; -` and whitespace collapse to one space.
/// Removal repeats until no span matches, since a collapse can rejoin
/// words of a span that were split around another removed span. Leading
/// or trailing separators are dropped.
pub fn compose_residual<S: AsRef<str>>(text: &str, spans: &[S]) -> String {
    let patterns: Vec<Regex> = spans.iter().filter_map(|s| removal_pattern(s.as_ref())).collect();
    let mut working = text.to_string();

    // Every pass that removes something turns at least one non-separator character into a space
    loop {
        let mut removed = false;
        for re in &patterns {
            if re.is_match(&working) {
                working = re.replace_all(&working, " ").into_owned();
                removed = true;
            }
        }
        working = SEPARATOR_RUN_REGEX.replace_all(&working, " ").into_owned();
        if !removed {
            break;
        }
    }

    normalize(working.trim_matches(is_separator))
}
