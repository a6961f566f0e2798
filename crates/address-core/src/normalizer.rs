//! Whitespace normalization

/// Collapse every run of whitespace to a single space and trim both ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
