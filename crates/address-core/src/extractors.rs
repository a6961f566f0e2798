//! Field extractors
//!
//! Each extractor scans the whole text on its own and reports both the
//! field value and the full text it matched (cue word and separator
//! included), so the residual compositor can strip the complete span.

use crate::normalizer::normalize;
use crate::tables::{CompiledTables, BUILT_IN};
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional country code, optional trunk zero, then a 10-digit mobile number
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+91[\s-]*)?0?([6-9][0-9]{9})\b").expect("Failed to compile phone regex")
});

static DIGIT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+").expect("Failed to compile digit run regex")
});

const POSTAL_CODE_LEN: usize = 6;

/// Labelled city: `city:` or `city -` followed by up to 40 name characters on the same line
static CITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bcity\s*[:\-]\s*([A-Za-z.' \t\-]{1,40})\b").expect("Failed to compile city regex")
});

/// One extracted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Field value as it goes into the record
    pub value: String,
    /// Text removed from the residual line
    pub span: String,
}

impl Match {
    fn new(value: impl Into<String>, span: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            span: span.into(),
        }
    }
}

/// Last 10-digit mobile number in the text
pub fn find_phone(text: &str) -> Option<Match> {
    PHONE_REGEX
        .captures_iter(text)
        .last()
        .map(|caps| Match::new(&caps[1], &caps[0]))
}

/// Last standalone 6-digit token in the text
pub fn find_postal_code(text: &str) -> Option<Match> {
    DIGIT_RUN_REGEX
        .find_iter(text)
        .filter(|m| m.as_str().len() == POSTAL_CODE_LEN)
        .last()
        .map(|m| Match::new(m.as_str(), m.as_str()))
}

/// First region, in table order, that occurs anywhere in the text
pub fn find_region(tables: &CompiledTables, text: &str) -> Option<Match> {
    tables.regions().iter().find_map(|(name, re)| {
        re.find(text).map(|m| Match::new(name.as_str(), m.as_str()))
    })
}

/// City following an explicit `city:` label; never inferred
pub fn find_city(text: &str) -> Option<Match> {
    let caps = CITY_REGEX.captures(text)?;
    let value = normalize(&caps[1]);
    if value.is_empty() {
        return None;
    }
    Some(Match::new(value, &caps[0]))
}

pub fn find_care_of(tables: &CompiledTables, text: &str) -> Option<Match> {
    find_cued(tables.care_of()?, text)
}

pub fn find_landmark(tables: &CompiledTables, text: &str) -> Option<Match> {
    find_cued(tables.landmark()?, text)
}

fn find_cued(re: &Regex, text: &str) -> Option<Match> {
    let caps = re.captures(text)?;
    let value = normalize(&caps[1]);
    if value.is_empty() {
        return None;
    }
    Some(Match::new(value, caps[0].trim_end()))
}

/// 10-digit phone number, or empty
pub fn extract_phone(text: &str) -> String {
    value_or_empty(find_phone(text))
}

/// 6-digit postal code, or empty
pub fn extract_postal_code(text: &str) -> String {
    value_or_empty(find_postal_code(text))
}

/// Canonical region name from the built-in table, or empty
pub fn extract_region(text: &str) -> String {
    value_or_empty(find_region(&BUILT_IN, text))
}

pub fn extract_city(text: &str) -> String {
    value_or_empty(find_city(text))
}

pub fn extract_care_of(text: &str) -> String {
    value_or_empty(find_care_of(&BUILT_IN, text))
}

pub fn extract_landmark(text: &str) -> String {
    value_or_empty(find_landmark(&BUILT_IN, text))
}

pub(crate) fn value_or_empty(found: Option<Match>) -> String {
    found.map(|m| m.value).unwrap_or_default()
}
