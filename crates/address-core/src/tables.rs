//! Region and cue-word tables
//!
//! The extractors never embed word lists; everything locale-specific lives
//! here and can be replaced from configuration.

use crate::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// First-level administrative regions, in canonical order.
/// Order is significant: the first entry found in the text wins.
pub const INDIAN_REGIONS: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

pub const CARE_OF_CUES: &[&str] = &["c/o", "care of", "s/o", "w/o", "d/o"];

pub const LANDMARK_CUES: &[&str] = &["landmark", "near", "opp", "opposite", "beside", "behind"];

/// Words that mark a line as structural address text rather than a name
pub const NAME_DENYLIST: &[&str] = &[
    "to", "attn", "address", "flat", "apartment", "house", "no", "no.", "door", "street", "st",
    "st.", "road", "rd", "rd.", "area", "layout", "block", "sector", "lane", "near", "landmark",
    "city", "phone", "c/o", "care", "s/o", "w/o", "d/o",
];

/// Label words always stripped from the residual line
pub const RESIDUAL_CUE_TOKENS: &[&str] = &["city", "phone"];

/// Built-in tables, compiled once
pub(crate) static BUILT_IN: Lazy<CompiledTables> = Lazy::new(|| {
    AddressTables::india()
        .compile()
        .expect("Failed to compile built-in address tables")
});

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Locale tables driving the extractors.
///
/// Any list missing from a deserialized table falls back to the built-in one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressTables {
    pub regions: Vec<String>,
    pub care_of_cues: Vec<String>,
    pub landmark_cues: Vec<String>,
    pub name_denylist: Vec<String>,
    pub residual_cue_tokens: Vec<String>,
}

impl Default for AddressTables {
    fn default() -> Self {
        Self::india()
    }
}

impl AddressTables {
    /// Built-in Indian address conventions
    pub fn india() -> Self {
        Self {
            regions: owned(INDIAN_REGIONS),
            care_of_cues: owned(CARE_OF_CUES),
            landmark_cues: owned(LANDMARK_CUES),
            name_denylist: owned(NAME_DENYLIST),
            residual_cue_tokens: owned(RESIDUAL_CUE_TOKENS),
        }
    }

    /// Compile every list into its matching pattern
    pub fn compile(&self) -> Result<CompiledTables> {
        let regions = self
            .regions
            .iter()
            .filter_map(|name| phrase_pattern(name, r"\s+").map(|p| (name, p)))
            .map(|(name, pattern)| {
                Regex::new(&format!(r"(?i)\b{}\b", pattern)).map(|re| (name.trim().to_string(), re))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let name_denylist = match alternation(&self.name_denylist, r"\s+") {
            Some(words) => Some(Regex::new(&format!(r"(?i)^(?:{})\b", words))?),
            None => None,
        };

        Ok(CompiledTables {
            regions,
            care_of: cue_regex(&self.care_of_cues)?,
            landmark: cue_regex(&self.landmark_cues)?,
            name_denylist,
            residual_cue_tokens: self
                .residual_cue_tokens
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        })
    }
}

/// Escape each word of a phrase and join them with `gap`
fn phrase_pattern(phrase: &str, gap: &str) -> Option<String> {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(gap))
    }
}

fn alternation(phrases: &[String], gap: &str) -> Option<String> {
    let alternatives: Vec<String> = phrases.iter().filter_map(|p| phrase_pattern(p, gap)).collect();
    if alternatives.is_empty() {
        None
    } else {
        Some(alternatives.join("|"))
    }
}

/// Cue word, optional `:`/`.`/`-` separator, then the rest of the segment
/// up to the next newline or comma.
fn cue_regex(cues: &[String]) -> Result<Option<Regex>> {
    match alternation(cues, r"\s*") {
        Some(words) => Ok(Some(Regex::new(&format!(
            r"(?i)\b(?:{})\b\s*[:.\-]?\s*([^\n,]+)",
            words
        ))?)),
        None => Ok(None),
    }
}

/// Tables with their patterns compiled, shared read-only by every extractor
#[derive(Debug, Clone)]
pub struct CompiledTables {
    regions: Vec<(String, Regex)>,
    care_of: Option<Regex>,
    landmark: Option<Regex>,
    name_denylist: Option<Regex>,
    residual_cue_tokens: Vec<String>,
}

impl CompiledTables {
    /// Canonical region names paired with their whole-phrase patterns, in table order
    pub fn regions(&self) -> &[(String, Regex)] {
        &self.regions
    }

    pub fn care_of(&self) -> Option<&Regex> {
        self.care_of.as_ref()
    }

    pub fn landmark(&self) -> Option<&Regex> {
        self.landmark.as_ref()
    }

    pub fn name_denylist(&self) -> Option<&Regex> {
        self.name_denylist.as_ref()
    }

    pub fn residual_cue_tokens(&self) -> &[String] {
        &self.residual_cue_tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_india_table_shape() {
        let tables = AddressTables::india();
        assert_eq!(tables.regions.len(), 36);
        assert_eq!(tables.regions[0], "Andhra Pradesh");
        assert_eq!(tables.regions[35], "Puducherry");
        assert_eq!(tables.residual_cue_tokens, vec!["city", "phone"]);
    }

    #[test]
    fn test_built_in_tables_compile() {
        assert_eq!(BUILT_IN.regions().len(), 36);
        assert!(BUILT_IN.care_of().is_some());
        assert!(BUILT_IN.landmark().is_some());
        assert!(BUILT_IN.name_denylist().is_some());
    }

    #[test]
    fn test_region_pattern_tolerates_whitespace_and_case() {
        let (name, re) = &BUILT_IN.regions()[22];
        assert_eq!(name, "Tamil Nadu");
        assert!(re.is_match("chennai, TAMIL \n NADU"));
        assert!(!re.is_match("TamilNadu"));
    }

    #[test]
    fn test_cue_requires_word_boundary() {
        let landmark = BUILT_IN.landmark().unwrap();
        assert!(!landmark.is_match("nearby market"));

        let caps = landmark.captures("Opposite Bus Stand, MG Road").unwrap();
        assert_eq!(&caps[1], "Bus Stand");
    }

    #[test]
    fn test_empty_lists_disable_patterns() {
        let tables = AddressTables {
            care_of_cues: vec![],
            landmark_cues: vec!["  ".to_string()],
            name_denylist: vec![],
            ..AddressTables::india()
        };

        let compiled = tables.compile().unwrap();
        assert!(compiled.care_of().is_none());
        assert!(compiled.landmark().is_none());
        assert!(compiled.name_denylist().is_none());
    }

    #[test]
    fn test_partial_tables_fall_back_to_built_in() {
        let tables: AddressTables = serde_json::from_str(r#"{"regions": ["Bavaria", "Berlin"]}"#).unwrap();
        assert_eq!(tables.regions, vec!["Bavaria", "Berlin"]);
        assert_eq!(tables.care_of_cues, AddressTables::india().care_of_cues);
    }
}
