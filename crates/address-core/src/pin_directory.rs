//! Serviceable postal-code lookup

use crate::error::{AddressError, Result};
use crate::validation::is_valid_pin;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Raw entry of the postal-code JSON list; other keys are ignored
#[derive(Debug, Deserialize)]
struct PinEntry {
    #[serde(default, alias = "Pincode")]
    pincode: Option<PinValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PinValue {
    Number(u64),
    Text(String),
}

impl PinValue {
    fn into_pin(self) -> String {
        match self {
            PinValue::Number(n) => n.to_string(),
            PinValue::Text(s) => s.trim().to_string(),
        }
    }
}

/// Set of postal codes the shipping network delivers to
#[derive(Debug, Clone, Default)]
pub struct PinDirectory {
    pins: HashSet<String>,
}

impl PinDirectory {
    pub fn from_pins<I, S>(pins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pins: pins.into_iter().map(Into::<String>::into).filter(|p| is_valid_pin(p)).collect(),
        }
    }

    /// Load from a JSON file holding an array of `{"pincode": ...}` objects
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let directory = Self::from_json_str(&content)?;
        log::info!(
            "Loaded {} serviceable PIN codes from {}",
            directory.len(),
            path.as_ref().display()
        );
        Ok(directory)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<PinEntry> = serde_json::from_str(json)?;
        let total = entries.len();

        let directory = Self::from_pins(entries.into_iter().filter_map(|e| e.pincode).map(PinValue::into_pin));

        if directory.is_empty() {
            return Err(AddressError::Validation(
                "PIN directory contains no valid 6-digit codes".to_string(),
            ));
        }
        if directory.len() < total {
            log::warn!("Ignored {} PIN directory entries without a valid code", total - directory.len());
        }

        Ok(directory)
    }

    /// Well-formed PIN present in the directory
    pub fn is_serviceable(&self, pin: &str) -> bool {
        is_valid_pin(pin) && self.pins.contains(pin)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
