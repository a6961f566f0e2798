//! Configuration for the address segmenter

use crate::error::{AddressError, Result};
use crate::segmenter::PipelineOptions;
use crate::tables::AddressTables;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `ADDRESS__PIPELINE__LANDMARK=false`
pub const ENV_PREFIX: &str = "ADDRESS";
const ENV_SEPARATOR: &str = "__";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    #[serde(default)]
    pub pipeline: PipelineOptions,

    /// Locale override; built-in tables when absent
    #[serde(default)]
    pub tables: Option<AddressTables>,

    /// JSON list of serviceable postal codes
    #[serde(default, alias = "pincodes")]
    pub pin_directory: Option<PathBuf>,
}

impl SegmenterConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AddressError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_json_str(&content)?;
        log::info!("Loaded segmenter configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AddressError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Layer an optional JSON file with `ADDRESS__`-prefixed environment overrides
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = &path {
            builder = builder.add_source(
                ::config::File::from(path.as_ref()).format(::config::FileFormat::Json),
            );
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AddressError::Config(format!("Failed to load config: {}", e)))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| AddressError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        match &path {
            Some(path) => log::info!("Loaded segmenter configuration from {}", path.as_ref().display()),
            None => log::info!("Using built-in segmenter configuration"),
        }
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let Some(tables) = &self.tables else {
            return Ok(());
        };

        if tables.regions.iter().all(|r| r.trim().is_empty()) {
            return Err(AddressError::Config("Region list is required".to_string()));
        }

        if self.pipeline.care_of && tables.care_of_cues.iter().all(|c| c.trim().is_empty()) {
            return Err(AddressError::Config(
                "Care-of cue words are required while the care-of stage is enabled".to_string(),
            ));
        }

        if self.pipeline.landmark && tables.landmark_cues.iter().all(|c| c.trim().is_empty()) {
            return Err(AddressError::Config(
                "Landmark cue words are required while the landmark stage is enabled".to_string(),
            ));
        }

        if tables.name_denylist.is_empty() {
            log::warn!("Name denylist is empty; structural lines may be read as names");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = SegmenterConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SegmenterConfig::default());
        assert_eq!(config.pipeline, PipelineOptions::full());
    }

    #[test]
    fn test_partial_pipeline_keeps_other_stage() {
        let config = SegmenterConfig::from_json_str(r#"{"pipeline": {"landmark": false}}"#).unwrap();
        assert!(config.pipeline.care_of);
        assert!(!config.pipeline.landmark);
    }

    #[test]
    fn test_disabled_stage_may_drop_its_cues() {
        let json = r#"{
            "pipeline": {"care_of": false},
            "tables": {"care_of_cues": []}
        }"#;
        assert!(SegmenterConfig::from_json_str(json).is_ok());
    }

    #[test]
    fn test_enabled_stage_requires_cues() {
        let err = SegmenterConfig::from_json_str(r#"{"tables": {"landmark_cues": []}}"#).unwrap_err();
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SegmenterConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AddressError::Config(_)));
    }
}
