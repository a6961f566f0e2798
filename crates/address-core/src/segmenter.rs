//! Address segmentation pipeline

use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::extractors::{
    find_care_of, find_city, find_landmark, find_phone, find_postal_code, find_region, value_or_empty,
};
use crate::name::{find_name, split_name};
use crate::residual::compose_residual;
use crate::tables::{AddressTables, CompiledTables, BUILT_IN};
use address_types::AddressRecord;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DEFAULT_SEGMENTER: Lazy<AddressSegmenter> = Lazy::new(AddressSegmenter::new);

/// Optional pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub care_of: bool,
    pub landmark: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::full()
    }
}

impl PipelineOptions {
    /// Every stage enabled
    pub fn full() -> Self {
        Self {
            care_of: true,
            landmark: true,
        }
    }

    /// Care-of and landmark stages disabled, for simplified address forms
    pub fn reduced() -> Self {
        Self {
            care_of: false,
            landmark: false,
        }
    }
}

/// Turns a raw block of address text into an `AddressRecord`.
///
/// Immutable once built; one instance can serve any number of callers.
#[derive(Debug, Clone)]
pub struct AddressSegmenter {
    tables: CompiledTables,
    options: PipelineOptions,
}

impl Default for AddressSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSegmenter {
    /// Built-in tables, full pipeline
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::full())
    }

    /// Built-in tables with the given stages
    pub fn with_options(options: PipelineOptions) -> Self {
        Self {
            tables: BUILT_IN.clone(),
            options,
        }
    }

    /// Custom locale tables with the given stages
    pub fn with_tables(tables: &AddressTables, options: PipelineOptions) -> Result<Self> {
        Ok(Self {
            tables: tables.compile()?,
            options,
        })
    }

    pub fn with_config(config: &SegmenterConfig) -> Result<Self> {
        config.validate()?;
        match &config.tables {
            Some(tables) => Self::with_tables(tables, config.pipeline),
            None => Ok(Self::with_options(config.pipeline)),
        }
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    /// Segment `raw` into a fully populated record. Never fails; fields
    /// with no signal in the text are empty.
    pub fn segment(&self, raw: &str) -> AddressRecord {
        // Line breaks are kept: the cue extractors and the name guesser read line structure
        let text = raw.trim();
        if text.is_empty() {
            return AddressRecord::default();
        }

        let phone = find_phone(text);
        let postal_code = find_postal_code(text);
        let region = find_region(&self.tables, text);
        let city = find_city(text);
        let care_of = if self.options.care_of {
            find_care_of(&self.tables, text)
        } else {
            None
        };
        let landmark = if self.options.landmark {
            find_landmark(&self.tables, text)
        } else {
            None
        };
        let name = find_name(&self.tables, text);

        // Cue-bearing spans go first so their values do not leave the cue word behind
        let mut spans: Vec<&str> = Vec::new();
        for found in [&care_of, &landmark, &city, &phone, &postal_code, &region, &name]
            .into_iter()
            .flatten()
        {
            spans.push(&found.span);
            spans.push(&found.value);
        }
        spans.extend(self.tables.residual_cue_tokens().iter().map(String::as_str));

        let residual_address_line = compose_residual(text, &spans);

        let full_name = value_or_empty(name);
        let (given_name, family_name) = split_name(&full_name);

        let record = AddressRecord {
            given_name,
            family_name,
            phone_number: value_or_empty(phone),
            postal_code: value_or_empty(postal_code),
            region: value_or_empty(region),
            city: value_or_empty(city),
            landmark: value_or_empty(landmark),
            care_of: value_or_empty(care_of),
            residual_address_line,
        };

        log::debug!(
            "Segmented address: name={:?} phone={:?} postal_code={:?} region={:?} city={:?}",
            full_name,
            record.phone_number,
            record.postal_code,
            record.region,
            record.city
        );
        log::debug!(
            "  - care_of={:?} landmark={:?} residual={:?}",
            record.care_of,
            record.landmark,
            record.residual_address_line
        );

        record
    }

    /// Segment possibly-missing input; `None` yields an empty record.
    pub fn segment_opt(&self, raw: Option<&str>) -> AddressRecord {
        self.segment(raw.unwrap_or(""))
    }
}

/// Segment with the built-in tables and the full pipeline
pub fn segment(raw: &str) -> AddressRecord {
    DEFAULT_SEGMENTER.segment(raw)
}
