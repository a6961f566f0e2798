//! Address Segmenter Core Library
//!
//! Turns a pasted, unstructured block of postal-address text into an
//! `AddressRecord`: name, phone number, postal code, region, city,
//! landmark, care-of addressee and the residual street line.
//!
//! Extraction is deterministic pattern matching; every call is pure and
//! never fails.

pub mod config;
pub mod error;
pub mod extractors;
pub mod name;
pub mod normalizer;
pub mod pin_directory;
pub mod residual;
pub mod segmenter;
pub mod tables;
pub mod validation;

// Re-export main types for easy access
pub use address_types::{AddressField, AddressRecord, FieldError};
pub use config::SegmenterConfig;
pub use error::{AddressError, Result};
pub use pin_directory::PinDirectory;
pub use segmenter::{segment, AddressSegmenter, PipelineOptions};
pub use tables::{AddressTables, CompiledTables};

// Re-export the single-field contracts
pub use extractors::{
    extract_care_of, extract_city, extract_landmark, extract_phone, extract_postal_code,
    extract_region, Match,
};
pub use name::{guess_name, split_name};
pub use normalizer::normalize;
pub use residual::compose_residual;
