//! Shared types for the address segmenter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured result of segmenting one block of pasted address text.
///
/// Every field is always present; a field the text carried no signal for
/// is an empty string, so callers can destructure unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub given_name: String,
    pub family_name: String,
    pub phone_number: String,
    pub postal_code: String,
    pub region: String,
    pub city: String,
    pub landmark: String,
    pub care_of: String,
    pub residual_address_line: String,
}

impl AddressRecord {
    /// Given and family name joined by a single space
    pub fn full_name(&self) -> String {
        match (self.given_name.is_empty(), self.family_name.is_empty()) {
            (_, true) => self.given_name.clone(),
            (true, false) => self.family_name.clone(),
            (false, false) => format!("{} {}", self.given_name, self.family_name),
        }
    }

    /// Value of a single field
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::GivenName => &self.given_name,
            AddressField::FamilyName => &self.family_name,
            AddressField::PhoneNumber => &self.phone_number,
            AddressField::PostalCode => &self.postal_code,
            AddressField::Region => &self.region,
            AddressField::City => &self.city,
            AddressField::Landmark => &self.landmark,
            AddressField::CareOf => &self.care_of,
            AddressField::ResidualAddressLine => &self.residual_address_line,
        }
    }

    /// True when no field carries a value
    pub fn is_empty(&self) -> bool {
        AddressField::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

/// Strongly typed field name of an `AddressRecord`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    GivenName,
    FamilyName,
    PhoneNumber,
    PostalCode,
    Region,
    City,
    Landmark,
    CareOf,
    ResidualAddressLine,
}

impl AddressField {
    pub const ALL: [AddressField; 9] = [
        AddressField::GivenName,
        AddressField::FamilyName,
        AddressField::PhoneNumber,
        AddressField::PostalCode,
        AddressField::Region,
        AddressField::City,
        AddressField::Landmark,
        AddressField::CareOf,
        AddressField::ResidualAddressLine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::GivenName => "givenName",
            AddressField::FamilyName => "familyName",
            AddressField::PhoneNumber => "phoneNumber",
            AddressField::PostalCode => "postalCode",
            AddressField::Region => "region",
            AddressField::City => "city",
            AddressField::Landmark => "landmark",
            AddressField::CareOf => "careOf",
            AddressField::ResidualAddressLine => "residualAddressLine",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validation failure for a single record field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(AddressField),

    #[error("{field} is invalid: {reason}")]
    Invalid { field: AddressField, reason: String },
}

impl FieldError {
    /// Field the failure refers to
    pub fn field(&self) -> AddressField {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::Invalid { field, .. } => *field,
        }
    }
}

pub type Result<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = AddressRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.full_name(), "");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = AddressRecord {
            given_name: "Rahul".to_string(),
            postal_code: "560001".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["givenName"], "Rahul");
        assert_eq!(json["postalCode"], "560001");
        assert_eq!(json["residualAddressLine"], "");
        assert_eq!(json.as_object().unwrap().len(), AddressField::ALL.len());
    }

    #[test]
    fn test_full_name_joins_parts() {
        let record = AddressRecord {
            given_name: "Anil Kumar".to_string(),
            family_name: "Singh".to_string(),
            ..Default::default()
        };
        assert_eq!(record.full_name(), "Anil Kumar Singh");
        assert!(!record.is_empty());
    }

    #[test]
    fn test_field_error_display() {
        let missing = FieldError::Missing(AddressField::PostalCode);
        assert_eq!(missing.to_string(), "postalCode is required");
        assert_eq!(missing.field(), AddressField::PostalCode);

        let invalid = FieldError::Invalid {
            field: AddressField::PhoneNumber,
            reason: "expected 10 digits".to_string(),
        };
        assert_eq!(invalid.to_string(), "phoneNumber is invalid: expected 10 digits");
    }
}
