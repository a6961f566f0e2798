//! Field format checks for segmented records
//!
//! Segmenting never judges whether a record is usable; callers that need
//! a shippable address run these checks afterwards.

use crate::pin_directory::PinDirectory;
use address_types::{AddressField, AddressRecord, FieldError};

fn all_ascii_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// 10-digit mobile number starting with 6, 7, 8 or 9
pub fn is_valid_phone(phone: &str) -> bool {
    all_ascii_digits(phone, 10) && matches!(phone.as_bytes()[0], b'6'..=b'9')
}

/// 6-digit postal index number
pub fn is_valid_pin(pin: &str) -> bool {
    all_ascii_digits(pin, 6)
}

/// 5-digit ZIP code of the sending country
pub fn is_valid_zip(zip: &str) -> bool {
    all_ascii_digits(zip, 5)
}

pub fn check_phone(phone: &str) -> address_types::Result<()> {
    if phone.is_empty() {
        Err(FieldError::Missing(AddressField::PhoneNumber))
    } else if !is_valid_phone(phone) {
        Err(FieldError::Invalid {
            field: AddressField::PhoneNumber,
            reason: "expected 10 digits starting with 6-9".to_string(),
        })
    } else {
        Ok(())
    }
}

pub fn check_pin(pin: &str) -> address_types::Result<()> {
    if pin.is_empty() {
        Err(FieldError::Missing(AddressField::PostalCode))
    } else if !is_valid_pin(pin) {
        Err(FieldError::Invalid {
            field: AddressField::PostalCode,
            reason: "expected 6 digits".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Every field problem that stops the record from being shipped to.
/// Empty when the record is usable.
pub fn validate_record(record: &AddressRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if record.given_name.is_empty() {
        errors.push(FieldError::Missing(AddressField::GivenName));
    }
    if let Err(e) = check_phone(&record.phone_number) {
        errors.push(e);
    }
    if let Err(e) = check_pin(&record.postal_code) {
        errors.push(e);
    }
    if record.region.is_empty() {
        errors.push(FieldError::Missing(AddressField::Region));
    }

    errors
}

/// Same as [`validate_record`], also requiring the postal code to be serviceable
pub fn validate_record_with(record: &AddressRecord, directory: &PinDirectory) -> Vec<FieldError> {
    let mut errors = validate_record(record);

    if is_valid_pin(&record.postal_code) && !directory.is_serviceable(&record.postal_code) {
        errors.push(FieldError::Invalid {
            field: AddressField::PostalCode,
            reason: "delivery to this PIN code is not available".to_string(),
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shippable() -> AddressRecord {
        AddressRecord {
            given_name: "Rahul".to_string(),
            family_name: "Sharma".to_string(),
            phone_number: "9876543210".to_string(),
            postal_code: "560001".to_string(),
            region: "Karnataka".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_phone_format() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("6000000000"));
        assert!(!is_valid_phone("5876543210"));
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("98765432a0"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_pin_and_zip_format() {
        assert!(is_valid_pin("560001"));
        assert!(!is_valid_pin("5600"));
        assert!(!is_valid_pin("56A001"));
        assert!(is_valid_zip("12345"));
        assert!(!is_valid_zip("1234"));
        assert!(!is_valid_zip("12a45"));
    }

    #[test]
    fn test_shippable_record_has_no_errors() {
        assert!(validate_record(&shippable()).is_empty());
    }

    #[test]
    fn test_empty_record_reports_each_required_field() {
        let errors = validate_record(&AddressRecord::default());
        let fields: Vec<AddressField> = errors.iter().map(FieldError::field).collect();
        assert_eq!(
            fields,
            vec![
                AddressField::GivenName,
                AddressField::PhoneNumber,
                AddressField::PostalCode,
                AddressField::Region,
            ]
        );
        assert!(errors.iter().all(|e| matches!(e, FieldError::Missing(_))));
    }

    #[test]
    fn test_unserviceable_pin_is_reported() {
        let directory = PinDirectory::from_pins(["110001"]);
        let errors = validate_record_with(&shippable(), &directory);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("not available"));

        let directory = PinDirectory::from_pins(["560001"]);
        assert!(validate_record_with(&shippable(), &directory).is_empty());
    }
}
