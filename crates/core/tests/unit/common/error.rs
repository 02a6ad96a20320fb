//! # Error Tests
//!
//! Messages and the split between "not found" and misuse kinds.

use bitenum_core::common::EnumError;
use bitenum_core::IntegerWidth;

#[test]
fn test_not_found_kinds() {
    let not_found = [
        EnumError::NoSuchValue {
            type_name: "T".to_owned(),
            input: "3".to_owned(),
        },
        EnumError::FormatInvalid {
            type_name: "T".to_owned(),
            input: "x".to_owned(),
        },
    ];
    for err in &not_found {
        assert!(err.is_not_found(), "{err}");
    }

    let misuse = [
        EnumError::NullInput("text"),
        EnumError::BlankInput,
        EnumError::InvalidPolicy("7".to_owned()),
        EnumError::OutOfRange {
            value: "300".to_owned(),
            width: IntegerWidth::U8,
        },
        EnumError::AmbiguousValue {
            type_name: "T".to_owned(),
            input: "1".to_owned(),
        },
        EnumError::UnsupportedOperation {
            type_name: "T".to_owned(),
            operation: "op",
        },
    ];
    for err in &misuse {
        assert!(!err.is_not_found(), "{err}");
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        EnumError::NullInput("text").to_string(),
        "required argument `text` is missing"
    );
    assert_eq!(EnumError::BlankInput.to_string(), "input must not be blank");
    assert_eq!(
        EnumError::NoSuchValue {
            type_name: "Color".to_owned(),
            input: "9".to_owned(),
        }
        .to_string(),
        "9 is not a valid value of `Color`"
    );
}
