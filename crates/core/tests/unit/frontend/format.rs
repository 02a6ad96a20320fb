//! # Format Tests

use bitenum_core::common::EnumError;
use bitenum_core::{EnumType, FormatSpec, IntegerWidth};
use rstest::rstest;

use crate::common::fixtures::{
    EnumComboFlags, EnumSimpleFlags, EnumVanilla, ScenarioFlags, SignedByte, WideFlags, descriptor,
    v,
};

#[rstest]
#[case(FormatSpec::General, "Three")]
#[case(FormatSpec::Flags, "Three")]
#[case(FormatSpec::Decimal, "3")]
#[case(FormatSpec::Hex, "00000003")]
fn test_format_vanilla(#[case] spec: FormatSpec, #[case] expected: &str) {
    assert_eq!(EnumVanilla::descriptor().format(v(3), spec).unwrap(), expected);
}

#[test]
fn test_general_lists_flags() {
    let d = EnumSimpleFlags::descriptor();
    assert_eq!(d.format(v(5), FormatSpec::General).unwrap(), "BitOne, BitThree");
    assert_eq!(d.format(v(0), FormatSpec::General).unwrap(), "None");
    assert_eq!(d.format(v(8), FormatSpec::General).unwrap(), "BitFour");
}

#[test]
fn test_general_prefers_exact_combination() {
    let d = ScenarioFlags::descriptor();
    assert_eq!(d.format(v(5), FormatSpec::General).unwrap(), "BitsOneThree");
    assert_eq!(d.format(v(3), FormatSpec::General).unwrap(), "BitOne, BitTwo");
}

#[test]
fn test_general_uses_largest_combination_first() {
    let d = EnumComboFlags::descriptor();
    assert_eq!(d.format(v(6), FormatSpec::General).unwrap(), "BitTwo, BitThree");
    assert_eq!(d.format(v(7), FormatSpec::General).unwrap(), "BitsOneTwoThree");
}

#[test]
fn test_flags_spec_on_plain_enum() {
    let d = descriptor(
        "Plain",
        IntegerWidth::I32,
        false,
        &[("A", 1), ("B", 2), ("C", 4)],
    );
    assert_eq!(d.format_unchecked(v(3), FormatSpec::Flags), "A, B");
    assert_eq!(d.format_unchecked(v(3), FormatSpec::General), "3");
}

#[test]
fn test_hex_pads_to_width() {
    assert_eq!(
        SignedByte::descriptor().format(v(u64::MAX), FormatSpec::Hex).unwrap(),
        "FF"
    );
    assert_eq!(
        WideFlags::descriptor().format(v(1), FormatSpec::Hex).unwrap(),
        "0000000000000001"
    );
    assert_eq!(
        SignedByte::descriptor().format(v(u64::MAX), FormatSpec::Decimal).unwrap(),
        "-1"
    );
}

#[test]
fn test_format_rejects_invalid_value() {
    assert!(matches!(
        EnumVanilla::descriptor().format(v(9), FormatSpec::General),
        Err(EnumError::NoSuchValue { .. })
    ));
}

#[test]
fn test_format_unchecked_falls_back_to_decimal() {
    assert_eq!(
        ScenarioFlags::descriptor().format_unchecked(v(24), FormatSpec::General),
        "24"
    );
    assert_eq!(
        EnumComboFlags::descriptor().format_unchecked(v(0), FormatSpec::General),
        "0"
    );
}

#[test]
fn test_format_spec_from_str() {
    assert_eq!("g".parse::<FormatSpec>().unwrap(), FormatSpec::General);
    assert_eq!("X".parse::<FormatSpec>().unwrap(), FormatSpec::Hex);
    assert!(matches!(
        "Q".parse::<FormatSpec>(),
        Err(EnumError::FormatInvalid { .. })
    ));
    assert!(matches!(
        EnumVanilla::descriptor().format_str(v(1), "Z"),
        Err(EnumError::FormatInvalid { .. })
    ));
    assert_eq!(EnumVanilla::descriptor().format_str(v(1), "D").unwrap(), "1");
    assert_eq!(FormatSpec::Flags.to_string(), "F");
}

#[test]
fn test_display_uses_general_format() {
    assert_eq!(EnumVanilla::Two.to_string(), "Two");
    assert_eq!((EnumSimpleFlags::BitOne | EnumSimpleFlags::BitTwo).to_string(), "BitOne, BitTwo");
    assert_eq!(EnumVanilla(42).to_string(), "42");
    assert_eq!(EnumVanilla::One.format(FormatSpec::Decimal).unwrap(), "1");
}
