//! # Integer Width Tests
//!
//! Bounds, normalization and narrowing for every storage width.

use bitenum_core::common::EnumError;
use bitenum_core::{IntegerWidth, NativeInteger};
use rstest::rstest;

#[rstest]
#[case(IntegerWidth::I8, -128, 127)]
#[case(IntegerWidth::I16, -32_768, 32_767)]
#[case(IntegerWidth::I32, -2_147_483_648, 2_147_483_647)]
#[case(IntegerWidth::I64, i64::MIN as i128, i64::MAX as i128)]
#[case(IntegerWidth::U8, 0, 255)]
#[case(IntegerWidth::U16, 0, 65_535)]
#[case(IntegerWidth::U32, 0, 4_294_967_295)]
#[case(IntegerWidth::U64, 0, u64::MAX as i128)]
fn test_width_bounds(#[case] width: IntegerWidth, #[case] min: i128, #[case] max: i128) {
    assert_eq!(width.min(), min);
    assert_eq!(width.max(), max);
    assert!(width.check(min).is_ok());
    assert!(width.check(max).is_ok());
    assert!(matches!(width.check(min - 1), Err(EnumError::OutOfRange { .. })));
    assert!(matches!(width.check(max + 1), Err(EnumError::OutOfRange { .. })));
}

#[test]
fn test_check_sign_extends_signed_widths() {
    assert_eq!(IntegerWidth::I8.check(-1).unwrap(), u64::MAX);
    assert_eq!(IntegerWidth::I32.check(-2).unwrap(), u64::MAX - 1);
    assert_eq!(IntegerWidth::U8.check(255).unwrap(), 255);
}

#[test]
fn test_to_native_inverts_normalization() {
    let bits = IntegerWidth::I16.check(-300).unwrap();
    assert_eq!(IntegerWidth::I16.to_native(bits), -300);
    assert_eq!(IntegerWidth::U64.to_native(u64::MAX), u64::MAX as i128);
}

#[test]
fn test_truncate_drops_sign_extension() {
    assert_eq!(IntegerWidth::I8.truncate(u64::MAX), 0xFF);
    assert_eq!(IntegerWidth::U16.truncate(0x1_2345), 0x2345);
    assert_eq!(IntegerWidth::I64.truncate(u64::MAX), u64::MAX);
}

#[test]
fn test_out_of_range_reports_width() {
    let err = IntegerWidth::U8.check(256).unwrap_err();
    assert_eq!(
        err,
        EnumError::OutOfRange {
            value: "256".to_owned(),
            width: IntegerWidth::U8,
        }
    );
    assert_eq!(err.to_string(), "256 exceeds the bounds of the underlying u8 type");
}

#[test]
fn test_width_from_str() {
    assert_eq!("u16".parse::<IntegerWidth>().unwrap(), IntegerWidth::U16);
    assert_eq!(" I64 ".parse::<IntegerWidth>().unwrap(), IntegerWidth::I64);
    assert!(matches!(
        "i128".parse::<IntegerWidth>(),
        Err(EnumError::FormatInvalid { .. })
    ));
}

#[test]
fn test_width_default_and_display() {
    assert_eq!(IntegerWidth::default(), IntegerWidth::I32);
    assert_eq!(IntegerWidth::U32.to_string(), "u32");
    assert_eq!(IntegerWidth::I16.bits(), 16);
    assert!(IntegerWidth::I16.is_signed());
    assert!(!IntegerWidth::U16.is_signed());
}

#[test]
fn test_native_integer_round_trip() {
    assert_eq!(<i8 as NativeInteger>::WIDTH, IntegerWidth::I8);
    assert_eq!((-1i8).to_bits(), u64::MAX);
    assert_eq!(<i8 as NativeInteger>::from_bits(u64::MAX), -1);
    assert_eq!(200u8.to_bits(), 200);
    assert_eq!(<u32 as NativeInteger>::from_bits(0xDEAD_BEEF), 0xDEAD_BEEF);
}
