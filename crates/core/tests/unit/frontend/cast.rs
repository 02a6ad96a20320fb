//! # Cast Tests
//!
//! Bounds are checked before the policy; the policy decides what happens to
//! in-range values that are not valid.

use bitenum_core::common::EnumError;
use bitenum_core::{EnumType, IntegerWidth, InvalidValuePolicy};
use rstest::rstest;

use crate::common::fixtures::{
    EnumComboFlags, EnumVanilla, ScenarioFlags, SignedByte, WideFlags, descriptor, v,
};

use InvalidValuePolicy::{Allow, Disallow};

#[test]
fn test_cast_defined_member() {
    let d = EnumVanilla::descriptor();
    assert_eq!(d.cast(3, Disallow).unwrap(), v(3));
    assert_eq!(d.cast(3u8, Allow).unwrap(), v(3));
    assert_eq!(EnumVanilla::cast(2i64, Disallow).unwrap(), EnumVanilla::Two);
}

#[test]
fn test_cast_unknown_depends_on_policy() {
    let d = ScenarioFlags::descriptor();
    assert_eq!(d.cast(16, Allow).unwrap(), v(16));
    assert!(d.members_with_value(v(16)).next().is_none());
    assert_eq!(
        d.cast(16, Disallow),
        Err(EnumError::NoSuchValue {
            type_name: "ScenarioFlags".to_owned(),
            input: "16".to_owned(),
        })
    );
}

#[test]
fn test_cast_flags_combination() {
    assert_eq!(ScenarioFlags::descriptor().cast(3, Disallow).unwrap(), v(3));
    assert_eq!(
        ScenarioFlags::cast(6u16, Disallow).unwrap(),
        ScenarioFlags::BitTwo | ScenarioFlags::BitThree
    );
}

#[test]
fn test_cast_zero_without_zero_member() {
    let d = EnumComboFlags::descriptor();
    assert!(matches!(d.cast(0, Disallow), Err(EnumError::NoSuchValue { .. })));
    assert_eq!(d.cast(0, Allow).unwrap(), v(0));
}

#[rstest]
#[case(Disallow)]
#[case(Allow)]
fn test_bounds_precede_policy(#[case] policy: InvalidValuePolicy) {
    let d = descriptor("Byte", IntegerWidth::U8, false, &[("A", 1)]);
    assert!(matches!(d.cast(256, policy), Err(EnumError::OutOfRange { .. })));
    assert!(matches!(d.cast(-1, policy), Err(EnumError::OutOfRange { .. })));
    assert!(matches!(
        SignedByte::descriptor().cast(128, policy),
        Err(EnumError::OutOfRange { .. })
    ));
}

#[test]
fn test_cast_signed_members() {
    assert_eq!(SignedByte::cast(-1, Disallow).unwrap(), SignedByte::Negative);
    assert_eq!(SignedByte::cast(-128i64, Disallow).unwrap(), SignedByte::Min);
    assert_eq!(SignedByte::cast(-5, Allow).unwrap(), SignedByte(-5));
}

#[test]
fn test_cast_full_width_unsigned() {
    assert_eq!(WideFlags::cast(u64::MAX, Allow).unwrap(), WideFlags(u64::MAX));
    assert_eq!(
        WideFlags::cast((1u64 << 63) | 1, Disallow).unwrap(),
        WideFlags::Low | WideFlags::High
    );
    assert!(WideFlags::cast(-1, Allow).is_err());
}

#[test]
fn test_try_cast_swallows_only_not_found() {
    let d = ScenarioFlags::descriptor();
    assert_eq!(d.try_cast(8, Disallow).unwrap(), None);
    assert_eq!(d.try_cast(8, Allow).unwrap(), Some(v(8)));
    assert_eq!(d.try_cast(5, Disallow).unwrap(), Some(v(5)));
    assert!(matches!(
        d.try_cast(-1, Disallow),
        Err(EnumError::OutOfRange { .. })
    ));
    assert_eq!(EnumVanilla::try_cast(9, Disallow).unwrap(), None);
}

#[test]
fn test_policy_monotonicity() {
    let d = EnumComboFlags::descriptor();
    for raw in 0..16 {
        if let Ok(strict) = d.cast(raw, Disallow) {
            assert_eq!(d.cast(raw, Allow).unwrap(), strict);
        }
    }
}
