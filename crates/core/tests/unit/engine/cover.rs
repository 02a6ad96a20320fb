//! # Bit Cover Tests
//!
//! The pass claims a member when its bits are unclaimed, or when it overlaps an
//! earlier claim and is still fully present in the input.

use bitenum_core::engine::{BitCover, cover};

#[test]
fn test_simple_bits_cover_their_union() {
    let result = cover(0b0101, [1, 2, 4, 8]);
    assert_eq!(
        result,
        BitCover {
            remaining: 0,
            consumed: 0b0101,
        }
    );
    assert!(result.is_complete());
}

#[test]
fn test_uncovered_bit_remains() {
    let result = cover(0b1000, [1, 2, 4]);
    assert_eq!(result.remaining, 0b1000);
    assert_eq!(result.consumed, 0);
    assert!(!result.is_complete());
}

#[test]
fn test_combination_declared_after_constituents() {
    // BitOne, BitThree, then BitsOneThree overlapping both.
    let result = cover(5, [1, 2, 4, 5]);
    assert!(result.is_complete());
    assert_eq!(result.consumed, 5);
}

#[test]
fn test_combination_declared_before_constituents() {
    let result = cover(5, [5, 1, 4]);
    assert!(result.is_complete());
}

#[test]
fn test_combination_with_private_bit() {
    // 9 = BitOne | bit 3; bit 3 has no member of its own.
    assert!(cover(9, [1, 2, 4, 9, 11]).is_complete());
    assert!(cover(11, [1, 2, 4, 9, 11]).is_complete());
    assert!(!cover(8, [1, 2, 4, 9, 11]).is_complete());
}

#[test]
fn test_partial_combination_is_not_claimed() {
    // 6 contains BitTwo and BitThree but not all of 7.
    let result = cover(6, [7, 2]);
    assert_eq!(result.remaining, 4);
    assert_eq!(result.consumed, 2);
}

#[test]
fn test_zero_members_are_skipped() {
    let result = cover(1, [0, 1]);
    assert!(result.is_complete());
    assert_eq!(cover(0, [0]).consumed, 0);
}

#[test]
fn test_high_bit_cover() {
    assert!(cover(u64::MAX, [u64::MAX >> 1, 1 << 63]).is_complete());
}
