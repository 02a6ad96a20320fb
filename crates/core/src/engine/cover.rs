//! Bit-cover decomposition.
//!
//! Decides whether a bitmask is a union of declared member values. The pass runs once
//! over the members in declaration order:
//!
//! | Case                                        | Action                         |
//! |---------------------------------------------|--------------------------------|
//! | all of the member's bits are still unclaimed | claim them                     |
//! | some of its bits were claimed earlier        | claim if claimed ∪ unclaimed covers the member |
//! | otherwise                                    | skip                           |
//!
//! The second case lets a combination member (the union of simpler members) be
//! recognized whether it is declared before or after its constituents. The pass is
//! a one-pass heuristic and is kept exactly as is; it is not replaced by a full
//! set-cover search.

/// Outcome of one bit-cover pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitCover {
    /// Bits of the input no member explained.
    pub remaining: u64,
    /// Bits claimed by at least one member.
    pub consumed: u64,
}

impl BitCover {
    /// Returns true if every bit of the input was explained.
    pub const fn is_complete(self) -> bool {
        self.remaining == 0
    }
}

/// Runs the bit-cover pass of `value` over member bit patterns in declaration order.
///
/// Zero-valued members are skipped; they can never explain a bit.
pub fn cover<I>(value: u64, members: I) -> BitCover
where
    I: IntoIterator<Item = u64>,
{
    let mut remaining = value;
    let mut consumed = 0u64;

    for bits in members {
        if bits == 0 {
            continue;
        }

        if remaining & bits == bits {
            remaining &= !bits;
            consumed |= bits;
        } else if consumed & bits != 0 && (consumed | remaining) & bits == bits {
            // Overlaps an earlier claim: the member is still fully present in the input.
            remaining &= !bits;
            consumed |= bits;
        }
    }

    tracing::trace!(value, remaining, consumed, "bit cover");
    BitCover {
        remaining,
        consumed,
    }
}
