//! Baseline O(n) iterative accumulation, in both arithmetic domains.
//!
//! These engines walk the recurrence $F(i) = F(i-1) + F(i-2)$ one step per
//! index. They exist as the cross-check and benchmarking baseline for the
//! fast-doubling engines.

use crate::u256::U256;

/// Computes $F(k)$ by iterative accumulation over native `u128`.
///
/// `k < 2` returns `k` itself. All additions wrap modulo $2^{128}$, so
/// results past index [`MAX_INDEX_U128`](crate::config::limits::MAX_INDEX_U128)
/// are reduced modulo the width rather than signalled.
///
/// # Example
/// ```
/// assert_eq!(fibwide_core::algo::sequence(10), 55);
/// ```
#[must_use]
pub fn sequence(k: u32) -> u128 {
    if k < 2 {
        return u128::from(k);
    }

    let mut a: u128 = 0;
    let mut b: u128 = 1;
    for _ in 2..=k {
        let f = a.wrapping_add(b);
        a = b;
        b = f;
    }
    b
}

/// Computes $F(n)$ by iterative accumulation over [`U256`], writing the
/// result into the caller-owned `out` buffer.
///
/// `n < 2` stores `n` directly (sign-extended assignment, upper limb zero).
/// Additions wrap modulo $2^{256}$ past index
/// [`MAX_INDEX_U256`](crate::config::limits::MAX_INDEX_U256).
pub fn iterative_256(out: &mut U256, n: u32) {
    if n < 2 {
        out.set_signed(i128::from(n));
        return;
    }

    let mut a = U256::ZERO;
    let mut b = U256::ONE;
    for _ in 2..=n {
        *out = a.wrapping_add(b);
        a = b;
        b = *out;
    }
}
