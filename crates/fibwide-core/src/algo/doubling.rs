//! Fast Doubling engines, O(log n) per computation.
//!
//! All three engines use the doubling identities
//! $F(2m) = F(m)\,(2F(m+1) - F(m))$ and $F(2m+1) = F(m)^2 + F(m+1)^2$,
//! walking the bits of the index from the one just below the most
//! significant bit down to bit 0. The top-level entry points operate on
//! `k - 1` starting from the pair $(F(1), F(2)) = (1, 1)$ and return the
//! second pair element, which is exactly $F(k)$.
//!
//! [`doubling`] is the recursive definition; [`doubling_clz`] is the
//! iterative equivalent driven by a most-significant-bit scan and must be
//! bit-for-bit identical to it for every input. [`doubling_clz_256`] is the
//! same loop expressed over [`U256`] primitives.

use crate::u256::U256;

/// Recursive doubling step: returns $(F(k), F(k+1))$ for `k >= 1`.
///
/// The `k < 2` base returns `(1, 1)`; the top-level callers only reach it
/// with `k >= 1`, where $(F(1), F(2)) = (1, 1)$ holds.
fn doubling_pair(k: u32) -> (u128, u128) {
    if k < 2 {
        return (1, 1);
    }

    let (a, b) = doubling_pair(k >> 1);
    // c = F(2m) = a * (2b - a); d = F(2m+1) = a^2 + b^2
    let c = a.wrapping_mul((b << 1).wrapping_sub(a));
    let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));

    if k & 1 == 1 {
        (d, c.wrapping_add(d))
    } else {
        (c, d)
    }
}

/// Computes $F(k)$ by recursive fast doubling over native `u128`.
///
/// `k < 2` returns `k` itself. Wraps modulo $2^{128}$ past index
/// [`MAX_INDEX_U128`](crate::config::limits::MAX_INDEX_U128).
///
/// # Example
/// ```
/// assert_eq!(fibwide_core::algo::doubling(20), 6765);
/// ```
#[must_use]
pub fn doubling(k: u32) -> u128 {
    if k < 2 {
        return u128::from(k);
    }
    doubling_pair(k - 1).1
}

/// Computes $F(k)$ by iterative fast doubling over native `u128`.
///
/// Equivalent to [`doubling`] with the recursion unrolled: the loop count
/// is `bit_length(k - 1) - 1` from a most-significant-set-bit scan, and a
/// descending mask selects the doubling branch each iteration.
///
/// # Example
/// ```
/// assert_eq!(fibwide_core::algo::doubling_clz(20), 6765);
/// ```
#[must_use]
pub fn doubling_clz(k: u32) -> u128 {
    if k < 2 {
        return u128::from(k);
    }

    let n = k - 1;
    let count = 31 - n.leading_zeros();
    let mut mask = 1u32 << count;

    let mut a: u128 = 1; // F(1)
    let mut b: u128 = 1; // F(2)
    for _ in 0..count {
        mask >>= 1;

        let c = a.wrapping_mul((b << 1).wrapping_sub(a));
        let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));

        if n & mask != 0 {
            a = d;
            b = c.wrapping_add(d);
        } else {
            a = c;
            b = d;
        }
    }
    b
}

/// Computes $F(n)$ by iterative fast doubling over [`U256`], writing the
/// result into the caller-owned `out` buffer.
///
/// Structurally identical to [`doubling_clz`], with every arithmetic step
/// ($2b - a$, $a \cdot (2b - a)$, $a^2$, $b^2$, the sums) expressed through
/// the `U256` wrapping primitives. Products use the full-width
/// 256x256 -> 256 multiplication, so the engine stays exact up to
/// [`MAX_INDEX_U256`](crate::config::limits::MAX_INDEX_U256) even once
/// intermediates exceed a single limb.
pub fn doubling_clz_256(out: &mut U256, n: u32) {
    if n < 2 {
        out.set_signed(i128::from(n));
        return;
    }

    let n = n - 1;
    let count = 31 - n.leading_zeros();
    let mut mask = 1u32 << count;

    let mut a = U256::ONE; // F(1)
    let mut b = U256::ONE; // F(2)
    for _ in 0..count {
        mask >>= 1;

        // c = a * (2b - a)
        let c = b.wrapping_add(b).wrapping_sub(a).wrapping_mul(a);
        // d = a^2 + b^2
        let d = a.wrapping_mul(a).wrapping_add(b.wrapping_mul(b));

        if n & mask != 0 {
            a = d;
            b = c.wrapping_add(d);
        } else {
            a = c;
            b = d;
        }
    }
    *out = b;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::iterative::{iterative_256, sequence};

    #[test]
    fn doubling_base_cases() {
        assert_eq!(doubling(0), 0);
        assert_eq!(doubling(1), 1);
        assert_eq!(doubling(2), 1);
        assert_eq!(doubling_clz(0), 0);
        assert_eq!(doubling_clz(1), 1);
        assert_eq!(doubling_clz(2), 1);
    }

    #[test]
    fn doubling_known_values() {
        assert_eq!(doubling(10), 55);
        assert_eq!(doubling(20), 6765);
        assert_eq!(doubling_clz(10), 55);
        assert_eq!(doubling_clz(20), 6765);
    }

    #[test]
    fn recursive_and_iterative_forms_agree() {
        // The clz loop must be bit-for-bit identical to the recursive
        // definition, including past the wrap boundary.
        for k in 0..=250 {
            assert_eq!(doubling(k), doubling_clz(k), "mismatch at k={k}");
        }
    }

    #[test]
    fn doubling_matches_sequence() {
        for k in 0..=186 {
            assert_eq!(doubling(k), sequence(k), "mismatch at k={k}");
        }
    }

    #[test]
    fn u128_boundary_wraps_past_186() {
        // F(186) fits a u128 exactly; F(187) wraps. The 256-bit engine is
        // exact at both, so its low limb exposes the transition.
        let mut wide = U256::ZERO;

        iterative_256(&mut wide, 186);
        assert_eq!(wide.high, 0);
        assert_eq!(doubling_clz(186), wide.low);

        iterative_256(&mut wide, 187);
        assert_ne!(wide.high, 0, "F(187) must exceed 128 bits");
        // The wrapped 128-bit result equals the true value mod 2^128.
        assert_eq!(doubling_clz(187), wide.low);
    }

    #[test]
    fn doubling_clz_256_base_cases() {
        let mut out = U256::MAX;
        doubling_clz_256(&mut out, 0);
        assert_eq!(out, U256::ZERO);
        doubling_clz_256(&mut out, 1);
        assert_eq!(out, U256::ONE);
        doubling_clz_256(&mut out, 2);
        assert_eq!(out, U256::ONE);
    }

    #[test]
    fn doubling_clz_256_matches_iterative_full_domain() {
        // Past ~n=186 the doubling intermediates carry a nonzero high limb;
        // this is the range a single-limb product would get wrong.
        let mut fast = U256::ZERO;
        let mut slow = U256::ZERO;
        for n in 0..=370 {
            doubling_clz_256(&mut fast, n);
            iterative_256(&mut slow, n);
            assert_eq!(fast, slow, "mismatch at n={n}");
        }
    }

    #[test]
    fn doubling_clz_256_determinism() {
        let mut first = U256::ZERO;
        let mut again = U256::ZERO;
        doubling_clz_256(&mut first, 300);
        // Unrelated computations in between must not leak state.
        doubling_clz_256(&mut again, 17);
        doubling_clz_256(&mut again, 370);
        doubling_clz_256(&mut again, 300);
        assert_eq!(first, again);
    }
}
