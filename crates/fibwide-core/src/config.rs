//! Domain constants for the fixed-width Fibonacci engines.
//!
//! These are mathematical capacity boundaries, not tuning knobs: past each
//! limit a representation silently wraps modulo its width. The engines keep
//! returning values beyond the limits (see the crate-level overflow
//! contract); callers that need exact results must stay within them.

/// Exactness limits of each arithmetic domain.
pub mod limits {
    /// Largest index whose Fibonacci number fits in a `u128`.
    ///
    /// $F(186) \approx 3.33 \times 10^{38}$ while `u128::MAX`
    /// $\approx 3.40 \times 10^{38}$; $F(187)$ overflows. The 128-bit
    /// engines are exact on $[0, 186]$ and wrap from 187 on.
    pub const MAX_INDEX_U128: u32 = 186;

    /// Largest index whose Fibonacci number fits in a [`U256`](crate::U256).
    ///
    /// $F(370) \approx 9.5 \times 10^{76}$ while $2^{256} \approx
    /// 1.16 \times 10^{77}$; $F(371)$ overflows. The 256-bit engines are
    /// exact on $[0, 370]$ and wrap from 371 on.
    pub const MAX_INDEX_U256: u32 = 370;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_ordered() {
        assert!(
            limits::MAX_INDEX_U128 < limits::MAX_INDEX_U256,
            "the 256-bit domain must extend past the 128-bit domain"
        );
    }

    #[test]
    fn u128_limit_is_tight() {
        // F(185) + F(186) = F(187) must not fit in u128, while F(186) does.
        let f185 = crate::algo::sequence(limits::MAX_INDEX_U128 - 1);
        let f186 = crate::algo::sequence(limits::MAX_INDEX_U128);
        assert!(f185.checked_add(f186).is_none(), "F(187) should overflow");
        assert!(f186 > f185);
    }
}
