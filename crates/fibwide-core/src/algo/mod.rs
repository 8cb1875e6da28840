//! Fibonacci engines and variant dispatch.
//!
//! Five independent engines are provided, all pure and single-threaded:
//!
//! - **`sequence`**: O(n) iterative accumulation over native `u128`.
//! - **`doubling`**: O(log n) recursive fast doubling over `u128`.
//! - **`doubling_clz`**: iterative fast doubling over `u128`, driven by a
//!   most-significant-bit scan instead of recursion.
//! - **`iterative_256`**: O(n) accumulation over [`U256`].
//! - **`doubling_clz_256`**: iterative fast doubling over [`U256`].
//!
//! [`Algorithm`] names each engine and dispatches to it. It replaces the
//! kind of process-global "currently selected variant" cell with an
//! explicit enumerated parameter: selection is data the caller passes, not
//! hidden state.

use std::fmt;

use crate::u256::U256;

pub mod doubling;
pub mod iterative;

pub use doubling::{doubling, doubling_clz, doubling_clz_256};
pub use iterative::{iterative_256, sequence};

/// Fibonacci engine selection.
///
/// Shared by every caller that picks an engine (CLI flags, the benchmark
/// sweep, single-character selection codes). The serde renames mirror the
/// one-character selection protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// O(n) iterative accumulation, native `u128`.
    #[cfg_attr(feature = "serde", serde(rename = "s", alias = "sequence"))]
    Sequence,

    /// O(log n) recursive fast doubling, native `u128`.
    #[cfg_attr(feature = "serde", serde(rename = "d", alias = "doubling"))]
    Doubling,

    /// O(log n) iterative fast doubling with bit-length scan, native `u128`.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "z", alias = "doubling-clz"))]
    DoublingClz,

    /// O(n) iterative accumulation over 256-bit arithmetic.
    #[cfg_attr(feature = "serde", serde(rename = "S", alias = "iterative-256"))]
    Iterative256,

    /// O(log n) iterative fast doubling over 256-bit arithmetic.
    #[cfg_attr(feature = "serde", serde(rename = "Z", alias = "doubling-clz-256"))]
    DoublingClz256,
}

impl Algorithm {
    /// Every engine, in baseline-first order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Sequence,
        Algorithm::Doubling,
        Algorithm::DoublingClz,
        Algorithm::Iterative256,
        Algorithm::DoublingClz256,
    ];

    /// Single-character selection code for this engine.
    ///
    /// Lowercase codes are the 128-bit engines, uppercase their 256-bit
    /// counterparts.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Algorithm::Sequence => b's',
            Algorithm::Doubling => b'd',
            Algorithm::DoublingClz => b'z',
            Algorithm::Iterative256 => b'S',
            Algorithm::DoublingClz256 => b'Z',
        }
    }

    /// Parses a single-character selection code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            b's' => Some(Algorithm::Sequence),
            b'd' => Some(Algorithm::Doubling),
            b'z' => Some(Algorithm::DoublingClz),
            b'S' => Some(Algorithm::Iterative256),
            b'Z' => Some(Algorithm::DoublingClz256),
            _ => None,
        }
    }

    /// Short machine-friendly engine name, used for log file naming.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Algorithm::Sequence => "sequence",
            Algorithm::Doubling => "doubling",
            Algorithm::DoublingClz => "doubling_clz",
            Algorithm::Iterative256 => "sequence_256",
            Algorithm::DoublingClz256 => "doubling_256_clz",
        }
    }

    /// Largest index this engine computes exactly; beyond it the result
    /// wraps modulo the engine's width.
    #[must_use]
    pub const fn max_exact_index(self) -> u32 {
        match self {
            Algorithm::Sequence | Algorithm::Doubling | Algorithm::DoublingClz => {
                crate::config::limits::MAX_INDEX_U128
            }
            Algorithm::Iterative256 | Algorithm::DoublingClz256 => {
                crate::config::limits::MAX_INDEX_U256
            }
        }
    }

    /// Computes $F(n)$ with the selected engine.
    ///
    /// The 128-bit engines populate only the low limb of the result, the
    /// same widening the original per-engine proxies performed; the 256-bit
    /// engines fill the caller-visible buffer directly.
    #[must_use]
    pub fn compute(self, n: u32) -> U256 {
        let mut out = U256::ZERO;
        match self {
            Algorithm::Sequence => out.low = iterative::sequence(n),
            Algorithm::Doubling => out.low = doubling::doubling(n),
            Algorithm::DoublingClz => out.low = doubling::doubling_clz(n),
            Algorithm::Iterative256 => iterative::iterative_256(&mut out, n),
            Algorithm::DoublingClz256 => doubling::doubling_clz_256(&mut out, n),
        }
        out
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Sequence => write!(f, "Sequence (iterative, u128)"),
            Algorithm::Doubling => write!(f, "Fast Doubling (recursive, u128)"),
            Algorithm::DoublingClz => write!(f, "Fast Doubling (clz, u128)"),
            Algorithm::Iterative256 => write!(f, "Sequence (iterative, 256-bit)"),
            Algorithm::DoublingClz256 => write!(f, "Fast Doubling (clz, 256-bit)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_base_cases() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.compute(0), U256::ZERO, "{algo} at n=0");
            assert_eq!(algo.compute(1), U256::ONE, "{algo} at n=1");
            assert_eq!(algo.compute(2), U256::ONE, "{algo} at n=2");
        }
    }

    #[test]
    fn dispatch_engines_agree_on_shared_domain() {
        for n in 0..=186 {
            let reference = Algorithm::Sequence.compute(n);
            for algo in Algorithm::ALL {
                assert_eq!(algo.compute(n), reference, "{algo} differs at n={n}");
            }
        }
    }

    #[test]
    fn selection_codes_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_code(algo.code()), Some(algo));
        }
        assert_eq!(Algorithm::from_code(b'?'), None);
        assert_eq!(Algorithm::from_code(b't'), None);
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            for b in &Algorithm::ALL[i + 1..] {
                assert_ne!(a.slug(), b.slug());
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_selection_codes() {
        for algo in Algorithm::ALL {
            let json = serde_json::to_string(&algo).unwrap();
            assert_eq!(json, format!("\"{}\"", algo.code() as char));
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, algo);
        }
        // Long-form aliases parse too.
        let parsed: Algorithm = serde_json::from_str("\"doubling-clz-256\"").unwrap();
        assert_eq!(parsed, Algorithm::DoublingClz256);
    }

    #[test]
    fn dispatch_is_deterministic() {
        let first = Algorithm::DoublingClz256.compute(370);
        let _ = Algorithm::Sequence.compute(42);
        let _ = Algorithm::Iterative256.compute(371);
        assert_eq!(Algorithm::DoublingClz256.compute(370), first);
    }
}
