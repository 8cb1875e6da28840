//! # fibwide-core
//!
//! Exact Fibonacci computation over fixed-width integers.
//!
//! This crate computes Fibonacci numbers exactly past the range of any
//! native machine integer by pairing a fixed-width 256-bit unsigned
//! arithmetic library ([`U256`], two `u128` limbs) with fast O(log n)
//! doubling engines, alongside O(n) iterative baselines for cross-checking
//! and benchmarking.
//!
//! ## Engines
//!
//! - **Sequence** ([`algo::sequence`]): O(n) accumulation, native `u128`.
//! - **Fast Doubling** ([`algo::doubling`]): O(log n) recursion on
//!   $F(2m) = F(m)(2F(m+1) - F(m))$ and $F(2m+1) = F(m)^2 + F(m+1)^2$.
//! - **Fast Doubling, clz** ([`algo::doubling_clz`]): the same identities
//!   driven iteratively by a most-significant-bit scan.
//! - **256-bit counterparts** ([`algo::iterative_256`],
//!   [`algo::doubling_clz_256`]): the same two shapes over [`U256`],
//!   exact up to index 370.
//!
//! ## Overflow contract
//!
//! The core never panics, never allocates, and never fails: every engine
//! always returns a value, correct within its declared domain
//! ([`config::limits`]) and silently reduced modulo the representation
//! width beyond it. Callers that probe the wrap boundary on purpose get
//! the wrapped value, exactly as fixed-width hardware arithmetic would
//! produce it.
//!
//! ## Usage
//!
//! ```rust
//! use fibwide_core::{Algorithm, U256};
//!
//! // Direct engine call
//! assert_eq!(fibwide_core::algo::doubling_clz(20), 6765);
//!
//! // Explicit variant dispatch
//! let f370 = Algorithm::DoublingClz256.compute(370);
//! assert_eq!(f370, Algorithm::Iterative256.compute(370));
//! assert!(f370 > U256::from(u128::MAX));
//! ```

pub mod algo;
pub mod config;
pub mod u256;

// Re-export the surface most callers need.
pub use algo::Algorithm;
pub use u256::U256;
