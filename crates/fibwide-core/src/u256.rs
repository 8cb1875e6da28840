//! Fixed-width 256-bit unsigned arithmetic.
//!
//! [`U256`] is a pure value type built from two `u128` limbs. Every operation
//! wraps modulo $2^{256}$, matching native fixed-width integer semantics:
//! nothing here panics, allocates, or signals overflow.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// 256-bit unsigned integer as an ordered pair of 128-bit limbs.
///
/// The represented value is $\text{high} \cdot 2^{128} + \text{low}$.
///
/// # Example
/// ```
/// use fibwide_core::U256;
///
/// let x = U256::from(3u32) * U256::from(2u32);
/// assert_eq!(x, U256::from(6u32));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U256 {
    /// Least significant 128 bits.
    pub low: u128,
    /// Most significant 128 bits.
    pub high: u128,
}

impl U256 {
    /// The value 0.
    pub const ZERO: Self = Self { low: 0, high: 0 };
    /// The value 1.
    pub const ONE: Self = Self { low: 1, high: 0 };
    /// The largest representable value, $2^{256} - 1$.
    pub const MAX: Self = Self {
        low: u128::MAX,
        high: u128::MAX,
    };

    /// Creates a value from its two limbs.
    #[inline]
    #[must_use]
    pub const fn new(low: u128, high: u128) -> Self {
        Self { low, high }
    }

    /// Stores a signed value, sign-extending into the upper limb.
    ///
    /// `v` lands in `low`; `high` becomes all-ones when `v < 0` (two's
    /// complement) and all-zeros otherwise.
    #[inline]
    pub fn set_signed(&mut self, v: i128) {
        self.low = v as u128;
        self.high = if v < 0 { u128::MAX } else { 0 };
    }

    /// Builds a value from a signed integer via [`set_signed`](Self::set_signed).
    #[inline]
    #[must_use]
    pub fn from_signed(v: i128) -> Self {
        let mut out = Self::ZERO;
        out.set_signed(v);
        out
    }

    /// Returns true if both limbs are zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.low == 0 && self.high == 0
    }

    /// Number of bits required to represent the value (0 for zero).
    #[inline]
    #[must_use]
    pub const fn bit_len(self) -> u32 {
        if self.high != 0 {
            256 - self.high.leading_zeros()
        } else {
            128 - self.low.leading_zeros()
        }
    }

    /// Wrapping addition modulo $2^{256}$.
    ///
    /// Ripple-carry across the two limbs: the carry into `high` is 1 exactly
    /// when the low-limb addition wrapped (`low < rhs.low` unsigned).
    #[inline]
    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let low = self.low.wrapping_add(rhs.low);
        let carry = (low < rhs.low) as u128;
        let high = self.high.wrapping_add(rhs.high).wrapping_add(carry);
        Self { low, high }
    }

    /// In-place wrapping addition of a single 128-bit limb.
    #[inline]
    pub fn wrapping_add_limb(&mut self, y: u128) {
        self.low = self.low.wrapping_add(y);
        self.high = self.high.wrapping_add((self.low < y) as u128);
    }

    /// Wrapping subtraction modulo $2^{256}$.
    ///
    /// Computed as `self + (!rhs + 1)` so the two's-complement negation
    /// reuses the addition carry logic.
    #[inline]
    #[must_use]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        let mut neg = Self {
            low: !rhs.low,
            high: !rhs.high,
        };
        neg.wrapping_add_limb(1);
        self.wrapping_add(neg)
    }

    /// Exact 128x128 -> 256-bit unsigned multiplication.
    ///
    /// Splits each operand into 64-bit halves, forms the four 64x64 -> 128
    /// partial products and folds every carry out of the low-limb
    /// accumulation into `high`. Never loses precision.
    #[must_use]
    pub const fn mul_wide(x: u128, y: u128) -> Self {
        let a = x as u64;
        let c = (x >> 64) as u64;
        let b = y as u64;
        let d = (y >> 64) as u64;

        let ab = (a as u128) * (b as u128);
        let bc = (b as u128) * (c as u128);
        let ad = (a as u128) * (d as u128);
        let cd = (c as u128) * (d as u128);

        let mut low = ab.wrapping_add(bc << 64);
        // The high-limb sum cannot exceed 128 bits: cd <= (2^64-1)^2 and the
        // two shifted-down partials are each < 2^64.
        let mut high = cd + (bc >> 64) + (ad >> 64) + (low < ab) as u128;

        let ad_low = ad << 64;
        low = low.wrapping_add(ad_low);
        high = high.wrapping_add((low < ad_low) as u128);

        Self { low, high }
    }

    /// Full-width wrapping multiplication modulo $2^{256}$.
    ///
    /// The low-limb product is exact via [`mul_wide`](Self::mul_wide); the
    /// two cross products land in the high limb, where bits above $2^{256}$
    /// drop off.
    #[inline]
    #[must_use]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        let mut out = Self::mul_wide(self.low, rhs.low);
        let cross = self
            .low
            .wrapping_mul(rhs.high)
            .wrapping_add(self.high.wrapping_mul(rhs.low));
        out.high = out.high.wrapping_add(cross);
        out
    }

    /// Little-endian byte representation (32 bytes, `low` limb first).
    #[must_use]
    pub fn to_le_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[..16].copy_from_slice(&self.low.to_le_bytes());
        out[16..].copy_from_slice(&self.high.to_le_bytes());
        out
    }

    /// Reconstructs a value from its little-endian byte representation.
    #[must_use]
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut low = [0u8; 16];
        let mut high = [0u8; 16];
        low.copy_from_slice(&bytes[..16]);
        high.copy_from_slice(&bytes[16..]);
        Self {
            low: u128::from_le_bytes(low),
            high: u128::from_le_bytes(high),
        }
    }
}

impl From<u32> for U256 {
    #[inline]
    fn from(v: u32) -> Self {
        Self::new(u128::from(v), 0)
    }
}

impl From<u64> for U256 {
    #[inline]
    fn from(v: u64) -> Self {
        Self::new(u128::from(v), 0)
    }
}

impl From<u128> for U256 {
    #[inline]
    fn from(v: u128) -> Self {
        Self::new(v, 0)
    }
}

impl PartialOrd for U256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.high.cmp(&other.high).then(self.low.cmp(&other.low))
    }
}

// Operator sugar over the wrapping primitives. All arithmetic on U256 is
// modular; there is no checked variant.

impl Add for U256 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U256 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(rhs);
    }
}

impl Sub for U256 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U256 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl Mul for U256 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl MulAssign for U256 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.wrapping_mul(rhs);
    }
}

/// Divides the 256-bit value in `limbs` (little-endian u64 limbs) by 10^19
/// in place, returning the remainder.
fn divrem_chunk(limbs: &mut [u64; 4]) -> u64 {
    const CHUNK: u128 = 10_000_000_000_000_000_000;
    let mut rem: u128 = 0;
    for limb in limbs.iter_mut().rev() {
        let cur = (rem << 64) | u128::from(*limb);
        *limb = (cur / CHUNK) as u64;
        rem = cur % CHUNK;
    }
    rem as u64
}

impl fmt::Display for U256 {
    /// Decimal rendering via repeated division by 10^19 over 64-bit limbs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut limbs = [
            self.low as u64,
            (self.low >> 64) as u64,
            self.high as u64,
            (self.high >> 64) as u64,
        ];

        let mut chunks = [0u64; 5]; // ceil(78 decimal digits / 19)
        let mut len = 0;
        while limbs != [0u64; 4] {
            chunks[len] = divrem_chunk(&mut limbs);
            len += 1;
        }

        write!(f, "{}", chunks[len - 1])?;
        for chunk in chunks[..len - 1].iter().rev() {
            write!(f, "{chunk:019}")?;
        }
        Ok(())
    }
}
