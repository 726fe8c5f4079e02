//! Scalar encoding, clamping, and arithmetic modulo the base-point order `L`.
//!
//! X25519 and Ed25519 share the same clamping recipe (spec §4.2) but apply it
//! to different inputs, and only Ed25519 needs a scalar genuinely reduced
//! modulo `L` — X25519's clamped exponent is consumed bit-by-bit by the
//! ladder and is never reduced.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// L = 2^252 + 27742317777372353535851937790883648493, the prime order of
/// the Ed25519 base-point subgroup.
pub(crate) static L: Lazy<BigUint> = Lazy::new(|| {
    let base: BigUint = BigUint::one() << 252;
    let tail: BigUint = "27742317777372353535851937790883648493"
        .parse()
        .expect("L's tail term is a fixed decimal literal");
    base + tail
});

/// An integer modulo `L`, always held canonically in `[0, L)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scalar(BigUint);

impl Scalar {
    #[must_use]
    pub fn zero() -> Self {
        Scalar(BigUint::zero())
    }

    #[must_use]
    pub fn one() -> Self {
        Scalar(BigUint::one())
    }

    /// Rejects any encoding whose integer value is `>= L` (non-canonical).
    #[must_use]
    pub fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let v = BigUint::from_bytes_le(bytes);
        if v >= *L {
            None
        } else {
            Some(Scalar(v))
        }
    }

    /// Reduces a 32-byte little-endian integer modulo `L`. Always succeeds.
    #[must_use]
    pub fn from_bytes_mod_l(bytes: &[u8; 32]) -> Self {
        Scalar(BigUint::from_bytes_le(bytes) % &*L)
    }

    /// Reduces a 64-byte (e.g. SHA-512 digest) little-endian integer modulo
    /// `L`. Used for the nonce `r` and the challenge `k` during signing and
    /// verification.
    #[must_use]
    pub fn reduce_wide(bytes: &[u8; 64]) -> Self {
        Scalar(BigUint::from_bytes_le(bytes) % &*L)
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let le = self.0.to_bytes_le();
        out[..le.len()].copy_from_slice(&le);
        out
    }

    #[must_use]
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `(self + other) mod L`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Scalar((&self.0 + &other.0) % &*L)
    }

    /// `(self * other) mod L`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Scalar((&self.0 * &other.0) % &*L)
    }

    /// `(r + k * a) mod L`, where `a` is an *unreduced* integer (the clamped
    /// Ed25519 exponent, which generally exceeds `L`). This is the S = (r +
    /// k·a) mod L step of signing (spec §4.7).
    #[must_use]
    pub fn muladd_unreduced(r: &Self, k: &Self, a: &BigUint) -> Self {
        Scalar((&r.0 + &k.0 * a) % &*L)
    }
}

/// Returns the group order `L` as a plain big integer, for callers (such as
/// the cofactor-clearing tests) that need it outside the `Scalar` newtype.
pub(crate) fn group_order() -> BigUint {
    L.clone()
}

/// Applies the RFC 7748 / RFC 8032 clamping mask shared by both protocols:
/// clear the bottom three bits, clear the top bit, set bit 254.
#[must_use]
pub fn clamp(mut bytes: [u8; 32]) -> [u8; 32] {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_sets_expected_bits() {
        let clamped = clamp([0xffu8; 32]);
        assert_eq!(clamped[0] & 0x07, 0);
        assert_eq!(clamped[31] & 0x80, 0);
        assert_eq!(clamped[31] & 0x40, 0x40);
    }

    #[test]
    fn reduce_wide_matches_mod_l() {
        let mut wide = [0u8; 64];
        wide[0] = 1;
        let s = Scalar::reduce_wide(&wide);
        assert_eq!(s.to_bytes()[0], 1);
    }

    #[test]
    fn from_canonical_bytes_rejects_l_itself() {
        let l_bytes_vec = (&*L).to_bytes_le();
        let mut bytes = [0u8; 32];
        bytes[..l_bytes_vec.len()].copy_from_slice(&l_bytes_vec);
        assert!(Scalar::from_canonical_bytes(&bytes).is_none());
    }

    #[test]
    fn from_canonical_bytes_accepts_l_minus_one() {
        let l_minus_one = &*L - BigUint::one();
        let bytes_vec = l_minus_one.to_bytes_le();
        let mut bytes = [0u8; 32];
        bytes[..bytes_vec.len()].copy_from_slice(&bytes_vec);
        assert!(Scalar::from_canonical_bytes(&bytes).is_some());
    }

    #[test]
    fn add_wraps_modulo_l() {
        let l_minus_one = Scalar(&*L - BigUint::one());
        let one = Scalar(BigUint::one());
        assert_eq!(l_minus_one.add(&one), Scalar::zero());
    }
}
