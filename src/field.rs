//! Prime-field arithmetic over GF(2^255 - 19), the field Curve25519 and its
//! twisted-Edwards companion are both defined over.
//!
//! Every operation returns a canonical representative in `[0, p)`. Field
//! elements are backed by [`num_bigint::BigUint`] rather than a hand-rolled
//! fixed-width limb representation: §9 of the design notes allows either, and
//! a vetted bignum keeps the arithmetic itself obviously correct. The one
//! place timing actually matters for this crate — the Montgomery ladder's
//! conditional swap — is implemented byte-wise below so its control flow
//! stays data-independent regardless of how the underlying multiply is
//! implemented.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use subtle::{Choice, ConditionallySelectable};

// `subtle::ConditionallySelectable` requires `Self: Copy`, which a
// `BigUint`-backed type can never be. `FieldElement` instead gets its own
// inherent `conditional_select` below, built from `u8`'s (genuinely `Copy`)
// implementation of the trait byte-wise.

/// p = 2^255 - 19.
pub(crate) static P: Lazy<BigUint> = Lazy::new(|| (BigUint::one() << 255) - BigUint::from(19u32));

static P_MINUS_2: Lazy<BigUint> = Lazy::new(|| &*P - BigUint::from(2u32));

/// (p + 3) / 8, the exponent used for the Tonelli-Shanks-style square root
/// candidate described in spec §4.1.
static SQRT_CANDIDATE_EXP: Lazy<BigUint> = Lazy::new(|| (&*P + BigUint::from(3u32)) >> 3);

/// 2^((p-1)/4) mod p, the fixed square root of -1 in this field.
static SQRT_M1: Lazy<FieldElement> = Lazy::new(|| {
    let exp = (&*P - BigUint::one()) >> 2;
    FieldElement(BigUint::from(2u32).modpow(&exp, &P))
});

/// An element of GF(2^255 - 19), always held in canonical form.
///
/// Two `FieldElement`s compare equal iff they represent the same residue
/// class, since the inner `BigUint` is kept reduced by every constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// The additive identity.
    #[must_use]
    pub fn zero() -> Self {
        FieldElement(BigUint::zero())
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one() -> Self {
        FieldElement(BigUint::one())
    }

    #[must_use]
    pub fn from_u64(v: u64) -> Self {
        FieldElement(BigUint::from(v) % &*P)
    }

    pub(crate) fn from_biguint(v: BigUint) -> Self {
        FieldElement(v % &*P)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The low bit of the canonical representative — the "sign" bit packed
    /// into Edwards point encodings.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.0.to_bytes_le().first().is_some_and(|b| b & 1 == 1)
    }

    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_biguint(&self.0 + &other.0)
    }

    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        if self.0 >= other.0 {
            Self::from_biguint(&self.0 - &other.0)
        } else {
            Self::from_biguint(&*P - &other.0 + &self.0)
        }
    }

    #[must_use]
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            Self::from_biguint(&*P - &self.0)
        }
    }

    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self::from_biguint(&self.0 * &other.0)
    }

    #[must_use]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse by Fermat's little theorem: `a^(p-2) mod p`.
    ///
    /// Returns zero when `self` is zero (there is no inverse; callers that
    /// must reject a zero divisor check that before calling this).
    #[must_use]
    pub fn invert(&self) -> Self {
        FieldElement(self.0.modpow(&P_MINUS_2, &P))
    }

    /// Square root per spec §4.1: try the `(p+3)/8` candidate, correct it
    /// with the fixed root of -1 if needed, or report that none exists.
    #[must_use]
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }
        let candidate = FieldElement(self.0.modpow(&SQRT_CANDIDATE_EXP, &P));
        let squared = candidate.square();
        if &squared == self {
            Some(candidate)
        } else if squared == self.neg() {
            Some(candidate.mul(&SQRT_M1))
        } else {
            None
        }
    }

    /// Canonical 32-byte little-endian encoding.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let le = self.0.to_bytes_le();
        out[..le.len()].copy_from_slice(&le);
        out
    }

    /// Strict decode: rejects any byte string whose integer value is `>= p`.
    #[must_use]
    pub fn from_canonical_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let v = BigUint::from_bytes_le(bytes);
        if v >= *P {
            None
        } else {
            Some(FieldElement(v))
        }
    }

    /// RFC 7748 §5 u-coordinate decode: mask the top bit of the last byte,
    /// then reduce mod p implicitly. Always succeeds.
    #[must_use]
    pub fn from_bytes_masked(bytes: &[u8; 32]) -> Self {
        let mut masked = *bytes;
        masked[31] &= 0x7f;
        Self::from_biguint(BigUint::from_bytes_le(&masked))
    }
}

impl FieldElement {
    /// Byte-wise masked select, per the Design Notes' `cswap` recipe: the
    /// choice never causes a branch, only a mask-and-XOR over each byte of
    /// the canonical encoding. Not `subtle::ConditionallySelectable` itself
    /// because that trait requires `Self: Copy`, which a `BigUint`-backed
    /// value can never be; `u8` (genuinely `Copy`) does the masking.
    #[must_use]
    pub fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let a_bytes = a.to_bytes();
        let b_bytes = b.to_bytes();
        let mut out = [0u8; 32];
        for i in 0..32 {
            out[i] = u8::conditional_select(&a_bytes[i], &b_bytes[i], choice);
        }
        FieldElement::from_biguint(BigUint::from_bytes_le(&out))
    }
}
