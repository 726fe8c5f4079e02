//! Montgomery-form Curve25519: XZ-only point representation, doubling,
//! differential addition, and the two X25519 scalar-multiplication
//! strategies built from them (spec §4.3, §4.4).

use subtle::Choice;

use crate::field::FieldElement;

/// `A24 = (A + 2) / 4` for Curve25519's Montgomery coefficient `A = 486662`.
fn a24() -> FieldElement {
    FieldElement::from_u64(121665)
}

/// A point on the Montgomery curve, represented only by `u = X/Z`. The point
/// at infinity is `(1 : 0)` by convention; `Z` is otherwise always nonzero
/// for points produced by this module.
#[derive(Clone, Debug)]
pub struct MontgomeryPoint {
    /// Projective X, with affine `u = X/Z`.
    pub x: FieldElement,
    /// The projective denominator; zero only for the point at infinity.
    pub z: FieldElement,
}

impl MontgomeryPoint {
    /// The point at infinity, `(1 : 0)`.
    #[must_use]
    pub fn identity() -> Self {
        MontgomeryPoint {
            x: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// The base point `(u : 1)` for a given affine u-coordinate.
    #[must_use]
    pub fn from_u(u: FieldElement) -> Self {
        MontgomeryPoint {
            x: u,
            z: FieldElement::one(),
        }
    }

    /// `xDBL`: doubles this point using only its X and Z coordinates.
    #[must_use]
    pub fn double(&self) -> Self {
        let a24 = a24();
        let a = self.x.add(&self.z);
        let aa = a.square();
        let b = self.x.sub(&self.z);
        let bb = b.square();
        let e = aa.sub(&bb);
        let x2 = aa.mul(&bb);
        let z2 = e.mul(&bb.add(&a24.mul(&e)));
        MontgomeryPoint { x: x2, z: z2 }
    }

    /// `xADD(P, Q, P-Q) -> P+Q`: differential addition consuming the known
    /// difference `diff = P - Q`. `self` is `P`, `other` is `Q`.
    #[must_use]
    pub fn diff_add(&self, other: &Self, diff: &Self) -> Self {
        let da = self.x.sub(&self.z).mul(&other.x.add(&other.z));
        let cb = self.x.add(&self.z).mul(&other.x.sub(&other.z));
        let x5 = diff.z.mul(&da.add(&cb).square());
        let z5 = diff.x.mul(&da.sub(&cb).square());
        MontgomeryPoint { x: x5, z: z5 }
    }

    /// Normalizes to the affine u-coordinate via a single field inversion.
    #[must_use]
    pub fn to_affine_u(&self) -> FieldElement {
        self.x.mul(&self.z.invert())
    }
}

impl MontgomeryPoint {
    /// Constant-shape select between `a` and `b`. Not `subtle`'s
    /// `ConditionallySelectable` trait, since that requires `Self: Copy` and
    /// `FieldElement` is `BigUint`-backed; see [`FieldElement::conditional_select`].
    #[must_use]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        MontgomeryPoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }

    /// Swaps `a` and `b` in place when `choice` is true, with a shape
    /// independent of `choice`'s value.
    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        let new_a = Self::conditional_select(a, b, choice);
        let new_b = Self::conditional_select(b, a, choice);
        *a = new_a;
        *b = new_b;
    }
}

fn bit_at(clamped: &[u8; 32], i: usize) -> u8 {
    (clamped[i / 8] >> (i % 8)) & 1
}

/// The constant-shape Montgomery ladder (spec §4.4, the default and only
/// mode expected to be timing-safe). `clamped` must already be clamped.
#[must_use]
pub fn ladder(u: &FieldElement, clamped: &[u8; 32]) -> FieldElement {
    let base = MontgomeryPoint::from_u(u.clone());
    let mut r0 = MontgomeryPoint::identity();
    let mut r1 = base.clone();
    let mut swap = Choice::from(0u8);

    for i in (0..255).rev() {
        let bit = Choice::from(bit_at(clamped, i));
        swap = xor_choice(swap, bit);
        MontgomeryPoint::conditional_swap(&mut r0, &mut r1, swap);
        swap = bit;

        let r0_next = r0.double();
        let r1_next = r0.diff_add(&r1, &base);
        r0 = r0_next;
        r1 = r1_next;
    }
    MontgomeryPoint::conditional_swap(&mut r0, &mut r1, swap);
    r0.to_affine_u()
}

/// The textbook double-and-add variant (spec §4.4, educational, NOT constant
/// time). It runs the identical ladder recursion as [`ladder`] but decides
/// the swap with a data-dependent branch instead of a constant-time select,
/// so it is guaranteed to be byte-identical to the ladder on every input —
/// unlike the commented-out `double_and_add` in the Python source this crate
/// was modeled on, which used a genuinely different and broken algorithm.
#[must_use]
pub fn double_and_add(u: &FieldElement, clamped: &[u8; 32]) -> FieldElement {
    let base = MontgomeryPoint::from_u(u.clone());
    let mut r0 = MontgomeryPoint::identity();
    let mut r1 = base.clone();
    let mut swap = 0u8;

    for i in (0..255).rev() {
        let bit = bit_at(clamped, i);
        swap ^= bit;
        if swap == 1 {
            core::mem::swap(&mut r0, &mut r1);
        }
        swap = bit;

        let r0_next = r0.double();
        let r1_next = r0.diff_add(&r1, &base);
        r0 = r0_next;
        r1 = r1_next;
    }
    if swap == 1 {
        core::mem::swap(&mut r0, &mut r1);
    }
    r0.to_affine_u()
}

fn xor_choice(a: Choice, b: Choice) -> Choice {
    Choice::from(a.unwrap_u8() ^ b.unwrap_u8())
}
