//! Twisted Edwards form of the same curve (`-x^2 + y^2 = 1 + d*x^2*y^2`),
//! used by Ed25519. Points are kept in extended projective coordinates
//! `(X, Y, Z, T)` with `Z != 0`, `x = X/Z`, `y = Y/Z`, and the extended
//! invariant `X*Y = Z*T` (spec §4.5).

use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;

use crate::field::FieldElement;
use crate::Error;

/// `d = -121665 * 121666^-1 mod p`.
static D: Lazy<FieldElement> = Lazy::new(|| {
    let a = FieldElement::from_u64(121665).neg();
    let b = FieldElement::from_u64(121666).invert();
    a.mul(&b)
});

/// The fixed Ed25519 base point `B`, from RFC 8032 §5.1.
static BASE_POINT: Lazy<EdwardsPoint> = Lazy::new(|| {
    let bx: BigUint = "15112221349535400772501151409588531511454012693041857206046113283949847762202"
        .parse()
        .expect("base point x is a fixed decimal literal");
    let by: BigUint = "46316835694926478169428394003475163141307993866256225615783033603165251855960"
        .parse()
        .expect("base point y is a fixed decimal literal");
    EdwardsPoint::from_affine(FieldElement::from_biguint(bx), FieldElement::from_biguint(by))
});

/// Returns the fixed Ed25519 base point.
#[must_use]
pub fn base_point() -> EdwardsPoint {
    BASE_POINT.clone()
}

/// A point on the twisted Edwards curve in extended projective coordinates.
#[derive(Clone, Debug)]
pub struct EdwardsPoint {
    /// Projective X, with affine `x = X/Z`.
    pub x: FieldElement,
    /// Projective Y, with affine `y = Y/Z`.
    pub y: FieldElement,
    /// The common projective denominator, always nonzero.
    pub z: FieldElement,
    /// The extended coordinate satisfying `X*Y = Z*T`.
    pub t: FieldElement,
}

impl EdwardsPoint {
    /// The identity element `(0 : 1 : 1 : 0)`.
    #[must_use]
    pub fn identity() -> Self {
        EdwardsPoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::one(),
            t: FieldElement::zero(),
        }
    }

    #[must_use]
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Self {
        let t = x.mul(&y);
        EdwardsPoint {
            x,
            y,
            z: FieldElement::one(),
            t,
        }
    }

    /// Unified addition (Hisil-Wong-Carter-Dawson 2008, "add-2008-hwcd-3")
    /// for twisted Edwards curves with `a = -1`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let two_d = D.add(&D);
        let a = self.y.sub(&self.x).mul(&other.y.sub(&other.x));
        let b = self.y.add(&self.x).mul(&other.y.add(&other.x));
        let c = self.t.mul(&two_d).mul(&other.t);
        let d = self.z.mul(&FieldElement::from_u64(2)).mul(&other.z);
        let e = b.sub(&a);
        let f = d.sub(&c);
        let g = d.add(&c);
        let h = b.add(&a);
        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&g),
            t: e.mul(&h),
        }
    }

    /// Specialized doubling formula ("dbl-2008-hwcd").
    #[must_use]
    pub fn double(&self) -> Self {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz2 = self.z.square().mul(&FieldElement::from_u64(2));
        let sum = self.x.add(&self.y);
        let ss = sum.square();
        let e = ss.sub(&yy).sub(&xx);
        let g = yy.add(&xx);
        let h = yy.sub(&xx);
        let f = zz2.sub(&h);
        EdwardsPoint {
            x: e.mul(&f),
            y: g.mul(&h),
            z: f.mul(&h),
            t: e.mul(&g),
        }
    }

    /// `(X, Y, Z, T) -> (-X, Y, Z, -T)`.
    #[must_use]
    pub fn negate(&self) -> Self {
        EdwardsPoint {
            x: self.x.neg(),
            y: self.y.clone(),
            z: self.z.clone(),
            t: self.t.neg(),
        }
    }

    /// Identity test without an inversion: `X == 0` and `Y == Z`.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// Normalizes to affine `(x, y)` via a single field inversion.
    #[must_use]
    pub fn to_affine(&self) -> (FieldElement, FieldElement) {
        let z_inv = self.z.invert();
        (self.x.mul(&z_inv), self.y.mul(&z_inv))
    }

    /// Canonical 32-byte little-endian encoding: `y` with the sign of `x`
    /// packed into the top bit.
    #[must_use]
    pub fn encode(&self) -> [u8; 32] {
        let (x, y) = self.to_affine();
        let mut bytes = y.to_bytes();
        if x.is_odd() {
            bytes[31] |= 0x80;
        }
        bytes
    }

    /// Decodes a 32-byte encoding back to an extended point (spec §4.5).
    pub fn decode(bytes: &[u8; 32]) -> Result<Self, Error> {
        let sign = bytes[31] >> 7;
        let mut y_bytes = *bytes;
        y_bytes[31] &= 0x7f;
        let y = FieldElement::from_canonical_bytes(&y_bytes).ok_or(Error::InvalidPoint)?;

        let y2 = y.square();
        let u = y2.sub(&FieldElement::one());
        let v = D.mul(&y2).add(&FieldElement::one());
        if v.is_zero() {
            return Err(Error::InvalidPoint);
        }
        let v_inv = v.invert();
        let x2 = u.mul(&v_inv);
        let mut x = x2.sqrt().ok_or(Error::InvalidPoint)?;

        if x.is_zero() {
            if sign != 0 {
                return Err(Error::InvalidPoint);
            }
        } else if x.is_odd() != (sign == 1) {
            x = x.neg();
        }

        Ok(EdwardsPoint::from_affine(x, y))
    }
}

impl PartialEq for EdwardsPoint {
    /// Cross-multiplied comparison, avoiding an inversion: `(x1, y1) ==
    /// (x2, y2)` iff `X1*Z2 == X2*Z1` and `Y1*Z2 == Y2*Z1`.
    fn eq(&self, other: &Self) -> bool {
        self.x.mul(&other.z) == other.x.mul(&self.z) && self.y.mul(&other.z) == other.y.mul(&self.z)
    }
}
impl Eq for EdwardsPoint {}

/// Double-and-add scalar multiplication from the most significant bit,
/// starting from the identity (spec §4.6). `scalar` is consumed as a plain
/// non-negative integer; no reduction modulo `L` is applied here.
#[must_use]
pub fn scalar_mul(point: &EdwardsPoint, scalar: &BigUint) -> EdwardsPoint {
    if scalar.is_zero() {
        return EdwardsPoint::identity();
    }
    let bits = scalar.bits();
    let mut acc = EdwardsPoint::identity();
    for i in (0..bits).rev() {
        acc = acc.double();
        if bit_is_set(scalar, i) {
            acc = acc.add(point);
        }
    }
    acc
}

fn bit_is_set(n: &BigUint, i: u64) -> bool {
    ((n >> i) & BigUint::from(1u32)) == BigUint::from(1u32)
}
