//! The X25519 Diffie-Hellman surface (spec §6): key generation and scalar
//! multiplication over the Montgomery form of Curve25519.

use crate::field::FieldElement;
use crate::montgomery;
use crate::rng::random_bytes_32;
use crate::scalar;

/// Selects which scalar-multiplication strategy `scalar_multiply_with_mode`
/// runs (spec §6 configuration, §4.4). Both are required to produce
/// byte-identical output on every input; only their timing behavior
/// differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScalarMultMode {
    /// The constant-shape Montgomery ladder. Default, and the only mode
    /// expected to be timing-safe.
    #[default]
    Ladder,
    /// The textbook double-and-add variant. Educational, NOT constant time.
    DoubleAndAdd,
}

/// Generates a fresh, unclamped 32-byte private key from the process CSPRNG.
#[must_use]
pub fn generate_private_key() -> [u8; 32] {
    random_bytes_32()
}

/// Derives the public key `scalar_multiply(private, 9 || 0^31)`.
#[must_use]
pub fn generate_public_key(private: &[u8; 32]) -> [u8; 32] {
    let mut base = [0u8; 32];
    base[0] = 9;
    scalar_multiply(private, &base)
}

/// `scalar_multiply(scalar, u)` using the default (ladder) mode.
#[must_use]
pub fn scalar_multiply(scalar_bytes: &[u8; 32], u_bytes: &[u8; 32]) -> [u8; 32] {
    scalar_multiply_with_mode(scalar_bytes, u_bytes, ScalarMultMode::default())
}

/// `scalar_multiply(scalar, u)` with an explicit mode selector (spec §4.4).
#[must_use]
pub fn scalar_multiply_with_mode(
    scalar_bytes: &[u8; 32],
    u_bytes: &[u8; 32],
    mode: ScalarMultMode,
) -> [u8; 32] {
    let u = FieldElement::from_bytes_masked(u_bytes);
    let clamped = scalar::clamp(*scalar_bytes);
    let result = match mode {
        ScalarMultMode::Ladder => montgomery::ladder(&u, &clamped),
        ScalarMultMode::DoubleAndAdd => montgomery::double_and_add(&u, &clamped),
    };
    result.to_bytes()
}
