//! Pure Rust, from-scratch X25519 and Ed25519 over Curve25519.
//!
//! This crate provides an educational, RFC-faithful implementation of two
//! related primitives over GF(2^255 - 19):
//!
//! - **X25519** — Diffie-Hellman key agreement over the Montgomery form
//!   (RFC 7748), via [`x25519`].
//! - **Ed25519** — EdDSA signatures over the twisted Edwards form
//!   (RFC 8032 §5.1, cofactored verification), via [`ed25519`].
//!
//! The field, scalar, and curve-arithmetic layers ([`field`], [`scalar`],
//! [`montgomery`], [`edwards`]) are public so callers can build other
//! protocols on the same substrate, but [`x25519`] and [`ed25519`] are the
//! intended entry points.
//!
//! # Examples
//!
//! ## X25519 key agreement
//!
//! ```rust
//! use curve25519_core::x25519;
//!
//! let alice_private = x25519::generate_private_key();
//! let alice_public = x25519::generate_public_key(&alice_private);
//!
//! let bob_private = x25519::generate_private_key();
//! let bob_public = x25519::generate_public_key(&bob_private);
//!
//! let alice_shared = x25519::scalar_multiply(&alice_private, &bob_public);
//! let bob_shared = x25519::scalar_multiply(&bob_private, &alice_public);
//! assert_eq!(alice_shared, bob_shared);
//! ```
//!
//! ## Ed25519 sign / verify
//!
//! ```rust
//! use curve25519_core::ed25519;
//!
//! let seed = ed25519::generate_private_key();
//! let public = ed25519::generate_public_key(&seed);
//!
//! let message = b"idiomatic rust curves";
//! let signature = ed25519::sign(&seed, message);
//! assert!(ed25519::verify(&public, message, &signature));
//! ```
//!
//! ## Debug logging
//!
//! This crate ships silent by default. Enable feature `crypto-debug` to
//! surface operation-level diagnostics (kind, success, duration — never key
//! or scalar material) from the [`logging`] module at `Info` level and
//! above.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod ed25519;
pub mod edwards;
pub mod field;
pub mod hash;
pub mod logging;
pub mod metrics;
pub mod montgomery;
pub mod rng;
pub mod scalar;
pub mod x25519;

/// Errors returned by the lower-level decode/encode operations (point and
/// scalar decoding). Per spec §7, `verify` and `verify_batch` never
/// propagate this type — every rejection reason collapses to `false` at
/// the protocol layer.
///
/// # Security considerations
///
/// Variants are deliberately coarse: they distinguish *what kind* of input
/// was malformed, never *why* the underlying arithmetic rejected it, so
/// that no timing or content side channel about secret material leaks
/// through error handling.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An encoded Edwards point failed to decode: its y-coordinate was not
    /// canonical, or `x^2` had no square root in the field.
    #[error("invalid point encoding")]
    InvalidPoint,

    /// A public key failed to decode as an Edwards point.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// An encoded scalar was not canonical (its integer value was `>= L`).
    #[error("invalid scalar encoding")]
    InvalidScalar,

    /// A signature byte slice was not exactly 64 bytes.
    #[error("invalid signature length")]
    InvalidSignatureLength,
}

/// Result type alias used by the lower-level decode/encode operations.
pub type Result<T> = core::result::Result<T, Error>;
