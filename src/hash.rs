//! SHA-512 adapter (spec §4.8). The hash function itself is out of scope;
//! this module is a thin, byte-in/byte-out wrapper around [`sha2::Sha512`].

use sha2::{Digest, Sha512};

/// Computes the 64-byte SHA-512 digest of `data`.
#[must_use]
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}

/// Computes SHA-512 over the concatenation of several byte slices, without
/// allocating an intermediate buffer.
#[must_use]
pub fn sha512_concat(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}
