//! Cryptographic randomness for key generation and batch-verification
//! coefficients (spec §5). Every call draws a fresh sample; nothing here is
//! ever cached or reused across calls.

use rand::rngs::OsRng;
use rand::RngCore;

/// Draws 32 fresh bytes from the OS CSPRNG.
#[must_use]
pub fn random_bytes_32() -> [u8; 32] {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    bytes
}
