//! The Ed25519 protocol surface (spec §4.7, §6): key derivation, signing,
//! single-signature verification, and batch verification.

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::edwards::{self, base_point, EdwardsPoint};
use crate::hash::sha512_concat;
use crate::logging::{Logger, Operation};
use crate::metrics::Metrics;
use crate::rng::random_bytes_32;
use crate::scalar::{self, Scalar};
use crate::Error;

/// Generates a fresh 32-byte seed from the process CSPRNG.
#[must_use]
pub fn generate_private_key() -> [u8; 32] {
    random_bytes_32()
}

/// Derives the public key for a seed: `encode(a * B)` where `a` is the
/// clamped lower half of `SHA-512(seed)`.
#[must_use]
pub fn generate_public_key(seed: &[u8; 32]) -> [u8; 32] {
    derive_scalar_and_public(seed).1
}

/// Returns `(a, A_enc)`: the clamped exponent as an unreduced big integer,
/// and its encoded public point. Shared by `generate_public_key` and `sign`
/// so the two never disagree about what a seed derives to.
fn derive_scalar_and_public(seed: &[u8; 32]) -> (BigUint, [u8; 32]) {
    let h = crate::hash::sha512(seed);
    let mut lower = Zeroizing::new([0u8; 32]);
    lower.copy_from_slice(&h[0..32]);
    let clamped = Zeroizing::new(scalar::clamp(*lower));
    let a = BigUint::from_bytes_le(&*clamped);
    let public_point = edwards::scalar_mul(&base_point(), &a);
    (a, public_point.encode())
}

/// Signs `message` under `seed` (spec §4.7).
#[must_use]
pub fn sign(seed: &[u8; 32], message: &[u8]) -> [u8; 64] {
    let logger = Logger::default();
    let metrics = Metrics::global();
    let start = std::time::Instant::now();

    let h = crate::hash::sha512(seed);
    let prefix = &h[32..64];
    let (a, a_enc) = derive_scalar_and_public(seed);

    let r = Scalar::reduce_wide(&sha512_concat(&[prefix, message]));
    let r_point = edwards::scalar_mul(&base_point(), r.as_biguint());
    let r_enc = r_point.encode();

    let k = Scalar::reduce_wide(&sha512_concat(&[&r_enc, &a_enc, message]));
    let s = Scalar::muladd_unreduced(&r, &k, &a);

    let mut signature = [0u8; 64];
    signature[0..32].copy_from_slice(&r_enc);
    signature[32..64].copy_from_slice(&s.to_bytes());

    metrics.record_sign(start.elapsed(), true);
    logger.info(Operation::Sign, "signature produced".to_string());
    signature
}

/// Verifies a single signature using the cofactored equation `8*S*B ==
/// 8*(R + k*A)` (spec §4.7, a documented compatibility choice rather than
/// the strict RFC 8032 §5.1.7 equation — see DESIGN.md).
#[must_use]
pub fn verify(public: &[u8; 32], message: &[u8], signature: &[u8]) -> bool {
    let logger = Logger::default();
    let metrics = Metrics::global();
    let start = std::time::Instant::now();

    let ok = verify_inner(public, message, signature).unwrap_or(false);

    metrics.record_verify(start.elapsed(), ok);
    if ok {
        logger.info(Operation::Verify, "signature accepted".to_string());
    } else {
        logger.warning(Operation::Verify, "signature rejected".to_string());
    }
    ok
}

fn verify_inner(public: &[u8; 32], message: &[u8], signature: &[u8]) -> Result<bool, Error> {
    if signature.len() != 64 {
        return Err(Error::InvalidSignatureLength);
    }
    let r_enc: [u8; 32] = signature[0..32].try_into().expect("checked length above");
    let s_enc: [u8; 32] = signature[32..64].try_into().expect("checked length above");

    let s = Scalar::from_canonical_bytes(&s_enc).ok_or(Error::InvalidScalar)?;
    let r = EdwardsPoint::decode(&r_enc)?;
    let a = EdwardsPoint::decode(public).map_err(|_| Error::InvalidPublicKey)?;

    let k = Scalar::reduce_wide(&sha512_concat(&[&r_enc, public, message]));

    let s_b = edwards::scalar_mul(&base_point(), s.as_biguint());
    let k_a = edwards::scalar_mul(&a, k.as_biguint());
    let p = s_b.add(&k_a.negate());

    let eight = BigUint::from(8u32);
    let eight_p = edwards::scalar_mul(&p, &eight);
    let eight_r = edwards::scalar_mul(&r, &eight);
    Ok(eight_p == eight_r)
}

/// Batch verification (spec §4.7): accumulates `z_i * U_i` for a uniformly
/// random, per-signature `z_i`, and accepts iff the sum is the identity. An
/// empty batch accepts.
#[must_use]
pub fn verify_batch(batch: &[(&[u8; 32], &[u8], &[u8])]) -> bool {
    let logger = Logger::default();
    let metrics = Metrics::global();
    let start = std::time::Instant::now();

    let ok = verify_batch_inner(batch).unwrap_or(false);

    metrics.record_verify_batch(start.elapsed(), ok, batch.len());
    if ok {
        logger.info(Operation::VerifyBatch, format!("batch of {} accepted", batch.len()));
    } else {
        logger.warning(Operation::VerifyBatch, format!("batch of {} rejected", batch.len()));
    }
    ok
}

fn verify_batch_inner(batch: &[(&[u8; 32], &[u8], &[u8])]) -> Result<bool, Error> {
    let eight = BigUint::from(8u32);
    let mut accumulator: Option<EdwardsPoint> = None;

    for (public, message, signature) in batch {
        if signature.len() != 64 {
            return Err(Error::InvalidSignatureLength);
        }
        let r_enc: [u8; 32] = signature[0..32].try_into().expect("checked length above");
        let s_enc: [u8; 32] = signature[32..64].try_into().expect("checked length above");

        let s = Scalar::from_canonical_bytes(&s_enc).ok_or(Error::InvalidScalar)?;
        let r = EdwardsPoint::decode(&r_enc)?;
        let a = EdwardsPoint::decode(*public).map_err(|_| Error::InvalidPublicKey)?;

        let k = Scalar::reduce_wide(&sha512_concat(&[&r_enc, *public, message]));

        let s_b = edwards::scalar_mul(&base_point(), s.as_biguint());
        let k_a = edwards::scalar_mul(&a, k.as_biguint());
        let t = s_b.add(&k_a.negate());

        let eight_t = edwards::scalar_mul(&t, &eight);
        let eight_r = edwards::scalar_mul(&r, &eight);
        let u = eight_t.add(&eight_r.negate());

        let z_bytes = random_bytes_32();
        let mut z = Scalar::from_bytes_mod_l(&z_bytes);
        if z.is_zero() {
            z = Scalar::one();
        }

        let weighted = edwards::scalar_mul(&u, z.as_biguint());
        accumulator = Some(match accumulator {
            Some(acc) => acc.add(&weighted),
            None => weighted,
        });
    }

    Ok(match accumulator {
        Some(acc) => acc.is_identity(),
        None => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_roundtrip() {
        let seed = [3u8; 32];
        let public = generate_public_key(&seed);
        let message = b"idiomatic rust curves";
        let signature = sign(&seed, message);
        assert!(verify(&public, message, &signature));
    }

    #[test]
    fn tampered_message_is_rejected() {
        let seed = [9u8; 32];
        let public = generate_public_key(&seed);
        let signature = sign(&seed, b"original message");
        assert!(!verify(&public, b"tampered message", &signature));
    }

    #[test]
    fn tampered_signature_byte_is_rejected() {
        let seed = [11u8; 32];
        let public = generate_public_key(&seed);
        let message = b"message";
        let mut signature = sign(&seed, message);
        signature[0] ^= 0x01;
        assert!(!verify(&public, message, &signature));
    }

    #[test]
    fn wrong_length_signature_is_rejected() {
        let seed = [1u8; 32];
        let public = generate_public_key(&seed);
        assert!(!verify(&public, b"msg", &[0u8; 63]));
        assert!(!verify(&public, b"msg", &[0u8; 65]));
    }

    #[test]
    fn non_canonical_s_is_rejected() {
        let seed = [4u8; 32];
        let public = generate_public_key(&seed);
        let message = b"msg";
        let mut signature = sign(&seed, message);
        // L-1 is the largest canonical S; anything at or above L must fail.
        // Setting every byte of S to 0xff is comfortably >= L.
        signature[32..64].copy_from_slice(&[0xffu8; 32]);
        assert!(!verify(&public, message, &signature));
    }

    #[test]
    fn public_key_that_fails_to_decode_is_rejected() {
        // y = p itself is not a canonical field element, so decode fails.
        let bad_public = [0xffu8; 32];
        let message = b"msg";
        let signature = [0u8; 64];
        assert!(!verify(&bad_public, message, &signature));
    }

    #[test]
    fn batch_of_valid_signatures_is_accepted() {
        let mut seeds = Vec::new();
        let mut publics = Vec::new();
        let mut sigs = Vec::new();
        let messages: Vec<&[u8]> = vec![b"one", b"two", b"three"];
        for (i, message) in messages.iter().enumerate() {
            let seed = [i as u8 + 1; 32];
            seeds.push(seed);
            publics.push(generate_public_key(&seed));
            sigs.push(sign(&seed, message));
        }
        let batch: Vec<(&[u8; 32], &[u8], &[u8])> = (0..messages.len())
            .map(|i| (&publics[i], messages[i], sigs[i].as_slice()))
            .collect();
        assert!(verify_batch(&batch));
    }

    #[test]
    fn batch_rejects_a_single_tampered_signature() {
        let messages: Vec<&[u8]> = vec![b"one", b"two", b"three"];
        let seeds: Vec<[u8; 32]> = (0..messages.len()).map(|i| [i as u8 + 1; 32]).collect();
        let publics: Vec<[u8; 32]> = seeds.iter().map(generate_public_key).collect();
        let mut sigs: Vec<[u8; 64]> = seeds
            .iter()
            .zip(messages.iter())
            .map(|(seed, message)| sign(seed, message))
            .collect();
        sigs[1][40] ^= 0xff;

        let batch: Vec<(&[u8; 32], &[u8], &[u8])> = (0..messages.len())
            .map(|i| (&publics[i], messages[i], sigs[i].as_slice()))
            .collect();
        assert!(!verify_batch(&batch));
    }

    #[test]
    fn empty_batch_is_accepted() {
        let batch: Vec<(&[u8; 32], &[u8], &[u8])> = Vec::new();
        assert!(verify_batch(&batch));
    }
}
