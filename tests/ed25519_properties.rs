//! Property-style coverage for the Ed25519 surface (spec §8). RFC 8032's
//! exact test-vector bytes are intentionally not transcribed here — see
//! DESIGN.md for why — in favor of properties that hold for every seed and
//! message, which is what spec §8 actually requires.

use curve25519_core::ed25519;

fn seeds() -> Vec<[u8; 32]> {
    (0u8..8).map(|i| {
        let mut seed = [0u8; 32];
        for (j, b) in seed.iter_mut().enumerate() {
            *b = i.wrapping_mul(31).wrapping_add(j as u8);
        }
        seed
    }).collect()
}

#[test]
fn sign_then_verify_holds_for_every_seed_and_several_messages() {
    let messages: [&[u8]; 4] = [b"", b"a", b"the quick brown fox", &[0xabu8; 300]];
    for seed in seeds() {
        let public = ed25519::generate_public_key(&seed);
        for message in messages {
            let signature = ed25519::sign(&seed, message);
            assert!(ed25519::verify(&public, message, &signature));
        }
    }
}

#[test]
fn flipping_any_message_bit_breaks_verification() {
    let seed = [0x42u8; 32];
    let public = ed25519::generate_public_key(&seed);
    let message = b"flip a single bit of this".to_vec();
    let signature = ed25519::sign(&seed, &message);

    for i in 0..message.len() {
        let mut tampered = message.clone();
        tampered[i] ^= 0x01;
        assert!(!ed25519::verify(&public, &tampered, &signature));
    }
}

#[test]
fn flipping_any_signature_byte_breaks_verification() {
    let seed = [0x7eu8; 32];
    let public = ed25519::generate_public_key(&seed);
    let message = b"a fixed message";
    let signature = ed25519::sign(&seed, message);

    for i in 0..signature.len() {
        let mut tampered = signature;
        tampered[i] ^= 0x80;
        assert!(!ed25519::verify(&public, message, &tampered));
    }
}

#[test]
fn public_key_derivation_is_deterministic() {
    let seed = [0x11u8; 32];
    assert_eq!(
        ed25519::generate_public_key(&seed),
        ed25519::generate_public_key(&seed)
    );
}

#[test]
fn signatures_for_the_same_message_differ_across_seeds() {
    let message = b"shared message";
    let sig_a = ed25519::sign(&[1u8; 32], message);
    let sig_b = ed25519::sign(&[2u8; 32], message);
    assert_ne!(sig_a, sig_b);
}

#[test]
fn large_batch_of_valid_signatures_verifies() {
    let messages: Vec<Vec<u8>> = (0..20).map(|i| format!("message number {i}").into_bytes()).collect();
    let seeds = seeds();
    let publics: Vec<[u8; 32]> = (0..messages.len())
        .map(|i| ed25519::generate_public_key(&seeds[i % seeds.len()]))
        .collect();
    let sigs: Vec<[u8; 64]> = (0..messages.len())
        .map(|i| ed25519::sign(&seeds[i % seeds.len()], &messages[i]))
        .collect();

    let batch: Vec<(&[u8; 32], &[u8], &[u8])> = (0..messages.len())
        .map(|i| (&publics[i], messages[i].as_slice(), sigs[i].as_slice()))
        .collect();
    assert!(ed25519::verify_batch(&batch));
}

#[test]
fn batch_with_one_forged_signature_is_rejected() {
    let messages: Vec<&[u8]> = vec![b"one", b"two", b"three", b"four"];
    let seeds: Vec<[u8; 32]> = (0..messages.len()).map(|i| [i as u8 + 10; 32]).collect();
    let publics: Vec<[u8; 32]> = seeds.iter().map(ed25519::generate_public_key).collect();
    let mut sigs: Vec<[u8; 64]> = seeds.iter().zip(messages.iter()).map(|(s, m)| ed25519::sign(s, m)).collect();

    // Forge the last signature with an unrelated seed entirely.
    sigs[3] = ed25519::sign(&[99u8; 32], messages[3]);

    let batch: Vec<(&[u8; 32], &[u8], &[u8])> = (0..messages.len())
        .map(|i| (&publics[i], messages[i], sigs[i].as_slice()))
        .collect();
    assert!(!ed25519::verify_batch(&batch));
}
