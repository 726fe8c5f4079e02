//! RFC 7748 §5.2 test vectors and iterative self-composition (spec §8).

use curve25519_core::x25519;

fn from_hex(s: &str) -> [u8; 32] {
    let bytes = hex::decode(s).expect("test vector is valid hex");
    bytes.try_into().expect("test vector is 32 bytes")
}

#[test]
fn rfc7748_vector_1() {
    let scalar = from_hex("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let u = from_hex("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
    let expected = from_hex("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");
    assert_eq!(x25519::scalar_multiply(&scalar, &u), expected);
}

#[test]
fn rfc7748_vector_2() {
    let scalar = from_hex("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d");
    let u = from_hex("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493");
    let expected = from_hex("95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957");
    assert_eq!(x25519::scalar_multiply(&scalar, &u), expected);
}

#[test]
fn self_composition_after_one_iteration() {
    let start = base_u();
    let expected = from_hex("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079");
    assert_eq!(x25519::scalar_multiply(&start, &start), expected);
}

#[test]
fn self_composition_after_1000_iterations() {
    let mut k = base_u();
    let mut u = base_u();
    let expected = from_hex("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51");

    for _ in 0..1000 {
        let next = x25519::scalar_multiply(&k, &u);
        u = k;
        k = next;
    }
    assert_eq!(k, expected);
}

#[test]
#[ignore = "one million scalar multiplications over BigUint arithmetic; run with --ignored"]
fn self_composition_after_1_000_000_iterations() {
    let mut k = base_u();
    let mut u = base_u();
    let expected = from_hex("7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f665424");

    for _ in 0..1_000_000 {
        let next = x25519::scalar_multiply(&k, &u);
        u = k;
        k = next;
    }
    assert_eq!(k, expected);
}

fn base_u() -> [u8; 32] {
    let mut u = [0u8; 32];
    u[0] = 9;
    u
}
