//! CKB's blake2b hashing convention.
//!
//! CKB does not use blake2b with its default parameters: every consensus
//! hash is blake2b-256 personalized with `ckb-default-hash`. The same
//! personalization is used at both hashing stages of the derivation chain
//! (lock arg and lock hash), which keeps these digests domain-separated
//! from any other blake2b user.

use blake2b_ref::{Blake2b, Blake2bBuilder};

/// Personalization applied to every hash in the chain.
pub const CKB_HASH_PERSONALIZATION: &[u8] = b"ckb-default-hash";

/// Output length of the full digest in bytes.
pub const BLAKE2B_LEN: usize = 32;

/// Length of a truncated blake160 identifier in bytes.
pub const BLAKE160_LEN: usize = 20;

/// Create a blake2b-256 hasher with the CKB personalization.
pub fn new_blake2b() -> Blake2b {
    Blake2bBuilder::new(BLAKE2B_LEN)
        .personal(CKB_HASH_PERSONALIZATION)
        .build()
}

/// Hash arbitrary bytes to a 32-byte digest.
pub fn blake2b_256<T: AsRef<[u8]>>(data: T) -> [u8; BLAKE2B_LEN] {
    let mut hasher = new_blake2b();
    hasher.update(data.as_ref());
    let mut digest = [0u8; BLAKE2B_LEN];
    hasher.finalize(&mut digest);
    digest
}

/// Hash-then-truncate: the first 20 bytes of the 32-byte digest.
///
/// This is an identifier derivation, not a checksum. Truncation weakens
/// collision resistance to 160 bits, the accepted tradeoff for
/// address-sized identifiers.
pub fn blake160(data: &[u8]) -> [u8; BLAKE160_LEN] {
    let digest = blake2b_256(data);
    let mut short = [0u8; BLAKE160_LEN];
    short.copy_from_slice(&digest[..BLAKE160_LEN]);
    short
}
