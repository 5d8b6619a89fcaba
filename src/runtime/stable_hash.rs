//! Process-independent hashing for runtime values.
//!
//! `std`'s default hasher is seeded per process, so hashes computed on one
//! side of the host/compiler boundary would not match the other side. Every
//! `hash_code()` in the runtime goes through these helpers instead.
use sha2::{Digest, Sha256};

pub fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&result[..8]);
    u64::from_le_bytes(out)
}

pub fn hash_str(value: &str) -> u64 {
    hash_bytes(value.as_bytes())
}

pub fn hash_u64(value: u64) -> u64 {
    hash_bytes(&value.to_le_bytes())
}

/// Folds `value` into an accumulated hash. Order sensitive.
pub fn combine(seed: u64, value: u64) -> u64 {
    let mut bytes = [0u8; 16];
    bytes[..8].copy_from_slice(&seed.to_le_bytes());
    bytes[8..].copy_from_slice(&value.to_le_bytes());
    hash_bytes(&bytes)
}
