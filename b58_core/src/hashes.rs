use sha2::{Digest, Sha256};

/// Computes SHA-256 digest of the given value
pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

/// Computes double SHA-256 digest of the given value
pub fn sha256d(input: &[u8]) -> [u8; 32] {
    sha256(&sha256(input))
}
