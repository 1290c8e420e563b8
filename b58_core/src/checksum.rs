//! Base58Check
//!
//! <https://en.bitcoin.it/wiki/Base58Check_encoding>
use crate::{
    base58::{decode, encode, Base58Error},
    hashes::sha256,
};

/// Length of checksum suffix, in bytes
pub const CHECKSUM_LENGTH: usize = 4;

/// Errors that may occur when decoding Base58Check text
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChecksumError {
    #[error(transparent)]
    Base58(#[from] Base58Error),

    #[error("decoded data is too short for checksum ({length} bytes)")]
    TooShort { length: usize },

    #[error("checksum mismatch")]
    ChecksumMismatch {
        expected: [u8; CHECKSUM_LENGTH],
        actual: [u8; CHECKSUM_LENGTH],
    },
}

/// 256-bit digest function used for deriving checksums
pub trait Hasher {
    fn hash(&self, input: &[u8]) -> [u8; 32];
}

/// SHA-256, the hash function used by Bitcoin
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn hash(&self, input: &[u8]) -> [u8; 32] {
        sha256(input)
    }
}

impl<F> Hasher for F
    where F: Fn(&[u8]) -> [u8; 32]
{
    fn hash(&self, input: &[u8]) -> [u8; 32] {
        self(input)
    }
}

/// Returns first 4 bytes of `hash(hash(payload))`
pub fn checksum_with(
    hasher: &impl Hasher,
    payload: &[u8],
) -> [u8; CHECKSUM_LENGTH] {
    let digest = hasher.hash(&hasher.hash(payload));
    let mut checksum = [0; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&digest[..CHECKSUM_LENGTH]);
    checksum
}

pub fn check_encode_with(hasher: &impl Hasher, payload: &[u8]) -> String {
    let checksum = checksum_with(hasher, payload);
    let data = [payload, &checksum].concat();
    encode(&data)
}

pub fn check_decode_with(
    hasher: &impl Hasher,
    value: &str,
) -> Result<Vec<u8>, ChecksumError> {
    let mut data = decode(value)?;
    if data.len() < CHECKSUM_LENGTH {
        return Err(ChecksumError::TooShort { length: data.len() });
    };
    let payload_length = data.len() - CHECKSUM_LENGTH;
    let mut actual = [0; CHECKSUM_LENGTH];
    actual.copy_from_slice(&data[payload_length..]);
    let expected = checksum_with(hasher, &data[..payload_length]);
    if expected != actual {
        log::debug!(
            "checksum mismatch: expected {:02x?}, found {:02x?}",
            expected,
            actual,
        );
        return Err(ChecksumError::ChecksumMismatch { expected, actual });
    };
    data.truncate(payload_length);
    Ok(data)
}

/// Encodes bytes as Base58Check text (double SHA-256 checksum)
pub fn check_encode(payload: &[u8]) -> String {
    check_encode_with(&Sha256Hasher, payload)
}

/// Decodes Base58Check text and verifies its checksum
pub fn check_decode(value: &str) -> Result<Vec<u8>, ChecksumError> {
    check_decode_with(&Sha256Hasher, value)
}
