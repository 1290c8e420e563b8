//! Decoding into fixed-size arrays (keys, hashes)
use thiserror::Error;

use crate::{
    base58::{decode, Base58Error},
    checksum::{check_decode, ChecksumError},
};

#[derive(Debug, Error)]
pub enum FixedLengthError {
    #[error(transparent)]
    Base58(#[from] Base58Error),

    #[error(transparent)]
    Checksum(#[from] ChecksumError),

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

fn to_array<const N: usize>(data: Vec<u8>) -> Result<[u8; N], FixedLengthError> {
    let actual = data.len();
    data.try_into()
        .map_err(|_| FixedLengthError::InvalidLength { expected: N, actual })
}

/// Decodes base58 text of exactly `N` bytes
pub fn decode_array<const N: usize>(value: &str) -> Result<[u8; N], FixedLengthError> {
    let data = decode(value)?;
    to_array(data)
}

/// Decodes Base58Check text with payload of exactly `N` bytes
pub fn check_decode_array<const N: usize>(value: &str) -> Result<[u8; N], FixedLengthError> {
    let data = check_decode(value)?;
    to_array(data)
}
