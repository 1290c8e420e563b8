//! # Base58 primitives
//!
//! - Bitcoin alphabet
//! - Base58 encoding and decoding
//! - Base58Check (double SHA-256 checksum)
//! - Multibase base58btc
//! - Fixed-length decoding

pub mod alphabet;
pub mod base58;
pub mod checksum;
pub mod fixed;
pub mod hashes;
pub mod multibase;

#[cfg(feature = "bignum")]
pub mod bignum;

pub use base58::{decode, encode, Base58Error};
pub use checksum::{check_decode, check_encode, ChecksumError};
