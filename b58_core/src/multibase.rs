//! Multibase base58btc
//!
//! <https://datatracker.ietf.org/doc/draft-multiformats-multibase/07/>
use crate::base58::{decode, encode, Base58Error};

// z == base58btc
// https://github.com/multiformats/multibase#multibase-table
const BASE58BTC_PREFIX: char = 'z';

#[derive(thiserror::Error, Debug)]
pub enum MultibaseError {
    #[error("invalid base string")]
    InvalidBaseString,

    #[error("unknown base")]
    UnknownBase,

    #[error(transparent)]
    DecodeError(#[from] Base58Error),
}

/// Decodes multibase base58 (bitcoin) value
pub fn decode_multibase_base58btc(value: &str)
    -> Result<Vec<u8>, MultibaseError>
{
    let base = value.chars().next()
        .ok_or(MultibaseError::InvalidBaseString)?;
    if base != BASE58BTC_PREFIX {
        return Err(MultibaseError::UnknownBase);
    };
    let encoded_data = &value[base.len_utf8()..];
    let data = decode(encoded_data)?;
    Ok(data)
}

pub fn encode_multibase_base58btc(value: &[u8]) -> String {
    format!("{}{}", BASE58BTC_PREFIX, encode(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multibase_test_vectors() {
        // https://github.com/multiformats/multibase/tree/master/tests
        let result = encode_multibase_base58btc("yes mani !".as_bytes());
        assert_eq!(result, "z7paNL19xttacUY");
        let value = decode_multibase_base58btc("z7paNL19xttacUY").unwrap();
        assert_eq!(value, "yes mani !".as_bytes());

        let result = encode_multibase_base58btc("\x00yes mani !".as_bytes());
        assert_eq!(result, "z17paNL19xttacUY");
        let result = encode_multibase_base58btc("\x00\x00yes mani !".as_bytes());
        assert_eq!(result, "z117paNL19xttacUY");
    }

    #[test]
    fn test_base58btc_encode_decode() {
        let value = [1; 20];
        let encoded = encode_multibase_base58btc(&value);
        let decoded = decode_multibase_base58btc(&encoded).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_decode_multibase_errors() {
        let error = decode_multibase_base58btc("").unwrap_err();
        assert!(matches!(error, MultibaseError::InvalidBaseString));
        let error = decode_multibase_base58btc("f68656c6c6f").unwrap_err();
        assert!(matches!(error, MultibaseError::UnknownBase));
        let error = decode_multibase_base58btc("z0").unwrap_err();
        assert!(matches!(
            error,
            MultibaseError::DecodeError(Base58Error::InvalidCharacter { .. }),
        ));
    }
}
