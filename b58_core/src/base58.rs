//! Base58 encoding
//!
//! Conversion is performed by long division over byte buffers,
//! one input symbol at a time. Each leading zero byte is encoded
//! as a single `1` symbol and vice versa.
use std::iter;

use crate::alphabet::{digit_symbol, digit_value, BASE, ZERO_SYMBOL};

/// Errors that may occur when decoding base58 text
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Base58Error {
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },
}

impl Base58Error {
    pub(crate) fn invalid_character(input: &str, index: usize) -> Self {
        // Decoding stops at the first byte of an invalid character
        let character = input.get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Self::InvalidCharacter { character, index }
    }
}

/// Upper bound on the number of base58 digits needed for `byte_len` bytes:
/// `ceil(byte_len * log(256) / log(58)) + 1`
pub fn encoded_capacity(byte_len: usize) -> usize {
    let ratio = 256_f64.ln() / (BASE as f64).ln();
    (byte_len as f64 * ratio).ceil() as usize + 1
}

/// Upper bound on the number of bytes needed for `text_len` base58 digits:
/// `ceil(text_len * log(58) / log(256)) + 1`
pub fn decoded_capacity(text_len: usize) -> usize {
    let ratio = (BASE as f64).ln() / 256_f64.ln();
    (text_len as f64 * ratio).ceil() as usize + 1
}

fn count_leading<T: PartialEq>(values: &[T], value: T) -> usize {
    values.iter().take_while(|item| **item == value).count()
}

/// Encodes bytes as base58 text
pub fn encode(input: &[u8]) -> String {
    let zeros = count_leading(input, 0);
    let payload = &input[zeros..];

    // Big-endian base58 digits, filled from the end
    let mut buffer = vec![0_u8; encoded_capacity(payload.len())];
    // Number of significant digits at the end of the buffer
    let mut length = 0;
    for byte in payload {
        // digits = digits * 256 + byte
        let mut carry = u32::from(*byte);
        let mut position = 0;
        for digit in buffer.iter_mut().rev() {
            if carry == 0 && position >= length {
                break;
            };
            carry += u32::from(*digit) << 8;
            *digit = (carry % BASE as u32) as u8;
            carry /= BASE as u32;
            position += 1;
        };
        debug_assert_eq!(carry, 0, "encoding buffer is too small");
        length = position;
    };

    let digits = &buffer[buffer.len() - length..];
    let mut output = String::with_capacity(zeros + length);
    output.extend(iter::repeat(ZERO_SYMBOL).take(zeros));
    output.extend(digits.iter().map(|digit| digit_symbol(*digit) as char));
    output
}

/// Decodes base58 text
pub fn decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let symbols = input.as_bytes();
    let zeros = count_leading(symbols, ZERO_SYMBOL as u8);
    let digits = &symbols[zeros..];

    // Big-endian bytes, filled from the end
    let mut buffer = vec![0_u8; decoded_capacity(digits.len())];
    // Number of significant bytes at the end of the buffer
    let mut length = 0;
    for (offset, symbol) in digits.iter().enumerate() {
        let digit = digit_value(*symbol)
            .ok_or_else(|| Base58Error::invalid_character(input, zeros + offset))?;
        // bytes = bytes * 58 + digit
        let mut carry = u32::from(digit);
        let mut position = 0;
        for byte in buffer.iter_mut().rev() {
            if carry == 0 && position >= length {
                break;
            };
            carry += u32::from(*byte) * BASE as u32;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
            position += 1;
        };
        debug_assert_eq!(carry, 0, "decoding buffer is too small");
        length = position;
    };

    let mut output = Vec::with_capacity(zeros + length);
    output.resize(zeros, 0);
    output.extend_from_slice(&buffer[buffer.len() - length..]);
    Ok(output)
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use super::*;

    /// Deterministic inputs of various lengths, some with leading zeros
    pub(crate) fn sample_inputs() -> Vec<Vec<u8>> {
        let mut rng = StdRng::seed_from_u64(58);
        let mut inputs = vec![];
        for length in 0..=96_usize {
            let mut value: Vec<u8> = (0..length).map(|_| rng.gen()).collect();
            if length % 3 == 0 {
                let zeros = rng.gen_range(0..=length.min(4));
                value[..zeros].fill(0);
            };
            inputs.push(value);
        };
        inputs.push(vec![0xFF; 256]);
        inputs.push(vec![0; 64]);
        inputs
    }

    #[test]
    fn test_capacity() {
        assert_eq!(encoded_capacity(0), 1);
        assert_eq!(encoded_capacity(1), 3);
        assert_eq!(encoded_capacity(32), 45);
        assert_eq!(decoded_capacity(0), 1);
        assert_eq!(decoded_capacity(1), 2);
        assert_eq!(decoded_capacity(44), 34);
    }

    #[test]
    fn test_encode_basics() {
        assert_eq!(encode(&[0]), "1");
        assert_eq!(encode(&[1]), "2");
        assert_eq!(encode(&[57]), "z");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(&[13, 36]), "211");
        assert_eq!(encode(b"hello"), "Cn8eVZg");
        assert_eq!(encode(&[0xFF; 4]), "7YXq9G");
    }

    #[test]
    fn test_encode_known_vector() {
        // Computed with an independent big integer implementation
        assert_eq!(encode(&[0x00, 0x01, 0x09]), "15a");
        let value = hex::decode("00f8917303bfa8ef24f292e8fa1419b20460ba064d")
            .unwrap();
        assert_eq!(encode(&value), "14TrSStH2tVv3RgkLnUpJwMAmGBmv");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_all_zeros() {
        assert_eq!(encode(&[0, 0, 0]), "111");
        assert_eq!(decode("111").unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(encode(&[0, 13, 36]), "1211");
        assert_eq!(encode(&[0, 0, 0, 0, 13, 36]), "1111211");
        assert_eq!(decode("1211").unwrap(), vec![0, 13, 36]);
        assert_eq!(decode("111211").unwrap(), vec![0, 0, 0, 13, 36]);
        for input in sample_inputs() {
            let zeros = count_leading(input.as_slice(), 0);
            let output = encode(&input);
            assert_eq!(count_leading(output.as_bytes(), b'1'), zeros);
        };
    }

    #[test]
    fn test_decode_basics() {
        assert_eq!(decode("2").unwrap(), vec![1]);
        assert_eq!(decode("21").unwrap(), vec![58]);
        assert_eq!(decode("211").unwrap(), vec![13, 36]);
        assert_eq!(decode("Cn8eVZg").unwrap(), b"hello");
        assert_eq!(decode("15a").unwrap(), vec![0x00, 0x01, 0x09]);
    }

    #[test]
    fn test_decode_invalid_character() {
        let error = decode("0").unwrap_err();
        assert_eq!(
            error,
            Base58Error::InvalidCharacter { character: '0', index: 0 },
        );
        let error = decode("11Cn8O").unwrap_err();
        assert_eq!(
            error,
            Base58Error::InvalidCharacter { character: 'O', index: 5 },
        );
        let error = decode("2I").unwrap_err();
        assert!(matches!(
            error,
            Base58Error::InvalidCharacter { character: 'I', index: 1 },
        ));
        let error = decode("2l").unwrap_err();
        assert!(matches!(error, Base58Error::InvalidCharacter { .. }));
        let error = decode("2 3").unwrap_err();
        assert!(matches!(error, Base58Error::InvalidCharacter { index: 1, .. }));
    }

    #[test]
    fn test_decode_non_ascii() {
        let error = decode("2zé").unwrap_err();
        assert_eq!(
            error,
            Base58Error::InvalidCharacter { character: 'é', index: 2 },
        );
        let error = decode("1€").unwrap_err();
        assert_eq!(
            error,
            Base58Error::InvalidCharacter { character: '€', index: 1 },
        );
    }

    #[test]
    fn test_encode_decode() {
        for input in sample_inputs() {
            let encoded = encode(&input);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(decoded, input);
        };
    }

    #[test]
    fn test_matches_reference_implementation() {
        for input in sample_inputs() {
            let expected = bs58::encode(&input).into_string();
            assert_eq!(encode(&input), expected);
            let decoded = bs58::decode(&expected).into_vec().unwrap();
            assert_eq!(decode(&expected).unwrap(), decoded);
        };
    }

    #[test]
    fn test_decode_non_canonical_zero_digits() {
        // Zero symbols after the first non-zero digit are ordinary digits
        assert_eq!(decode("21").unwrap(), vec![58]);
        assert_eq!(decode("1z11").unwrap(), vec![0, 0x02, 0xED, 0x04]);
    }
}
