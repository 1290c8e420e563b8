//! Base58 conversion using arbitrary-precision integers
//!
//! Produces the same output as [`crate::base58`] and is used to cross-check it.
use std::iter;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::{
    alphabet::{digit_symbol, digit_value, BASE, ZERO_SYMBOL},
    base58::Base58Error,
};

/// Encodes bytes as base58 text
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|byte| **byte == 0).count();
    let mut value = BigUint::from_bytes_be(&input[zeros..]);
    let base = BigUint::from(BASE);
    let mut digits = vec![];
    while !value.is_zero() {
        let (quotient, remainder) = value.div_rem(&base);
        let digit = remainder.to_u8()
            .expect("remainder should be less than 58");
        digits.push(digit_symbol(digit) as char);
        value = quotient;
    };
    iter::repeat(ZERO_SYMBOL).take(zeros)
        .chain(digits.into_iter().rev())
        .collect()
}

/// Decodes base58 text
pub fn decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let symbols = input.as_bytes();
    let zeros = symbols.iter()
        .take_while(|symbol| **symbol == ZERO_SYMBOL as u8)
        .count();
    let mut value = BigUint::zero();
    for (offset, symbol) in symbols[zeros..].iter().enumerate() {
        let digit = digit_value(*symbol)
            .ok_or_else(|| Base58Error::invalid_character(input, zeros + offset))?;
        value = value * BASE + digit;
    };
    let mut output = vec![0; zeros];
    if !value.is_zero() {
        output.extend(value.to_bytes_be());
    };
    Ok(output)
}
