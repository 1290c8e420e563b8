//! Bitcoin base58 alphabet
//!
//! <https://en.bitcoin.it/wiki/Base58Check_encoding#Base58_symbol_chart>

/// Number of symbols in the alphabet
pub const BASE: usize = 58;

/// Symbols ordered by digit value.
/// `0`, `O`, `I` and `l` are excluded.
pub const ALPHABET: &[u8; BASE] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Symbol for digit 0, also used to encode a leading zero byte
pub const ZERO_SYMBOL: char = ALPHABET[0] as char;

// 0xFF marks bytes that are not in the alphabet
const NO_DIGIT: u8 = 0xFF;

const fn build_digit_table() -> [u8; 128] {
    let mut table = [NO_DIGIT; 128];
    let mut index = 0;
    while index < BASE {
        table[ALPHABET[index] as usize] = index as u8;
        index += 1;
    };
    table
}

const DIGITS: [u8; 128] = build_digit_table();

/// Returns digit value of an alphabet symbol
pub fn digit_value(symbol: u8) -> Option<u8> {
    match DIGITS.get(symbol as usize) {
        Some(&NO_DIGIT) | None => None,
        Some(&digit) => Some(digit),
    }
}

/// Returns alphabet symbol for a digit in `[0, 58)`
pub fn digit_symbol(digit: u8) -> u8 {
    ALPHABET[digit as usize]
}
