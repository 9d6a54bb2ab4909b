use crate::alphabet::Alphabet;
use lazy_static::lazy_static;
use regex::Regex;

/// Symbol order matches ascii order, so encoded integers of equal width sort like the integers.
pub const ALPHABET: Alphabet<64> = match Alphabet::new(b"-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// Represents 0 and left-pads fixed width integers.
pub const ZERO_SYMBOL: char = ALPHABET.zero() as char;

pub const BITS_PER_SYMBOL: u32 = 6;

lazy_static! {
    static ref ENCODED_STRING: Regex = Regex::new(r"^[-.0-9A-Za-z]+$").unwrap();
}

/// Alphabet membership only; says nothing about whether the text decodes.
pub fn is_valid_encoded_string(text: &str) -> bool {
    ENCODED_STRING.is_match(text)
}
