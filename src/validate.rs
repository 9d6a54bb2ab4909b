//! Checks run before any transformation, so a failing call produces no output at all.

use crate::charset::{is_valid_encoded_string, ALPHABET, BITS_PER_SYMBOL};
use crate::uint::{MAX_SAFE_INTEGER, MAX_TOTAL_BITS};
use crate::Error;

pub fn non_empty(text: &str) -> Result<(), Error> {
    if text.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Finds the first character outside the alphabet. Accepts the empty string.
pub fn symbols(text: &str) -> Result<(), Error> {
    match text.char_indices().find(|&(_, character)| ALPHABET.value(character).is_none()) {
        Some((index, character)) => Err(Error::InvalidAlphabet { character, index }),
        None => Ok(()),
    }
}

/// Input check shared by every decode operation.
pub fn encoded_text(text: &str) -> Result<(), Error> {
    non_empty(text)?;
    if is_valid_encoded_string(text) {
        return Ok(());
    }
    symbols(text)
}

pub fn uint(uint: u64) -> Result<u64, Error> {
    if uint > MAX_SAFE_INTEGER {
        return Err(Error::OutOfRange {
            field: "uint",
            value: uint.to_string(),
        });
    }
    Ok(uint)
}

pub fn total_bits(total_bits: i64) -> Result<u32, Error> {
    if total_bits < 1 || total_bits > MAX_TOTAL_BITS as i64 || total_bits % BITS_PER_SYMBOL as i64 != 0 {
        return Err(Error::InvalidBitWidth { total_bits });
    }
    Ok(total_bits as u32)
}

/// Length of the binary representation of `uint`; zero still takes one bit.
pub fn minimum_bits(uint: u64) -> u32 {
    (u64::BITS - uint.leading_zeros()).max(1)
}

pub fn fits(uint: u64, total_bits: u32) -> Result<(), Error> {
    let minimum_bits = minimum_bits(uint);
    if minimum_bits > total_bits {
        return Err(Error::InsufficientBitWidth { minimum_bits, total_bits });
    }
    Ok(())
}
