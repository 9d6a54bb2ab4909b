use crate::charset::{ALPHABET, ZERO_SYMBOL};
use crate::uint::MAX_SAFE_INTEGER;
use crate::{validate, Error};

/// Decodes any alphabet text, rejecting values above `MAX_SAFE_INTEGER` instead of losing precision.
pub fn decode_to_uint(text: &str) -> Result<u64, Error> {
    validate::encoded_text(text)?;
    let out_of_range = || Error::ResultOutOfRange { input: text.to_string() };

    let significant = text.trim_start_matches(ZERO_SYMBOL);
    let mut result: u64 = 0;
    for (position, character) in significant.chars().rev().enumerate() {
        let value = ALPHABET.value(character).ok_or(Error::InvalidAlphabet {
            character,
            index: text.len() - position - 1,
        })? as u64;
        if value == 0 {
            continue;
        }
        let weight = u32::try_from(position)
            .ok()
            .and_then(|position| 64u64.checked_pow(position))
            .ok_or_else(out_of_range)?;
        result = value
            .checked_mul(weight)
            .and_then(|term| result.checked_add(term))
            .ok_or_else(out_of_range)?;
    }

    if result > MAX_SAFE_INTEGER {
        return Err(out_of_range());
    }
    Ok(result)
}
