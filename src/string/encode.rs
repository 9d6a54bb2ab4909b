use crate::alphabet::Alphabet;
use crate::charset::{ALPHABET, BITS_PER_SYMBOL};
use crate::{utf8, validate, Error};

const SYMBOL_BITS: usize = BITS_PER_SYMBOL as usize;
const SYMBOL_MASK: usize = (1 << SYMBOL_BITS) - 1;

/// Number of symbols needed for `len` bytes: 4 per full group of 3, then 2 or 3 for a partial group.
pub const fn encoded_len(len: usize) -> usize {
    (len * 8 + SYMBOL_BITS - 1) / SYMBOL_BITS
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<64>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<64>) -> Self {
        Self { alphabet }
    }

    fn pack(&self, input: &[u8], mut emit: impl FnMut(u8)) {
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        for &value in input {
            accumulator = (accumulator << 8) | (value as usize);
            bits += 8;
            while bits >= SYMBOL_BITS {
                bits -= SYMBOL_BITS;
                emit(self.alphabet.symbol((accumulator >> bits) & SYMBOL_MASK));
                accumulator &= (1 << bits) - 1;
            }
        }
        // no padding symbols follow a partial group
        if bits > 0 {
            emit(self.alphabet.symbol((accumulator << (SYMBOL_BITS - bits)) & SYMBOL_MASK));
        }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if output.len() < encoded_len(input.len()) {
            return Err(Error::BufferTooSmall);
        }
        let mut index = 0;
        self.pack(input, |symbol| {
            output[index] = symbol;
            index += 1;
        });
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = String::with_capacity(encoded_len(input.len()));
        self.pack(input, |symbol| output.push(symbol as char));
        output
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

/// Encodes the UTF-8 form of `text`, which a `str` already holds.
pub fn encode_from_string(text: &str) -> Result<String, Error> {
    validate::non_empty(text)?;
    Ok(encode(text.as_bytes()))
}

/// Encodes UTF-16 text, joining surrogate pairs into single code points first. Lone surrogates are
/// encoded on their own.
pub fn encode_from_utf16(units: &[u16]) -> Result<String, Error> {
    if units.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(encode(utf8::encode_utf16(units)))
}
