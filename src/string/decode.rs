use crate::alphabet::Alphabet;
use crate::charset::{ALPHABET, BITS_PER_SYMBOL};
use crate::{utf8, validate, Error};

const SYMBOL_BITS: usize = BITS_PER_SYMBOL as usize;

/// Number of bytes carried by `len` symbols: 3 per full group of 4, then 1 for 2 symbols, 2 for 3 and 3 for 1.
pub const fn decoded_len(len: usize) -> usize {
    (len / 4) * 3 + [0, 3, 1, 2][len % 4]
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<64>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<64>) -> Self {
        Self { alphabet }
    }

    fn unpack(&self, input: &str, mut emit: impl FnMut(u8)) -> Result<(), Error> {
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        for (index, character) in input.char_indices() {
            let value = self.alphabet.value(character).ok_or(Error::InvalidAlphabet { character, index })?;
            accumulator = (accumulator << SYMBOL_BITS) | (value as usize);
            bits += SYMBOL_BITS;
            if bits >= 8 {
                bits -= 8;
                emit((accumulator >> bits) as u8);
                accumulator &= (1 << bits) - 1;
            }
        }
        // a lone trailing symbol is the top 6 bits of a 3 byte group whose other bits are zero
        if bits == SYMBOL_BITS {
            emit((accumulator << 2) as u8);
            emit(0);
            emit(0);
        }
        // otherwise the low bits of a trailing 2 or 3 symbol group are ignored
        Ok(())
    }

    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        validate::symbols(input)?;
        if output.len() < decoded_len(input.len()) {
            return Err(Error::BufferTooSmall);
        }
        let mut index = 0;
        self.unpack(input, |byte| {
            output[index] = byte;
            index += 1;
        })?;
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        validate::symbols(input)?;
        let mut output = Vec::with_capacity(decoded_len(input.len()));
        self.unpack(input, |byte| output.push(byte))?;
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode_to_string(text: &str) -> Result<String, Error> {
    validate::encoded_text(text)?;
    Ok(utf8::decode(&decode(text)?))
}

/// Decodes to UTF-16, splitting code points above U+FFFF into surrogate pairs and restoring lone surrogates.
pub fn decode_to_utf16(text: &str) -> Result<Vec<u16>, Error> {
    validate::encoded_text(text)?;
    Ok(utf8::decode_utf16(&decode(text)?))
}
