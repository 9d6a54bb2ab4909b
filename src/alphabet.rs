use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// Bijective table between `N` ascii symbols and the values `0..N`.
pub struct Alphabet<const N: usize> {
    symbols: [u8; N],
    values: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut symbols = [0u8; N];
        let mut values: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = values[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            symbols[index] = character;
            values[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { symbols, values })
    }

    /// Panics if `value >= N`; callers mask their values first.
    pub fn symbol(&self, value: usize) -> u8 {
        self.symbols[value]
    }

    pub fn value(&self, character: char) -> Option<u8> {
        if character.is_ascii() {
            self.values[character as usize]
        } else {
            None
        }
    }

    pub const fn zero(&self) -> u8 {
        self.symbols[0]
    }

    pub const fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Error};

    #[test]
    fn lookup() {
        let alphabet = match Alphabet::new(b"abc") {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.zero(), b'a');
        assert_eq!(alphabet.symbol(2), b'c');
        assert_eq!(alphabet.value('b'), Some(1));
        assert_eq!(alphabet.value('d'), None);
        assert_eq!(alphabet.value('é'), None);
    }

    #[test]
    fn duplicate() {
        assert_eq!(
            Alphabet::new(b"abca").err(),
            Some(Error::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
    }

    #[test]
    fn non_ascii() {
        assert_eq!(
            Alphabet::new(&[b'a', 0xff]).err(),
            Some(Error::NonAsciiCharacter { character: 0xff, index: 1 })
        );
    }
}
