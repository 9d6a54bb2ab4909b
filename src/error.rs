use crate::charset::BITS_PER_SYMBOL;
use crate::uint::{MAX_SAFE_INTEGER, MAX_TOTAL_BITS};
use std::{error, fmt};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The input has the wrong shape, e.g. a string where an object is required.
    InvalidArgument { expected: &'static str, found: &'static str },
    EmptyInput,
    InvalidAlphabet { character: char, index: usize },
    MissingField { fields: Vec<&'static str> },
    NotAnInteger { field: &'static str, value: String },
    OutOfRange { field: &'static str, value: String },
    InvalidBitWidth { total_bits: i64 },
    InsufficientBitWidth { minimum_bits: u32, total_bits: u32 },
    ResultOutOfRange { input: String },
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { expected, found } => write!(f, "Expecting {} as the only argument, found {}", expected, found),
            Self::EmptyInput => write!(f, "string must be non-empty"),
            Self::InvalidAlphabet { character, index } => {
                write!(f, "Value is not a valid couchdbBase64 string: invalid character {:?} at index {}", character, index)
            }
            Self::MissingField { fields } => write!(f, "Expecting an object with the keys uint and totalBits, missing keys: {}", fields.join(", ")),
            Self::NotAnInteger { field, value } => write!(f, "{} is not an integer: {}", field, value),
            Self::OutOfRange { field, value } => {
                write!(f, "{} must be between 0 and {} inclusive: {}", field, MAX_SAFE_INTEGER, value)
            }
            Self::InvalidBitWidth { total_bits } => write!(
                f,
                "totalBits must be a positive multiple of {} no greater than {}: {}",
                BITS_PER_SYMBOL, MAX_TOTAL_BITS, total_bits
            ),
            Self::InsufficientBitWidth { minimum_bits, total_bits } => write!(
                f,
                "The minimum number of bits to represent uint exceeds totalBits: minimum number of bits {}, totalBits {}",
                minimum_bits, total_bits
            ),
            Self::ResultOutOfRange { input } => write!(f, "The value of {:?} is greater than {}", input, MAX_SAFE_INTEGER),
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}
