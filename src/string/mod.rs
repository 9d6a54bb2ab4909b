//! Text codec: Unicode text to its UTF-8 bytes, then bytes to alphabet symbols, 3 bytes per 4 symbols.

pub mod decode;
pub mod encode;

pub use decode::{decode, decode_into, decode_to_string, decode_to_utf16, decoded_len, Decoder};
pub use encode::{encode, encode_from_string, encode_from_utf16, encode_into, encoded_len, Encoder};
