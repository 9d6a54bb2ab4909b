//! Sort preserving base64 style text keys for document ids.
//!
//! The alphabet `-.0-9A-Za-z` replaces the RFC 4648 one, so encoded text never contains `/`, `+` or
//! `=` padding, and its symbols sort in ascii order. Two codecs share it:
//!
//! - text: Unicode to UTF-8, then 3 bytes to 4 symbols, with a 2 or 3 symbol trailing group.
//! - integers: unsigned values up to 2^53 - 1 as a fixed number of symbols, so equal width keys
//!   compare like the integers they encode.
//!
//! ```
//! use couchdb_base64::{decode_to_string, decode_to_uint, encode_from_string, encode_from_uint};
//!
//! assert_eq!(encode_from_string("hello world").unwrap(), "O4JgP4wURqxmP4E");
//! assert_eq!(decode_to_string("O4JgP4wURqxmP4E").unwrap(), "hello world");
//! assert_eq!(encode_from_uint(64, 18).unwrap(), "-.-");
//! assert_eq!(decode_to_uint("-.-").unwrap(), 64);
//! ```

pub mod alphabet;
pub mod charset;
pub mod error;
pub mod string;
pub mod uint;
pub mod utf8;
pub mod validate;

pub use self::{
    charset::{is_valid_encoded_string, ALPHABET, ZERO_SYMBOL},
    error::Error,
    string::{decode_to_string, decode_to_utf16, encode_from_string, encode_from_utf16},
    uint::{decode_to_uint, encode_from_uint, parameters::encode_from_value, Parameters, MAX_SAFE_INTEGER, MAX_TOTAL_BITS},
};
