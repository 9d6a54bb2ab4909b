//! Fixed width, order preserving encoding of integers up to `MAX_SAFE_INTEGER`.

pub mod decode;
pub mod encode;
pub mod parameters;

/// 2^53 - 1, the largest integer an IEEE 754 double holds exactly.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Largest multiple of 6 that covers `MAX_SAFE_INTEGER`.
pub const MAX_TOTAL_BITS: u32 = 54;

pub use decode::decode_to_uint;
pub use encode::encode_from_uint;
pub use parameters::Parameters;
