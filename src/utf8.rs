//! Conversions between Unicode text and its UTF-8 byte stream.
//!
//! A `str` already is its UTF-8 stream, so only UTF-16 input needs converting here. Code points above
//! the Basic Multilingual Plane arrive as a high/low surrogate pair; a lone surrogate is kept as its
//! own 3 byte sequence so that any UTF-16 text survives the trip.
//!
//! Decoding never fails. A byte that does not start a complete sequence stands for the character
//! U+0000 to U+00FF of the same value.

const HIGH_SURROGATES: std::ops::RangeInclusive<u32> = 0xd800..=0xdbff;
const LOW_SURROGATES: std::ops::RangeInclusive<u32> = 0xdc00..=0xdfff;
const SUPPLEMENTARY_OFFSET: u32 = 0x10000;
const MAX_CODE_POINT: u32 = 0x10ffff;

fn push_code_point(code_point: u32, output: &mut Vec<u8>) {
    if code_point < 0x80 {
        output.push(code_point as u8);
    } else if code_point < 0x800 {
        output.push(0xc0 | (code_point >> 6) as u8);
        output.push(0x80 | (code_point & 0x3f) as u8);
    } else if code_point < 0x10000 {
        output.push(0xe0 | ((code_point >> 12) & 0x0f) as u8);
        output.push(0x80 | ((code_point >> 6) & 0x3f) as u8);
        output.push(0x80 | (code_point & 0x3f) as u8);
    } else {
        output.push(0xf0 | ((code_point >> 18) & 0x07) as u8);
        output.push(0x80 | ((code_point >> 12) & 0x3f) as u8);
        output.push(0x80 | ((code_point >> 6) & 0x3f) as u8);
        output.push(0x80 | (code_point & 0x3f) as u8);
    }
}

pub fn encode_utf16(units: &[u16]) -> Vec<u8> {
    let mut output = Vec::with_capacity(units.len() * 3);
    let mut index = 0;
    while index < units.len() {
        let unit = units[index] as u32;
        let low = units.get(index + 1).map(|&low| low as u32);
        let code_point = match low {
            Some(low) if HIGH_SURROGATES.contains(&unit) && LOW_SURROGATES.contains(&low) => {
                index += 1;
                SUPPLEMENTARY_OFFSET + ((unit - HIGH_SURROGATES.start()) << 10) + (low - LOW_SURROGATES.start())
            }
            _ => unit,
        };
        push_code_point(code_point, &mut output);
        index += 1;
    }
    output
}

/// Reads the sequence starting at `index` as a code point and its length in bytes.
///
/// Only the shape of the sequence is checked: the lead byte and the count of continuation bytes.
/// The value may still be a surrogate or lie past U+10FFFF.
fn next_sequence(bytes: &[u8], index: usize) -> Option<(u32, usize)> {
    let lead = bytes[index] as u32;
    let (length, initial) = match lead {
        0x00..=0x7f => return Some((lead, 1)),
        0xc0..=0xdf => (2, lead & 0x1f),
        0xe0..=0xef => (3, lead & 0x0f),
        0xf0..=0xf7 => (4, lead & 0x07),
        _ => return None,
    };
    let continuation = bytes.get(index + 1..index + length)?;
    let mut code_point = initial;
    for &byte in continuation {
        if byte & 0xc0 != 0x80 {
            return None;
        }
        code_point = (code_point << 6) | (byte & 0x3f) as u32;
    }
    Some((code_point, length))
}

/// Walks `bytes`, handing each sequence to `f`. When `f` refuses a code point, or no sequence starts
/// at a byte, that byte alone is passed on as its own value.
fn for_each_code_point(bytes: &[u8], mut f: impl FnMut(u32) -> bool) {
    let mut index = 0;
    while index < bytes.len() {
        match next_sequence(bytes, index) {
            Some((code_point, length)) if f(code_point) => index += length,
            _ => {
                f(bytes[index] as u32);
                index += 1;
            }
        }
    }
}

pub fn decode(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(bytes.len());
    for_each_code_point(bytes, |code_point| match char::from_u32(code_point) {
        Some(character) => {
            output.push(character);
            true
        }
        None => false,
    });
    output
}

/// Like `decode`, but a 3 byte surrogate sequence comes back as the lone unit it was encoded from.
pub fn decode_utf16(bytes: &[u8]) -> Vec<u16> {
    let mut output = Vec::with_capacity(bytes.len());
    for_each_code_point(bytes, |code_point| {
        if code_point < SUPPLEMENTARY_OFFSET {
            output.push(code_point as u16);
        } else if code_point <= MAX_CODE_POINT {
            let offset = code_point - SUPPLEMENTARY_OFFSET;
            output.push(((offset >> 10) + HIGH_SURROGATES.start()) as u16);
            output.push(((offset & 0x3ff) + LOW_SURROGATES.start()) as u16);
        } else {
            return false;
        }
        true
    });
    output
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode_utf16() {
        let units: Vec<u16> = "a€😀".encode_utf16().collect();
        assert_eq!(super::encode_utf16(&units), "a€😀".as_bytes().to_vec());
        let units: Vec<u16> = "mixed ascii, ß, 中文 and 𝄞".encode_utf16().collect();
        assert_eq!(super::encode_utf16(&units), "mixed ascii, ß, 中文 and 𝄞".as_bytes().to_vec());
        assert_eq!(super::encode_utf16(&[0xe9]), vec![0xc3, 0xa9]);
    }

    #[test]
    fn encode_lone_surrogates() {
        assert_eq!(super::encode_utf16(&[0xd800]), vec![0xed, 0xa0, 0x80]);
        assert_eq!(super::encode_utf16(&[0x61, 0xd83d]), vec![0x61, 0xed, 0xa0, 0xbd]);
        assert_eq!(super::encode_utf16(&[0xd83d, 0x61]), vec![0xed, 0xa0, 0xbd, 0x61]);
        assert_eq!(super::encode_utf16(&[0xde00, 0xd83d]), vec![0xed, 0xb8, 0x80, 0xed, 0xa0, 0xbd]);
    }

    #[test]
    fn decode() {
        assert_eq!(super::decode("héllo €😀".as_bytes()), "héllo €😀");
        assert_eq!(super::decode(&[0x00, 0x00, 0x00]), "\0\0\0");
        assert_eq!(super::decode(&[0xff]), "ÿ");
        assert_eq!(super::decode(&[0x61, 0xff]), "aÿ");
        // truncated sequence
        assert_eq!(super::decode(&[0x61, 0xc3]), "a\u{c3}");
        assert_eq!(super::decode(&[0xc3, 0x41]), "\u{c3}A");
        // overlong "/" has the right shape and is read as "/"
        assert_eq!(super::decode(&[0xc0, 0xaf]), "/");
        // encoded surrogate has no char, so its bytes stand alone
        assert_eq!(super::decode(&[0xed, 0xa0, 0x80]), "\u{ed}\u{a0}\u{80}");
        assert_eq!(super::decode(&[0xf4, 0x90, 0x80, 0x80]), "\u{f4}\u{90}\u{80}\u{80}");
    }

    #[test]
    fn decode_utf16() {
        let expected: Vec<u16> = "a€😀".encode_utf16().collect();
        assert_eq!(super::decode_utf16("a€😀".as_bytes()), expected);
        assert_eq!(super::decode_utf16(&[0xf0, 0x9f, 0x98, 0x80]), vec![0xd83d, 0xde00]);
        assert_eq!(super::decode_utf16(&[0xed, 0xa0, 0x80]), vec![0xd800]);
        assert_eq!(super::decode_utf16(&[0xff, 0x61]), vec![0xff, 0x61]);
        assert_eq!(super::decode_utf16(&[0xf4, 0x90, 0x80, 0x80]), vec![0xf4, 0x90, 0x80, 0x80]);
    }

    #[test]
    fn lone_surrogates_round_trip() {
        for units in [vec![0xd800], vec![0xdc00], vec![0x61, 0xd83d], vec![0xde00, 0xd83d, 0x62]] {
            assert_eq!(super::decode_utf16(&super::encode_utf16(&units)), units);
        }
    }
}
