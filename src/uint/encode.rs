use crate::charset::{ALPHABET, BITS_PER_SYMBOL, ZERO_SYMBOL};
use crate::{validate, Error};

/// Encodes `uint` as exactly `total_bits / 6` symbols, most significant first, left padded with the zero symbol.
pub fn encode_from_uint(uint: u64, total_bits: u32) -> Result<String, Error> {
    let mut uint = validate::uint(uint)?;
    let total_bits = validate::total_bits(total_bits as i64)?;
    validate::fits(uint, total_bits)?;

    let width = (total_bits / BITS_PER_SYMBOL) as usize;
    let mut symbols = Vec::with_capacity(width);
    while uint > 0 {
        symbols.push(ALPHABET.symbol((uint % 64) as usize) as char);
        uint /= 64;
    }

    let mut output = String::with_capacity(width);
    output.extend(std::iter::repeat(ZERO_SYMBOL).take(width - symbols.len()));
    output.extend(symbols.iter().rev());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use crate::uint::MAX_SAFE_INTEGER;
    use crate::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode_from_uint(0, 6), Ok("-".to_string()));
        assert_eq!(super::encode_from_uint(0, 18), Ok("---".to_string()));
        assert_eq!(super::encode_from_uint(1, 6), Ok(".".to_string()));
        assert_eq!(super::encode_from_uint(63, 6), Ok("z".to_string()));
        assert_eq!(super::encode_from_uint(64, 18), Ok("-.-".to_string()));
        assert_eq!(super::encode_from_uint(MAX_SAFE_INTEGER, 54), Ok("Tzzzzzzzz".to_string()));
    }

    #[test]
    fn encode_errors() {
        assert_eq!(
            super::encode_from_uint(64, 6),
            Err(Error::InsufficientBitWidth {
                minimum_bits: 7,
                total_bits: 6
            })
        );
        assert_eq!(super::encode_from_uint(123, 13), Err(Error::InvalidBitWidth { total_bits: 13 }));
        assert_eq!(super::encode_from_uint(123, 55), Err(Error::InvalidBitWidth { total_bits: 55 }));
        assert_eq!(super::encode_from_uint(123, 0), Err(Error::InvalidBitWidth { total_bits: 0 }));
        assert_eq!(
            super::encode_from_uint(MAX_SAFE_INTEGER + 1, 54),
            Err(Error::OutOfRange {
                field: "uint",
                value: "9007199254740992".to_string()
            })
        );
    }

    #[test]
    fn fixed_width() {
        for total_bits in (6..=54).step_by(6) {
            let largest = if total_bits == 54 { MAX_SAFE_INTEGER } else { (1 << total_bits) - 1 };
            for uint in [0, 1, largest / 2, largest] {
                let encoded = super::encode_from_uint(uint, total_bits).unwrap();
                assert_eq!(encoded.len(), (total_bits / 6) as usize);
            }
        }
    }

    #[test]
    fn order_preserving() {
        let values = [0, 1, 2, 9, 10, 11, 37, 38, 63, 64, 65, 4095, 4096, 262_143, 1 << 40, MAX_SAFE_INTEGER - 1, MAX_SAFE_INTEGER];
        for pair in values.windows(2) {
            let lower = super::encode_from_uint(pair[0], 54).unwrap();
            let upper = super::encode_from_uint(pair[1], 54).unwrap();
            assert!(lower < upper, "{} ({}) should sort before {} ({})", lower, pair[0], upper, pair[1]);
        }
    }
}
