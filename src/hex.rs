//! Hexadecimal codec

const UPPER_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

const NO_MATCH: u8 = 0xFF;

const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [NO_MATCH; 128];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 6 {
        table[b'A' as usize + i] = 10 + i as u8;
        table[b'a' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
}

/// Encode bytes as uppercase hex, two digits per byte, no separators.
pub fn encode<T: AsRef<[u8]> + ?Sized>(input: &T) -> String {
    let input = input.as_ref();
    let mut output = String::with_capacity(input.len() * 2);
    for &byte in input {
        output.push(char::from(UPPER_DIGITS[usize::from(byte >> 4)]));
        output.push(char::from(UPPER_DIGITS[usize::from(byte & 0x0F)]));
    }
    output
}

/// Decode hex text, either case.
///
/// Odd-length input is read as if a `0` were prepended, so `"F"` decodes
/// to `[0x0F]`. Non-hex characters are skipped, but the odd/even decision
/// is made on the length of the whole input in UTF-16 code units: stray
/// characters shift the nibble pairing rather than being compensated for.
pub fn decode<T: AsRef<[u8]> + ?Sized>(input: &T) -> Vec<u8> {
    let input = input.as_ref();
    let padded = utf16_len(input) % 2 == 1;
    let mut output = Vec::with_capacity((input.len() + usize::from(padded)) / 2);

    // an implicit leading '0' has already filled the high nibble
    let mut accum = 0u8;
    let mut high = !padded;

    for &c in input {
        let Some(nibble) = nibble_value(c) else {
            continue;
        };
        if high {
            accum = nibble << 4;
        } else {
            output.push(accum | nibble);
        }
        high = !high;
    }

    output
}

/// Length of UTF-8 text in UTF-16 code units.
///
/// Continuation bytes add nothing and 4-byte leads add a surrogate pair.
/// Bytes that are not UTF-8 count as one unit each.
fn utf16_len(input: &[u8]) -> usize {
    input
        .iter()
        .map(|&b| match b {
            0x80..=0xBF => 0,
            0xF0..=0xF7 => 2,
            _ => 1,
        })
        .sum()
}

fn nibble_value(c: u8) -> Option<u8> {
    match DECODE_TABLE.get(usize::from(c)) {
        Some(&NO_MATCH) | None => None,
        Some(&value) => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uppercase() {
        assert_eq!(encode(&[0xDEu8, 0xAD, 0xBE, 0xEF]), "DEADBEEF");
        assert_eq!(encode(&[0x00u8, 0x0A, 0xFF]), "000AFF");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn test_decode_either_case() {
        assert_eq!(decode("DEADBEEF"), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(decode("deadBEEF"), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_decode_odd_length_left_pads() {
        assert_eq!(decode("F"), vec![0x0F]);
        assert_eq!(decode("ABC"), vec![0x0A, 0xBC]);
    }

    #[test]
    fn test_decode_skips_non_hex() {
        assert_eq!(decode("DE::AD"), vec![0xDE, 0xAD]);
        assert_eq!(decode("de ad be ef\n"), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        // G is not a digit
        assert_eq!(decode("1G2G"), vec![0x12]);
    }

    #[test]
    fn test_decode_garbage_shifts_pairing() {
        // odd raw length pads a nibble even though the digits alone are paired
        assert_eq!(decode("AB "), vec![0x0A]);
    }

    #[test]
    fn test_decode_parity_counts_code_units() {
        // 'é' is two bytes but one code unit, so the input is odd
        assert_eq!(decode("éAB"), vec![0x0A]);
        assert_eq!(decode("ééAB"), vec![0xAB]);
        // an astral character is a surrogate pair
        assert_eq!(decode("😀AB"), vec![0xAB]);
        assert_eq!(decode("😀ABC"), vec![0x0A, 0xBC]);
    }

    #[test]
    fn test_utf16_len() {
        assert_eq!(utf16_len(b"ABC"), 3);
        assert_eq!(utf16_len("é世".as_bytes()), 2);
        assert_eq!(utf16_len("😀".as_bytes()), 2);
        assert_eq!(utf16_len(&[0xFFu8, 0x80]), 1);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode("").is_empty());
        assert!(decode("zz").is_empty());
    }
}
