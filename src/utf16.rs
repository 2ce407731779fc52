//! UTF-16 big-endian codec

use crate::REPLACEMENT_CHARACTER;

/// Encode code units as big-endian byte pairs. No byte-order mark is written.
pub fn encode(units: &[u16]) -> Vec<u8> {
    let mut output = Vec::with_capacity(units.len() * 2);
    for unit in units {
        output.extend_from_slice(&unit.to_be_bytes());
    }
    output
}

/// Encode a string's UTF-16 form as big-endian bytes.
pub fn encode_str(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Decode big-endian byte pairs into code units.
///
/// Surrogates are passed through unpaired-or-not; an odd trailing byte
/// becomes one U+FFFD.
pub fn decode(bytes: &[u8]) -> Vec<u16> {
    let pairs = bytes.chunks_exact(2);
    let trailing = !pairs.remainder().is_empty();

    let mut units = Vec::with_capacity(bytes.len() / 2 + usize::from(trailing));
    units.extend(pairs.map(|pair| u16::from_be_bytes([pair[0], pair[1]])));
    if trailing {
        units.push(REPLACEMENT_CHARACTER);
    }
    units
}

/// Decode to a `String`, replacing unpaired surrogates with U+FFFD.
pub fn decode_to_string(bytes: &[u8]) -> String {
    String::from_utf16_lossy(&decode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_big_endian() {
        assert_eq!(encode(&[0x0041, 0x20AC]), vec![0x00, 0x41, 0x20, 0xAC]);
        assert_eq!(encode_str("A€"), vec![0x00, 0x41, 0x20, 0xAC]);
        assert!(encode(&[]).is_empty());
    }

    #[test]
    fn test_encode_str_surrogate_pair() {
        assert_eq!(encode_str("😀"), vec![0xD8, 0x3D, 0xDE, 0x00]);
    }

    #[test]
    fn test_decode_pairs() {
        assert_eq!(decode(&[0x00, 0x41, 0x20, 0xAC]), vec![0x0041, 0x20AC]);
        assert_eq!(decode_to_string(&[0xD8, 0x3D, 0xDE, 0x00]), "😀");
    }

    #[test]
    fn test_decode_odd_trailing_byte() {
        assert_eq!(decode(&[0x00, 0x41, 0x42]), vec![0x0041, REPLACEMENT_CHARACTER]);
        assert_eq!(decode(&[0x42]), vec![REPLACEMENT_CHARACTER]);
    }

    #[test]
    fn test_decode_keeps_bare_surrogate() {
        assert_eq!(decode(&[0xD8, 0x00]), vec![0xD800]);
        assert_eq!(decode_to_string(&[0xD8, 0x00]), "\u{FFFD}");
    }
}
