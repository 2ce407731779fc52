//! UTF-8 codec over UTF-16 code units
//!
//! The encoder walks code units: a high surrogate followed by a low
//! surrogate becomes one 4-byte sequence, while any other unit above 0x7FF,
//! a bare surrogate included, becomes a 3-byte sequence of its raw value.
//! Bare surrogates therefore round-trip even though strict UTF-8 has no
//! encoding for them.
//!
//! The decoder substitutes U+FFFD for each lead byte that does not start a
//! well-formed sequence, then resumes at the following byte.

use crate::REPLACEMENT_CHARACTER;

pub use crate::detect::{looks_like_binary, string_looks_like_binary};

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;
const MAX_SCALAR: u32 = 0x10FFFF;

/// Scalar value of the surrogate pair starting at `units[at]`, if any.
fn surrogate_pair_at(units: &[u16], at: usize) -> Option<u32> {
    let high = *units.get(at)?;
    let low = *units.get(at + 1)?;
    if HIGH_SURROGATES.contains(&high) && LOW_SURROGATES.contains(&low) {
        Some(((u32::from(high - 0xD800) << 10) | u32::from(low - 0xDC00)) + 0x10000)
    } else {
        None
    }
}

/// Exact length of `encode` output.
pub fn encoded_len(units: &[u16]) -> usize {
    let mut len = 0;
    let mut at = 0;
    while at < units.len() {
        if surrogate_pair_at(units, at).is_some() {
            len += 4;
            at += 2;
            continue;
        }
        len += match units[at] {
            0x0000..=0x007F => 1,
            0x0080..=0x07FF => 2,
            _ => 3,
        };
        at += 1;
    }
    len
}

/// Encode UTF-16 code units as UTF-8.
pub fn encode(units: &[u16]) -> Vec<u8> {
    let mut output = Vec::with_capacity(encoded_len(units));
    let mut at = 0;

    while at < units.len() {
        if let Some(scalar) = surrogate_pair_at(units, at) {
            output.extend_from_slice(&[
                0xF0 | (scalar >> 18) as u8,
                0x80 | ((scalar >> 12) & 0x3F) as u8,
                0x80 | ((scalar >> 6) & 0x3F) as u8,
                0x80 | (scalar & 0x3F) as u8,
            ]);
            at += 2;
            continue;
        }

        let unit = units[at];
        match unit {
            0x0000..=0x007F => output.push(unit as u8),
            0x0080..=0x07FF => output.extend_from_slice(&[
                0xC0 | (unit >> 6) as u8,
                0x80 | (unit & 0x3F) as u8,
            ]),
            _ => output.extend_from_slice(&[
                0xE0 | (unit >> 12) as u8,
                0x80 | ((unit >> 6) & 0x3F) as u8,
                0x80 | (unit & 0x3F) as u8,
            ]),
        }
        at += 1;
    }

    output
}

/// Encode a string as UTF-8 through its UTF-16 form.
pub fn encode_str(text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();
    encode(&units)
}

fn is_continuation(byte: u8) -> bool {
    (0x80..=0xBF).contains(&byte)
}

/// Read the sequence led by `bytes[at]`.
///
/// Returns the scalar value and the sequence length, or `None` when the lead
/// byte is rejected: a stray continuation byte, an over-long lead (0xC0,
/// 0xC1), a lead above 0xF4, a missing or out-of-range continuation byte, an
/// over-long 3- or 4-byte form, or a scalar above U+10FFFF.
pub(crate) fn read_scalar(bytes: &[u8], at: usize) -> Option<(u32, usize)> {
    let lead = *bytes.get(at)?;
    let continuation = |offset: usize| {
        bytes
            .get(at + offset)
            .copied()
            .filter(|&byte| is_continuation(byte))
            .map(|byte| u32::from(byte & 0x3F))
    };

    match lead {
        0x00..=0x7F => Some((u32::from(lead), 1)),
        0xC2..=0xDF => {
            let c2 = continuation(1)?;
            Some(((u32::from(lead & 0x1F) << 6) | c2, 2))
        }
        0xE0..=0xEF => {
            let c2 = continuation(1)?;
            let c3 = continuation(2)?;
            // 0xE0 0x80..=0x9F encodes a value below 0x800
            if lead == 0xE0 && c2 < 0x20 {
                return None;
            }
            Some(((u32::from(lead & 0x0F) << 12) | (c2 << 6) | c3, 3))
        }
        0xF0..=0xF4 => {
            let c2 = continuation(1)?;
            let c3 = continuation(2)?;
            let c4 = continuation(3)?;
            // 0xF0 0x80..=0x8F encodes a value below 0x10000
            if lead == 0xF0 && c2 < 0x10 {
                return None;
            }
            let scalar = (u32::from(lead & 0x07) << 18) | (c2 << 12) | (c3 << 6) | c4;
            (scalar <= MAX_SCALAR).then_some((scalar, 4))
        }
        _ => None,
    }
}

/// Decode UTF-8 into code units, one U+FFFD per rejected lead byte.
///
/// Scalars above U+FFFF are split into a surrogate pair. 3-byte sequences
/// in the surrogate range decode to the bare surrogate they encode.
pub fn decode(bytes: &[u8]) -> Vec<u16> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut at = 0;

    while at < bytes.len() {
        match read_scalar(bytes, at) {
            Some((scalar, len)) => {
                if scalar >= 0x10000 {
                    let offset = scalar - 0x10000;
                    units.push(0xD800 + (offset >> 10) as u16);
                    units.push(0xDC00 + (offset & 0x3FF) as u16);
                } else {
                    units.push(scalar as u16);
                }
                at += len;
            }
            None => {
                units.push(REPLACEMENT_CHARACTER);
                at += 1;
            }
        }
    }

    units
}

/// Decode to a `String`, replacing bare surrogates with U+FFFD.
pub fn decode_to_string(bytes: &[u8]) -> String {
    String::from_utf16_lossy(&decode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FFFD: u16 = REPLACEMENT_CHARACTER;

    #[test]
    fn test_encode_widths() {
        assert_eq!(encode(&[0x41]), vec![0x41]);
        assert_eq!(encode(&[0xE9]), vec![0xC3, 0xA9]);
        assert_eq!(encode(&[0x20AC]), vec![0xE2, 0x82, 0xAC]);
        assert_eq!(encode_str("é€"), vec![0xC3, 0xA9, 0xE2, 0x82, 0xAC]);
    }

    #[test]
    fn test_encode_surrogate_pair() {
        assert_eq!(encode(&[0xD83D, 0xDE00]), vec![0xF0, 0x9F, 0x98, 0x80]);
        assert_eq!(encode_str("😀"), "😀".as_bytes());
    }

    #[test]
    fn test_encode_bare_surrogates() {
        assert_eq!(encode(&[0xD800]), vec![0xED, 0xA0, 0x80]);
        assert_eq!(encode(&[0xDC00, 0x41]), vec![0xED, 0xB0, 0x80, 0x41]);
        // low before high is not a pair
        assert_eq!(encode(&[0xDE00, 0xD83D]).len(), 6);
    }

    #[test]
    fn test_encoded_len() {
        let units = [0x41, 0xE9, 0x20AC, 0xD83D, 0xDE00, 0xD800];
        assert_eq!(encoded_len(&units), 1 + 2 + 3 + 4 + 3);
        assert_eq!(encoded_len(&units), encode(&units).len());
    }

    #[test]
    fn test_decode_surrogate_pair() {
        assert_eq!(decode(&[0xF0, 0x9F, 0x98, 0x80]), vec![0xD83D, 0xDE00]);
        assert_eq!(decode_to_string(&[0xF0, 0x9F, 0x98, 0x80]), "😀");
    }

    #[test]
    fn test_decode_invalid_lead() {
        assert_eq!(decode(&[0xFF]), vec![FFFD]);
        assert_eq!(decode(&[0x80]), vec![FFFD]);
        assert_eq!(decode(&[0xF5, 0x80, 0x80, 0x80]), vec![FFFD; 4]);
    }

    #[test]
    fn test_decode_overlong() {
        assert_eq!(decode(&[0xC0, 0x80]), vec![FFFD, FFFD]);
        assert_eq!(decode(&[0xE0, 0x80, 0x80]), vec![FFFD; 3]);
        assert_eq!(decode(&[0xF0, 0x80, 0x80, 0x80]), vec![FFFD; 4]);
        // smallest non-over-long forms
        assert_eq!(decode(&[0xE0, 0xA0, 0x80]), vec![0x0800]);
        assert_eq!(decode(&[0xF0, 0x90, 0x80, 0x80]), vec![0xD800, 0xDC00]);
    }

    #[test]
    fn test_decode_above_max_scalar() {
        assert_eq!(decode(&[0xF4, 0x8F, 0xBF, 0xBF]), vec![0xDBFF, 0xDFFF]);
        assert_eq!(decode(&[0xF4, 0x90, 0x80, 0x80]), vec![FFFD; 4]);
    }

    #[test]
    fn test_decode_truncated_resumes_next_byte() {
        assert_eq!(decode(&[0xE2, 0x82]), vec![FFFD, FFFD]);
        assert_eq!(decode(&[0xE2, 0x82, 0x41]), vec![FFFD, FFFD, 0x41]);
        assert_eq!(decode(&[0xC3, 0x41]), vec![FFFD, 0x41]);
    }

    #[test]
    fn test_decode_bare_surrogate_round_trip() {
        assert_eq!(decode(&encode(&[0xD800])), vec![0xD800]);
        assert_eq!(decode(&encode(&[0x41, 0xDFFF, 0x42])), vec![0x41, 0xDFFF, 0x42]);
    }

    #[test]
    fn test_decode_to_string_lossy() {
        assert_eq!(decode_to_string(b"hello"), "hello");
        assert_eq!(decode_to_string(&[0x68, 0xFF, 0x69]), "h\u{FFFD}i");
    }
}
