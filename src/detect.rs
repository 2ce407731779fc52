//! Binary content detection
//!
//! Bytes are walked with the same sequence rules as [`crate::utf8::decode`];
//! text is checked one code unit at a time.

use crate::utf8::read_scalar;
use crate::REPLACEMENT_CHARACTER;

/// Reason why data is considered binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryReason {
    /// A C0 control character other than tab, LF, VT, FF or CR, or DEL
    ControlCharacter { offset: usize, value: u16 },
    /// A byte that does not start a well-formed UTF-8 sequence
    MalformedSequence { offset: usize },
    /// U+FFFD left behind by an earlier lossy decode
    ReplacementCharacter { offset: usize },
}

impl BinaryReason {
    /// Position of the first offending byte or code unit
    pub fn offset(&self) -> usize {
        match *self {
            BinaryReason::ControlCharacter { offset, .. }
            | BinaryReason::MalformedSequence { offset }
            | BinaryReason::ReplacementCharacter { offset } => offset,
        }
    }
}

impl std::fmt::Display for BinaryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryReason::ControlCharacter { offset, value } => {
                write!(f, "control character 0x{:02X} at offset {}", value, offset)
            }
            BinaryReason::MalformedSequence { offset } => {
                write!(f, "malformed UTF-8 sequence at offset {}", offset)
            }
            BinaryReason::ReplacementCharacter { offset } => {
                write!(f, "replacement character at offset {}", offset)
            }
        }
    }
}

/// Result of binary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Well-formed, printable text
    Text,
    /// Data that should be treated as binary
    Binary { reason: BinaryReason },
}

impl Detection {
    pub fn is_binary(&self) -> bool {
        matches!(self, Detection::Binary { .. })
    }

    pub fn reason(&self) -> Option<BinaryReason> {
        match self {
            Detection::Text => None,
            Detection::Binary { reason } => Some(*reason),
        }
    }
}

/// Control characters that mark data as binary: 0x00-0x08, 0x0E-0x1F, 0x7F.
pub fn is_binary_control(code: u32) -> bool {
    code <= 0x08 || (0x0E..=0x1F).contains(&code) || code == 0x7F
}

/// Classify a byte sequence, stopping at the first binary indicator.
pub fn classify_bytes(bytes: &[u8]) -> Detection {
    let mut offset = 0;
    while offset < bytes.len() {
        let Some((scalar, len)) = read_scalar(bytes, offset) else {
            return Detection::Binary {
                reason: BinaryReason::MalformedSequence { offset },
            };
        };
        if len == 1 && is_binary_control(scalar) {
            return Detection::Binary {
                reason: BinaryReason::ControlCharacter {
                    offset,
                    value: scalar as u16,
                },
            };
        }
        offset += len;
    }
    Detection::Text
}

/// Classify UTF-16 code units, stopping at the first binary indicator.
pub fn classify_units(units: &[u16]) -> Detection {
    for (offset, &unit) in units.iter().enumerate() {
        if unit == REPLACEMENT_CHARACTER {
            return Detection::Binary {
                reason: BinaryReason::ReplacementCharacter { offset },
            };
        }
        if is_binary_control(u32::from(unit)) {
            return Detection::Binary {
                reason: BinaryReason::ControlCharacter { offset, value: unit },
            };
        }
    }
    Detection::Text
}

pub fn looks_like_binary(bytes: &[u8]) -> bool {
    classify_bytes(bytes).is_binary()
}

pub fn string_looks_like_binary(units: &[u16]) -> bool {
    classify_units(units).is_binary()
}

/// [`string_looks_like_binary`] for a `&str`.
pub fn str_looks_like_binary(text: &str) -> bool {
    text.chars()
        .any(|c| c == char::REPLACEMENT_CHARACTER || is_binary_control(u32::from(c)))
}
