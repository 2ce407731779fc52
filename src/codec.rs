//! Uniform access to every codec by name

use std::fmt;
use std::str::{self, FromStr, Utf8Error};

use crate::{base64, hex, utf16, utf8};

/// A codec selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// Base64, standard alphabet, padded
    Base64,
    /// Base64, URL-safe alphabet, unpadded
    Base64UrlSafe,
    /// Uppercase hexadecimal
    Hex,
    /// UTF-16 big-endian, no BOM
    Utf16Be,
    Utf8,
}

impl Codec {
    pub const ALL: [Codec; 5] = [
        Codec::Base64,
        Codec::Base64UrlSafe,
        Codec::Hex,
        Codec::Utf16Be,
        Codec::Utf8,
    ];

    /// Canonical name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Codec::Base64 => "base64",
            Codec::Base64UrlSafe => "base64url",
            Codec::Hex => "hex",
            Codec::Utf16Be => "utf16be",
            Codec::Utf8 => "utf8",
        }
    }

    /// True for codecs whose encoded form is text (Base64, Hex).
    ///
    /// For these, [`Codec::to_text`] encodes. For the UTF codecs the encoded
    /// form is bytes and [`Codec::to_bytes`] encodes.
    pub fn is_binary_to_text(self) -> bool {
        matches!(self, Codec::Base64 | Codec::Base64UrlSafe | Codec::Hex)
    }

    /// Render bytes as text
    pub fn to_text(self, bytes: &[u8]) -> String {
        match self {
            Codec::Base64 => base64::encode(bytes, base64::Variant::Standard),
            Codec::Base64UrlSafe => base64::encode(bytes, base64::Variant::UrlSafe),
            Codec::Hex => hex::encode(bytes),
            Codec::Utf16Be => utf16::decode_to_string(bytes),
            Codec::Utf8 => utf8::decode_to_string(bytes),
        }
    }

    /// Turn text into bytes
    pub fn to_bytes(self, text: &str) -> Vec<u8> {
        match self {
            Codec::Base64 | Codec::Base64UrlSafe => base64::decode(text),
            Codec::Hex => hex::decode(text),
            Codec::Utf16Be => utf16::encode_str(text),
            Codec::Utf8 => utf8::encode_str(text),
        }
    }

    /// Like [`Codec::to_bytes`], but for input read as raw bytes.
    ///
    /// Base64 and Hex skip anything outside their alphabet, including bytes
    /// that are not UTF-8. The UTF codecs need valid UTF-8 text.
    pub fn to_bytes_raw(self, input: &[u8]) -> Result<Vec<u8>, Utf8Error> {
        match self {
            Codec::Base64 | Codec::Base64UrlSafe => Ok(base64::decode(input)),
            Codec::Hex => Ok(hex::decode(input)),
            Codec::Utf16Be | Codec::Utf8 => str::from_utf8(input).map(|text| self.to_bytes(text)),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error type for codec name parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCodecError {
    pub name: String,
}

impl fmt::Display for UnknownCodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown codec '{}' (expected one of: base64, base64url, hex, utf16be, utf8)",
            self.name
        )
    }
}

impl std::error::Error for UnknownCodecError {}

impl FromStr for Codec {
    type Err = UnknownCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base64" => Ok(Codec::Base64),
            "base64url" | "base64-url" => Ok(Codec::Base64UrlSafe),
            "hex" => Ok(Codec::Hex),
            "utf16be" | "utf-16be" => Ok(Codec::Utf16Be),
            "utf8" | "utf-8" => Ok(Codec::Utf8),
            _ => Err(UnknownCodecError { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("base64".parse::<Codec>(), Ok(Codec::Base64));
        assert_eq!("Base64-URL".parse::<Codec>(), Ok(Codec::Base64UrlSafe));
        assert_eq!("HEX".parse::<Codec>(), Ok(Codec::Hex));
        assert_eq!("utf-16be".parse::<Codec>(), Ok(Codec::Utf16Be));
        assert_eq!("UTF-8".parse::<Codec>(), Ok(Codec::Utf8));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "rot13".parse::<Codec>().unwrap_err();
        assert_eq!(err.name, "rot13");
        assert!(err.to_string().contains("Unknown codec 'rot13'"));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for codec in Codec::ALL {
            assert_eq!(codec.to_string().parse::<Codec>(), Ok(codec));
        }
    }

    #[test]
    fn test_to_text() {
        let data = [0xFB, 0xFF];
        assert_eq!(Codec::Base64.to_text(&data), "+/8=");
        assert_eq!(Codec::Base64UrlSafe.to_text(&data), "-_8");
        assert_eq!(Codec::Hex.to_text(&data), "FBFF");
        assert_eq!(Codec::Utf16Be.to_text(&[0x00, 0x41]), "A");
        assert_eq!(Codec::Utf8.to_text(&[0xFF]), "\u{FFFD}");
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(Codec::Base64.to_bytes("+/8="), vec![0xFB, 0xFF]);
        assert_eq!(Codec::Base64UrlSafe.to_bytes("-_8"), vec![0xFB, 0xFF]);
        assert_eq!(Codec::Hex.to_bytes("fbff"), vec![0xFB, 0xFF]);
        assert_eq!(Codec::Utf16Be.to_bytes("A"), vec![0x00, 0x41]);
        assert_eq!(Codec::Utf8.to_bytes("é"), vec![0xC3, 0xA9]);
    }

    #[test]
    fn test_to_bytes_raw_skips_invalid_utf8() {
        assert_eq!(Codec::Base64.to_bytes_raw(b"+/\xFF8=\n"), Ok(vec![0xFB, 0xFF]));
        assert_eq!(Codec::Hex.to_bytes_raw(b"FB\xFF\xFEFF"), Ok(vec![0xFB, 0xFF]));
        assert!(Codec::Utf8.to_bytes_raw(b"\xFF").is_err());
        assert_eq!(Codec::Utf16Be.to_bytes_raw(b"A"), Ok(vec![0x00, 0x41]));
    }

    #[test]
    fn test_direction() {
        assert!(Codec::Hex.is_binary_to_text());
        assert!(!Codec::Utf8.is_binary_to_text());
    }
}
