//! # emx-transcode
//!
//! Whole-buffer transcoding between raw bytes and text, plus a heuristic
//! that tells whether data "looks like binary".
//!
//! ## Codecs
//!
//! | Module     | Bytes → text          | Text → bytes           |
//! |------------|-----------------------|------------------------|
//! | [`base64`] | [`base64::encode`]    | [`base64::decode`]     |
//! | [`hex`]    | [`hex::encode`]       | [`hex::decode`]        |
//! | [`utf16`]  | [`utf16::decode`]     | [`utf16::encode`]      |
//! | [`utf8`]   | [`utf8::decode`]      | [`utf8::encode`]       |
//!
//! Text on the UTF side is a slice of UTF-16 code units (`&[u16]`), so bare
//! surrogates survive a round trip. `&str`/`String` helpers are provided for
//! the common case.
//!
//! ## Decoding never fails
//!
//! Malformed input degrades instead of erroring:
//! - Base64 and Hex skip every character outside their alphabet
//!   (`=`, whitespace and line breaks included).
//! - UTF-8 replaces each rejected lead byte with one U+FFFD and resumes at
//!   the next byte.
//! - UTF-16BE replaces an unpaired trailing byte with U+FFFD.
//!
//! ```
//! use emx_transcode::{base64, utf8};
//!
//! let header = base64::encode(&utf8::encode_str("user:secret"), base64::Variant::Standard);
//! assert_eq!(header, "dXNlcjpzZWNyZXQ=");
//! assert_eq!(base64::decode("dXNl\ncjpz ZWNyZXQ="), b"user:secret");
//! ```
//!
//! ## Binary Detection Rules
//!
//! Data is considered binary at the first:
//! 1. C0 control character other than tab, LF, VT, FF, CR (or DEL)
//! 2. Byte that cannot start a well-formed UTF-8 sequence at its position
//! 3. U+FFFD in text (a sign that an earlier decode already lost data)
//!
//! See [`detect`] for the reasons reported by [`classify_bytes`].

pub mod base64;
pub mod codec;
pub mod detect;
pub mod hex;
#[cfg(feature = "cli")]
pub mod scan;
pub mod utf16;
pub mod utf8;

/// U+FFFD, substituted for undecodable input.
pub const REPLACEMENT_CHARACTER: u16 = 0xFFFD;

pub use crate::codec::{Codec, UnknownCodecError};
pub use crate::detect::{
    classify_bytes, classify_units, looks_like_binary, str_looks_like_binary,
    string_looks_like_binary, BinaryReason, Detection,
};
#[cfg(feature = "cli")]
pub use crate::scan::{ScanEntry, ScanError, ScanOptions};
