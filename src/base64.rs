//! Base64 codec (standard and URL-safe alphabets)

/// Padding character appended by [`Variant::Standard`].
pub const PAD: u8 = b'=';

const STANDARD_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Sentinel for characters outside both alphabets.
const NO_MATCH: u8 = 0xFF;

/// Inverse alphabet indexed by character code. Both variants decode through
/// the same table, so `+`/`-` map to 62 and `/`/`_` map to 63.
const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [NO_MATCH; 128];
    let mut i = 0;
    while i < 64 {
        table[STANDARD_ALPHABET[i] as usize] = i as u8;
        table[URL_SAFE_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Alphabet and padding selection for [`encode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// `+` and `/`, padded with `=` to a multiple of 4 characters
    #[default]
    Standard,
    /// `-` and `_`, never padded
    UrlSafe,
}

impl Variant {
    fn alphabet(self) -> &'static [u8; 64] {
        match self {
            Variant::Standard => STANDARD_ALPHABET,
            Variant::UrlSafe => URL_SAFE_ALPHABET,
        }
    }

    /// Whether encoded output is padded with `=`
    pub fn pads(self) -> bool {
        matches!(self, Variant::Standard)
    }
}

/// Exact length of `encode` output for `n` input bytes.
pub fn encoded_len(n: usize, variant: Variant) -> usize {
    let full = n / 3 * 4;
    match n % 3 {
        0 => full,
        _ if variant.pads() => full + 4,
        rem => full + rem + 1,
    }
}

/// Encode bytes, emitting 4 symbols per 3-byte group.
///
/// A trailing group of 1 or 2 bytes yields 2 or 3 symbols, followed by
/// `==` or `=` when the variant pads.
pub fn encode<T: AsRef<[u8]> + ?Sized>(input: &T, variant: Variant) -> String {
    let input = input.as_ref();
    let alphabet = variant.alphabet();
    let symbol = |value: u8| char::from(alphabet[usize::from(value)]);

    let mut output = String::with_capacity(encoded_len(input.len(), variant));
    let mut accum = 0u8;
    let mut phase = 0u8;

    for &byte in input {
        match phase {
            0 => {
                output.push(symbol(byte >> 2));
                accum = (byte & 0x03) << 4;
            }
            1 => {
                output.push(symbol(accum | byte >> 4));
                accum = (byte & 0x0F) << 2;
            }
            _ => {
                output.push(symbol(accum | byte >> 6));
                output.push(symbol(byte & 0x3F));
            }
        }
        phase = (phase + 1) % 3;
    }

    if phase > 0 {
        output.push(symbol(accum));
        if variant.pads() {
            output.push(char::from(PAD));
            if phase == 1 {
                output.push(char::from(PAD));
            }
        }
    }

    output
}

/// Shorthand for `encode(input, Variant::UrlSafe)`.
pub fn encode_url_safe<T: AsRef<[u8]> + ?Sized>(input: &T) -> String {
    encode(input, Variant::UrlSafe)
}

/// Upper bound on the decoded size of `input`.
///
/// Up to two trailing `=` are ignored, then the remaining length `L` maps to
/// `3L/4`, `3(L-1)/4`, `3(L-2)/4 + 1` or `3(L-3)/4 + 2` by `L % 4`. A
/// remainder of 1 cannot come from a well-formed encoding but is still
/// accepted.
pub fn decoded_len_estimate<T: AsRef<[u8]> + ?Sized>(input: &T) -> usize {
    let input = input.as_ref();
    let mut len = input.len();
    if len > 0 && input[len - 1] == PAD {
        len -= 1;
        if len > 0 && input[len - 1] == PAD {
            len -= 1;
        }
    }
    match len % 4 {
        0 => 3 * len / 4,
        1 => 3 * (len - 1) / 4,
        2 => 3 * (len - 2) / 4 + 1,
        _ => 3 * (len - 3) / 4 + 2,
    }
}

/// Decode Base64 text in either alphabet.
///
/// Characters outside the alphabets are skipped, `=` and whitespace
/// included. Every 4 symbols produce 3 bytes; a trailing group of 2 or 3
/// symbols produces 1 or 2 bytes and a lone trailing symbol produces none.
pub fn decode<T: AsRef<[u8]> + ?Sized>(input: &T) -> Vec<u8> {
    let input = input.as_ref();
    let mut output = Vec::with_capacity(decoded_len_estimate(input));
    let mut accum = 0u8;
    let mut phase = 0u8;

    for &c in input {
        let Some(value) = symbol_value(c) else {
            continue;
        };
        match phase {
            0 => accum = value << 2,
            1 => {
                output.push(accum | value >> 4);
                accum = (value & 0x0F) << 4;
            }
            2 => {
                output.push(accum | value >> 2);
                accum = (value & 0x03) << 6;
            }
            _ => output.push(accum | value),
        }
        phase = (phase + 1) % 4;
    }

    output
}

fn symbol_value(c: u8) -> Option<u8> {
    match DECODE_TABLE.get(usize::from(c)) {
        Some(&NO_MATCH) | None => None,
        Some(&value) => Some(value),
    }
}
