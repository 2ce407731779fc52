//! Example of transcoding a payload through every codec

use emx_transcode::{base64, hex, utf16, utf8, Codec};

fn main() -> anyhow::Result<()> {
    println!("=== Transcoding Example ===\n");

    // Basic auth header value
    let credentials = utf8::encode_str("user:secret");
    let header = format!("Basic {}", base64::encode(&credentials, base64::Variant::Standard));
    println!("Authorization: {}", header);

    // JWT-style segment: URL-safe, unpadded
    let claims = utf8::encode_str(r#"{"iss":"demo","exp":1700000000}"#);
    println!("JWT claims segment: {}", base64::encode_url_safe(&claims));

    // Text with a character outside the BMP
    let text = "naïve 😀";
    let units: Vec<u16> = text.encode_utf16().collect();
    println!("\n{:?}", text);
    println!("  UTF-8    : {}", hex::encode(&utf8::encode(&units)));
    println!("  UTF-16BE : {}", hex::encode(&utf16::encode(&units)));

    // Every codec through the uniform interface
    println!("\nRound trips:");
    let payload: [u8; 6] = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x7F];
    for codec in [Codec::Base64, Codec::Base64UrlSafe, Codec::Hex] {
        let encoded = codec.to_text(&payload);
        let decoded = codec.to_bytes(&encoded);
        let status = if decoded == payload { "✓ OK" } else { "✗ MISMATCH" };
        println!("  {:<10} {:<12} {}", codec, encoded, status);
    }
    for codec in [Codec::Utf16Be, Codec::Utf8] {
        let encoded = codec.to_bytes(text);
        let decoded = codec.to_text(&encoded);
        let status = if decoded == text { "✓ OK" } else { "✗ MISMATCH" };
        println!("  {:<10} {:<12} {}", codec, encoded.len(), status);
    }

    // Lenient decoding
    println!("\nLenient decoding:");
    let wrapped = base64::decode("aGVs\nbG8=\n");
    println!("  base64 with line breaks -> {:?}", String::from_utf8(wrapped)?);
    println!("  odd-length hex \"F\"      -> {:?}", hex::decode("F"));
    println!("  UTF-8 [C0 80]           -> {:?}", utf8::decode_to_string(&[0xC0, 0x80]));

    Ok(())
}
