//! Example demonstrating binary content detection
//!
//! Shows which inputs are classified as binary and why.

use emx_transcode::{classify_bytes, classify_units, utf8, BinaryReason, Detection};

fn main() -> anyhow::Result<()> {
    println!("=== Binary Content Detection Example ===\n");

    let samples: Vec<(&str, Vec<u8>)> = vec![
        ("README.md", b"# Project\n\nNormal text content.\n".to_vec()),
        ("unicode.txt", "héllo wörld 😀\r\n".as_bytes().to_vec()),
        ("image.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46]),
        ("terminal.log", b"\x1B[31mred\x1B[0m\n".to_vec()),
        ("overlong.bin", vec![0x41, 0xC0, 0x80]),
        ("truncated.txt", vec![0x63, 0x61, 0x66, 0xC3]),
    ];

    println!("Detection Results:");
    println!("-----------------");
    for (i, (name, data)) in samples.iter().enumerate() {
        let reason_str = match classify_bytes(data) {
            Detection::Text => "None (text)".to_string(),
            Detection::Binary { reason } => match reason {
                BinaryReason::ControlCharacter { .. } => format!("Control character ({})", reason),
                BinaryReason::MalformedSequence { .. } => format!("Invalid UTF-8 ({})", reason),
                BinaryReason::ReplacementCharacter { .. } => format!("Lossy text ({})", reason),
            },
        };

        println!("{}. {} - {} bytes | Reason: {}", i + 1, name, data.len(), reason_str);
    }

    // A lossy decode leaves U+FFFD behind, which the text check picks up
    println!("\nAfter lossy decoding:");
    for (name, data) in &samples {
        let units = utf8::decode(data);
        let binary = classify_units(&units).is_binary();
        println!("  {}: {}", name, if binary { "binary" } else { "text" });
    }

    Ok(())
}
