//! Base64 unwrapping of binary payloads.
//!
//! SPML writers wrap Base64 text freely, so whitespace (`\n`, `\r`, space,
//! tab) may appear anywhere in the stream and is stripped before decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::DecodeError;

/// Decode a Base64 payload, ignoring embedded whitespace.
///
/// Anything outside the RFC 4648 alphabet (after whitespace stripping) fails
/// as [`DecodeError::Base64Decode`].
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let stripped: Vec<u8> = text
        .bytes()
        .filter(|b| !matches!(b, b'\n' | b'\r' | b' ' | b'\t'))
        .collect();
    STANDARD
        .decode(&stripped)
        .map_err(|e| DecodeError::Base64Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    #[test]
    fn roundtrip_all_lengths() {
        // Covers lengths with 0, 1, and 2 padding bytes.
        for len in 0..300usize {
            let original: Vec<u8> = (0..len).map(|i| (i * 7 % 256) as u8).collect();
            let decoded = decode(&encode(&original)).unwrap();
            assert_eq!(decoded, original, "length {len}");
        }
    }

    #[test]
    fn whitespace_is_ignored() {
        let encoded = encode(b"hello world");
        let mut noisy = String::new();
        for (i, ch) in encoded.chars().enumerate() {
            noisy.push(ch);
            if i % 3 == 0 {
                noisy.push('\n');
            }
            if i % 5 == 0 {
                noisy.push('\t');
            }
        }
        assert_eq!(decode(&noisy).unwrap(), b"hello world");
    }

    #[test]
    fn invalid_symbol_fails() {
        let err = decode("AAA*").unwrap_err();
        assert!(matches!(err, DecodeError::Base64Decode(_)));
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode(" \n\t\r").unwrap().is_empty());
    }
}
