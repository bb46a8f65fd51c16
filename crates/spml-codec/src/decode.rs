//! The composed payload decoder: (coding, element type, byte order) → samples.

use log::debug;

use crate::b64;
use crate::encoding::{ByteOrder, Coding, ElementType};
use crate::error::DecodeError;
use crate::inflate;
use crate::typed;

/// Decode a channel payload into `f64` samples.
///
/// `byte_order` may be `None` for ASCII payloads, which carry no byte order;
/// the binary paths demand a resolved order. When `expected_count` is given,
/// a differing result length fails as [`DecodeError::CountMismatch`]; the
/// payload is never truncated or padded to fit.
pub fn decode(
    text: &str,
    coding: Coding,
    element_type: ElementType,
    byte_order: Option<ByteOrder>,
    expected_count: Option<usize>,
) -> Result<Vec<f64>, DecodeError> {
    let samples = match coding {
        Coding::Ascii => decode_ascii(text)?,
        Coding::Base64 => {
            let raw = b64::decode(text)?;
            typed::bytes_to_f64(&raw, element_type, require_order(byte_order)?)?
        }
        Coding::ZlibBase64 => {
            let packed = b64::decode(text)?;
            let raw = inflate::inflate(&packed)?;
            typed::bytes_to_f64(&raw, element_type, require_order(byte_order)?)?
        }
        Coding::Hex => return Err(DecodeError::UnsupportedEncoding("HEX coding")),
        Coding::Binary => return Err(DecodeError::UnsupportedEncoding("BINARY coding")),
    };

    if let Some(expected) = expected_count {
        if samples.len() != expected {
            return Err(DecodeError::CountMismatch {
                expected,
                actual: samples.len(),
            });
        }
    }
    debug!("decoded {} samples ({:?}/{:?})", samples.len(), coding, element_type);
    Ok(samples)
}

fn require_order(byte_order: Option<ByteOrder>) -> Result<ByteOrder, DecodeError> {
    byte_order.ok_or(DecodeError::UnknownEncoding {
        attribute: "byteOrder",
        value: "(missing)".into(),
    })
}

fn decode_ascii(text: &str) -> Result<Vec<f64>, DecodeError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| DecodeError::NonNumericToken {
                token: token.into(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use std::io::Write;

    fn f32_le_payload(values: &[f32]) -> Vec<u8> {
        let mut buf = Vec::new();
        for v in values {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        buf
    }

    #[test]
    fn ascii_roundtrip_various_lengths() {
        for n in [0usize, 1, 2, 7, 64] {
            let original: Vec<f64> = (0..n).map(|i| i as f64 * 0.25 - 3.0).collect();
            let text = original
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let decoded =
                decode(&text, Coding::Ascii, ElementType::Float64, None, Some(n)).unwrap();
            for (a, b) in decoded.iter().zip(&original) {
                assert!((a - b).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn ascii_mixed_whitespace() {
        let decoded = decode(
            "1\n2\t3  4\r\n5 6",
            Coding::Ascii,
            ElementType::Float32,
            None,
            Some(6),
        )
        .unwrap();
        assert_eq!(decoded, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn ascii_non_numeric_token() {
        let err = decode("1 2 abc 4", Coding::Ascii, ElementType::Float64, None, None)
            .unwrap_err();
        assert_eq!(err, DecodeError::NonNumericToken { token: "abc".into() });
    }

    #[test]
    fn ascii_count_mismatch() {
        let err =
            decode("1 2 3", Coding::Ascii, ElementType::Float64, None, Some(6)).unwrap_err();
        assert_eq!(err, DecodeError::CountMismatch { expected: 6, actual: 3 });
    }

    #[test]
    fn base64_float32_payload() {
        let text = STANDARD.encode(f32_le_payload(&[1.0, 2.5, -3.0]));
        let decoded = decode(
            &text,
            Coding::Base64,
            ElementType::Float32,
            Some(ByteOrder::Little),
            Some(3),
        )
        .unwrap();
        assert_eq!(decoded, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn base64_count_mismatch_never_pads() {
        let text = STANDARD.encode(f32_le_payload(&[1.0, 2.0]));
        let err = decode(
            &text,
            Coding::Base64,
            ElementType::Float32,
            Some(ByteOrder::Little),
            Some(4),
        )
        .unwrap_err();
        assert_eq!(err, DecodeError::CountMismatch { expected: 4, actual: 2 });
    }

    #[test]
    fn base64_missing_byte_order() {
        let text = STANDARD.encode(f32_le_payload(&[1.0]));
        let err = decode(&text, Coding::Base64, ElementType::Float32, None, None).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownEncoding { attribute: "byteOrder", .. }
        ));
    }

    #[test]
    fn zlib_base64_matches_plain_ascii() {
        let values = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut enc =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(&f32_le_payload(&values)).unwrap();
        let text = STANDARD.encode(enc.finish().unwrap());

        let from_zlib = decode(
            &text,
            Coding::ZlibBase64,
            ElementType::Float32,
            Some(ByteOrder::Little),
            Some(6),
        )
        .unwrap();
        let from_ascii = decode(
            "1 2 3 4 5 6",
            Coding::Ascii,
            ElementType::Float32,
            None,
            Some(6),
        )
        .unwrap();
        assert_eq!(from_zlib, from_ascii);
    }

    #[test]
    fn hex_and_binary_unsupported() {
        for coding in [Coding::Hex, Coding::Binary] {
            let err = decode("00", coding, ElementType::UInt8, Some(ByteOrder::Little), None)
                .unwrap_err();
            assert!(matches!(err, DecodeError::UnsupportedEncoding(_)));
        }
    }
}
