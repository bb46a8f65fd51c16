//! Error types for SPML payload decoding.

use core::fmt;

/// Failure modes of the zlib inflate loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZlibError {
    /// The stream requires a preset dictionary, which SPML never supplies.
    NeedDict,
    /// The stream is not a valid zlib stream or is internally corrupted.
    Data,
    /// The inflater ran out of memory.
    Mem,
    /// Input ended before the stream signalled completion.
    Truncated,
}

impl fmt::Display for ZlibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZlibError::NeedDict => write!(f, "zlib stream requires a preset dictionary"),
            ZlibError::Data => write!(f, "invalid or corrupted zlib stream"),
            ZlibError::Mem => write!(f, "zlib inflater out of memory"),
            ZlibError::Truncated => write!(f, "zlib stream ended before completion"),
        }
    }
}

/// Errors that can occur when decoding a data channel payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// An encoding attribute was missing or its value was not recognized.
    UnknownEncoding {
        /// Which attribute failed to resolve (`dataFormat`, `coding`, `byteOrder`).
        attribute: &'static str,
        /// The raw attribute value, or `"(missing)"` when absent.
        value: String,
    },
    /// A coding or element type the format declares but this reader does not
    /// support (HEX, BINARY, STRING).
    UnsupportedEncoding(&'static str),
    /// The Base64 stream contained symbols outside the RFC 4648 alphabet or
    /// was otherwise malformed.
    Base64Decode(String),
    /// Zlib inflation failed.
    Zlib(ZlibError),
    /// An ASCII payload token did not parse as a number.
    NonNumericToken {
        /// The offending token.
        token: String,
    },
    /// The decoded byte buffer is not a whole number of elements.
    TrailingBytes {
        /// Element width in bytes.
        width: usize,
        /// Bytes left over after the last full element.
        remainder: usize,
    },
    /// Decoded element count differs from the count the axis system declares.
    CountMismatch {
        /// Count expected from the resolved axis sizes.
        expected: usize,
        /// Count actually decoded.
        actual: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownEncoding { attribute, value } => {
                write!(f, "unrecognized {attribute} attribute: {value:?}")
            }
            DecodeError::UnsupportedEncoding(what) => {
                write!(f, "unsupported encoding: {what}")
            }
            DecodeError::Base64Decode(detail) => {
                write!(f, "Base64 decode failed: {detail}")
            }
            DecodeError::Zlib(e) => write!(f, "zlib inflate failed: {e}"),
            DecodeError::NonNumericToken { token } => {
                write!(f, "ASCII payload token {token:?} is not a number")
            }
            DecodeError::TrailingBytes { width, remainder } => {
                write!(
                    f,
                    "payload length is not a multiple of the element width: \
                     {remainder} trailing byte(s) with width {width}"
                )
            }
            DecodeError::CountMismatch { expected, actual } => {
                write!(
                    f,
                    "decoded element count {actual} does not match the \
                     declared count {expected}"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}
