//! Payload decoding for SPML data channels.
//!
//! An SPML data channel stores its samples as text: whitespace-separated
//! ASCII numbers, Base64-wrapped binary, or zlib-compressed binary wrapped in
//! Base64. This crate unwraps those envelopes and converts the fixed-width
//! binary element types (four integer widths, two float widths, both byte
//! orders) into `Vec<f64>`.
//!
//! ```
//! use spml_codec::{decode, Coding, ElementType};
//!
//! let samples = decode("1 2 3", Coding::Ascii, ElementType::Float64, None, Some(3)).unwrap();
//! assert_eq!(samples, vec![1.0, 2.0, 3.0]);
//! ```

pub mod b64;
pub mod decode;
pub mod encoding;
pub mod error;
pub mod inflate;
pub mod typed;

pub use decode::decode;
pub use encoding::{ByteOrder, Coding, ElementType};
pub use error::{DecodeError, ZlibError};
