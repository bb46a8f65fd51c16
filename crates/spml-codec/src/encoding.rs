//! The three encoding attributes of an SPML data channel, as sum types.
//!
//! Each attribute resolves to a known variant up front or fails with
//! [`DecodeError::UnknownEncoding`] before any decoding starts.

use crate::error::DecodeError;

fn missing(attribute: &'static str) -> DecodeError {
    DecodeError::UnknownEncoding {
        attribute,
        value: "(missing)".into(),
    }
}

/// Fixed-width binary scalar representation of a payload element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    UInt8,
    UInt16,
    UInt32,
    /// Declared by the format but not decodable to samples.
    String,
}

impl ElementType {
    /// Resolve a `dataFormat` attribute value.
    pub fn from_attr(value: Option<&str>) -> Result<Self, DecodeError> {
        match value {
            Some("FLOAT32") => Ok(ElementType::Float32),
            Some("FLOAT64") => Ok(ElementType::Float64),
            Some("INT8") => Ok(ElementType::Int8),
            Some("INT16") => Ok(ElementType::Int16),
            Some("INT32") => Ok(ElementType::Int32),
            Some("UINT8") => Ok(ElementType::UInt8),
            Some("UINT16") => Ok(ElementType::UInt16),
            Some("UINT32") => Ok(ElementType::UInt32),
            Some("STRING") => Ok(ElementType::String),
            Some(other) => Err(DecodeError::UnknownEncoding {
                attribute: "dataFormat",
                value: other.into(),
            }),
            None => Err(missing("dataFormat")),
        }
    }

    /// Element width in bytes; zero for the non-numeric `String` type.
    pub fn width(self) -> usize {
        match self {
            ElementType::Int8 | ElementType::UInt8 => 1,
            ElementType::Int16 | ElementType::UInt16 => 2,
            ElementType::Float32 | ElementType::Int32 | ElementType::UInt32 => 4,
            ElementType::Float64 => 8,
            ElementType::String => 0,
        }
    }
}

/// Textual/binary envelope wrapping a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coding {
    /// zlib-compressed binary wrapped in Base64.
    ZlibBase64,
    /// Plain Base64-wrapped binary.
    Base64,
    /// Declared by the format but not supported.
    Hex,
    /// Whitespace-separated decimal numbers.
    Ascii,
    /// Declared by the format but not supported.
    Binary,
}

impl Coding {
    /// Resolve a `coding` attribute value.
    pub fn from_attr(value: Option<&str>) -> Result<Self, DecodeError> {
        match value {
            Some("ZLIB-COMPR-BASE64") => Ok(Coding::ZlibBase64),
            Some("BASE64") => Ok(Coding::Base64),
            Some("HEX") => Ok(Coding::Hex),
            Some("ASCII") => Ok(Coding::Ascii),
            Some("BINARY") => Ok(Coding::Binary),
            Some(other) => Err(DecodeError::UnknownEncoding {
                attribute: "coding",
                value: other.into(),
            }),
            None => Err(missing("coding")),
        }
    }
}

/// Byte order of a binary payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// Resolve a `byteOrder` attribute value.
    ///
    /// ASCII channels omit the attribute entirely, so the caller keeps it as
    /// an `Option` and only demands a resolved order on binary paths.
    pub fn from_attr(value: &str) -> Result<Self, DecodeError> {
        match value {
            "LITTLE-ENDIAN" => Ok(ByteOrder::Little),
            "BIG-ENDIAN" => Ok(ByteOrder::Big),
            other => Err(DecodeError::UnknownEncoding {
                attribute: "byteOrder",
                value: other.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_type_from_attr() {
        assert_eq!(
            ElementType::from_attr(Some("FLOAT32")).unwrap(),
            ElementType::Float32
        );
        assert_eq!(
            ElementType::from_attr(Some("UINT16")).unwrap(),
            ElementType::UInt16
        );
        assert_eq!(
            ElementType::from_attr(Some("STRING")).unwrap(),
            ElementType::String
        );
    }

    #[test]
    fn element_type_widths() {
        assert_eq!(ElementType::Int8.width(), 1);
        assert_eq!(ElementType::UInt16.width(), 2);
        assert_eq!(ElementType::Float32.width(), 4);
        assert_eq!(ElementType::Float64.width(), 8);
        assert_eq!(ElementType::String.width(), 0);
    }

    #[test]
    fn misspelled_data_format() {
        let err = ElementType::from_attr(Some("FLOAT-32")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownEncoding {
                attribute: "dataFormat",
                value: "FLOAT-32".into(),
            }
        );
    }

    #[test]
    fn missing_coding() {
        let err = Coding::from_attr(None).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownEncoding { attribute: "coding", .. }
        ));
    }

    #[test]
    fn coding_from_attr() {
        assert_eq!(
            Coding::from_attr(Some("ZLIB-COMPR-BASE64")).unwrap(),
            Coding::ZlibBase64
        );
        assert_eq!(Coding::from_attr(Some("ASCII")).unwrap(), Coding::Ascii);
    }

    #[test]
    fn byte_order_from_attr() {
        assert_eq!(
            ByteOrder::from_attr("LITTLE-ENDIAN").unwrap(),
            ByteOrder::Little
        );
        assert_eq!(ByteOrder::from_attr("BIG-ENDIAN").unwrap(), ByteOrder::Big);
        assert!(ByteOrder::from_attr("MIDDLE-ENDIAN").is_err());
    }
}
