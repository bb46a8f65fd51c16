//! Typed binary reader: fixed-width strides over a byte buffer to `f64`.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::encoding::{ByteOrder, ElementType};
use crate::error::DecodeError;

/// Convert a raw byte buffer into `f64` samples.
///
/// The buffer is walked in `element_type`-width strides; a length that is not
/// a whole number of elements fails as [`DecodeError::TrailingBytes`] instead
/// of reading past the final stride.
pub fn bytes_to_f64(
    raw: &[u8],
    element_type: ElementType,
    byte_order: ByteOrder,
) -> Result<Vec<f64>, DecodeError> {
    if element_type == ElementType::String {
        return Err(DecodeError::UnsupportedEncoding("STRING element type"));
    }
    let width = element_type.width();
    let remainder = raw.len() % width;
    if remainder != 0 {
        return Err(DecodeError::TrailingBytes { width, remainder });
    }

    let mut out = Vec::with_capacity(raw.len() / width);
    for stride in raw.chunks_exact(width) {
        out.push(read_one(stride, element_type, byte_order));
    }
    Ok(out)
}

fn read_one(bytes: &[u8], element_type: ElementType, order: ByteOrder) -> f64 {
    match (element_type, order) {
        (ElementType::Float32, ByteOrder::Little) => LittleEndian::read_f32(bytes) as f64,
        (ElementType::Float32, ByteOrder::Big) => BigEndian::read_f32(bytes) as f64,
        (ElementType::Float64, ByteOrder::Little) => LittleEndian::read_f64(bytes),
        (ElementType::Float64, ByteOrder::Big) => BigEndian::read_f64(bytes),
        (ElementType::Int16, ByteOrder::Little) => LittleEndian::read_i16(bytes) as f64,
        (ElementType::Int16, ByteOrder::Big) => BigEndian::read_i16(bytes) as f64,
        (ElementType::Int32, ByteOrder::Little) => LittleEndian::read_i32(bytes) as f64,
        (ElementType::Int32, ByteOrder::Big) => BigEndian::read_i32(bytes) as f64,
        (ElementType::UInt16, ByteOrder::Little) => LittleEndian::read_u16(bytes) as f64,
        (ElementType::UInt16, ByteOrder::Big) => BigEndian::read_u16(bytes) as f64,
        (ElementType::UInt32, ByteOrder::Little) => LittleEndian::read_u32(bytes) as f64,
        (ElementType::UInt32, ByteOrder::Big) => BigEndian::read_u32(bytes) as f64,
        // Single-byte types have no byte order.
        (ElementType::Int8, _) => bytes[0] as i8 as f64,
        (ElementType::UInt8, _) => bytes[0] as f64,
        (ElementType::String, _) => unreachable!("rejected before striding"),
    }
}
