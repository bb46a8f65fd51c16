//! Chunked zlib inflation of compressed payloads.
//!
//! The inflater is fed fixed-size slices of input and drains into a
//! fixed-size scratch buffer, so peak scratch memory is bounded regardless of
//! payload size; only the accumulated output grows.

use flate2::{Decompress, FlushDecompress, Status};

use crate::error::{DecodeError, ZlibError};

/// Scratch buffer size for both the input window and the output drain.
const CHUNK: usize = 16 * 1024;

fn classify(e: flate2::DecompressError) -> ZlibError {
    let msg = e.to_string();
    if msg.contains("dictionary") {
        ZlibError::NeedDict
    } else if msg.contains("memory") {
        ZlibError::Mem
    } else {
        ZlibError::Data
    }
}

/// Inflate a complete zlib stream.
///
/// The stream must run to its end marker within `input`; anything short of
/// that fails as [`ZlibError::Truncated`] rather than returning a partial
/// buffer.
pub fn inflate(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut stream = Decompress::new(true);
    let mut scratch = vec![0u8; CHUNK];
    let mut out = Vec::new();

    loop {
        let consumed = stream.total_in() as usize;
        let window_end = (consumed + CHUNK).min(input.len());
        let window = &input[consumed..window_end];

        let produced_before = stream.total_out() as usize;
        let status = stream
            .decompress(window, &mut scratch, FlushDecompress::None)
            .map_err(|e| DecodeError::Zlib(classify(e)))?;
        let produced = stream.total_out() as usize - produced_before;
        out.extend_from_slice(&scratch[..produced]);

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                // No forward progress with all input handed over means the
                // stream ended without its completion marker.
                if stream.total_in() as usize == input.len() && produced == 0 {
                    return Err(DecodeError::Zlib(ZlibError::Truncated));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn deflate(data: &[u8]) -> Vec<u8> {
        let mut enc =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn roundtrip_small() {
        let data = b"sample grid payload".to_vec();
        assert_eq!(inflate(&deflate(&data)).unwrap(), data);
    }

    #[test]
    fn roundtrip_larger_than_chunk() {
        let data: Vec<u8> = (0..CHUNK * 3 + 17).map(|i| (i % 251) as u8).collect();
        assert_eq!(inflate(&deflate(&data)).unwrap(), data);
    }

    #[test]
    fn empty_input_is_truncated() {
        let err = inflate(&[]).unwrap_err();
        assert_eq!(err, DecodeError::Zlib(ZlibError::Truncated));
    }

    #[test]
    fn truncated_stream_fails() {
        let compressed = deflate(&vec![42u8; 4096]);
        let cut = &compressed[..compressed.len() / 2];
        let err = inflate(cut).unwrap_err();
        assert_eq!(err, DecodeError::Zlib(ZlibError::Truncated));
    }

    #[test]
    fn garbage_stream_fails_as_data_error() {
        let err = inflate(b"this is not a zlib stream at all").unwrap_err();
        assert_eq!(err, DecodeError::Zlib(ZlibError::Data));
    }
}
