//! Zstandard frame detection and chunked decompression.
//!
//! A compressed `.nnue` file is one Zstandard frame. Encoders that stream
//! their input never learn the total size up front, so the frame header
//! usually omits the content size. [`decompress_zstd_chunked`] therefore
//! never asks the frame how large the output will be: it pulls fixed-size
//! chunks from a streaming decoder until the decoder reports end-of-frame,
//! then joins them.
//!
//! ## Frame header
//! ```text
//! [0x00] Magic  28 B5 2F FD   (u32 LE 0xFD2FB528)
//! [0x04] Frame header descriptor, window, dictionary id, content size...
//! ```

use std::io::{self, Read};

use log::debug;

use crate::{Error, Result};

/// The four bytes every Zstandard frame starts with.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Default read size for [`decompress_zstd`], 1 MiB.
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

/// Whether `data` begins with [`ZSTD_MAGIC`].
pub fn is_zstd_frame(data: &[u8]) -> bool {
    data.starts_with(&ZSTD_MAGIC)
}

/// Verify the frame magic byte-for-byte.
///
/// Returns [`Error::BadMagic`] on mismatch, including inputs shorter than
/// four bytes.
pub fn check_frame_magic(data: &[u8]) -> Result<()> {
    if !is_zstd_frame(data) {
        return Err(Error::BadMagic);
    }
    Ok(())
}

/// Decompress a Zstandard frame with the default 1 MiB chunk size.
pub fn decompress_zstd(data: &[u8]) -> Result<Vec<u8>> {
    decompress_zstd_chunked(data, DEFAULT_CHUNK_SIZE)
}

/// Decompress a single Zstandard frame by reading `chunk_size` bytes at a
/// time until the decoder returns zero, then concatenating the chunks in
/// order.
///
/// The chunk size only trades peak memory against call overhead; the output
/// is identical for every non-zero value.
///
/// Returns [`Error::BadMagic`] before any decoding if the magic is wrong,
/// [`Error::InvalidChunkSize`] for `chunk_size == 0`, and [`Error::Zstd`]
/// for corrupt or truncated frames.
pub fn decompress_zstd_chunked(data: &[u8], chunk_size: usize) -> Result<Vec<u8>> {
    check_frame_magic(data)?;
    if chunk_size == 0 {
        return Err(Error::InvalidChunkSize);
    }

    let mut decoder = ::zstd::stream::read::Decoder::with_buffer(data)
        .map_err(Error::Zstd)?
        .single_frame();

    let mut chunks: Vec<Vec<u8>> = Vec::new();
    loop {
        let chunk = read_chunk(&mut decoder, chunk_size).map_err(Error::Zstd)?;
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }
    debug!("zstd frame decoded in {} chunk(s)", chunks.len());

    Ok(chunks.concat())
}

/// One `read` call of at most `chunk_size` bytes. A short chunk is not the
/// end of the stream; only an empty one is.
fn read_chunk<R: Read>(r: &mut R, chunk_size: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; chunk_size];
    loop {
        match r.read(&mut buf) {
            Ok(n) => {
                buf.truncate(n);
                return Ok(buf);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 % 251) as u8).collect()
    }

    #[test]
    fn magic_matches_encoder_output() {
        let frame = ::zstd::encode_all(&b"nnue"[..], 3).unwrap();
        assert!(is_zstd_frame(&frame));
        assert!(check_frame_magic(&frame).is_ok());
    }

    #[test]
    fn short_or_foreign_input_is_bad_magic() {
        for input in [&b""[..], &[0x28, 0xB5, 0x2F][..], &[0x20, 0x2F, 0xF3, 0x7A, 0x4A][..]] {
            assert!(matches!(check_frame_magic(input), Err(Error::BadMagic)));
            assert!(matches!(decompress_zstd(input), Err(Error::BadMagic)));
        }
    }

    #[test]
    fn small_chunks_preserve_order() {
        let plain = sample(10_007);
        let frame = ::zstd::encode_all(&plain[..], 1).unwrap();
        for chunk_size in [1, 13, 4096, 10_007, 1 << 20] {
            assert_eq!(decompress_zstd_chunked(&frame, chunk_size).unwrap(), plain);
        }
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let frame = ::zstd::encode_all(&b"nnue"[..], 3).unwrap();
        assert!(matches!(
            decompress_zstd_chunked(&frame, 0),
            Err(Error::InvalidChunkSize)
        ));
    }

    #[test]
    fn truncated_frame_is_zstd_error() {
        let frame = ::zstd::encode_all(&sample(50_000)[..], 3).unwrap();
        let cut = &frame[..frame.len() / 2];
        assert!(matches!(decompress_zstd(cut), Err(Error::Zstd(_))));
    }

    #[test]
    fn empty_payload_decodes_to_empty() {
        let frame = ::zstd::encode_all(&b""[..], 3).unwrap();
        assert!(decompress_zstd(&frame).unwrap().is_empty());
    }
}
