//! Decompression helpers.
//!
//! NNUE networks are shipped as one Zstandard frame covering the whole file.
//! The frame does not necessarily declare its content size, so decoding is
//! always streamed; see [`zstd::decompress_zstd_chunked`].
//!
//! | Module | Algorithm | Typical use |
//! |--------|-----------|-------------|
//! | [`zstd`] | Zstandard | Whole-file `.nnue` payloads |

pub mod zstd;
