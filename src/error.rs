//! Library-wide error and result types.

use std::fmt;
use std::io;

use crate::formats::nnue::HeaderField;

/// Result alias used throughout nnue-unzstd.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// Every variant is fatal for a run; nothing is retried.
#[derive(Debug)]
pub enum Error {
    /// The input does not start with the Zstandard frame magic.
    BadMagic,
    /// A decoded NNUE header field did not match the expected value.
    HeaderMismatch {
        field: HeaderField,
        expected: u32,
        found: u32,
    },
    /// The decompressed data is too short to hold an NNUE header.
    UnexpectedEof,
    /// A zero chunk size was requested for streaming decompression.
    InvalidChunkSize,
    /// Zstandard decompression failed (corrupt or truncated frame).
    Zstd(io::Error),
    /// An underlying I/O operation failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadMagic => write!(f, "not a zstd file: bad frame magic"),
            Error::HeaderMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "unexpected NNUE {field}: 0x{found:08X} (expected 0x{expected:08X})"
            ),
            Error::UnexpectedEof => write!(f, "unexpected end of NNUE header"),
            Error::InvalidChunkSize => write!(f, "chunk size must be non-zero"),
            Error::Zstd(e) => write!(f, "zstd decompression failed: {e}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Zstd(e) | Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
