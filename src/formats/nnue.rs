//! NNUE - neural-network evaluation weights.
//!
//! The network body is opaque to this crate. Only the fixed file header is
//! read, to confirm the decompressed bytes are the asset that was expected.
//!
//! ## Header (8 bytes)
//! ```text
//! [0x00] Version  (u32 LE)
//! [0x04] Hash     (u32 LE) - architecture hash of the network
//! [0x08] ...      description string and layer weights
//! ```

use std::fmt;
use std::io::Read;

use crate::utils::le_u32;
use crate::{Error, Result};

/// The two header fields checked by [`NnueHeader::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Version,
    Hash,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderField::Version => f.write_str("version"),
            HeaderField::Hash => f.write_str("hash"),
        }
    }
}

/// Parsed NNUE file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NnueHeader {
    pub version: u32,
    pub hash: u32,
}

impl NnueHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = 8;

    /// Header of the Pikafish network this tool is pinned to.
    pub const PIKAFISH: NnueHeader = NnueHeader {
        version: 0x7AF32F20,
        hash: 0x6E24D34A,
    };

    /// Read the header from the start of `r`.
    pub fn parse<R: Read>(r: &mut R) -> Result<Self> {
        let version = le_u32(r)?;
        let hash = le_u32(r)?;
        Ok(Self { version, hash })
    }

    /// Read the header from the first eight bytes of `data`.
    ///
    /// Returns [`Error::UnexpectedEof`] if `data` is shorter than
    /// [`NnueHeader::SIZE`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut head = data.get(..Self::SIZE).ok_or(Error::UnexpectedEof)?;
        Self::parse(&mut head)
    }

    /// Compare against `expected`, version first.
    ///
    /// Returns [`Error::HeaderMismatch`] naming the first field that differs.
    pub fn verify(&self, expected: &NnueHeader) -> Result<()> {
        let fields = [
            (HeaderField::Version, expected.version, self.version),
            (HeaderField::Hash, expected.hash, self.hash),
        ];
        for (field, expected, found) in fields {
            if expected != found {
                return Err(Error::HeaderMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKAFISH_BYTES: [u8; 8] = [0x20, 0x2F, 0xF3, 0x7A, 0x4A, 0xD3, 0x24, 0x6E];

    #[test]
    fn parses_pikafish_header() {
        let mut data = PIKAFISH_BYTES.to_vec();
        data.extend_from_slice(b"Features=HalfKAv2");
        let header = NnueHeader::from_bytes(&data).unwrap();
        assert_eq!(header, NnueHeader::PIKAFISH);
        assert!(header.verify(&NnueHeader::PIKAFISH).is_ok());
    }

    #[test]
    fn short_input_is_eof() {
        assert!(matches!(
            NnueHeader::from_bytes(&PIKAFISH_BYTES[..7]),
            Err(Error::UnexpectedEof)
        ));
    }

    #[test]
    fn version_is_checked_before_hash() {
        let header = NnueHeader {
            version: 0xDEADBEEF,
            hash: 0,
        };
        match header.verify(&NnueHeader::PIKAFISH) {
            Err(Error::HeaderMismatch {
                field,
                expected,
                found,
            }) => {
                assert_eq!(field, HeaderField::Version);
                assert_eq!(expected, 0x7AF32F20);
                assert_eq!(found, 0xDEADBEEF);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn hash_mismatch_names_hash() {
        let header = NnueHeader {
            hash: 0x6E24D34B,
            ..NnueHeader::PIKAFISH
        };
        assert!(matches!(
            header.verify(&NnueHeader::PIKAFISH),
            Err(Error::HeaderMismatch {
                field: HeaderField::Hash,
                ..
            })
        ));
    }
}
