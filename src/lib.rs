//! **nnue-unzstd** - verified in-place decompression of NNUE weight files.
//!
//! Some engines ship their NNUE network as a single Zstandard frame. This
//! crate turns such a file back into the raw network, checking the format on
//! both sides of the transformation:
//!
//! 1. load the file,
//! 2. check the zstd frame magic,
//! 3. stream-decompress it in fixed-size chunks,
//! 4. check the NNUE version/hash header,
//! 5. copy the compressed original to `<path>.zst.bak`,
//! 6. overwrite `<path>` with the decompressed bytes.
//!
//! # Modules
//! | Module | Purpose |
//! |--------|---------|
//! | [`compression::zstd`] | Frame magic check and chunked Zstandard decoding |
//! | [`formats::nnue`]     | NNUE version/hash header |
//! | [`replace`]           | Backup copy and direct overwrite |
//! | [`pipeline`]          | The whole run, [`decompress_in_place`] |

pub mod compression;
pub mod error;
pub mod formats;
pub mod pipeline;
pub mod replace;
pub mod utils;

pub use error::{Error, Result};
pub use pipeline::{Options, Report, decompress_in_place};
