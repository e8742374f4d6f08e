//! The full in-place run over one file.
//!
//! Stages run strictly in order and any error returns immediately:
//!
//! ```text
//! Start -> Loaded -> FrameVerified -> Decompressed -> HeaderVerified
//!       -> BackedUp -> Written -> Done
//! ```
//!
//! Both format checks happen before the first filesystem write. The backup
//! is taken after verification, so it always holds a compressed file that
//! was known to decode to the expected network.
//!
//! The final write is not atomic. If the process dies during it, the target
//! is left truncated and only `<path>.zst.bak` remains intact.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::Result;
use crate::compression::zstd::{DEFAULT_CHUNK_SIZE, check_frame_magic, decompress_zstd_chunked};
use crate::formats::nnue::NnueHeader;
use crate::replace;
use crate::utils::{hex_prefix, mib};

/// Number of leading bytes shown in header log lines.
const PREVIEW_LEN: usize = 16;

/// Parameters for [`decompress_in_place`].
#[derive(Debug, Clone)]
pub struct Options {
    /// File to decompress; overwritten on success.
    pub path: PathBuf,
    /// Header the decompressed network must carry.
    pub expected: NnueHeader,
    /// Read size for the streaming decoder.
    pub chunk_size: usize,
}

impl Options {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expected: NnueHeader::PIKAFISH,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    pub path: PathBuf,
    pub backup_path: PathBuf,
    pub compressed_len: usize,
    pub decompressed_len: usize,
    pub header: NnueHeader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Loaded,
    FrameVerified,
    Decompressed,
    HeaderVerified,
    BackedUp,
    Written,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Loaded => "loaded",
            Stage::FrameVerified => "frame verified",
            Stage::Decompressed => "decompressed",
            Stage::HeaderVerified => "header verified",
            Stage::BackedUp => "backed up",
            Stage::Written => "written",
        };
        f.write_str(name)
    }
}

fn enter(stage: Stage, path: &Path) {
    debug!("{}: {stage}", path.display());
}

/// Decompress the zstd-wrapped NNUE file at `opts.path` in place.
///
/// On success the original compressed bytes are at
/// [`replace::backup_path`] and `opts.path` holds the raw network.
/// A bad frame magic or header mismatch returns before anything is written.
pub fn decompress_in_place(opts: &Options) -> Result<Report> {
    let path = opts.path.as_path();

    let compressed = fs::read(path)?;
    enter(Stage::Loaded, path);
    info!(
        "Compressed size: {} bytes ({:.2} MB)",
        compressed.len(),
        mib(compressed.len())
    );
    info!("Compressed header: {}", hex_prefix(&compressed, PREVIEW_LEN));

    check_frame_magic(&compressed)?;
    enter(Stage::FrameVerified, path);

    let decompressed = decompress_zstd_chunked(&compressed, opts.chunk_size)?;
    enter(Stage::Decompressed, path);
    info!(
        "Decompressed size: {} bytes ({:.2} MB)",
        decompressed.len(),
        mib(decompressed.len())
    );

    let header = NnueHeader::from_bytes(&decompressed)?;
    info!("NNUE Version: 0x{:08X}", header.version);
    info!("NNUE Hash: 0x{:08X}", header.hash);
    info!("Raw header: {}", hex_prefix(&decompressed, PREVIEW_LEN));
    header.verify(&opts.expected)?;
    enter(Stage::HeaderVerified, path);
    info!("NNUE header verified OK!");

    let backup_path = replace::backup(path)?;
    enter(Stage::BackedUp, path);
    info!("Backup saved to: {}", backup_path.display());

    replace::overwrite(path, &decompressed)?;
    enter(Stage::Written, path);
    info!("Decompressed NNUE saved to: {}", path.display());
    info!(
        "File size: {} bytes ({:.2} MB)",
        decompressed.len(),
        mib(decompressed.len())
    );
    info!("DONE!");

    Ok(Report {
        path: opts.path.clone(),
        backup_path,
        compressed_len: compressed.len(),
        decompressed_len: decompressed.len(),
        header,
    })
}
