//! Low-level helpers shared by the readers and the pipeline log lines.

use std::io::Read;

use crate::Result;

/// Read a little-endian `u32`.
#[inline]
pub(crate) fn le_u32<R: Read>(r: &mut R) -> Result<u32> {
    let mut b = [0u8; 4];
    r.read_exact(&mut b)?;
    Ok(u32::from_le_bytes(b))
}

/// Format the first `n` bytes of `data` as space-separated upper-case hex,
/// e.g. `28 B5 2F FD`.
pub fn hex_prefix(data: &[u8], n: usize) -> String {
    data.iter()
        .take(n)
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert a byte count to MiB for human-readable log lines.
#[inline]
pub fn mib(len: usize) -> f64 {
    len as f64 / 1024.0 / 1024.0
}
