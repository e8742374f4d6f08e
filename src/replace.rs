//! Backup copy and in-place overwrite of the target file.
//!
//! The overwrite is a plain truncate-and-write at the target path. There is
//! no temporary file and no rename, so a crash or full disk during
//! [`overwrite`] leaves the target truncated; the `.zst.bak` copy made by
//! [`backup`] is then the only way back.

use std::ffi::OsString;
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

use crate::Result;

/// Suffix appended to the original file name for the compressed backup.
pub const BACKUP_SUFFIX: &str = ".zst.bak";

/// `<path>.zst.bak`, with the suffix appended to the full file name.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy `path` to [`backup_path`], carrying over permissions and, where the
/// platform reports them, access and modification times.
///
/// An existing backup is replaced.
pub fn backup(path: &Path) -> Result<PathBuf> {
    let dest = backup_path(path);
    fs::copy(path, &dest)?;

    let meta = fs::metadata(path)?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    File::options().write(true).open(&dest)?.set_times(times)?;

    Ok(dest)
}

/// Truncate `path` and write `data` in its place.
pub fn overwrite(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::*;

    #[test]
    fn suffix_is_appended_to_full_name() {
        assert_eq!(
            backup_path(Path::new("assets/pikafish.nnue")),
            PathBuf::from("assets/pikafish.nnue.zst.bak")
        );
    }

    #[test]
    fn backup_copies_bytes_and_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net.nnue");
        fs::write(&path, b"\x28\xB5\x2F\xFDpayload").unwrap();

        let mtime = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(mtime)
            .unwrap();

        let dest = backup(&path).unwrap();
        assert_eq!(dest, dir.path().join("net.nnue.zst.bak"));
        assert_eq!(fs::read(&dest).unwrap(), fs::read(&path).unwrap());
        assert_eq!(fs::metadata(&dest).unwrap().modified().unwrap(), mtime);
    }

    #[test]
    fn overwrite_truncates_longer_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net.nnue");
        fs::write(&path, vec![0xAA; 64]).unwrap();
        overwrite(&path, b"short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");
    }
}
