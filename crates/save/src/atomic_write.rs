//! Crash-safe record writes.
//!
//! A record is first written in full to a sibling `.tmp` file and synced,
//! then renamed over the final name. Readers therefore see either no record
//! or a complete one; a leftover `.tmp` is ignored and overwritten by the
//! next write.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Extension given to in-flight writes.
pub const TMP_EXTENSION: &str = "tmp";

/// Write `data` to `path` via `{path}.tmp`, `sync_all` and `rename`.
///
/// Missing parent directories are created.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let staging = tmp_path_for(path);
    let mut file = File::create(&staging)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    fs::rename(&staging, path)
}

/// `{path}.tmp`, kept in the same directory so the rename never crosses
/// filesystems.
pub fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(TMP_EXTENSION);
    PathBuf::from(name)
}
