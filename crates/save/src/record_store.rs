// ---------------------------------------------------------------------------
// RecordStore: per-user directories of record files
// ---------------------------------------------------------------------------
//
// Layout:
//   {root}/{xxh32(user_id) as 8 hex digits}/{sequence:06}.cfpr
//
// User ids never reach the filesystem verbatim. Two ids that hash alike
// share a directory; `history` filters on the stored `user_id`.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use xxhash_rust::xxh32::xxh32;

use crate::atomic_write::atomic_write;
use crate::record::FootprintRecord;
use crate::record_codec::{decode_record, encode_record};
use crate::save_error::SaveError;

pub const RECORD_EXTENSION: &str = "cfpr";

const USER_DIR_SEED: u32 = 0;

/// A record read back from disk with the id it was saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub record_id: String,
    pub record: FootprintRecord,
}

#[derive(Resource, Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn user_key(user_id: &str) -> String {
        format!("{:08x}", xxh32(user_id.as_bytes(), USER_DIR_SEED))
    }

    pub fn user_dir(&self, user_id: &str) -> PathBuf {
        self.root.join(Self::user_key(user_id))
    }

    /// Sequence numbers of the finished record files in `dir`, ascending.
    fn sequences(dir: &Path) -> Result<Vec<u32>, SaveError> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut sequences = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            match path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u32>().ok())
            {
                Some(seq) => sequences.push(seq),
                None => warn!("RecordStore: ignoring unexpected file {}", path.display()),
            }
        }
        sequences.sort_unstable();
        Ok(sequences)
    }

    fn record_path(dir: &Path, sequence: u32) -> PathBuf {
        dir.join(format!("{sequence:06}.{RECORD_EXTENSION}"))
    }

    /// Persist a record and return its id.
    ///
    /// # Errors
    ///
    /// `MissingIdentity` for a blank user id; `Io` if the write fails.
    pub fn save(&self, record: &FootprintRecord) -> Result<String, SaveError> {
        if record.user_id.trim().is_empty() {
            return Err(SaveError::MissingIdentity);
        }

        let key = Self::user_key(&record.user_id);
        let dir = self.root.join(&key);
        let sequence = Self::sequences(&dir)?.last().map_or(1, |last| last + 1);
        let bytes = encode_record(record);
        atomic_write(&Self::record_path(&dir, sequence), &bytes)?;

        let record_id = format!("{key}-{sequence:06}");
        info!(
            "RecordStore: saved {} ({} bytes, {:.3} t)",
            record_id,
            bytes.len(),
            record.total_footprint
        );
        Ok(record_id)
    }

    /// Every readable record for `user_id`, oldest first.
    ///
    /// Files that fail to read or decode are skipped with a warning. An
    /// unknown user has an empty history.
    pub fn history(&self, user_id: &str) -> Result<Vec<StoredRecord>, SaveError> {
        let key = Self::user_key(user_id);
        let dir = self.root.join(&key);

        let mut records = Vec::new();
        for sequence in Self::sequences(&dir)? {
            let path = Self::record_path(&dir, sequence);
            let record = match fs::read(&path)
                .map_err(SaveError::from)
                .and_then(|bytes| decode_record(&bytes))
            {
                Ok(record) => record,
                Err(e) => {
                    warn!("RecordStore: skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            if record.user_id != user_id {
                continue;
            }
            records.push(StoredRecord {
                record_id: format!("{key}-{sequence:06}"),
                record,
            });
        }
        records.sort_by_key(|r| r.record.created_at);
        Ok(records)
    }
}
