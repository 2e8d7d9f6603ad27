//! Failures while writing or reading footprint records.

use std::fmt;

#[derive(Debug)]
pub enum SaveError {
    /// Reading or writing a record file failed.
    Io(std::io::Error),
    /// A record could not be turned into bytes.
    Encode(String),
    /// Record bytes did not decode, or their lz4 block did not decompress.
    Decode(String),
    /// Bad magic, short header, or a payload whose checksum does not match.
    Corrupted(String),
    /// The record was written with a newer format than this build reads.
    VersionMismatch { expected_max: u32, found: u32 },
    /// `save` was called with a blank user id.
    MissingIdentity,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "record file I/O failed: {e}"),
            SaveError::Encode(msg) => write!(f, "cannot encode record: {msg}"),
            SaveError::Decode(msg) => write!(f, "cannot decode record: {msg}"),
            SaveError::Corrupted(msg) => write!(f, "corrupted record: {msg}"),
            SaveError::VersionMismatch {
                expected_max,
                found,
            } => write!(
                f,
                "record format v{found} is newer than the supported v{expected_max}"
            ),
            SaveError::MissingIdentity => write!(f, "a user id is required to save a result"),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SaveError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<bitcode::Error> for SaveError {
    fn from(e: bitcode::Error) -> Self {
        SaveError::Decode(format!("bitcode: {e}"))
    }
}

impl From<lz4_flex::block::DecompressError> for SaveError {
    fn from(e: lz4_flex::block::DecompressError) -> Self {
        SaveError::Decode(format!("lz4: {e}"))
    }
}
