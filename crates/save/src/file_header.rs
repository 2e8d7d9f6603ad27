// ---------------------------------------------------------------------------
// file_header – record file header with magic bytes, version, and checksum
// ---------------------------------------------------------------------------
//
// Header format (24 bytes, fixed-size, little-endian):
//   [0..4]   Magic bytes: "CFPR"
//   [4..8]   Format version (u32)
//   [8..12]  Flags (u32: bit 0 = lz4-compressed payload)
//   [12..20] Timestamp (Unix epoch seconds, u64)
//   [20..24] xxHash32 checksum of the payload (everything after the header)

use xxhash_rust::xxh32::xxh32;

use crate::save_error::SaveError;

/// Magic bytes identifying a footprint record file.
pub const MAGIC: [u8; 4] = *b"CFPR";

pub const HEADER_SIZE: usize = 24;

pub const HEADER_FORMAT_VERSION: u32 = 1;

/// Payload is lz4 block-compressed with a size prefix.
pub const FLAG_LZ4: u32 = 1;

const XXHASH_SEED: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub format_version: u32,
    pub flags: u32,
    pub timestamp: u64,
    pub checksum: u32,
}

impl FileHeader {
    pub fn new(payload: &[u8], flags: u32, timestamp: u64) -> Self {
        Self {
            format_version: HEADER_FORMAT_VERSION,
            flags,
            timestamp,
            checksum: xxh32(payload, XXHASH_SEED),
        }
    }

    pub fn is_compressed(&self) -> bool {
        self.flags & FLAG_LZ4 != 0
    }
}

/// Returns `[header (24 bytes)] ++ [payload]`.
pub fn wrap_with_header(payload: &[u8], flags: u32, timestamp: u64) -> Vec<u8> {
    let header = FileHeader::new(payload, flags, timestamp);
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());

    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&header.format_version.to_le_bytes());
    out.extend_from_slice(&header.flags.to_le_bytes());
    out.extend_from_slice(&header.timestamp.to_le_bytes());
    out.extend_from_slice(&header.checksum.to_le_bytes());

    out.extend_from_slice(payload);
    out
}

fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Parse and validate the header, returning it with the payload.
///
/// # Errors
///
/// - `Corrupted` if the magic is wrong, the file is shorter than a header,
///   or the checksum does not match.
/// - `VersionMismatch` if the header comes from a newer build.
pub fn unwrap_header(bytes: &[u8]) -> Result<(FileHeader, &[u8]), SaveError> {
    if bytes.len() < 4 || bytes[..4] != MAGIC {
        return Err(SaveError::Corrupted(
            "missing CFPR magic bytes".to_string(),
        ));
    }
    if bytes.len() < HEADER_SIZE {
        return Err(SaveError::Corrupted(format!(
            "file is too short ({} bytes, need at least {} for header)",
            bytes.len(),
            HEADER_SIZE
        )));
    }

    let format_version = le_u32(bytes, 4);
    let flags = le_u32(bytes, 8);
    let timestamp = u64::from_le_bytes([
        bytes[12], bytes[13], bytes[14], bytes[15], bytes[16], bytes[17], bytes[18], bytes[19],
    ]);
    let checksum = le_u32(bytes, 20);

    if format_version > HEADER_FORMAT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: HEADER_FORMAT_VERSION,
            found: format_version,
        });
    }

    let payload = &bytes[HEADER_SIZE..];
    let computed = xxh32(payload, XXHASH_SEED);
    if computed != checksum {
        return Err(SaveError::Corrupted(format!(
            "checksum mismatch (expected {:#010X}, got {:#010X})",
            checksum, computed
        )));
    }

    Ok((
        FileHeader {
            format_version,
            flags,
            timestamp,
            checksum,
        },
        payload,
    ))
}
