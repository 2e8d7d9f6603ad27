// ---------------------------------------------------------------------------
// Record codec: FootprintRecord <-> file bytes
// ---------------------------------------------------------------------------
//
// bitcode payload, optionally lz4-compressed with a size prefix, wrapped in
// the CFPR header (see file_header.rs).

use footprint::Category;

use crate::file_header::{unwrap_header, wrap_with_header, FLAG_LZ4};
use crate::record::FootprintRecord;
use crate::save_error::SaveError;

/// Payloads smaller than this are stored uncompressed.
pub const COMPRESSION_THRESHOLD: usize = 256;

pub fn category_to_u8(c: Category) -> u8 {
    match c {
        Category::Diet => 0,
        Category::Transport => 1,
        Category::Travel => 2,
        Category::Fashion => 3,
        Category::Home => 4,
        Category::Lifestyle => 5,
        Category::Electronics => 6,
        Category::Waste => 7,
        Category::Offsetting => 8,
    }
}

pub fn u8_to_category(v: u8) -> Option<Category> {
    match v {
        0 => Some(Category::Diet),
        1 => Some(Category::Transport),
        2 => Some(Category::Travel),
        3 => Some(Category::Fashion),
        4 => Some(Category::Home),
        5 => Some(Category::Lifestyle),
        6 => Some(Category::Electronics),
        7 => Some(Category::Waste),
        8 => Some(Category::Offsetting),
        _ => None,
    }
}

/// Encode a record into file bytes.
pub fn encode_record(record: &FootprintRecord) -> Vec<u8> {
    let encoded = record.encode();
    if encoded.len() < COMPRESSION_THRESHOLD {
        return wrap_with_header(&encoded, 0, record.created_at);
    }
    let compressed = lz4_flex::compress_prepend_size(&encoded);
    wrap_with_header(&compressed, FLAG_LZ4, record.created_at)
}

/// Decode file bytes back into a record, validating header and checksum.
pub fn decode_record(bytes: &[u8]) -> Result<FootprintRecord, SaveError> {
    let (header, payload) = unwrap_header(bytes)?;
    let record = if header.is_compressed() {
        let raw = lz4_flex::decompress_size_prepended(payload)?;
        FootprintRecord::decode(&raw)?
    } else {
        FootprintRecord::decode(payload)?
    };
    Ok(record)
}
