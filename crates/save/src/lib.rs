//! Persistence for footprint results.
//!
//! Records are bitcode-encoded, optionally lz4-compressed, wrapped in a
//! checksummed header and written atomically into one directory per user.

pub mod atomic_write;
pub mod file_header;
pub mod record;
pub mod record_codec;
pub mod record_store;
pub mod save_error;

pub use record::FootprintRecord;
pub use record_codec::{decode_record, encode_record};
pub use record_store::{RecordStore, StoredRecord};
pub use save_error::SaveError;
