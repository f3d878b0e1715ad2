//! Per-chunk compression codec.
//!
//! Chunks flagged `compressed` hold a zstd frame the caller packages with
//! [`compress`] before appending; the engine stores blobs verbatim and
//! expands flagged chunks on read, so storage never needs to know whether
//! a partition mixes compressed and raw chunks.

use crate::error::{ObjectError, ObjectResult};

/// Compress a chunk payload for storage.
pub fn compress(data: &[u8]) -> ObjectResult<Vec<u8>> {
    zstd::encode_all(data, 0).map_err(|e| ObjectError::Compression(e.to_string()))
}

/// Expand a stored zstd frame.
pub fn decompress(data: &[u8], sequence_number: u64) -> ObjectResult<Vec<u8>> {
    zstd::decode_all(data).map_err(|e| ObjectError::Decompression {
        sequence_number,
        reason: e.to_string(),
    })
}
