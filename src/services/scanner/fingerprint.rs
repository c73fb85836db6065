//! Whitespace-normalized Murmur2 fingerprinting.
//!
//! CurseForge identifies mod files by a 32-bit Murmur2 hash computed over
//! the file bytes with tab, LF, CR and space removed, so files that differ
//! only in line endings or indentation fingerprint identically. The
//! service compares raw integers, so the multiply/xor/shift sequence and
//! the unpadded tail handling below must match its implementation bit for
//! bit.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::READ_CHUNK_SIZE;

/// Murmur2 multiplication constant.
const MULTIPLEX: u32 = 1_540_483_477;

/// Byte values stripped from the stream before hashing.
const IGNORED_BYTES: [u8; 4] = [b'\t', b'\n', b'\r', b' '];

/// Whether `byte` is removed during normalization.
#[inline]
pub fn is_ignored(byte: u8) -> bool {
    IGNORED_BYTES.contains(&byte)
}

/// Incremental fingerprint computation for streamed input.
///
/// Chunks may be split at any boundary; only their concatenation matters.
/// The normalized stream has to be buffered because the hash is seeded
/// with its final length.
#[derive(Debug, Default)]
pub struct FingerprintBuilder {
    normalized: Vec<u8>,
}

impl FingerprintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of raw file bytes, dropping ignored bytes in order.
    pub fn update(&mut self, chunk: &[u8]) {
        self.normalized
            .extend(chunk.iter().copied().filter(|b| !is_ignored(*b)));
    }

    /// Finish the hash over the accumulated normalized stream.
    pub fn finish(self) -> u32 {
        hash_normalized(&self.normalized)
    }
}

/// Fingerprint a complete byte sequence in one call.
pub fn fingerprint(data: &[u8]) -> u32 {
    let mut builder = FingerprintBuilder::new();
    builder.update(data);
    builder.finish()
}

/// Fingerprint a file by streaming its bytes through the normalizing
/// filter in bounded chunks.
pub fn fingerprint_file(path: &Path) -> io::Result<u32> {
    let mut file = File::open(path)?;
    let mut builder = FingerprintBuilder::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        builder.update(&chunk[..read]);
    }

    Ok(builder.finish())
}

/// Murmur2 over an already-normalized stream.
///
/// Empty input hashes to 0. Complete little-endian 4-byte groups go
/// through the full mix; a 1-3 byte tail is folded in at its actual
/// width, without zero padding.
fn hash_normalized(normalized: &[u8]) -> u32 {
    let length = normalized.len() as u32;
    if length == 0 {
        return 0;
    }

    let mut hash = 1 ^ length;

    let mut groups = normalized.chunks_exact(4);
    for group in &mut groups {
        let mut k = u32::from_le_bytes([group[0], group[1], group[2], group[3]]);
        k = k.wrapping_mul(MULTIPLEX);
        k = (k ^ (k >> 24)).wrapping_mul(MULTIPLEX);
        hash = hash.wrapping_mul(MULTIPLEX) ^ k;
    }

    let tail = groups.remainder();
    if !tail.is_empty() {
        let mut buf = 0u32;
        for (i, byte) in tail.iter().enumerate() {
            buf |= u32::from(*byte) << (8 * i);
        }
        hash = (hash ^ buf).wrapping_mul(MULTIPLEX);
    }

    hash = (hash ^ (hash >> 13)).wrapping_mul(MULTIPLEX);
    hash ^ (hash >> 15)
}

#[cfg(test)]
#[path = "tests/fingerprint_tests.rs"]
mod tests;
