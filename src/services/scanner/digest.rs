//! Streaming SHA-1 digest of exact file bytes.
//!
//! This is the key Modrinth indexes version files by. Files are read in
//! bounded chunks so arbitrarily large archives never sit in memory.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha1::{Digest, Sha1};

use super::READ_CHUNK_SIZE;

/// Compute the lowercase-hex SHA-1 of a file's exact byte content.
pub fn sha1_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let read = file.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
