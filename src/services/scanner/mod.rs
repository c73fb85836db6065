//! Local file scanning: directory enumeration and per-file hashing.
//!
//! Every file gets two independent catalog keys: a SHA-1 digest of its
//! exact bytes (Modrinth) and a whitespace-normalized Murmur2 fingerprint
//! (CurseForge). Hashing is parallel across files; each file reads only
//! its own bytes and writes only its own result slot.

pub mod digest;
pub mod fingerprint;
pub mod walker;

use std::io;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Read chunk size shared by the hashing passes.
pub const READ_CHUNK_SIZE: usize = 8192;

/// A scanned file with both catalog keys computed.
#[derive(Debug, Clone)]
pub struct HashedFile {
    pub path: PathBuf,
    /// Lowercase-hex SHA-1 of the exact byte content.
    pub sha1: String,
    /// Whitespace-normalized Murmur2 fingerprint.
    pub fingerprint: u32,
}

/// Per-file scan outcome. Read failures are carried through so the run
/// still reports one row per enumerated file.
#[derive(Debug)]
pub enum FileScan {
    Hashed(HashedFile),
    Unreadable { path: PathBuf, error: io::Error },
}

impl FileScan {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileScan::Hashed(file) => &file.path,
            FileScan::Unreadable { path, .. } => path,
        }
    }
}

/// Hash every file in parallel, preserving input order in the output.
pub fn hash_files(files: Vec<PathBuf>) -> Vec<FileScan> {
    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("hashing [{bar:40}] {pos}/{len}")
            .expect("static progress template")
            .progress_chars("=> "),
    );

    let scans: Vec<FileScan> = files
        .into_par_iter()
        .map(|path| {
            let scan = hash_file(path);
            bar.inc(1);
            scan
        })
        .collect();

    bar.finish_and_clear();
    scans
}

fn hash_file(path: PathBuf) -> FileScan {
    let sha1 = match digest::sha1_file(&path) {
        Ok(digest) => digest,
        Err(error) => {
            log::warn!("Could not digest {}: {error}", path.display());
            return FileScan::Unreadable { path, error };
        }
    };

    match fingerprint::fingerprint_file(&path) {
        Ok(fingerprint) => FileScan::Hashed(HashedFile {
            path,
            sha1,
            fingerprint,
        }),
        Err(error) => {
            log::warn!("Could not fingerprint {}: {error}", path.display());
            FileScan::Unreadable { path, error }
        }
    }
}
