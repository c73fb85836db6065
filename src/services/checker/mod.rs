//! One full check run: enumerate, hash, query both catalogs, reconcile.

use std::collections::HashSet;
use std::path::Path;

use reqwest::Client;

use crate::services::catalog::curseforge::CurseforgeClient;
use crate::services::catalog::modrinth::ModrinthClient;
use crate::services::catalog::CatalogOutcome;
use crate::services::config::AppConfig;
use crate::services::scanner::{self, FileScan};
use crate::services::verdict::{self, FileReport};
use crate::types::errors::{ConfigError, ScanError};

/// Everything the presentation layer needs to render a run.
#[derive(Debug)]
pub struct CheckOutcome {
    /// One row per enumerated file, in enumeration order.
    pub reports: Vec<FileReport>,
    /// One entry per degraded catalog, at most two.
    pub warnings: Vec<String>,
}

/// Build both catalog clients over one shared HTTP client carrying the
/// configured request timeout.
pub fn build_clients(config: &AppConfig) -> Result<(ModrinthClient, CurseforgeClient), ConfigError> {
    let http = Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

    Ok((
        ModrinthClient::new(http.clone()),
        CurseforgeClient::new(http, config.curseforge_api_key.clone()),
    ))
}

/// Run a complete check of `directory` against both catalogs.
///
/// Per-file hashing failures and per-catalog lookup failures degrade to
/// partial results; only an unusable scan directory aborts the run.
pub async fn run(
    modrinth: &ModrinthClient,
    curseforge: &CurseforgeClient,
    directory: &Path,
) -> Result<CheckOutcome, ScanError> {
    let files = scanner::walker::list_mod_files(directory)?;
    log::info!("Checking {} files in {}", files.len(), directory.display());

    let scans = tokio::task::spawn_blocking(move || scanner::hash_files(files))
        .await
        .map_err(|e| ScanError::Worker(e.to_string()))?;

    // Duplicate keys across files collapse here; reconciliation walks the
    // files again, so every file still gets its own row.
    let mut hash_set = HashSet::new();
    let mut fingerprint_set = HashSet::new();
    for scan in &scans {
        if let FileScan::Hashed(file) = scan {
            hash_set.insert(file.sha1.clone());
            fingerprint_set.insert(file.fingerprint);
        }
    }
    let hashes: Vec<String> = hash_set.into_iter().collect();
    let fingerprints: Vec<u32> = fingerprint_set.into_iter().collect();

    let (modrinth_result, curseforge_result) = if hashes.is_empty() {
        // Nothing hashable; skip the network round-trips entirely.
        (Ok(HashSet::new()), Ok(HashSet::new()))
    } else {
        tokio::join!(
            modrinth.lookup_hashes(&hashes),
            curseforge.lookup_fingerprints(&fingerprints),
        )
    };

    let modrinth_outcome = CatalogOutcome::from_lookup("modrinth", modrinth_result);
    let curseforge_outcome = CatalogOutcome::from_lookup("curseforge", curseforge_result);

    let mut warnings = Vec::new();
    if let Some(error) = &modrinth_outcome.failure {
        warnings.push(format!(
            "modrinth lookup failed, treating all files as unmatched there: {error}"
        ));
    }
    if let Some(error) = &curseforge_outcome.failure {
        warnings.push(format!(
            "curseforge lookup failed, treating all files as unmatched there: {error}"
        ));
    }

    let reports = verdict::reconcile(scans, &modrinth_outcome, &curseforge_outcome);
    Ok(CheckOutcome { reports, warnings })
}
