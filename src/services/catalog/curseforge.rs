//! CurseForge fingerprint matching.

use std::collections::HashSet;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::types::errors::CatalogError;

/// Public CurseForge core API root.
pub const DEFAULT_BASE_URL: &str = "https://api.curseforge.com/v1";

/// Header carrying the static API credential.
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Serialize)]
struct FingerprintsRequest<'a> {
    fingerprints: &'a [u32],
}

/// Envelope around the match report. The service also reports partial
/// (fuzzy) matches in the same payload; only exact matches are consumed
/// to keep false positives out of the verdicts.
#[derive(Debug, Deserialize)]
struct FingerprintsResponse {
    data: FingerprintMatches,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FingerprintMatches {
    exact_fingerprints: Vec<u32>,
}

/// Batch lookup client for the CurseForge fingerprint index.
#[derive(Debug, Clone)]
pub struct CurseforgeClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CurseforgeClient {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http, api_key, DEFAULT_BASE_URL)
    }

    /// Client against a non-default API root (tests, proxies).
    pub fn with_base_url(
        http: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Look up which of `fingerprints` CurseForge reports as exact matches.
    pub async fn lookup_fingerprints(
        &self,
        fingerprints: &[u32],
    ) -> Result<HashSet<u32>, CatalogError> {
        let url = format!("{}/fingerprints", self.base_url);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&FingerprintsRequest { fingerprints })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let report: FingerprintsResponse = response.json().await?;
        Ok(report.data.exact_fingerprints.into_iter().collect())
    }
}
