//! Modrinth version-file lookup by SHA-1 digest.

use std::collections::{HashMap, HashSet};

use reqwest::Client;
use serde::Serialize;

use crate::types::errors::CatalogError;

/// Public Modrinth v2 API root.
pub const DEFAULT_BASE_URL: &str = "https://api.modrinth.com/v2";

/// Digest algorithm the lookup is keyed by.
const ALGORITHM: &str = "sha1";

#[derive(Debug, Serialize)]
struct VersionFilesRequest<'a> {
    hashes: &'a [String],
    algorithm: &'a str,
}

/// Batch lookup client for the Modrinth version-file index.
#[derive(Debug, Clone)]
pub struct ModrinthClient {
    http: Client,
    base_url: String,
}

impl ModrinthClient {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Client against a non-default API root (tests, mirrors).
    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Look up which of `hashes` Modrinth knows a version file for.
    ///
    /// The response is a JSON object keyed by matched digest; only key
    /// presence is consumed, the version metadata is ignored.
    pub async fn lookup_hashes(&self, hashes: &[String]) -> Result<HashSet<String>, CatalogError> {
        let url = format!("{}/version_files", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&VersionFilesRequest {
                hashes,
                algorithm: ALGORITHM,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let matched: HashMap<String, serde_json::Value> = response.json().await?;
        Ok(matched.into_keys().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let hashes = vec!["2aae6c35c94fcfb415dbe95f408b9ce91ee846ed".to_string()];
        let body = serde_json::to_value(VersionFilesRequest {
            hashes: &hashes,
            algorithm: ALGORITHM,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "hashes": ["2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"],
                "algorithm": "sha1",
            })
        );
    }

    #[test]
    fn response_keys_are_the_matches() {
        let raw = r#"{
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed": {"project_id": "AABBCC", "files": []},
            "da39a3ee5e6b4b0d3255bfef95601890afd80709": {"project_id": "DDEEFF", "files": []}
        }"#;

        let matched: HashMap<String, serde_json::Value> = serde_json::from_str(raw).unwrap();
        let keys: HashSet<String> = matched.into_keys().collect();

        assert_eq!(keys.len(), 2);
        assert!(keys.contains("2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"));
    }
}
