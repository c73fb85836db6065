//! Remote catalog lookup clients.
//!
//! Both catalogs expose a single batch endpoint: submit every key for the
//! run in one POST, get back the subset the service recognizes. A failed
//! batch degrades to an empty result with one recorded warning; it never
//! aborts the run or touches the other catalog.

pub mod curseforge;
pub mod modrinth;

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::errors::CatalogError;

/// Result of one catalog's batch lookup, degraded on failure.
#[derive(Debug)]
pub struct CatalogOutcome<T> {
    /// Keys the catalog recognized. Empty when the lookup failed.
    pub matches: HashSet<T>,
    /// The failure that emptied this outcome, if any.
    pub failure: Option<CatalogError>,
}

impl<T: Eq + Hash> CatalogOutcome<T> {
    /// Collapse a lookup result into a degraded-on-failure outcome.
    pub fn from_lookup(catalog: &str, result: Result<HashSet<T>, CatalogError>) -> Self {
        match result {
            Ok(matches) => {
                log::debug!("{catalog}: {} of the submitted keys matched", matches.len());
                Self {
                    matches,
                    failure: None,
                }
            }
            Err(error) => {
                log::warn!("{catalog} lookup failed: {error}");
                Self {
                    matches: HashSet::new(),
                    failure: Some(error),
                }
            }
        }
    }

    pub fn contains(&self, key: &T) -> bool {
        self.matches.contains(key)
    }
}
