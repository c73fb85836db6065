//! Per-file reconciliation of the two catalog lookups.
//!
//! Pure classification over two independent boolean memberships; no
//! state is carried between files and input order is preserved.

use std::path::PathBuf;

use crate::services::catalog::CatalogOutcome;
use crate::services::scanner::{FileScan, HashedFile};

/// Catalog recognition outcome for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    NotFound,
    Modrinth,
    Curseforge,
    Both,
}

impl Verdict {
    /// Classify from the two membership bits.
    pub fn classify(on_modrinth: bool, on_curseforge: bool) -> Self {
        match (on_modrinth, on_curseforge) {
            (true, true) => Self::Both,
            (true, false) => Self::Modrinth,
            (false, true) => Self::Curseforge,
            (false, false) => Self::NotFound,
        }
    }
}

/// One reported row; every enumerated file produces exactly one.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    Checked(Verdict),
    /// Hashing failed; the file was never submitted to either catalog.
    Unreadable(String),
}

/// Join both lookup outcomes back to the scanned files, in input order.
///
/// Membership is tested per file, so several files with identical
/// content all receive the same verdict.
pub fn reconcile(
    scans: Vec<FileScan>,
    modrinth: &CatalogOutcome<String>,
    curseforge: &CatalogOutcome<u32>,
) -> Vec<FileReport> {
    scans
        .into_iter()
        .map(|scan| match scan {
            FileScan::Hashed(HashedFile {
                path,
                sha1,
                fingerprint,
            }) => FileReport {
                path,
                status: FileStatus::Checked(Verdict::classify(
                    modrinth.contains(&sha1),
                    curseforge.contains(&fingerprint),
                )),
            },
            FileScan::Unreadable { path, error } => FileReport {
                path,
                status: FileStatus::Unreadable(error.to_string()),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::errors::CatalogError;
    use std::collections::HashSet;

    fn hashed(name: &str, sha1: &str, fingerprint: u32) -> FileScan {
        FileScan::Hashed(HashedFile {
            path: PathBuf::from(name),
            sha1: sha1.to_string(),
            fingerprint,
        })
    }

    fn ok_outcome<T: Eq + std::hash::Hash>(matches: HashSet<T>) -> CatalogOutcome<T> {
        CatalogOutcome::from_lookup("stub", Ok(matches))
    }

    #[test]
    fn classify_covers_all_four_verdicts() {
        assert_eq!(Verdict::classify(true, true), Verdict::Both);
        assert_eq!(Verdict::classify(true, false), Verdict::Modrinth);
        assert_eq!(Verdict::classify(false, true), Verdict::Curseforge);
        assert_eq!(Verdict::classify(false, false), Verdict::NotFound);
    }

    #[test]
    fn reconcile_assigns_one_verdict_per_file_in_order() {
        let scans = vec![
            hashed("a.jar", "aaaa", 1),
            hashed("b.jar", "bbbb", 2),
            hashed("c.jar", "cccc", 3),
            hashed("d.jar", "dddd", 4),
        ];
        let modrinth = ok_outcome(HashSet::from(["aaaa".to_string(), "dddd".to_string()]));
        let curseforge = ok_outcome(HashSet::from([2u32, 4]));

        let reports = reconcile(scans, &modrinth, &curseforge);

        let verdicts: Vec<Verdict> = reports
            .iter()
            .map(|r| match r.status {
                FileStatus::Checked(v) => v,
                FileStatus::Unreadable(_) => panic!("unexpected unreadable row"),
            })
            .collect();

        assert_eq!(
            verdicts,
            vec![
                Verdict::Modrinth,
                Verdict::Curseforge,
                Verdict::NotFound,
                Verdict::Both,
            ]
        );
        let names: Vec<&str> = reports
            .iter()
            .map(|r| r.path.to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.jar", "b.jar", "c.jar", "d.jar"]);
    }

    #[test]
    fn duplicate_contents_get_the_same_verdict() {
        let scans = vec![
            hashed("copy1.jar", "same", 7),
            hashed("copy2.jar", "same", 7),
        ];
        let modrinth = ok_outcome(HashSet::from(["same".to_string()]));
        let curseforge = ok_outcome(HashSet::new());

        let reports = reconcile(scans, &modrinth, &curseforge);

        assert_eq!(reports.len(), 2);
        for report in &reports {
            match report.status {
                FileStatus::Checked(v) => assert_eq!(v, Verdict::Modrinth),
                FileStatus::Unreadable(_) => panic!("unexpected unreadable row"),
            }
        }
    }

    #[test]
    fn degraded_catalog_restricts_verdicts_to_the_other_side() {
        let scans = vec![
            hashed("a.jar", "aaaa", 1),
            hashed("b.jar", "bbbb", 2),
        ];
        let modrinth = ok_outcome(HashSet::from(["aaaa".to_string()]));
        let curseforge: CatalogOutcome<u32> =
            CatalogOutcome::from_lookup("stub", Err(CatalogError::Timeout));

        let reports = reconcile(scans, &modrinth, &curseforge);

        assert_eq!(reports.len(), 2);
        match reports[0].status {
            FileStatus::Checked(v) => assert_eq!(v, Verdict::Modrinth),
            _ => panic!(),
        }
        match reports[1].status {
            FileStatus::Checked(v) => assert_eq!(v, Verdict::NotFound),
            _ => panic!(),
        }
    }

    #[test]
    fn unreadable_scan_becomes_an_unreadable_row() {
        let scans = vec![FileScan::Unreadable {
            path: PathBuf::from("broken.jar"),
            error: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }];
        let modrinth = ok_outcome(HashSet::new());
        let curseforge = ok_outcome(HashSet::new());

        let reports = reconcile(scans, &modrinth, &curseforge);

        assert_eq!(reports.len(), 1);
        match &reports[0].status {
            FileStatus::Unreadable(message) => assert!(message.contains("denied")),
            FileStatus::Checked(_) => panic!("expected unreadable row"),
        }
    }
}
