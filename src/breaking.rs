//! Breaking-change heuristic: a release is breaking when its major key differs
//! from the chronologically preceding release. Placeholder for real API diffing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::library::VersionMetadata;
use crate::version::major_of;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionWithBreaking {
    pub version: String,
    pub published_at: DateTime<Utc>,
    pub breaking: bool,
}

/// Sort by publish date (stable for equal instants) and flag major changes.
/// The earliest release is never breaking.
pub fn detect_breaking_changes(versions: &[VersionMetadata]) -> Vec<VersionWithBreaking> {
    let mut sorted: Vec<&VersionMetadata> = versions.iter().collect();
    sorted.sort_by_key(|v| v.release_date);

    let mut prev_major: Option<u64> = None;
    sorted
        .into_iter()
        .map(|v| {
            let major = major_of(&v.version);
            let breaking = prev_major.is_some_and(|prev| prev != major);
            prev_major = Some(major);
            VersionWithBreaking {
                version: v.version.clone(),
                published_at: v.release_date,
                breaking,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    }

    fn flags(out: &[VersionWithBreaking]) -> Vec<(&str, bool)> {
        out.iter().map(|v| (v.version.as_str(), v.breaking)).collect()
    }

    #[test]
    fn empty_input() {
        assert!(detect_breaking_changes(&[]).is_empty());
    }

    #[test]
    fn major_bump_is_breaking() {
        let out = detect_breaking_changes(&[
            VersionMetadata::new("1.0.0", t0()),
            VersionMetadata::new("2.0.0", t0() + Duration::days(30)),
        ]);
        assert_eq!(flags(&out), vec![("1.0.0", false), ("2.0.0", true)]);
    }

    #[test]
    fn same_major_never_breaking() {
        let out = detect_breaking_changes(&[
            VersionMetadata::new("1.0.0", t0()),
            VersionMetadata::new("1.1.0", t0() + Duration::days(1)),
            VersionMetadata::new("1.1.1", t0() + Duration::days(2)),
        ]);
        assert!(out.iter().all(|v| !v.breaking));
    }

    #[test]
    fn resorts_out_of_order_input() {
        let out = detect_breaking_changes(&[
            VersionMetadata::new("2.0.0", t0() + Duration::days(10)),
            VersionMetadata::new("1.0.0", t0()),
        ]);
        assert_eq!(flags(&out), vec![("1.0.0", false), ("2.0.0", true)]);
    }

    #[test]
    fn backport_to_older_major_counts_as_change() {
        let out = detect_breaking_changes(&[
            VersionMetadata::new("1.9.0", t0()),
            VersionMetadata::new("2.0.0", t0() + Duration::days(1)),
            VersionMetadata::new("1.9.1", t0() + Duration::days(2)),
        ]);
        assert_eq!(
            flags(&out),
            vec![("1.9.0", false), ("2.0.0", true), ("1.9.1", true)]
        );
    }

    #[test]
    fn non_numeric_versions_share_major_zero() {
        let out = detect_breaking_changes(&[
            VersionMetadata::new("canary", t0()),
            VersionMetadata::new("0.1.0", t0() + Duration::days(1)),
        ]);
        assert!(!out[1].breaking);
    }
}
