//! Derived fields of package-directory records

use chrono::{DateTime, FixedOffset};

use crate::census::Census;
use crate::dataset::{PackageDirectory, Snapshot};
use crate::domains::DomainMap;
use crate::manifest::ManifestEntry;

/// Turn the manifest entries of one commit into a snapshot
///
/// A blank `package` falls back to `path`; `size` is the character length
/// of the resulting package name, and the domain is looked up with it.
#[must_use]
pub fn enrich(
    entries: Vec<ManifestEntry>,
    census: &Census,
    when: DateTime<FixedOffset>,
    domains: &DomainMap,
) -> Snapshot {
    entries
        .into_iter()
        .map(|entry| {
            let package = if entry.package.is_empty() {
                entry.path.clone()
            } else {
                entry.package
            };

            PackageDirectory {
                size: package.chars().count(),
                domain: domains.domain_of(&package).to_string(),
                file_count: census.count_with_prefix(&entry.path),
                path: entry.path,
                package,
                when,
            }
        })
        .collect()
}
