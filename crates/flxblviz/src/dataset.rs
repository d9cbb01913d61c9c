//! Output records and the assembled time series

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Serialize, Serializer};

/// One package directory as of one commit, with derived fields filled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDirectory {
    /// Repository-relative directory of the package
    pub path: String,
    /// Logical package name, defaulted to `path` when the manifest has none
    pub package: String,
    /// Length of `package` in characters
    pub size: usize,
    /// Domain of `package`, empty when unmapped
    pub domain: String,
    /// Author time of the commit
    #[serde(serialize_with = "rfc3339")]
    pub when: DateTime<FixedOffset>,
    /// Number of files whose path starts with `path`
    pub file_count: usize,
}

/// All package directories of one commit, in manifest order
pub type Snapshot = Vec<PackageDirectory>;

/// Snapshots of every processed commit, most recent commit first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    snapshots: Vec<Snapshot>,
}

impl Dataset {
    /// Create an empty dataset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the snapshot of the next commit
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Snapshots in traversal order
    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of snapshots
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no commit contributed a snapshot
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

// RFC 3339, with `Z` for a zero offset.
fn rfc3339<S: Serializer>(when: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&when.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}
