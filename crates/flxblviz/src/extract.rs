// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! History extraction
//!
//! This module drives the pipeline: walk the commits that touched the
//! manifest, decode the manifest and list the files of each one, enrich the
//! entries, and collect one snapshot per commit.
//!
//! # Example
//!
//! ```no_run
//! use flxblviz::domains::DomainMap;
//! use flxblviz::extract::{ExtractOptions, Extractor};
//! use flxblviz_git::GitRepo;
//!
//! let repo = GitRepo::open("/path/to/repo").expect("open repo");
//! let extractor = Extractor::new(DomainMap::default(), ExtractOptions::bounded(6000));
//! let extraction = extractor.run(&repo).expect("extract");
//! println!("{} snapshots", extraction.dataset.len());
//! ```

use flxblviz_git::{GitError, History, short_id};
use thiserror::Error;
use tracing::{debug, info};

use crate::census::Census;
use crate::dataset::{Dataset, Snapshot};
use crate::domains::DomainMap;
use crate::enrich::enrich;
use crate::manifest::{MANIFEST_FILE, ManifestError, read_manifest};

// ============================================================================
// Options and Statistics
// ============================================================================

/// Options for an extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Repository-relative path of the manifest
    pub manifest_path: String,
    /// Maximum number of manifest commits to examine (None = whole history)
    pub max_commits: Option<usize>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            manifest_path: MANIFEST_FILE.to_string(),
            max_commits: None,
        }
    }
}

impl ExtractOptions {
    /// Examine at most `n` commits
    #[must_use]
    pub fn bounded(n: usize) -> Self {
        Self {
            max_commits: Some(n),
            ..Default::default()
        }
    }

    /// Read the manifest from another path
    #[must_use]
    pub fn with_manifest(mut self, path: &str) -> Self {
        self.manifest_path = path.to_string();
        self
    }
}

/// Counters from an extraction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Commits taken from the history walk
    pub examined: usize,
    /// Commits that contributed a snapshot
    pub included: usize,
    /// Commits dropped because of a per-commit failure
    pub skipped: usize,
}

// ============================================================================
// Per-commit outcome
// ============================================================================

/// Why a commit contributed nothing to the dataset
#[derive(Debug, Error)]
pub enum SkipReason {
    /// Manifest absent or not decodable
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// File list could not be built
    #[error("file census failed: {0}")]
    Census(GitError),

    /// Author time could not be read
    #[error("author time unavailable: {0}")]
    AuthorTime(GitError),
}

/// Result of processing one commit
#[derive(Debug)]
pub enum CommitOutcome {
    /// The commit's enriched package directories
    Snapshot(Snapshot),
    /// The commit is dropped from the dataset
    Skipped(SkipReason),
}

/// A finished extraction
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Snapshots in traversal order
    pub dataset: Dataset,
    /// Run counters
    pub stats: ExtractStats,
}

// ============================================================================
// Extractor
// ============================================================================

/// Builds the package-directory time series of a history
pub struct Extractor {
    domains: DomainMap,
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor with the given domain map and options
    #[must_use]
    pub fn new(domains: DomainMap, options: ExtractOptions) -> Self {
        Self { domains, options }
    }

    /// Get the extraction options
    #[must_use]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Process a single commit
    pub fn process_commit<H: History>(&self, history: &H, id: &H::Id) -> CommitOutcome {
        match self.snapshot(history, id) {
            Ok(snapshot) => CommitOutcome::Snapshot(snapshot),
            Err(reason) => CommitOutcome::Skipped(reason),
        }
    }

    fn snapshot<H: History>(&self, history: &H, id: &H::Id) -> Result<Snapshot, SkipReason> {
        let entries = read_manifest(history, id, &self.options.manifest_path)?;
        let census = Census::take(history, id).map_err(SkipReason::Census)?;
        let when = history.author_time(id).map_err(SkipReason::AuthorTime)?;
        Ok(enrich(entries, &census, when, &self.domains))
    }

    /// Walk history from HEAD and assemble the dataset
    ///
    /// Commits whose manifest or file list cannot be read are left out; the
    /// walk carries on with the next one.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be resolved or the walk cannot start.
    pub fn run<H: History>(&self, history: &H) -> Result<Extraction, GitError> {
        let head = history.head()?;
        info!(
            head = %short_id(&head),
            manifest = %self.options.manifest_path,
            "Walking manifest history"
        );

        let limit = self.options.max_commits.unwrap_or(usize::MAX);
        let mut dataset = Dataset::new();
        let mut stats = ExtractStats::default();

        for id in history.log_touching(&head, &self.options.manifest_path)?.take(limit) {
            stats.examined += 1;

            match self.process_commit(history, &id) {
                CommitOutcome::Snapshot(snapshot) => {
                    debug!(commit = %short_id(&id), packages = snapshot.len(), "Snapshot added");
                    stats.included += 1;
                    dataset.push(snapshot);
                }
                CommitOutcome::Skipped(reason) => {
                    debug!(commit = %short_id(&id), reason = %reason, "Skipping commit");
                    stats.skipped += 1;
                }
            }
        }

        if stats.examined == limit {
            info!(limit = limit, "Commit limit reached, stopping walk");
        }

        info!(
            examined = stats.examined,
            included = stats.included,
            skipped = stats.skipped,
            "Extraction complete"
        );

        Ok(Extraction { dataset, stats })
    }
}
