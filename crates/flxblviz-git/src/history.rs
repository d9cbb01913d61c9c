// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! The version-control capability used by the extraction pipeline
//!
//! The pipeline never talks to `git2` directly. Everything it needs from a
//! repository goes through [`History`], so the same extraction logic runs
//! against a real repository ([`crate::GitRepo`]) or a scripted one
//! ([`crate::MemoryHistory`]).

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::error::GitError;

/// Read-only access to a repository's commit history
pub trait History {
    /// Identifier of a single commit
    type Id: Clone + fmt::Display;

    /// Lazy sequence of commits produced by [`History::log_touching`]
    type Log<'a>: Iterator<Item = Self::Id>
    where
        Self: 'a;

    /// Resolve HEAD to a commit
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` if HEAD is unborn or does not
    /// point at a commit.
    fn head(&self) -> Result<Self::Id, GitError>;

    /// Walk history from `from`, newest committer time first, yielding only
    /// the commits that changed `path`
    ///
    /// A commit changed `path` when the entry at `path` differs from every one
    /// of its parents, or, for a root commit, when `path` exists at all. A
    /// merge that keeps one parent's entry is left out, as `git log -- path`
    /// does.
    /// The returned iterator may be dropped at any point.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the walk cannot be set up.
    fn log_touching<'a>(
        &'a self,
        from: &Self::Id,
        path: &str,
    ) -> Result<Self::Log<'a>, GitError>;

    /// Read the content of `path` as of commit `id`
    ///
    /// # Errors
    ///
    /// Returns `GitError::FileNotFound` if the path is absent from the tree.
    fn read_file(&self, id: &Self::Id, path: &str) -> Result<Vec<u8>, GitError>;

    /// List every file path in the full tree of commit `id`
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the tree cannot be read.
    fn list_files(&self, id: &Self::Id) -> Result<Vec<String>, GitError>;

    /// Author timestamp of commit `id`, in the author's own UTC offset
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitNotFound` if the commit is unknown.
    fn author_time(&self, id: &Self::Id) -> Result<DateTime<FixedOffset>, GitError>;
}

/// Abbreviate a commit id for log output (first 7 characters)
#[must_use]
pub fn short_id(id: &impl fmt::Display) -> String {
    id.to_string().chars().take(7).collect()
}
