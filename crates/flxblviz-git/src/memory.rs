// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! In-memory history
//!
//! A linear, scripted history implementing [`History`]. Each commit holds a
//! full snapshot of its files; the parent of a commit is the one recorded
//! before it. Used by tests and benchmarks that exercise the extraction
//! pipeline without a repository on disk.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::error::GitError;
use crate::history::History;

/// One commit of a [`MemoryHistory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCommit {
    /// Author (and committer) time
    pub when: DateTime<FixedOffset>,
    /// Full tree snapshot: path to content
    pub files: BTreeMap<String, Vec<u8>>,
    /// Make [`History::list_files`] fail for this commit
    pub census_failure: bool,
}

impl MemoryCommit {
    /// Create an empty commit authored at `when`
    #[must_use]
    pub fn new(when: DateTime<FixedOffset>) -> Self {
        Self {
            when,
            files: BTreeMap::new(),
            census_failure: false,
        }
    }

    /// Add or replace a file
    #[must_use]
    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.to_string(), content.into());
        self
    }

    /// Remove a file
    #[must_use]
    pub fn without_file(mut self, path: &str) -> Self {
        self.files.remove(path);
        self
    }

    /// Change the author time, keeping the files
    #[must_use]
    pub fn at(mut self, when: DateTime<FixedOffset>) -> Self {
        self.when = when;
        self
    }

    /// Make listing this commit's files fail
    #[must_use]
    pub fn with_census_failure(mut self) -> Self {
        self.census_failure = true;
        self
    }
}

/// A linear history held in memory, oldest commit first
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    commits: Vec<MemoryCommit>,
}

impl MemoryHistory {
    /// Create an empty history (HEAD is unborn)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commit on top of the current HEAD and return its id
    pub fn commit(&mut self, commit: MemoryCommit) -> String {
        self.commits.push(commit);
        Self::id_of(self.commits.len() - 1)
    }

    /// The most recent commit, used as a base for the next one
    #[must_use]
    pub fn tip(&self) -> Option<&MemoryCommit> {
        self.commits.last()
    }

    /// Number of recorded commits
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Check if no commit has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    fn id_of(index: usize) -> String {
        format!("{:040x}", index + 1)
    }

    fn index_of(&self, id: &str) -> Result<usize, GitError> {
        // Ids are the 1-based commit position as 40 hex digits.
        Some(id)
            .filter(|id| id.len() == 40)
            .and_then(|id| usize::from_str_radix(id, 16).ok())
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < self.commits.len())
            .ok_or_else(|| GitError::CommitNotFound { id: id.to_string() })
    }

    fn get(&self, id: &str) -> Result<&MemoryCommit, GitError> {
        self.index_of(id).map(|i| &self.commits[i])
    }

    fn touches(&self, index: usize, path: &str) -> bool {
        let current = self.commits[index].files.get(path);
        match index.checked_sub(1) {
            Some(parent) => self.commits[parent].files.get(path) != current,
            None => current.is_some(),
        }
    }
}

/// Commits of a [`MemoryHistory`] that changed one path, newest first
pub struct MemoryLog<'a> {
    history: &'a MemoryHistory,
    path: String,
    next: Option<usize>,
}

impl Iterator for MemoryLog<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(index) = self.next {
            self.next = index.checked_sub(1);
            if self.history.touches(index, &self.path) {
                return Some(MemoryHistory::id_of(index));
            }
        }
        None
    }
}

impl History for MemoryHistory {
    type Id = String;
    type Log<'a> = MemoryLog<'a>;

    fn head(&self) -> Result<String, GitError> {
        if self.commits.is_empty() {
            return Err(GitError::InvalidReference {
                reference: "HEAD".to_string(),
            });
        }
        Ok(Self::id_of(self.commits.len() - 1))
    }

    fn log_touching<'a>(&'a self, from: &String, path: &str) -> Result<MemoryLog<'a>, GitError> {
        let start = self.index_of(from)?;
        Ok(MemoryLog {
            history: self,
            path: path.to_string(),
            next: Some(start),
        })
    }

    fn read_file(&self, id: &String, path: &str) -> Result<Vec<u8>, GitError> {
        self.get(id)?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| GitError::FileNotFound {
                commit: id.clone(),
                path: path.to_string(),
            })
    }

    fn list_files(&self, id: &String) -> Result<Vec<String>, GitError> {
        let commit = self.get(id)?;
        if commit.census_failure {
            return Err(GitError::Git2(git2::Error::from_str("tree is unreadable")));
        }
        Ok(commit.files.keys().cloned().collect())
    }

    fn author_time(&self, id: &String) -> Result<DateTime<FixedOffset>, GitError> {
        Ok(self.get(id)?.when)
    }
}
