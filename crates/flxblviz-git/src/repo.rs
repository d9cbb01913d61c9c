// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! `git2`-backed history
//!
//! This module implements [`History`] on top of a local git repository
//! using the `git2` crate.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{
    ErrorCode, ObjectType, Oid, Repository, Revwalk, Sort, Tree, TreeWalkMode, TreeWalkResult,
};
use tracing::{debug, warn};

use crate::error::GitError;
use crate::history::{History, short_id};

/// A git repository opened for history extraction
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// The path must be the repository itself (its working directory or its
    /// git directory); parent directories are not searched.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Get the repository's git directory
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    fn find_commit(&self, id: &Oid) -> Result<git2::Commit<'_>, GitError> {
        self.repo
            .find_commit(*id)
            .map_err(|_| GitError::CommitNotFound { id: id.to_string() })
    }
}

impl History for GitRepo {
    type Id = Oid;
    type Log<'a> = PathLog<'a>;

    fn head(&self) -> Result<Oid, GitError> {
        let invalid = |_| GitError::InvalidReference {
            reference: "HEAD".to_string(),
        };
        let head = self.repo.head().map_err(invalid)?;
        let commit = head.peel_to_commit().map_err(invalid)?;
        Ok(commit.id())
    }

    fn log_touching<'a>(&'a self, from: &Oid, path: &str) -> Result<PathLog<'a>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(*from)?;

        Ok(PathLog {
            repo: &self.repo,
            revwalk,
            path: path.to_string(),
            finished: false,
        })
    }

    fn read_file(&self, id: &Oid, path: &str) -> Result<Vec<u8>, GitError> {
        let tree = self.find_commit(id)?.tree()?;
        let entry = tree.get_path(Path::new(path)).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitError::FileNotFound {
                    commit: id.to_string(),
                    path: path.to_string(),
                }
            } else {
                GitError::Git2(e)
            }
        })?;

        let blob = entry
            .to_object(&self.repo)?
            .into_blob()
            .map_err(|_| GitError::NotAFile {
                commit: id.to_string(),
                path: path.to_string(),
            })?;

        Ok(blob.content().to_vec())
    }

    fn list_files(&self, id: &Oid) -> Result<Vec<String>, GitError> {
        let tree = self.find_commit(id)?.tree()?;
        let mut files = Vec::new();

        // Gitlinks (submodules) are commits, not blobs, so they are not files.
        tree.walk(TreeWalkMode::PreOrder, |root, entry| {
            if entry.kind() == Some(ObjectType::Blob) {
                let name = String::from_utf8_lossy(entry.name_bytes());
                files.push(format!("{root}{name}"));
            }
            TreeWalkResult::Ok
        })?;

        Ok(files)
    }

    fn author_time(&self, id: &Oid) -> Result<DateTime<FixedOffset>, GitError> {
        let commit = self.find_commit(id)?;
        Ok(to_datetime(commit.author().when()))
    }
}

/// Commits that changed one path, newest committer time first
///
/// Produced by [`GitRepo::log_touching`](History::log_touching). A failure of
/// the underlying revwalk ends the sequence; a commit whose trees cannot be
/// compared is skipped.
pub struct PathLog<'repo> {
    repo: &'repo Repository,
    revwalk: Revwalk<'repo>,
    path: String,
    finished: bool,
}

impl PathLog<'_> {
    fn touches(&self, oid: Oid) -> Result<bool, git2::Error> {
        let commit = self.repo.find_commit(oid)?;
        let entry = entry_at(&commit.tree()?, &self.path)?;

        if commit.parent_count() == 0 {
            return Ok(entry.is_some());
        }

        // A commit matching any parent at `path` did not change it there.
        for parent in commit.parents() {
            if entry_at(&parent.tree()?, &self.path)? == entry {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl Iterator for PathLog<'_> {
    type Item = Oid;

    fn next(&mut self) -> Option<Oid> {
        if self.finished {
            return None;
        }

        loop {
            let oid = match self.revwalk.next() {
                Some(Ok(oid)) => oid,
                Some(Err(e)) => {
                    warn!(error = %e, "History walk stopped early");
                    self.finished = true;
                    return None;
                }
                None => {
                    self.finished = true;
                    return None;
                }
            };

            match self.touches(oid) {
                Ok(true) => return Some(oid),
                Ok(false) => {}
                Err(e) => {
                    debug!(
                        commit = %short_id(&oid),
                        error = %e,
                        "Could not compare trees, skipping commit"
                    );
                }
            }
        }
    }
}

/// Object id and file mode of the entry at `path`, if present
fn entry_at(tree: &Tree<'_>, path: &str) -> Result<Option<(Oid, i32)>, git2::Error> {
    match tree.get_path(Path::new(path)) {
        Ok(entry) => Ok(Some((entry.id(), entry.filemode()))),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Convert a git signature time to a timestamp carrying the same UTC offset
fn to_datetime(time: git2::Time) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp(time.seconds(), 0)
        .unwrap_or_default()
        .with_timezone(&offset)
}
