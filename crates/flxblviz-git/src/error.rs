// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! Error types for flxblviz-git

use thiserror::Error;

/// Errors that can occur while reading repository history
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("could not open git repo: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// A reference (usually HEAD) does not resolve to a commit
    #[error("could not resolve reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// A commit id is not known to the history
    #[error("commit not found: {id}")]
    CommitNotFound {
        /// The commit id that was looked up
        id: String,
    },

    /// The requested path does not exist in the commit's tree
    #[error("file not found in {commit}: {path}")]
    FileNotFound {
        /// The commit whose tree was searched
        commit: String,
        /// The repository-relative path that was requested
        path: String,
    },

    /// The path exists in the tree but is not a regular file
    #[error("not a file in {commit}: {path}")]
    NotAFile {
        /// The commit whose tree was searched
        commit: String,
        /// The repository-relative path that was requested
        path: String,
    },
}
