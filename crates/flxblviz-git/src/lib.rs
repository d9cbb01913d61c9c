// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! flxblviz-git: Git history access for flxblviz
//!
//! This library crate exposes the small set of version-control capabilities
//! the extraction pipeline needs, behind the [`History`] trait, with a
//! `git2`-backed implementation and an in-memory one.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use flxblviz_git::{GitRepo, History};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let head = repo.head().expect("resolve HEAD");
//!
//! for id in repo.log_touching(&head, "sfdx-project.json").expect("walk") {
//!     println!("{id} at {}", repo.author_time(&id).expect("author time"));
//! }
//! ```

pub mod error;
pub mod history;
pub mod memory;
pub mod repo;

pub use error::GitError;
pub use history::{History, short_id};
pub use memory::{MemoryCommit, MemoryHistory, MemoryLog};
pub use repo::{GitRepo, PathLog};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::GitError;
    pub use crate::history::History;
    pub use crate::repo::GitRepo;
}
