//! File census of a commit

use flxblviz_git::{GitError, History};

/// Every file path in one commit's tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    files: Vec<String>,
}

impl Census {
    /// List the files of commit `id`
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the commit's tree cannot be listed.
    pub fn take<H: History>(history: &H, id: &H::Id) -> Result<Self, GitError> {
        history.list_files(id).map(Self::from_files)
    }

    /// Build a census from an already known file list
    #[must_use]
    pub fn from_files(files: Vec<String>) -> Self {
        Self { files }
    }

    /// Count the files whose path starts with `prefix`
    ///
    /// This is a plain string prefix test, not a path-segment one: a prefix
    /// of `pkg` also counts `pkg-other/file.txt`, and an empty prefix counts
    /// every file.
    #[must_use]
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.files.iter().filter(|f| f.starts_with(prefix)).count()
    }

    /// All listed paths
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Number of listed files
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the tree has no files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
