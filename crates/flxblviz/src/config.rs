//! Command-line configuration for flxblviz
//!
//! This module provides the CLI surface: repository location, output
//! destination, domain map, output format and logging options.

use std::path::PathBuf;

use clap::Parser;

use crate::extract::ExtractOptions;
use crate::manifest::MANIFEST_FILE;
use crate::render::OutputFormat;

/// Extract the package-directory history of an sfdx monorepo for visualization
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "flxblviz")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
REPO defaults to the current directory, and OUTPUT defaults to standard output.
If OUTPUT exists, it will be overwritten.

DOMAINS is the path to a json file containing mapping between the packages
and their domain. The json file must contain only one object whose keys are the
package names and a string value representing the domain name.

    {
        \"my-package\": \"domain1\",
        \"another-package\": \"my-other-domain\"
    }

Example:
    $ flxblviz -o index.html --format html
    $ flxblviz -r path/to/repo")]
pub struct Config {
    /// Path to the git repository containing the project
    #[arg(short, long, value_name = "REPO", env = "FLXBLVIZ_REPOSITORY")]
    pub repository: Option<PathBuf>,

    /// Path to the output file
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to the domains.json file
    #[arg(short, long, value_name = "DOMAINS", env = "FLXBLVIZ_DOMAINS")]
    pub domains: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Script)]
    pub format: OutputFormat,

    /// Stop after examining this many manifest commits
    #[arg(short = 'n', long, value_name = "N")]
    pub max_commits: Option<usize>,

    /// Manifest path inside the repository
    ///
    /// Defaults to sfdx-project.json at the repository root.
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<String>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the dataset on
    /// standard output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the repository path, using the current directory as default
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CurrentDirUnavailable` if no repository is
    /// specified and the current directory cannot be determined.
    pub fn repository_path(&self) -> Result<PathBuf, ConfigError> {
        match self.repository {
            Some(ref repository) => Ok(repository.clone()),
            None => std::env::current_dir().map_err(ConfigError::CurrentDirUnavailable),
        }
    }

    /// Get the manifest path, using `sfdx-project.json` as default
    #[must_use]
    pub fn manifest_path(&self) -> &str {
        self.manifest.as_deref().unwrap_or(MANIFEST_FILE)
    }

    /// Build the extraction options
    #[must_use]
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            manifest_path: self.manifest_path().to_string(),
            max_commits: self.max_commits,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository path is specified but doesn't exist or isn't a directory
    /// - The commit limit is zero
    /// - The manifest path is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repository) = self.repository {
            if !repository.exists() {
                return Err(ConfigError::RepositoryNotFound(repository.clone()));
            }
            if !repository.is_dir() {
                return Err(ConfigError::RepositoryNotDirectory(repository.clone()));
            }
        }

        if self.max_commits == Some(0) {
            return Err(ConfigError::ZeroCommitLimit);
        }

        if self.manifest_path().is_empty() {
            return Err(ConfigError::EmptyManifestPath);
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepositoryNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepositoryNotDirectory(PathBuf),

    /// The current directory cannot be determined
    #[error("could not get the current working directory: {0}")]
    CurrentDirUnavailable(std::io::Error),

    /// `--max-commits 0` would never examine anything
    #[error("--max-commits must be at least 1")]
    ZeroCommitLimit,

    /// `--manifest ""`
    #[error("--manifest must not be empty")]
    EmptyManifestPath,
}
