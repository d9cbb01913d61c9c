// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! Package to domain classification
//!
//! The domain map is an optional JSON file whose single object maps package
//! names to domain names:
//!
//! ```json
//! {
//!     "my-package": "domain1",
//!     "another-package": "my-other-domain"
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::manifest::decode_first;

/// Errors loading the domain map
#[derive(Debug, Error)]
pub enum DomainError {
    /// The file could not be read
    #[error("could not read {}: {source}", path.display())]
    Read {
        /// Path of the domain file
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The content is not a JSON object of strings
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        /// Path of the domain file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// Mapping from package name to domain name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DomainMap(HashMap<String, String>);

impl DomainMap {
    /// Load the map from `path`, or return an empty map when no path is given
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Read` if the file cannot be read and
    /// `DomainError::Parse` if it is not a flat JSON object of strings.
    pub fn load(path: Option<&Path>) -> Result<Self, DomainError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let bytes = std::fs::read(path).map_err(|source| DomainError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::from_slice(&bytes).map_err(|source| DomainError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), domains = map.len(), "Loaded domain map");
        Ok(map)
    }

    /// Decode a map from JSON bytes
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the content is not an object of strings.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        decode_first(bytes)
    }

    /// Domain of `package`, or `""` when the package is not mapped
    #[must_use]
    pub fn domain_of(&self, package: &str) -> &str {
        self.0.get(package).map_or("", String::as_str)
    }

    /// Number of mapped packages
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no package is mapped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for DomainMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
