// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! Manifest (`sfdx-project.json`) decoding
//!
//! Only the `packageDirectories` array is read. Historical manifests vary in
//! shape, so decoding is lenient: unknown keys are ignored, a missing or
//! `null` array is an empty list, and anything after the first JSON value in
//! the file is ignored.

use flxblviz_git::{GitError, History};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Default manifest location at the repository root
pub const MANIFEST_FILE: &str = "sfdx-project.json";

/// Errors reading the manifest of one commit
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest could not be read from the commit's tree
    #[error("manifest not readable: {0}")]
    Read(#[from] GitError),

    /// The manifest content is not the expected structure
    #[error("manifest not decodable: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One `packageDirectories` entry as declared in the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Repository-relative directory of the package
    #[serde(default, deserialize_with = "nullable_string")]
    pub path: String,
    /// Logical package name; blank when not declared
    #[serde(default, deserialize_with = "nullable_string")]
    pub package: String,
}

impl ManifestEntry {
    /// Create an entry
    #[must_use]
    pub fn new(path: &str, package: Option<&str>) -> Self {
        Self {
            path: path.to_string(),
            package: package.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "packageDirectories")]
    package_directories: Option<Vec<ManifestEntry>>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the first JSON value of `bytes`, ignoring whatever follows it
pub(crate) fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    T::deserialize(&mut deserializer)
}

/// Decode the package-directory list of a manifest
///
/// # Errors
///
/// Returns `ManifestError::Decode` if the content is not a JSON object whose
/// `packageDirectories` entries are objects with string fields.
pub fn parse_manifest(bytes: &[u8]) -> Result<Vec<ManifestEntry>, ManifestError> {
    let manifest: Manifest = decode_first(bytes)?;
    Ok(manifest.package_directories.unwrap_or_default())
}

/// Read and decode the manifest at `path` as of commit `id`
///
/// # Errors
///
/// Returns `ManifestError::Read` if the file is absent from the commit's tree
/// and `ManifestError::Decode` if it cannot be decoded.
pub fn read_manifest<H: History>(
    history: &H,
    id: &H::Id,
    path: &str,
) -> Result<Vec<ManifestEntry>, ManifestError> {
    let bytes = history.read_file(id, path)?;
    parse_manifest(&bytes)
}
