// Copyright (c) 2026 - present flxblviz contributors
// SPDX-License-Identifier: MIT

//! One complete run of the tool
//!
//! Fatal checks happen in a fixed order: configuration, domain map,
//! repository, HEAD, and only then the output file. A failure at any step
//! aborts before the output destination is touched.

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use flxblviz_git::GitRepo;
use tracing::{debug, info};

use crate::config::Config;
use crate::domains::DomainMap;
use crate::extract::{ExtractStats, Extractor};
use crate::render::render;

/// Run the extraction described by `config` and write the result
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the domain map cannot
/// be loaded, the repository cannot be opened or its HEAD resolved, or the
/// output cannot be written.
pub fn run(config: &Config) -> Result<ExtractStats> {
    config.validate()?;

    let repository = config.repository_path()?;
    let domains = DomainMap::load(config.domains.as_deref())
        .context("could not read the domains file")?;
    debug!(domains = domains.len(), "Domain map ready");

    let repo = GitRepo::open(&repository)?;
    info!(path = %repo.path().display(), "Opened repository");

    let extractor = Extractor::new(domains, config.extract_options());
    let extraction = extractor.run(&repo)?;

    match config.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("could not open output file {}", path.display()))?;
            render(&extraction.dataset, config.format, BufWriter::new(file))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => {
            render(&extraction.dataset, config.format, io::stdout().lock())?;
        }
    }

    Ok(extraction.stats)
}
