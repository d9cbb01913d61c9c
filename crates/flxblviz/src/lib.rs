//! flxblviz library
//!
//! This module exports the history-extraction pipeline of flxblviz for use
//! by the binary, integration tests and benchmarks.
//!
//! # Example
//!
//! ```no_run
//! use flxblviz::domains::DomainMap;
//! use flxblviz::extract::{ExtractOptions, Extractor};
//! use flxblviz::render::{OutputFormat, render};
//! use flxblviz_git::GitRepo;
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let extractor = Extractor::new(DomainMap::default(), ExtractOptions::default());
//! let extraction = extractor.run(&repo).expect("extract");
//!
//! render(&extraction.dataset, OutputFormat::Script, std::io::stdout()).expect("render");
//! ```

pub mod app;
pub mod census;
pub mod config;
pub mod dataset;
pub mod domains;
pub mod enrich;
pub mod extract;
pub mod manifest;
pub mod render;
