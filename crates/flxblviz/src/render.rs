//! Dataset rendering
//!
//! The dataset is emitted either as a bare script assignment
//! (`const dataJson = [...]`) to be loaded next to the visualization page,
//! or as a standalone HTML page embedding the data and the bundled
//! visualization script.

use std::io::Write;

use clap::ValueEnum;
use thiserror::Error;

use crate::dataset::Dataset;

const PAGE_TEMPLATE: &str = include_str!("../assets/index.html");
const VIZ_SCRIPT: &str = include_str!("../assets/viz.js");

const DATA_SLOT: &str = "{{DATA}}";
const VIZ_SLOT: &str = "{{VIZ}}";

/// Prefix of the script assignment
pub const DATA_PREFIX: &str = "const dataJson = ";

/// Output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `const dataJson = <json>` followed by a newline
    #[default]
    Script,
    /// Standalone HTML page with the visualization
    Html,
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing the output failed
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the dataset failed
    #[error("could not convert data to json: {0}")]
    Json(#[from] serde_json::Error),

    /// The page template lacks a placeholder
    #[error("page template has no {0} placeholder")]
    Template(&'static str),
}

/// Write `dataset` to `out` in the given format
///
/// # Errors
///
/// Returns `RenderError` if serialization or writing fails.
pub fn render(
    dataset: &Dataset,
    format: OutputFormat,
    mut out: impl Write,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Script => render_script(dataset, &mut out)?,
        OutputFormat::Html => render_html(dataset, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn render_script(dataset: &Dataset, out: &mut impl Write) -> Result<(), RenderError> {
    out.write_all(DATA_PREFIX.as_bytes())?;
    serde_json::to_writer(&mut *out, dataset)?;
    out.write_all(b"\n")?;
    Ok(())
}

fn render_html(dataset: &Dataset, out: &mut impl Write) -> Result<(), RenderError> {
    let (before_data, rest) = PAGE_TEMPLATE
        .split_once(DATA_SLOT)
        .ok_or(RenderError::Template(DATA_SLOT))?;
    let (between, after_viz) = rest
        .split_once(VIZ_SLOT)
        .ok_or(RenderError::Template(VIZ_SLOT))?;

    // `</` may only occur inside JSON strings, where `<\/` is an equivalent escape.
    let data = serde_json::to_string(dataset)?.replace("</", "<\\/");

    out.write_all(before_data.as_bytes())?;
    out.write_all(data.as_bytes())?;
    out.write_all(between.as_bytes())?;
    out.write_all(VIZ_SCRIPT.as_bytes())?;
    out.write_all(after_viz.as_bytes())?;
    Ok(())
}
