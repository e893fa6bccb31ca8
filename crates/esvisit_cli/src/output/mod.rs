//! Output formatting module

mod json;
mod text;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use miette::Result;

use crate::cli::OutputFormat;

/// Node counts of one file.
#[derive(Debug)]
pub struct NodeStats {
    pub path: PathBuf,
    pub total: usize,
    pub counts: BTreeMap<String, usize>,
}

impl NodeStats {
    pub fn new(path: &Path, counts: BTreeMap<String, usize>) -> Self {
        Self {
            path: path.to_path_buf(),
            total: counts.values().sum(),
            counts,
        }
    }
}

pub fn output_stats(stats: &NodeStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(stats)?,
        OutputFormat::Text => text::output_text(stats),
    }

    Ok(())
}
