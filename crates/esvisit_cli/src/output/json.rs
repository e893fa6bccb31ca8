//! JSON output formatter

use miette::{IntoDiagnostic, Result};

use super::NodeStats;

pub fn output_json(stats: &NodeStats) -> Result<()> {
    let output = serde_json::json!({
        "path": stats.path.display().to_string(),
        "total": stats.total,
        "counts": stats.counts,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
