//! Docs index build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use vellum_index::{IndexBuilder, IndexConfig};

use crate::config;

/// Run the index command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building docs index...");

    let file_config = config::load(config_path)?;
    let root = PathBuf::from(&file_config.docs.root);

    let config = IndexConfig {
        docs_dir: root.join("markdown"),
        output_path: output.unwrap_or_else(|| PathBuf::from(&file_config.index.output)),
    };

    let result = IndexBuilder::new(config).build()?;

    tracing::info!(
        "Indexed {} pages in {}ms",
        result.entries,
        result.duration_ms
    );

    if !result.skipped.is_empty() {
        tracing::warn!(
            "{} pages were left out of the index (missing title or route)",
            result.skipped.len()
        );
    }

    tracing::info!("Output: {}", result.output_path.display());

    Ok(())
}
