//! Corpus build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use vellum_corpus::{CorpusBuilder, CorpusConfig};

use crate::config;

/// Run the corpus command.
pub fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Assembling markdown corpus...");

    let file_config = config::load(config_path)?;

    let config = CorpusConfig {
        root_dir: PathBuf::from(&file_config.docs.root),
        output_path: output.unwrap_or_else(|| PathBuf::from(&file_config.corpus.output)),
    };

    let result = CorpusBuilder::new(config).build()?;

    tracing::info!(
        "Assembled {} pages ({} bytes) in {}ms",
        result.files,
        result.bytes,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_path.display());

    Ok(())
}
