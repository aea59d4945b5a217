//! Configuration file loading (vellum.toml).

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (vellum.toml).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ConfigFile {
    pub docs: DocsConfig,
    pub index: IndexSettings,
    pub corpus: CorpusSettings,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Site root containing the markdown tree
    pub root: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Path of the generated index module
    pub output: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Path of the assembled corpus file
    pub output: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
        }
    }
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            output: "src/docs-index.js".to_string(),
        }
    }
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            output: "llms.txt".to_string(),
        }
    }
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
