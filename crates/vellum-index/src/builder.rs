//! Docs index builder.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use walkdir::WalkDir;

use vellum_md::{extract_front_matter, DocDescriptor, RawFrontMatter};

use crate::generator::render_index_module;

/// Configuration for building the docs index.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Source markdown directory
    pub docs_dir: PathBuf,

    /// Path of the generated module
    pub output_path: PathBuf,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("markdown"),
            output_path: PathBuf::from("src/docs-index.js"),
        }
    }
}

/// Result of an index build.
#[derive(Debug)]
pub struct IndexResult {
    /// Number of pages in the index
    pub entries: usize,

    /// Pages left out for missing title or route
    pub skipped: Vec<PathBuf>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Path of the generated module
    pub output_path: PathBuf,
}

/// Errors that can occur during an index build.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Failed to read docs directory: {0}")]
    ReadError(String),

    #[error("Failed to write index: {0}")]
    WriteError(String),
}

/// Docs index builder.
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    /// Create a new index builder.
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Build the index and write the generated module.
    ///
    /// Pages missing a title or route are dropped from the index and
    /// reported in [`IndexResult::skipped`]; they never fail the build.
    /// Entries with identical `(section, group, order)` keys keep their
    /// discovery order.
    pub fn build(&self) -> Result<IndexResult, IndexError> {
        let start = Instant::now();

        let pages = self.collect_pages()?;

        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        for (path, raw) in pages {
            let descriptor = match raw {
                Some(raw) => DocDescriptor::from_raw(&raw),
                None => DocDescriptor::default(),
            };

            if descriptor.is_indexable() {
                entries.push(descriptor);
            } else {
                tracing::warn!("Leaving {} out of the index: missing title or route", path.display());
                skipped.push(path);
            }
        }

        entries.sort_by(|a, b| {
            a.section
                .cmp(&b.section)
                .then_with(|| a.group.cmp(&b.group))
                .then_with(|| a.order.cmp(&b.order))
        });

        let module = render_index_module(&entries);

        if let Some(parent) = self.config.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| IndexError::WriteError(e.to_string()))?;
            }
        }

        fs::write(&self.config.output_path, module)
            .map_err(|e| IndexError::WriteError(e.to_string()))?;

        let duration = start.elapsed();

        Ok(IndexResult {
            entries: entries.len(),
            skipped,
            duration_ms: duration.as_millis() as u64,
            output_path: self.config.output_path.clone(),
        })
    }

    /// Collect the raw frontmatter of every markdown page.
    ///
    /// A page whose frontmatter fails to parse contributes no fields; it
    /// ends up dropped by the eligibility check rather than aborting the
    /// walk.
    fn collect_pages(&self) -> Result<Vec<(PathBuf, Option<RawFrontMatter>)>, IndexError> {
        if !self.config.docs_dir.exists() {
            return Err(IndexError::ReadError(format!(
                "Docs directory not found: {}",
                self.config.docs_dir.display()
            )));
        }

        let mut pages = Vec::new();

        for entry in WalkDir::new(&self.config.docs_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" && ext != "markdown" {
                continue;
            }

            let content = fs::read_to_string(path)
                .map_err(|e| IndexError::ReadError(format!("{}: {}", path.display(), e)))?;

            let raw = match extract_front_matter(&content) {
                Ok((raw, _)) => raw,
                Err(e) => {
                    tracing::warn!("{}: {}", path.display(), e);
                    None
                }
            };

            pages.push((path.to_path_buf(), raw));
        }

        Ok(pages)
    }
}
