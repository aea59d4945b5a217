//! Markdown corpus assembly.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

/// Basenames never included in the corpus, matched case-insensitively.
const EXCLUDED_FILES: &[&str] = &["index.md", "readme.md"];

/// Configuration for assembling the corpus.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Site root containing the `markdown` tree
    pub root_dir: PathBuf,

    /// Path of the assembled artifact
    pub output_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            output_path: PathBuf::from("llms.txt"),
        }
    }
}

/// Result of a corpus build.
#[derive(Debug)]
pub struct CorpusResult {
    /// Number of files included
    pub files: usize,

    /// Size of the artifact in bytes
    pub bytes: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Path of the assembled artifact
    pub output_path: PathBuf,
}

/// Errors that can occur during a corpus build.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Markdown directory not found: {0}")]
    MissingRoot(String),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to write corpus: {0}")]
    WriteError(String),
}

/// Markdown corpus builder.
pub struct CorpusBuilder {
    config: CorpusConfig,
}

impl CorpusBuilder {
    /// Create a new corpus builder.
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    /// Assemble the corpus and write it out.
    ///
    /// Files are ordered lexicographically by full path; any `order`
    /// frontmatter field is ignored. Frontmatter blocks are dropped from
    /// each body, and files left empty by that produce no chunk.
    pub fn build(&self) -> Result<CorpusResult, CorpusError> {
        let start = Instant::now();

        let markdown_dir = self.config.root_dir.join("markdown");
        if !markdown_dir.is_dir() {
            return Err(CorpusError::MissingRoot(markdown_dir.display().to_string()));
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&markdown_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.into_path())
            .filter(|p| is_markdown(p) && !is_excluded(p))
            .collect();

        paths.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));

        let mut chunks = Vec::new();

        for path in &paths {
            let content = fs::read_to_string(path).map_err(|e| CorpusError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let body = strip_front_matter(&content);
            if body.trim().is_empty() {
                tracing::debug!("Skipping empty page {}", path.display());
                continue;
            }

            let relative = path.strip_prefix(&self.config.root_dir).unwrap_or(path);
            chunks.push(format!(
                "=== {} ===\n{}",
                relative.display(),
                body.trim_end()
            ));
        }

        let corpus = chunks.join("\n\n") + "\n";

        fs::write(&self.config.output_path, &corpus)
            .map_err(|e| CorpusError::WriteError(e.to_string()))?;

        let duration = start.elapsed();

        Ok(CorpusResult {
            files: chunks.len(),
            bytes: corpus.len(),
            duration_ms: duration.as_millis() as u64,
            output_path: self.config.output_path.clone(),
        })
    }
}

fn is_markdown(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    ext == "md" || ext == "markdown"
}

fn is_excluded(path: &Path) -> bool {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_lowercase();
    EXCLUDED_FILES.contains(&name.as_str())
}

/// Drop a leading frontmatter block, if any.
///
/// The block opens with a line containing only `---` and closes at the
/// first later line starting with `---`; everything through the closing
/// line is dropped, along with blank lines before the body. An unclosed
/// block leaves the text untouched. Only delimiter boundaries are
/// detected, the header contents are never parsed.
fn strip_front_matter(source: &str) -> &str {
    let after_open = if let Some(rest) = source.strip_prefix("---\n") {
        rest
    } else if let Some(rest) = source.strip_prefix("---\r\n") {
        rest
    } else {
        return source;
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        offset += line.len();
        if line.trim_end_matches(['\r', '\n']).starts_with("---") {
            return skip_blank_lines(&after_open[offset..]);
        }
    }

    source
}

/// Trim leading blank lines.
fn skip_blank_lines(body: &str) -> &str {
    let mut rest = body;
    while let Some(end) = rest.find('\n') {
        if !rest[..end].trim().is_empty() {
            break;
        }
        rest = &rest[end + 1..];
    }
    rest
}
