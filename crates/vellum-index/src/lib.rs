//! Searchable docs index builder.
//!
//! Walks a markdown tree, normalizes each page's frontmatter, and emits the
//! ordered index as a JavaScript data module loaded by the docs site.

pub mod builder;
pub mod generator;

pub use builder::{IndexBuilder, IndexConfig, IndexError, IndexResult};
pub use generator::render_index_module;
