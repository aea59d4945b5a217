//! Markdown frontmatter extraction and page descriptor normalization.
//!
//! This crate turns the YAML header of a documentation page into a
//! fully-defaulted [`DocDescriptor`] suitable for building the navigation
//! index.

pub mod descriptor;
pub mod frontmatter;

pub use descriptor::{parse_tags, DocDescriptor, RawFrontMatter};
pub use frontmatter::{extract_front_matter, FrontMatterError};
