//! Flat markdown corpus assembler.
//!
//! Concatenates every markdown page under a site's `markdown` tree into one
//! text artifact for downstream consumption, with each body prefixed by its
//! relative path.

pub mod corpus;

pub use corpus::{CorpusBuilder, CorpusConfig, CorpusError, CorpusResult};
