//! Lookups over the loaded corpus.
//!
//! This module provides:
//! - Listing the whole corpus
//! - Prefix and substring search over word forms
//! - Substring search over definition terms
//! - Uniform random picks

pub mod config;
pub mod engine;
pub mod query;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use query::{MatchKind, WordQuery};
