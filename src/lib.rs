//! # Lexis
//!
//! Lexical lookups over a Latin dictionary corpus.
//!
//! ## Features
//!
//! - Tolerant loading: malformed entries are skipped, unknown codes fall back
//!   to a sentinel
//! - Prefix and substring search over word forms
//! - Substring search over definitions
//! - Data-parallel scans on a rayon pool, results in corpus order
//! - Memoized JSON encoding of every word
//!
//! ```
//! use lexis::prelude::*;
//!
//! let corpus = Corpus::load(r#"[
//!     { "forms": ["amo", "amare"], "definitions": [{ "terms": ["love"] }],
//!       "word_type": { "wordType": "Verb", "conjugation": "First", "verbType": "Transitive" } }
//! ]"#);
//! let engine = SearchEngine::with_corpus(corpus).unwrap();
//!
//! let words = engine.search_by_form_prefix("am").unwrap();
//! assert_eq!(words.len(), 1);
//! ```

pub mod cli;
pub mod corpus;
pub mod error;
pub mod search;
pub mod word;

pub mod prelude {
    pub use crate::corpus::Corpus;
    pub use crate::error::{LexisError, Result};
    pub use crate::search::{MatchKind, SearchConfig, SearchEngine, WordQuery};
    pub use crate::word::{Definition, SupplementalInformation, WordCategory, WordRecord, WordType};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
