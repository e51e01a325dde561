//! Term queries over the corpus.
//!
//! Matching is a plain, case-sensitive substring test. There is no
//! normalization of case or diacritics and no scoring: a word either matches
//! or it does not.

use std::fmt;

use crate::error::{LexisError, Result};
use crate::word::WordRecord;

/// Which part of a word a query looks at, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Some form starts with the term.
    FormPrefix,
    /// Some form contains the term.
    FormContains,
    /// Some definition term contains the term.
    DefinitionContains,
}

/// A validated-on-use term query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordQuery {
    kind: MatchKind,
    term: String,
}

impl WordQuery {
    pub fn new<S: Into<String>>(kind: MatchKind, term: S) -> Self {
        WordQuery {
            kind,
            term: term.into(),
        }
    }

    pub fn form_prefix<S: Into<String>>(term: S) -> Self {
        Self::new(MatchKind::FormPrefix, term)
    }

    pub fn form_contains<S: Into<String>>(term: S) -> Self {
        Self::new(MatchKind::FormContains, term)
    }

    pub fn definition_contains<S: Into<String>>(term: S) -> Self {
        Self::new(MatchKind::DefinitionContains, term)
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Reject empty terms.
    pub fn validate(&self) -> Result<()> {
        if self.term.is_empty() {
            return Err(LexisError::EmptySearchTerm);
        }
        Ok(())
    }

    /// Whether `word` satisfies this query.
    pub fn matches(&self, word: &WordRecord) -> bool {
        let term = self.term.as_str();
        match self.kind {
            MatchKind::FormPrefix => word.forms().iter().any(|form| form.starts_with(term)),
            MatchKind::FormContains => word.forms().iter().any(|form| form.contains(term)),
            MatchKind::DefinitionContains => {
                word.definition_terms().any(|definition| definition.contains(term))
            }
        }
    }
}

impl fmt::Display for WordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MatchKind::FormPrefix => write!(f, "starting with '{}'", self.term),
            MatchKind::FormContains => write!(f, "containing '{}'", self.term),
            MatchKind::DefinitionContains => {
                write!(f, "with '{}' in definitions", self.term)
            }
        }
    }
}
