//! Loading the dictionary corpus.
//!
//! The corpus is a JSON array of word entries. Loading is a single fold over
//! that array: every element that decodes becomes a [`WordRecord`], every
//! element that does not is logged and counted, and the rest of the array is
//! still read. One bad entry never costs the whole dictionary.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, error, info, warn};
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult, Result};
use crate::word::WordRecord;

/// An immutable, ordered collection of dictionary words.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<WordRecord>,
    skipped: usize,
}

impl Corpus {
    /// Build a corpus from records that are already decoded.
    pub fn from_records(words: Vec<WordRecord>) -> Self {
        Corpus { words, skipped: 0 }
    }

    /// Parse a corpus from JSON text.
    ///
    /// Text that is not valid JSON, or whose top-level value is not an array,
    /// yields an empty corpus. Elements that are not objects or fail to decode
    /// are skipped.
    pub fn load(json_text: &str) -> Self {
        let start = Instant::now();

        let value: Value = match serde_json::from_str(json_text) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to parse corpus JSON: {e}");
                return Corpus::default();
            }
        };

        let Value::Array(elements) = value else {
            warn!("Corpus JSON is not an array, loading no words");
            return Corpus::default();
        };

        let (words, skipped) = elements.iter().enumerate().fold(
            (Vec::with_capacity(elements.len()), 0usize),
            |(mut words, skipped), (position, element)| match Self::decode_element(element) {
                Ok(word) => {
                    words.push(word);
                    (words, skipped)
                }
                Err(e) => {
                    error!("Skipping malformed corpus entry #{position}: {e}: {element}");
                    (words, skipped + 1)
                }
            },
        );

        info!(
            "Loaded {} words ({} skipped) in {}ms",
            words.len(),
            skipped,
            start.elapsed().as_millis()
        );

        Corpus { words, skipped }
    }

    /// Read and parse a corpus file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading corpus at {}", path.display());

        let json_text = fs::read_to_string(path).inspect_err(|e| {
            error!("Failed to read corpus at {}: {e}", path.display());
        })?;

        Ok(Self::load(&json_text))
    }

    fn decode_element(element: &Value) -> DecodeResult<WordRecord> {
        if !element.is_object() {
            return Err(DecodeError::NotAnObject);
        }
        WordRecord::from_json(element)
    }

    /// Number of words in the corpus.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, in source order.
    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&WordRecord> {
        self.words.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.words.iter()
    }

    /// Number of source elements dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<WordRecord> for Corpus {
    fn from_iter<I: IntoIterator<Item = WordRecord>>(iter: I) -> Self {
        Corpus::from_records(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::WordType;

    #[test]
    fn test_load_skips_malformed_entry() {
        let json = r#"[
            { "forms": ["amo", "amare"], "definitions": [{ "terms": ["love"] }] },
            { "definitions": [{ "terms": ["no forms here"] }] }
        ]"#;
        let corpus = Corpus::load(json);

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.skipped(), 1);
        assert_eq!(corpus.words()[0].forms(), &["amo", "amare"]);
    }

    #[test]
    fn test_load_skips_non_objects() {
        let json = r#"[1, "bellum", null, { "forms": ["et"], "definitions": [] }, []]"#;
        let corpus = Corpus::load(json);

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.skipped(), 4);
    }

    #[test]
    fn test_load_preserves_order() {
        let json = r#"[
            { "forms": ["c"], "definitions": [] },
            { "forms": ["a"], "definitions": [] },
            { "forms": 5, "definitions": [] },
            { "forms": ["b"], "definitions": [] }
        ]"#;
        let corpus = Corpus::load(json);

        let firsts: Vec<&str> = corpus.iter().map(|w| w.forms()[0].as_str()).collect();
        assert_eq!(firsts, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_non_array_yields_empty_corpus() {
        assert!(Corpus::load(r#"{ "forms": ["amo"] }"#).is_empty());
        assert!(Corpus::load("not json").is_empty());
        assert!(Corpus::load("").is_empty());
    }

    #[test]
    fn test_from_records() {
        let corpus: Corpus = vec![
            WordRecord::builder().form("et").word_type(WordType::Conjunction).build(),
            WordRecord::builder().form("sed").word_type(WordType::Conjunction).build(),
        ]
        .into_iter()
        .collect();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.skipped(), 0);
        assert_eq!(corpus.get(1).map(|w| w.forms()[0].as_str()), Some("sed"));
        assert!(corpus.get(2).is_none());
    }
}
