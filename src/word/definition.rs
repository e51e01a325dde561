//! One sense of a word: a list of English glosses.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult};
use crate::word::{required_array, string_elements};

const TERMS_KEY: &str = "terms";

/// A definition, made of synonymous terms or definition phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Definition {
    terms: Vec<String>,
}

impl Definition {
    pub fn new(terms: Vec<String>) -> Self {
        Definition { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether any term contains `needle` as a substring.
    pub fn contains(&self, needle: &str) -> bool {
        self.terms.iter().any(|term| term.contains(needle))
    }

    /// Decode `{ "terms": [...] }`. Numeric and boolean terms are kept as
    /// text; other non-string terms are dropped.
    pub fn from_json(value: &Value) -> DecodeResult<Self> {
        let object = value.as_object().ok_or(DecodeError::NotAnObject)?;
        let terms = required_array(object, TERMS_KEY)?;
        Ok(Definition::new(string_elements(terms)))
    }

    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            TERMS_KEY.to_string(),
            Value::Array(self.terms.iter().cloned().map(Value::String).collect()),
        );
        Value::Object(object)
    }
}

impl<S: Into<String>> FromIterator<S> for Definition {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Definition::new(iter.into_iter().map(Into::into).collect())
    }
}
