//! The dictionary word model and its tolerant JSON codec.
//!
//! A corpus entry looks like:
//!
//! ```json
//! {
//!   "forms": ["amo", "amare", "amavi", "amatus"],
//!   "definitions": [{ "terms": ["love", "like"] }],
//!   "word_type": { "wordType": "Verb", "conjugation": "First", "verbType": "Transitive" },
//!   "supplemental_information": {
//!     "age": "X", "subject_area": "X", "geographical_area": "X",
//!     "frequency": "A", "source": "O"
//!   }
//! }
//! ```
//!
//! Decoding is forgiving: unknown codes fall back to a sentinel, and a word
//! type or supplemental block that cannot be read is dropped from the record
//! rather than failing it.

pub mod codes;
pub mod definition;
pub mod record;
pub mod supplemental;
pub mod word_type;

pub use codes::{Age, Frequency, GeographicalArea, Source, SubjectArea};
pub use definition::Definition;
pub use record::{WordRecord, WordRecordBuilder};
pub use supplemental::SupplementalInformation;
pub use word_type::{CaseType, Conjugation, Declension, Gender, VerbType, WordCategory, WordType};

use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult};

/// Fetch a required string field.
pub(crate) fn required_str<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> DecodeResult<&'a str> {
    object
        .get(key)
        .ok_or(DecodeError::MissingField(key))?
        .as_str()
        .ok_or(DecodeError::InvalidField(key))
}

/// Fetch a required array field.
pub(crate) fn required_array<'a>(
    object: &'a Map<String, Value>,
    key: &'static str,
) -> DecodeResult<&'a [Value]> {
    object
        .get(key)
        .ok_or(DecodeError::MissingField(key))?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(DecodeError::InvalidField(key))
}

/// Keep the primitive elements of a JSON array as strings, in order.
/// Numbers and booleans are rendered as text; nulls, arrays and objects are
/// dropped.
pub(crate) fn string_elements(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
        .collect()
}
