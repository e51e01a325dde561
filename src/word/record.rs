//! A single dictionary entry.

use std::sync::OnceLock;

use log::warn;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult};
use crate::word::definition::Definition;
use crate::word::supplemental::SupplementalInformation;
use crate::word::word_type::WordType;
use crate::word::{required_array, string_elements};

const FORMS_KEY: &str = "forms";
const DEFINITIONS_KEY: &str = "definitions";
const WORD_TYPE_KEY: &str = "word_type";
const SUPPLEMENTAL_INFORMATION_KEY: &str = "supplemental_information";

/// A dictionary entry: its forms, definitions, grammatical category and
/// supplemental codes.
///
/// Records are immutable. The JSON form is computed on first request and
/// cached in a [`OnceLock`]; concurrent first requests block on a single
/// computation, and every later call hands back the same value.
#[derive(Debug, Clone)]
pub struct WordRecord {
    forms: Vec<String>,
    definitions: Vec<Definition>,
    word_type: Option<WordType>,
    supplemental: Option<SupplementalInformation>,
    json: OnceLock<Value>,
}

impl WordRecord {
    pub fn new(
        forms: Vec<String>,
        definitions: Vec<Definition>,
        word_type: Option<WordType>,
        supplemental: Option<SupplementalInformation>,
    ) -> Self {
        WordRecord {
            forms,
            definitions,
            word_type,
            supplemental,
            json: OnceLock::new(),
        }
    }

    /// Start building a record.
    pub fn builder() -> WordRecordBuilder {
        WordRecordBuilder::default()
    }

    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn word_type(&self) -> Option<&WordType> {
        self.word_type.as_ref()
    }

    pub fn supplemental(&self) -> Option<&SupplementalInformation> {
        self.supplemental.as_ref()
    }

    /// All terms of all definitions, in order.
    pub fn definition_terms(&self) -> impl Iterator<Item = &str> {
        self.definitions
            .iter()
            .flat_map(|definition| definition.terms().iter().map(String::as_str))
    }

    /// Decode one corpus element.
    ///
    /// `forms` and `definitions` are required arrays and any problem with
    /// them rejects the entry. A definition without a usable `terms` array
    /// decodes as an empty definition. `word_type` and
    /// `supplemental_information` are optional: when absent or undecodable
    /// the record simply lacks them.
    pub fn from_json(value: &Value) -> DecodeResult<Self> {
        let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

        let forms = string_elements(required_array(object, FORMS_KEY)?);

        let definitions: Vec<Definition> = required_array(object, DEFINITIONS_KEY)?
            .iter()
            .filter(|element| element.is_object())
            .map(|element| {
                Definition::from_json(element).unwrap_or_else(|e| {
                    warn!("Failed to decode a definition of {forms:?}: {e}");
                    Definition::default()
                })
            })
            .collect();

        let word_type = object
            .get(WORD_TYPE_KEY)
            .and_then(|value| match WordType::from_json(value) {
                Ok(word_type) => Some(word_type),
                Err(e) => {
                    warn!("Failed to decode word type of {forms:?}: {e}");
                    None
                }
            });

        let supplemental = object
            .get(SUPPLEMENTAL_INFORMATION_KEY)
            .and_then(|value| match SupplementalInformation::from_json(value) {
                Ok(supplemental) => Some(supplemental),
                Err(e) => {
                    warn!("Failed to decode supplemental information of {forms:?}: {e}");
                    None
                }
            });

        Ok(WordRecord::new(forms, definitions, word_type, supplemental))
    }

    /// The JSON form of this record, computed once and cached.
    pub fn to_json(&self) -> &Value {
        self.json.get_or_init(|| self.encode())
    }

    /// Whether the JSON form has been computed yet.
    pub fn is_encoded(&self) -> bool {
        self.json.get().is_some()
    }

    fn encode(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            FORMS_KEY.to_string(),
            Value::Array(self.forms.iter().cloned().map(Value::String).collect()),
        );
        object.insert(
            DEFINITIONS_KEY.to_string(),
            Value::Array(self.definitions.iter().map(Definition::to_json).collect()),
        );
        if let Some(word_type) = &self.word_type {
            object.insert(WORD_TYPE_KEY.to_string(), word_type.to_json());
        }
        if let Some(supplemental) = &self.supplemental {
            object.insert(
                SUPPLEMENTAL_INFORMATION_KEY.to_string(),
                supplemental.to_json(),
            );
        }
        Value::Object(object)
    }
}

impl PartialEq for WordRecord {
    fn eq(&self, other: &Self) -> bool {
        self.forms == other.forms
            && self.definitions == other.definitions
            && self.word_type == other.word_type
            && self.supplemental == other.supplemental
    }
}

impl Eq for WordRecord {}

impl Serialize for WordRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Builder for [`WordRecord`].
#[derive(Debug, Clone, Default)]
pub struct WordRecordBuilder {
    forms: Vec<String>,
    definitions: Vec<Definition>,
    word_type: Option<WordType>,
    supplemental: Option<SupplementalInformation>,
}

impl WordRecordBuilder {
    pub fn form<S: Into<String>>(mut self, form: S) -> Self {
        self.forms.push(form.into());
        self
    }

    pub fn definition<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.definitions.push(terms.into_iter().collect());
        self
    }

    pub fn word_type(mut self, word_type: WordType) -> Self {
        self.word_type = Some(word_type);
        self
    }

    pub fn supplemental(mut self, supplemental: SupplementalInformation) -> Self {
        self.supplemental = Some(supplemental);
        self
    }

    pub fn build(self) -> WordRecord {
        WordRecord::new(
            self.forms,
            self.definitions,
            self.word_type,
            self.supplemental,
        )
    }
}
