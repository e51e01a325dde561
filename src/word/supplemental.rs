//! Supplemental dictionary metadata attached to a word.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult};
use crate::word::codes::{Age, Frequency, GeographicalArea, Source, SubjectArea};

const AGE_KEY: &str = "age";
const SUBJECT_AREA_KEY: &str = "subject_area";
const GEOGRAPHICAL_AREA_KEY: &str = "geographical_area";
const FREQUENCY_KEY: &str = "frequency";
const SOURCE_KEY: &str = "source";

/// Age, subject area, geography, frequency and source codes of a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SupplementalInformation {
    pub age: Age,
    pub subject_area: SubjectArea,
    pub geographical_area: GeographicalArea,
    pub frequency: Frequency,
    pub source: Source,
}

impl SupplementalInformation {
    pub fn new(
        age: Age,
        subject_area: SubjectArea,
        geographical_area: GeographicalArea,
        frequency: Frequency,
        source: Source,
    ) -> Self {
        SupplementalInformation {
            age,
            subject_area,
            geographical_area,
            frequency,
            source,
        }
    }

    /// Decode the supplemental object.
    ///
    /// Only a non-object fails. Each code that is missing, not a string or
    /// unrecognized becomes its sentinel.
    pub fn from_json(value: &Value) -> DecodeResult<Self> {
        let object = value.as_object().ok_or(DecodeError::NotAnObject)?;
        let code = |key: &str| object.get(key).and_then(Value::as_str).unwrap_or_default();

        Ok(SupplementalInformation {
            age: Age::from_code(code(AGE_KEY)),
            subject_area: SubjectArea::from_code(code(SUBJECT_AREA_KEY)),
            geographical_area: GeographicalArea::from_code(code(GEOGRAPHICAL_AREA_KEY)),
            frequency: Frequency::from_code(code(FREQUENCY_KEY)),
            source: Source::from_code(code(SOURCE_KEY)),
        })
    }

    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(AGE_KEY.to_string(), Value::from(self.age.as_code()));
        object.insert(
            SUBJECT_AREA_KEY.to_string(),
            Value::from(self.subject_area.as_code()),
        );
        object.insert(
            GEOGRAPHICAL_AREA_KEY.to_string(),
            Value::from(self.geographical_area.as_code()),
        );
        object.insert(
            FREQUENCY_KEY.to_string(),
            Value::from(self.frequency.as_code()),
        );
        object.insert(SOURCE_KEY.to_string(), Value::from(self.source.as_code()));
        Value::Object(object)
    }
}
