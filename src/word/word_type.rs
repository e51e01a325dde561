//! Grammatical category of a word and its category-specific payload.
//!
//! On the wire a word type is an object discriminated by its `wordType`
//! field:
//!
//! ```json
//! { "wordType": "Verb", "conjugation": "First", "verbType": "Transitive" }
//! { "wordType": "Adverb" }
//! ```
//!
//! Only nouns, verbs and prepositions carry extra fields. The remaining seven
//! categories are plain tags.

use std::fmt;

use log::debug;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{DecodeError, DecodeResult};
use crate::word::codes::coded_enum;
use crate::word::required_str;

/// Discriminant field of a word type object.
pub const WORD_TYPE_KEY: &str = "wordType";
const DECLENSION_KEY: &str = "declension";
const GENDER_KEY: &str = "gender";
const CONJUGATION_KEY: &str = "conjugation";
const VERB_TYPE_KEY: &str = "verbType";
const CASE_TYPE_KEY: &str = "caseType";

coded_enum! {
    /// Noun declension.
    Declension, "Declension", sentinel = Undeclined,
    [First, Second, Third, Fourth, Fifth, Undeclined]
}

coded_enum! {
    /// Grammatical gender of a noun.
    Gender, "Gender", sentinel = Unknown,
    [Male, Female, Neuter, Unknown]
}

coded_enum! {
    /// Verb conjugation.
    Conjugation, "Conjugation", sentinel = Unconjugated,
    [First, Second, Third, Fourth, Irregular, Unconjugated]
}

coded_enum! {
    /// Kind of verb.
    VerbType, "VerbType", sentinel = Unknown,
    [Transitive, Intransitive, Impersonal, Deponent, SemiDeponent, PerfectDefinite, Unknown]
}

coded_enum! {
    /// Case governed by a preposition.
    CaseType, "CaseType", sentinel = Unknown,
    [Nominative, Genitive, Accusative, Dative, Ablative, Vocative, Locative, Unknown]
}

/// The ten grammatical categories, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordCategory {
    Adjective,
    Adverb,
    Conjunction,
    Interjection,
    Noun,
    Numeral,
    PersonalPronoun,
    Preposition,
    Pronoun,
    Verb,
}

impl WordCategory {
    pub const ALL: [WordCategory; 10] = [
        WordCategory::Adjective,
        WordCategory::Adverb,
        WordCategory::Conjunction,
        WordCategory::Interjection,
        WordCategory::Noun,
        WordCategory::Numeral,
        WordCategory::PersonalPronoun,
        WordCategory::Preposition,
        WordCategory::Pronoun,
        WordCategory::Verb,
    ];

    /// Look up a category by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordCategory::Adjective => "Adjective",
            WordCategory::Adverb => "Adverb",
            WordCategory::Conjunction => "Conjunction",
            WordCategory::Interjection => "Interjection",
            WordCategory::Noun => "Noun",
            WordCategory::Numeral => "Numeral",
            WordCategory::PersonalPronoun => "PersonalPronoun",
            WordCategory::Preposition => "Preposition",
            WordCategory::Pronoun => "Pronoun",
            WordCategory::Verb => "Verb",
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical category of a word, with the payload of the categories that
/// have one.
///
/// The tag-only categories are unit variants, so every `WordType::Adverb` is
/// the same value and costs nothing to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordType {
    Adjective,
    Adverb,
    Conjunction,
    Interjection,
    Noun {
        declension: Declension,
        gender: Gender,
    },
    Numeral,
    PersonalPronoun,
    Preposition {
        case_type: CaseType,
    },
    Pronoun,
    Verb {
        conjugation: Conjugation,
        verb_type: VerbType,
    },
}

impl WordType {
    /// The discriminant of this word type.
    pub fn category(&self) -> WordCategory {
        match self {
            WordType::Adjective => WordCategory::Adjective,
            WordType::Adverb => WordCategory::Adverb,
            WordType::Conjunction => WordCategory::Conjunction,
            WordType::Interjection => WordCategory::Interjection,
            WordType::Noun { .. } => WordCategory::Noun,
            WordType::Numeral => WordCategory::Numeral,
            WordType::PersonalPronoun => WordCategory::PersonalPronoun,
            WordType::Preposition { .. } => WordCategory::Preposition,
            WordType::Pronoun => WordCategory::Pronoun,
            WordType::Verb { .. } => WordCategory::Verb,
        }
    }

    /// Decode a word type object.
    ///
    /// A missing or unknown discriminant, or a missing payload field, fails
    /// the whole decode. An unrecognized payload value only falls back to
    /// that field's sentinel.
    pub fn from_json(value: &Value) -> DecodeResult<Self> {
        let object = value.as_object().ok_or(DecodeError::NotAnObject)?;
        let name = required_str(object, WORD_TYPE_KEY)?;
        let category = WordCategory::from_name(name)
            .ok_or_else(|| DecodeError::UnknownWordType(name.to_string()))?;

        let word_type = match category {
            WordCategory::Adjective => WordType::Adjective,
            WordCategory::Adverb => WordType::Adverb,
            WordCategory::Conjunction => WordType::Conjunction,
            WordCategory::Interjection => WordType::Interjection,
            WordCategory::Numeral => WordType::Numeral,
            WordCategory::PersonalPronoun => WordType::PersonalPronoun,
            WordCategory::Pronoun => WordType::Pronoun,
            WordCategory::Noun => WordType::Noun {
                declension: Declension::from_code(required_str(object, DECLENSION_KEY)?),
                gender: Gender::from_code(required_str(object, GENDER_KEY)?),
            },
            WordCategory::Verb => WordType::Verb {
                conjugation: Conjugation::from_code(required_str(object, CONJUGATION_KEY)?),
                verb_type: VerbType::from_code(required_str(object, VERB_TYPE_KEY)?),
            },
            WordCategory::Preposition => WordType::Preposition {
                case_type: CaseType::from_code(required_str(object, CASE_TYPE_KEY)?),
            },
        };

        debug!("Decoded word type {word_type:?}");
        Ok(word_type)
    }

    /// Encode as a discriminated JSON object.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(
            WORD_TYPE_KEY.to_string(),
            Value::from(self.category().as_str()),
        );

        match self {
            WordType::Noun { declension, gender } => {
                object.insert(GENDER_KEY.to_string(), Value::from(gender.as_code()));
                object.insert(DECLENSION_KEY.to_string(), Value::from(declension.as_code()));
            }
            WordType::Verb {
                conjugation,
                verb_type,
            } => {
                object.insert(
                    CONJUGATION_KEY.to_string(),
                    Value::from(conjugation.as_code()),
                );
                object.insert(VERB_TYPE_KEY.to_string(), Value::from(verb_type.as_code()));
            }
            WordType::Preposition { case_type } => {
                object.insert(CASE_TYPE_KEY.to_string(), Value::from(case_type.as_code()));
            }
            _ => {}
        }

        Value::Object(object)
    }
}

impl Serialize for WordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordType::Noun { declension, gender } => {
                write!(f, "Noun ({declension}, {gender})")
            }
            WordType::Verb {
                conjugation,
                verb_type,
            } => write!(f, "Verb ({conjugation}, {verb_type})"),
            WordType::Preposition { case_type } => write!(f, "Preposition ({case_type})"),
            other => f.write_str(other.category().as_str()),
        }
    }
}
