//! Quiz answer map and raw answer-key normalization.
//!
//! Raw submissions arrive as a flat map of question id to answer value
//! (`vark_1` -> "V", `disc_3_most` -> "direto", `jung_2` -> "N",
//! `schwartz_7` -> "4"). The normalizer turns those string keys into typed
//! keys so the scorers never string-match ad hoc. Unrecognized or malformed
//! keys are skipped; a missing answer is "no selection" and never an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Which questionnaire a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    Vark,
    Disc,
    Jungian,
    Schwartz,
}

/// Facet of a DISC group question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscFacet {
    /// "Most like me" word selection.
    Most,
    /// "Least like me" word selection.
    Least,
}

/// A raw question key parsed into its typed form.
///
/// Indexes are 1-based as they appear in the raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKey {
    Vark { index: u8 },
    Disc { index: u8, facet: DiscFacet },
    Jungian { index: u8 },
    Schwartz { index: u8 },
}

impl AnswerKey {
    /// Returns the instrument this key belongs to.
    pub fn instrument(&self) -> Instrument {
        match self {
            AnswerKey::Vark { .. } => Instrument::Vark,
            AnswerKey::Disc { .. } => Instrument::Disc,
            AnswerKey::Jungian { .. } => Instrument::Jungian,
            AnswerKey::Schwartz { .. } => Instrument::Schwartz,
        }
    }
}

/// Error parsing a raw answer key. Callers treat this as "skip the entry".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedKey;

impl FromStr for AnswerKey {
    type Err = UnrecognizedKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('_');
        let prefix = parts.next().ok_or(UnrecognizedKey)?;
        let index: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .filter(|i| *i >= 1)
            .ok_or(UnrecognizedKey)?;
        let facet = parts.next();
        if parts.next().is_some() {
            return Err(UnrecognizedKey);
        }

        match (prefix, facet) {
            ("vark", None) => Ok(AnswerKey::Vark { index }),
            ("jung", None) => Ok(AnswerKey::Jungian { index }),
            ("schwartz", None) => Ok(AnswerKey::Schwartz { index }),
            ("disc", Some("most")) => Ok(AnswerKey::Disc {
                index,
                facet: DiscFacet::Most,
            }),
            ("disc", Some("least")) => Ok(AnswerKey::Disc {
                index,
                facet: DiscFacet::Least,
            }),
            _ => Err(UnrecognizedKey),
        }
    }
}

/// Raw quiz answers keyed by question id, as submitted by a student.
///
/// Immutable after submission; insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswers(HashMap<String, String>);

impl QuizAnswers {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Creates an answer set from an existing map.
    pub fn from_map(map: HashMap<String, String>) -> Self {
        Self(map)
    }

    /// Records an answer. Later inserts for the same key overwrite.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw answer for a question id, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of answered questions, counting only recognized keys.
    pub fn answered_count(&self) -> usize {
        self.0
            .keys()
            .filter(|k| k.parse::<AnswerKey>().is_ok())
            .count()
    }

    /// Iterates over entries with recognized keys in typed form.
    pub fn normalized(&self) -> impl Iterator<Item = (AnswerKey, &str)> {
        self.0
            .iter()
            .filter_map(|(k, v)| Some((k.parse().ok()?, v.as_str())))
    }

    /// True if no answers were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for QuizAnswers {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vark_keys() {
        assert_eq!(
            "vark_1".parse::<AnswerKey>().unwrap(),
            AnswerKey::Vark { index: 1 }
        );
        assert_eq!(
            "vark_4".parse::<AnswerKey>().unwrap(),
            AnswerKey::Vark { index: 4 }
        );
    }

    #[test]
    fn parses_disc_keys_with_facets() {
        assert_eq!(
            "disc_3_most".parse::<AnswerKey>().unwrap(),
            AnswerKey::Disc {
                index: 3,
                facet: DiscFacet::Most
            }
        );
        assert_eq!(
            "disc_8_least".parse::<AnswerKey>().unwrap(),
            AnswerKey::Disc {
                index: 8,
                facet: DiscFacet::Least
            }
        );
    }

    #[test]
    fn parses_jungian_and_schwartz_keys() {
        assert_eq!(
            "jung_2".parse::<AnswerKey>().unwrap(),
            AnswerKey::Jungian { index: 2 }
        );
        assert_eq!(
            "schwartz_10".parse::<AnswerKey>().unwrap(),
            AnswerKey::Schwartz { index: 10 }
        );
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!("vark".parse::<AnswerKey>().is_err());
        assert!("vark_x".parse::<AnswerKey>().is_err());
        assert!("vark_0".parse::<AnswerKey>().is_err());
        assert!("disc_1".parse::<AnswerKey>().is_err());
        assert!("disc_1_best".parse::<AnswerKey>().is_err());
        assert!("disc_1_most_extra".parse::<AnswerKey>().is_err());
        assert!("mbti_1".parse::<AnswerKey>().is_err());
        assert!("".parse::<AnswerKey>().is_err());
    }

    #[test]
    fn answer_key_reports_instrument() {
        assert_eq!(
            "vark_1".parse::<AnswerKey>().unwrap().instrument(),
            Instrument::Vark
        );
        assert_eq!(
            "disc_1_most".parse::<AnswerKey>().unwrap().instrument(),
            Instrument::Disc
        );
    }

    #[test]
    fn answered_count_ignores_unrecognized_keys() {
        let mut answers = QuizAnswers::new();
        answers.insert("vark_1", "V");
        answers.insert("jung_1", "E");
        answers.insert("bogus_key", "X");

        assert_eq!(answers.answered_count(), 2);
    }

    #[test]
    fn normalized_skips_unrecognized_keys() {
        let mut answers = QuizAnswers::new();
        answers.insert("schwartz_3", "4");
        answers.insert("not_a_question", "whatever");

        let entries: Vec<_> = answers.normalized().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], (AnswerKey::Schwartz { index: 3 }, "4"));
    }

    #[test]
    fn get_returns_raw_value() {
        let mut answers = QuizAnswers::new();
        answers.insert("vark_2", "K");

        assert_eq!(answers.get("vark_2"), Some("K"));
        assert_eq!(answers.get("vark_3"), None);
    }

    #[test]
    fn serializes_transparently_as_map() {
        let mut answers = QuizAnswers::new();
        answers.insert("jung_1", "I");

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"jung_1":"I"}"#);
    }
}
