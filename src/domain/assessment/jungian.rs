//! Jungian typology: four binary-preference answers combined into a
//! 4-letter type code.
//!
//! Each question maps 1:1 to one axis, so there is no aggregation and no
//! possibility of ties. Axis order in the code is fixed:
//! attitude (E/I), perception (S/N), judgment (T/F), lifestyle (J/P).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::answers::QuizAnswers;

/// The four preference axes, in type-code order.
///
/// Each axis is `(first, second)`; the first letter doubles as the fallback
/// when an answer is missing or unrecognized, keeping the typer total.
pub const JUNGIAN_AXES: [(char, char); 4] = [('E', 'I'), ('S', 'N'), ('T', 'F'), ('J', 'P')];

/// A validated 4-letter Jungian type code, e.g. "ENFP".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JungianType(String);

impl JungianType {
    /// Returns the type code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Letter chosen on the given axis (0-3).
    pub fn letter(&self, axis: usize) -> char {
        self.0.chars().nth(axis).unwrap_or(JUNGIAN_AXES[0].0)
    }

    /// True when the attitude axis is introversion.
    pub fn is_introvert(&self) -> bool {
        self.letter(0) == 'I'
    }

    /// Number of axes on which two types chose opposite letters.
    pub fn opposing_axes(&self, other: &JungianType) -> usize {
        self.0
            .chars()
            .zip(other.0.chars())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for JungianType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JungianType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        let chars: Vec<char> = code.chars().collect();
        if chars.len() != JUNGIAN_AXES.len() {
            return Err(ValidationError::invalid_format(
                "jungian_type",
                "type code must have exactly 4 letters",
            ));
        }
        for (i, (first, second)) in JUNGIAN_AXES.iter().enumerate() {
            if chars[i] != *first && chars[i] != *second {
                return Err(ValidationError::invalid_format(
                    "jungian_type",
                    format!("axis {} must be '{}' or '{}'", i + 1, first, second),
                ));
            }
        }
        Ok(Self(code))
    }
}

/// Jungian typing functions.
pub struct JungianTyper;

impl JungianTyper {
    /// Builds the type code from the four axis answers (`jung_1`..`jung_4`).
    ///
    /// # Edge Cases
    /// - Missing or unrecognized answer: falls back to the first letter of
    ///   that axis pair, so the output is always a valid 4-letter code
    pub fn type_from(answers: &QuizAnswers) -> JungianType {
        let code: String = JUNGIAN_AXES
            .iter()
            .enumerate()
            .map(|(i, (first, second))| {
                let answer = answers
                    .get(&format!("jung_{}", i + 1))
                    .map(|v| v.trim().to_ascii_uppercase());
                match answer.as_deref() {
                    Some(a) if a == first.to_string() => *first,
                    Some(a) if a == second.to_string() => *second,
                    _ => *first,
                }
            })
            .collect();

        JungianType(code)
    }
}
