//! DISC behavioral-style scorer.
//!
//! Eight question groups, each offering four adjectives mapped statically to
//! one trait. A "most like me" pick adds one to the mapped trait; a "least
//! like me" pick subtracts one. The dominant trait is the argmax over the
//! final signed scores, with ties resolved by the fixed precedence
//! D > I > S > C.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::answers::QuizAnswers;

/// Number of DISC word groups in the questionnaire.
pub const DISC_GROUP_COUNT: u8 = 8;

/// Score contribution of a "most like me" selection.
pub const MOST_WEIGHT: i32 = 1;

/// Score contribution of a "least like me" selection.
///
/// A "least" pick subtracts rather than being ignored, so choosing the same
/// word as most and least nets to zero.
pub const LEAST_WEIGHT: i32 = -1;

/// A trait in the DISC model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscTrait {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
}

/// Tie-break precedence for the dominant trait: first listed wins.
pub const DISC_TIE_PRECEDENCE: [DiscTrait; 4] = [
    DiscTrait::Dominance,
    DiscTrait::Influence,
    DiscTrait::Steadiness,
    DiscTrait::Conscientiousness,
];

impl DiscTrait {
    /// Single-letter code used in reports.
    pub fn letter(&self) -> char {
        match self {
            DiscTrait::Dominance => 'D',
            DiscTrait::Influence => 'I',
            DiscTrait::Steadiness => 'S',
            DiscTrait::Conscientiousness => 'C',
        }
    }
}

impl fmt::Display for DiscTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Platform display labels are Portuguese.
        match self {
            DiscTrait::Dominance => write!(f, "Dominância"),
            DiscTrait::Influence => write!(f, "Influência"),
            DiscTrait::Steadiness => write!(f, "Estabilidade"),
            DiscTrait::Conscientiousness => write!(f, "Consciência"),
        }
    }
}

/// Static word-to-trait mapping: eight groups of four adjectives each.
///
/// Lookup is case-insensitive on the submitted word.
static WORD_TRAITS: Lazy<HashMap<&'static str, DiscTrait>> = Lazy::new(|| {
    use DiscTrait::*;
    HashMap::from([
        // group 1
        ("decidido", Dominance),
        ("comunicativo", Influence),
        ("paciente", Steadiness),
        ("detalhista", Conscientiousness),
        // group 2
        ("competitivo", Dominance),
        ("entusiasmado", Influence),
        ("leal", Steadiness),
        ("organizado", Conscientiousness),
        // group 3
        ("direto", Dominance),
        ("sociável", Influence),
        ("calmo", Steadiness),
        ("preciso", Conscientiousness),
        // group 4
        ("ousado", Dominance),
        ("otimista", Influence),
        ("constante", Steadiness),
        ("cauteloso", Conscientiousness),
        // group 5
        ("determinado", Dominance),
        ("persuasivo", Influence),
        ("prestativo", Steadiness),
        ("metódico", Conscientiousness),
        // group 6
        ("enérgico", Dominance),
        ("expressivo", Influence),
        ("tranquilo", Steadiness),
        ("criterioso", Conscientiousness),
        // group 7
        ("firme", Dominance),
        ("animado", Influence),
        ("conciliador", Steadiness),
        ("disciplinado", Conscientiousness),
        // group 8
        ("corajoso", Dominance),
        ("inspirador", Influence),
        ("acolhedor", Steadiness),
        ("perfeccionista", Conscientiousness),
    ])
});

/// Resolves a submitted word to its DISC trait, if it belongs to any group.
pub fn word_trait(word: &str) -> Option<DiscTrait> {
    WORD_TRAITS.get(word.trim().to_lowercase().as_str()).copied()
}

/// Signed per-trait scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscScores {
    pub d: i32,
    pub i: i32,
    pub s: i32,
    pub c: i32,
}

impl DiscScores {
    /// Score for a single trait.
    pub fn score(&self, t: DiscTrait) -> i32 {
        match t {
            DiscTrait::Dominance => self.d,
            DiscTrait::Influence => self.i,
            DiscTrait::Steadiness => self.s,
            DiscTrait::Conscientiousness => self.c,
        }
    }

    fn add(&mut self, t: DiscTrait, weight: i32) {
        match t {
            DiscTrait::Dominance => self.d += weight,
            DiscTrait::Influence => self.i += weight,
            DiscTrait::Steadiness => self.s += weight,
            DiscTrait::Conscientiousness => self.c += weight,
        }
    }
}

/// A student's DISC result: dominant trait plus signed scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscProfile {
    pub dominant: DiscTrait,
    pub scores: DiscScores,
}

/// DISC scoring functions.
pub struct DiscScorer;

impl DiscScorer {
    /// Scores the DISC groups out of a raw answer set.
    ///
    /// # Edge Cases
    /// - Missing selections and words outside the fixed groups: skipped
    /// - Same word as most and least: nets to zero for that trait
    /// - No answers at all: all scores zero, dominant falls to Dominance
    ///   by the fixed precedence
    pub fn score(answers: &QuizAnswers) -> DiscProfile {
        let mut scores = DiscScores::default();

        for group in 1..=DISC_GROUP_COUNT {
            if let Some(t) = answers
                .get(&format!("disc_{}_most", group))
                .and_then(word_trait)
            {
                scores.add(t, MOST_WEIGHT);
            }
            if let Some(t) = answers
                .get(&format!("disc_{}_least", group))
                .and_then(word_trait)
            {
                scores.add(t, LEAST_WEIGHT);
            }
        }

        DiscProfile {
            dominant: Self::dominant(&scores),
            scores,
        }
    }

    /// Dominant trait: highest score, ties resolved by
    /// [`DISC_TIE_PRECEDENCE`].
    pub fn dominant(scores: &DiscScores) -> DiscTrait {
        let mut best = DISC_TIE_PRECEDENCE[0];
        for t in DISC_TIE_PRECEDENCE {
            if scores.score(t) > scores.score(best) {
                best = t;
            }
        }
        best
    }
}
