//! Schwartz basic-values scorer.
//!
//! Ten Likert questions (`schwartz_1`..`schwartz_10`), one per value
//! dimension, each answered 1-4. Top values are ranked by score, stable on
//! ties by the fixed declaration order of the dimensions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::answers::QuizAnswers;

/// Minimum valid Likert answer.
pub const LIKERT_MIN: u8 = 1;

/// Maximum valid Likert answer.
pub const LIKERT_MAX: u8 = 4;

/// The ten Schwartz basic values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchwartzValue {
    SelfDirection,
    Stimulation,
    Hedonism,
    Achievement,
    Power,
    Security,
    Conformity,
    Tradition,
    Benevolence,
    Universalism,
}

/// Declaration order of the dimensions; question `schwartz_N` maps to the
/// value at index N-1. This order is also the tie-break for ranking.
pub const SCHWARTZ_VALUE_ORDER: [SchwartzValue; 10] = [
    SchwartzValue::SelfDirection,
    SchwartzValue::Stimulation,
    SchwartzValue::Hedonism,
    SchwartzValue::Achievement,
    SchwartzValue::Power,
    SchwartzValue::Security,
    SchwartzValue::Conformity,
    SchwartzValue::Tradition,
    SchwartzValue::Benevolence,
    SchwartzValue::Universalism,
];

impl fmt::Display for SchwartzValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Platform display labels are Portuguese.
        match self {
            SchwartzValue::SelfDirection => write!(f, "Autodireção"),
            SchwartzValue::Stimulation => write!(f, "Estimulação"),
            SchwartzValue::Hedonism => write!(f, "Hedonismo"),
            SchwartzValue::Achievement => write!(f, "Realização"),
            SchwartzValue::Power => write!(f, "Poder"),
            SchwartzValue::Security => write!(f, "Segurança"),
            SchwartzValue::Conformity => write!(f, "Conformidade"),
            SchwartzValue::Tradition => write!(f, "Tradição"),
            SchwartzValue::Benevolence => write!(f, "Benevolência"),
            SchwartzValue::Universalism => write!(f, "Universalismo"),
        }
    }
}

/// A student's value priorities: ranked top values plus per-value scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchwartzValues {
    /// Value names ranked by score, highest first, truncated to the
    /// configured count. Unanswered values never appear here.
    pub top_values: Vec<SchwartzValue>,
    /// Likert score per value; unanswered values score zero.
    pub scores: HashMap<SchwartzValue, u8>,
}

impl SchwartzValues {
    /// Score for a single value, zero when unanswered.
    pub fn score(&self, value: SchwartzValue) -> u8 {
        self.scores.get(&value).copied().unwrap_or(0)
    }
}

/// Schwartz scoring functions.
pub struct SchwartzScorer;

impl SchwartzScorer {
    /// Scores the Likert answers and ranks the top `top_n` values.
    ///
    /// # Edge Cases
    /// - Missing, non-numeric, or out-of-range (not 1-4) answers: score zero
    /// - Zero-score values are excluded from `top_values`, so an empty
    ///   answer set yields an empty ranking
    /// - Equal scores: ranked by declaration order ([`SCHWARTZ_VALUE_ORDER`])
    pub fn score(answers: &QuizAnswers, top_n: usize) -> SchwartzValues {
        let mut scores = HashMap::new();

        for (index, value) in SCHWARTZ_VALUE_ORDER.iter().enumerate() {
            let answer = answers
                .get(&format!("schwartz_{}", index + 1))
                .and_then(|v| v.trim().parse::<u8>().ok())
                .filter(|n| (LIKERT_MIN..=LIKERT_MAX).contains(n))
                .unwrap_or(0);
            scores.insert(*value, answer);
        }

        // Stable sort over the declaration order keeps ties deterministic.
        let mut ranked: Vec<SchwartzValue> = SCHWARTZ_VALUE_ORDER
            .iter()
            .filter(|v| scores[*v] > 0)
            .copied()
            .collect();
        ranked.sort_by(|a, b| scores[b].cmp(&scores[a]));
        ranked.truncate(top_n);

        SchwartzValues {
            top_values: ranked,
            scores,
        }
    }
}
