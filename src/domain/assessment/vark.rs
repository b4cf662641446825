//! VARK learning-style scorer.
//!
//! Four questions (`vark_1`..`vark_4`), each answered with one of the
//! letters V/A/R/K. The dominant style is the letter with the highest
//! count; a tie for the maximum yields Multimodal.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::answers::QuizAnswers;

/// Number of VARK questions in the questionnaire.
pub const VARK_QUESTION_COUNT: u8 = 4;

/// A learning style in the VARK model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarkStyle {
    Visual,
    Auditory,
    ReadingWriting,
    Kinesthetic,
    /// No single style dominates (tie for the maximum count).
    Multimodal,
}

impl VarkStyle {
    /// The four single styles, in scoring order.
    pub const SINGLE_STYLES: [VarkStyle; 4] = [
        VarkStyle::Visual,
        VarkStyle::Auditory,
        VarkStyle::ReadingWriting,
        VarkStyle::Kinesthetic,
    ];

    /// Parses a single-letter answer code. Unknown codes yield None.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim().to_ascii_uppercase().as_str() {
            "V" => Some(VarkStyle::Visual),
            "A" => Some(VarkStyle::Auditory),
            "R" => Some(VarkStyle::ReadingWriting),
            "K" => Some(VarkStyle::Kinesthetic),
            _ => None,
        }
    }
}

impl fmt::Display for VarkStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Platform display labels are Portuguese.
        match self {
            VarkStyle::Visual => write!(f, "Visual"),
            VarkStyle::Auditory => write!(f, "Auditivo"),
            VarkStyle::ReadingWriting => write!(f, "Leitura/Escrita"),
            VarkStyle::Kinesthetic => write!(f, "Cinestésico"),
            VarkStyle::Multimodal => write!(f, "Multimodal"),
        }
    }
}

/// Per-letter answer counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarkScores {
    pub v: u32,
    pub a: u32,
    pub r: u32,
    pub k: u32,
}

impl VarkScores {
    /// Count for a single style. Multimodal has no count of its own.
    pub fn count(&self, style: VarkStyle) -> u32 {
        match style {
            VarkStyle::Visual => self.v,
            VarkStyle::Auditory => self.a,
            VarkStyle::ReadingWriting => self.r,
            VarkStyle::Kinesthetic => self.k,
            VarkStyle::Multimodal => 0,
        }
    }

    /// Total answered questions.
    pub fn total(&self) -> u32 {
        self.v + self.a + self.r + self.k
    }
}

/// A student's VARK result: dominant style plus raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarkProfile {
    pub dominant: VarkStyle,
    pub scores: VarkScores,
}

/// VARK scoring functions.
pub struct VarkScorer;

impl VarkScorer {
    /// Scores the VARK questions out of a raw answer set.
    ///
    /// # Edge Cases
    /// - Missing or unrecognized answers: contribute zero, never error
    /// - No answers at all: all counts zero, dominant is Multimodal
    ///   (every style ties at zero)
    /// - Tie for the maximum count: dominant is Multimodal
    pub fn score(answers: &QuizAnswers) -> VarkProfile {
        let mut scores = VarkScores::default();

        for index in 1..=VARK_QUESTION_COUNT {
            let key = format!("vark_{}", index);
            let style = answers.get(&key).and_then(VarkStyle::from_letter);
            match style {
                Some(VarkStyle::Visual) => scores.v += 1,
                Some(VarkStyle::Auditory) => scores.a += 1,
                Some(VarkStyle::ReadingWriting) => scores.r += 1,
                Some(VarkStyle::Kinesthetic) => scores.k += 1,
                _ => {}
            }
        }

        VarkProfile {
            dominant: Self::dominant(&scores),
            scores,
        }
    }

    /// Dominant style for a set of counts: the unique argmax, or
    /// Multimodal when two or more styles share the maximum.
    pub fn dominant(scores: &VarkScores) -> VarkStyle {
        let max = VarkStyle::SINGLE_STYLES
            .iter()
            .map(|s| scores.count(*s))
            .max()
            .unwrap_or(0);

        let mut leaders = VarkStyle::SINGLE_STYLES
            .iter()
            .filter(|s| scores.count(**s) == max);

        match (leaders.next(), leaders.next()) {
            (Some(style), None) => *style,
            _ => VarkStyle::Multimodal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(entries: &[(&str, &str)]) -> QuizAnswers {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn visual_dominant_when_most_answers_are_v() {
        let answers = answers(&[
            ("vark_1", "V"),
            ("vark_2", "V"),
            ("vark_3", "A"),
            ("vark_4", "V"),
        ]);

        let profile = VarkScorer::score(&answers);
        assert_eq!(profile.dominant, VarkStyle::Visual);
        assert_eq!(
            profile.scores,
            VarkScores {
                v: 3,
                a: 1,
                r: 0,
                k: 0
            }
        );
    }

    #[test]
    fn tie_for_maximum_is_multimodal() {
        let answers = answers(&[
            ("vark_1", "V"),
            ("vark_2", "V"),
            ("vark_3", "K"),
            ("vark_4", "K"),
        ]);

        let profile = VarkScorer::score(&answers);
        assert_eq!(profile.dominant, VarkStyle::Multimodal);
    }

    #[test]
    fn missing_answers_count_as_zero() {
        let answers = answers(&[("vark_1", "R"), ("vark_3", "R")]);

        let profile = VarkScorer::score(&answers);
        assert_eq!(profile.dominant, VarkStyle::ReadingWriting);
        assert_eq!(profile.scores.total(), 2);
    }

    #[test]
    fn unrecognized_answer_codes_are_skipped() {
        let answers = answers(&[("vark_1", "V"), ("vark_2", "X"), ("vark_3", "?")]);

        let profile = VarkScorer::score(&answers);
        assert_eq!(profile.scores.total(), 1);
        assert_eq!(profile.dominant, VarkStyle::Visual);
    }

    #[test]
    fn empty_answers_yield_multimodal() {
        let profile = VarkScorer::score(&QuizAnswers::new());
        assert_eq!(profile.dominant, VarkStyle::Multimodal);
        assert_eq!(profile.scores.total(), 0);
    }

    #[test]
    fn letter_parsing_is_case_insensitive() {
        assert_eq!(VarkStyle::from_letter("v"), Some(VarkStyle::Visual));
        assert_eq!(VarkStyle::from_letter(" K "), Some(VarkStyle::Kinesthetic));
        assert_eq!(VarkStyle::from_letter("Z"), None);
        assert_eq!(VarkStyle::from_letter(""), None);
    }

    #[test]
    fn display_uses_platform_labels() {
        assert_eq!(format!("{}", VarkStyle::Auditory), "Auditivo");
        assert_eq!(format!("{}", VarkStyle::ReadingWriting), "Leitura/Escrita");
        assert_eq!(format!("{}", VarkStyle::Kinesthetic), "Cinestésico");
        assert_eq!(format!("{}", VarkStyle::Multimodal), "Multimodal");
    }

    #[test]
    fn sum_of_scores_equals_answered_questions() {
        let answers = answers(&[
            ("vark_1", "V"),
            ("vark_2", "A"),
            ("vark_3", "R"),
            ("vark_4", "K"),
        ]);

        let profile = VarkScorer::score(&answers);
        assert_eq!(profile.scores.total(), 4);
    }
}
