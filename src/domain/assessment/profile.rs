//! UnifiedProfile aggregate root.
//!
//! One per student, created at quiz-submission time by running all four
//! scorers plus dissonance detection over the raw answers. Read-only after
//! creation: the platform has no profile-update path, a re-submission
//! creates a new profile.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, StudentId, Timestamp};

use super::answers::QuizAnswers;
use super::disc::{DiscProfile, DiscScorer};
use super::dissonance::{DissonanceDetector, DissonanceFinding};
use super::jungian::{JungianType, JungianTyper};
use super::schwartz::{SchwartzScorer, SchwartzValues};
use super::vark::{VarkProfile, VarkScorer};

/// A student's complete learning profile across all four instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedProfile {
    id: ProfileId,
    student_id: StudentId,
    vark: VarkProfile,
    disc: DiscProfile,
    jungian: JungianType,
    schwartz: SchwartzValues,
    dissonance_alert: bool,
    dissonance_notes: Option<String>,
    created_at: Timestamp,
}

impl UnifiedProfile {
    /// Builds a profile from raw quiz answers.
    ///
    /// Runs the four scorers and the dissonance detector in one shot.
    /// Total for any input: sparse or empty answer sets produce a valid
    /// profile with zeroed scores.
    pub fn from_answers(
        student_id: StudentId,
        answers: &QuizAnswers,
        schwartz_top_n: usize,
        timestamp: Timestamp,
    ) -> Self {
        let vark = VarkScorer::score(answers);
        let disc = DiscScorer::score(answers);
        let jungian = JungianTyper::type_from(answers);
        let schwartz = SchwartzScorer::score(answers, schwartz_top_n);
        let dissonance = DissonanceDetector::detect(&jungian, &disc);

        Self {
            id: ProfileId::new(),
            student_id,
            vark,
            disc,
            jungian,
            schwartz,
            dissonance_alert: dissonance.alert,
            dissonance_notes: dissonance.notes,
            created_at: timestamp,
        }
    }

    /// Reconstitutes a profile from stored parts.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ProfileId,
        student_id: StudentId,
        vark: VarkProfile,
        disc: DiscProfile,
        jungian: JungianType,
        schwartz: SchwartzValues,
        dissonance: DissonanceFinding,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            student_id,
            vark,
            disc,
            jungian,
            schwartz,
            dissonance_alert: dissonance.alert,
            dissonance_notes: dissonance.notes,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    pub fn vark(&self) -> &VarkProfile {
        &self.vark
    }

    pub fn disc(&self) -> &DiscProfile {
        &self.disc
    }

    pub fn jungian(&self) -> &JungianType {
        &self.jungian
    }

    pub fn schwartz(&self) -> &SchwartzValues {
        &self.schwartz
    }

    pub fn dissonance_alert(&self) -> bool {
        self.dissonance_alert
    }

    pub fn dissonance_notes(&self) -> Option<&str> {
        self.dissonance_notes.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
