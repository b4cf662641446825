//! Class aggregation: all per-student profiles combined into the
//! dashboard's insight payload.
//!
//! Aggregation is computed on read from the current students and profiles;
//! nothing here is persisted. Empty classes produce a defined zero-value
//! result, never a division by zero.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{DiscTrait, UnifiedProfile, VarkStyle, DISC_TIE_PRECEDENCE};
use crate::domain::classroom::Student;
use crate::domain::foundation::{Percentage, StudentId};

use super::cards::{climate_card, engagement_card, explanation_card, InsightCard};
use super::communication::{CommunicationSummary, WorkPaceSummary};
use super::compass::{CompassAxisScore, CompassCalculator};

/// One student flagged by the dissonance detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DissonanceAlert {
    pub student_id: StudentId,
    pub student_name: String,
    pub notes: String,
}

/// Class-level dissonance roll-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DissonanceSummary {
    pub alert_count: usize,
    pub alerts: Vec<DissonanceAlert>,
}

/// Share of the class whose dominant DISC trait matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitShare {
    pub label: String,
    pub count: usize,
    pub percentage: Percentage,
}

/// The aggregate insight payload for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInsights {
    /// False when no student has responded yet; consumers render the
    /// "awaiting responses" state instead of the dashboards.
    pub has_data: bool,
    pub student_count: usize,
    pub respondent_count: usize,
    pub compass: Vec<CompassAxisScore>,
    pub insight_cards: Vec<InsightCard>,
    pub communication: Option<CommunicationSummary>,
    pub work_pace: Option<WorkPaceSummary>,
    pub dissonance: DissonanceSummary,
    /// Role material available for team formation, by dominant DISC trait.
    pub team_composition: Vec<TraitShare>,
}

impl ClassInsights {
    /// The defined result for a class with no responses.
    pub fn empty(student_count: usize) -> Self {
        Self {
            has_data: false,
            student_count,
            respondent_count: 0,
            compass: CompassCalculator::compute(&[]),
            insight_cards: Vec::new(),
            communication: None,
            work_pace: None,
            dissonance: DissonanceSummary::default(),
            team_composition: Vec::new(),
        }
    }
}

/// Class aggregation functions.
pub struct ClassAggregator;

impl ClassAggregator {
    /// Aggregates all profiles of a class into the insight payload.
    ///
    /// Callers supply a consistent snapshot of students and profiles; the
    /// aggregator joins them by student id and does not re-fetch.
    ///
    /// # Edge Cases
    /// - Empty profile set: returns [`ClassInsights::empty`]
    /// - Profile whose student was deleted mid-snapshot: still scored in
    ///   the aggregates, reported without a name in the dissonance list
    pub fn aggregate(profiles: &[UnifiedProfile], students: &[Student]) -> ClassInsights {
        if profiles.is_empty() {
            return ClassInsights::empty(students.len());
        }

        let majority_disc = Self::majority_disc(profiles);
        let majority_vark = Self::majority_vark(profiles);
        let perception = Self::majority_perception(profiles);

        let insight_cards = vec![
            climate_card(majority_disc),
            engagement_card(majority_vark),
            explanation_card(perception),
        ];

        let fast = profiles
            .iter()
            .filter(|p| {
                matches!(p.disc().dominant, DiscTrait::Dominance | DiscTrait::Influence)
            })
            .count();
        let deliberate = profiles.len() - fast;

        ClassInsights {
            has_data: true,
            student_count: students.len(),
            respondent_count: profiles.len(),
            compass: CompassCalculator::compute(profiles),
            insight_cards,
            communication: Some(CommunicationSummary::for_majority(majority_disc)),
            work_pace: Some(WorkPaceSummary::from_counts(fast, deliberate)),
            dissonance: Self::dissonance_summary(profiles, students),
            team_composition: Self::team_composition(profiles),
        }
    }

    /// Most prevalent dominant DISC trait, ties resolved by
    /// [`DISC_TIE_PRECEDENCE`].
    pub fn majority_disc(profiles: &[UnifiedProfile]) -> DiscTrait {
        let count =
            |t: DiscTrait| profiles.iter().filter(|p| p.disc().dominant == t).count();

        let mut best = DISC_TIE_PRECEDENCE[0];
        for t in DISC_TIE_PRECEDENCE {
            if count(t) > count(best) {
                best = t;
            }
        }
        best
    }

    /// Most prevalent dominant VARK style; any tie for the maximum reads
    /// as Multimodal, mirroring the individual scorer.
    pub fn majority_vark(profiles: &[UnifiedProfile]) -> VarkStyle {
        let all = [
            VarkStyle::Visual,
            VarkStyle::Auditory,
            VarkStyle::ReadingWriting,
            VarkStyle::Kinesthetic,
            VarkStyle::Multimodal,
        ];
        let count =
            |s: VarkStyle| profiles.iter().filter(|p| p.vark().dominant == s).count();

        let max = all.iter().map(|s| count(*s)).max().unwrap_or(0);
        let mut leaders = all.iter().filter(|s| count(**s) == max);
        match (leaders.next(), leaders.next()) {
            (Some(style), None) => *style,
            _ => VarkStyle::Multimodal,
        }
    }

    /// Majority perception letter (S or N); ties read as S.
    pub fn majority_perception(profiles: &[UnifiedProfile]) -> char {
        let intuitive = profiles
            .iter()
            .filter(|p| p.jungian().letter(1) == 'N')
            .count();
        if intuitive * 2 > profiles.len() {
            'N'
        } else {
            'S'
        }
    }

    fn dissonance_summary(
        profiles: &[UnifiedProfile],
        students: &[Student],
    ) -> DissonanceSummary {
        let alerts: Vec<DissonanceAlert> = profiles
            .iter()
            .filter(|p| p.dissonance_alert())
            .map(|p| {
                let name = students
                    .iter()
                    .find(|s| s.id() == p.student_id())
                    .map(|s| s.name().to_string())
                    .unwrap_or_default();
                DissonanceAlert {
                    student_id: p.student_id(),
                    student_name: name,
                    notes: p.dissonance_notes().unwrap_or_default().to_string(),
                }
            })
            .collect();

        DissonanceSummary {
            alert_count: alerts.len(),
            alerts,
        }
    }

    fn team_composition(profiles: &[UnifiedProfile]) -> Vec<TraitShare> {
        DISC_TIE_PRECEDENCE
            .iter()
            .map(|t| {
                let count = profiles.iter().filter(|p| p.disc().dominant == *t).count();
                TraitShare {
                    label: t.to_string(),
                    count,
                    percentage: Percentage::from_ratio(count, profiles.len()),
                }
            })
            .collect()
    }
}
