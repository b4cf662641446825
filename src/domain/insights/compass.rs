//! Learning compass: class-level percentages along four axes.
//!
//! Each axis has a bucket rule over the individual profiles; the axis
//! score is the share of respondents falling in the bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::{DiscTrait, UnifiedProfile, VarkStyle};
use crate::domain::foundation::Percentage;

/// The four compass axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompassAxis {
    /// Energy from interaction: Jungian extraversion or DISC Influence.
    SocialInteraction,
    /// Preference for plans and order: Jungian judging or DISC
    /// Conscientiousness.
    Structure,
    /// Drive to act and move: DISC Dominance or kinesthetic learning.
    ActionDrive,
    /// Abstract, text-first processing: Jungian intuition or
    /// reading/writing learning.
    Reflection,
}

impl CompassAxis {
    /// All axes in display order.
    pub const ALL: [CompassAxis; 4] = [
        CompassAxis::SocialInteraction,
        CompassAxis::Structure,
        CompassAxis::ActionDrive,
        CompassAxis::Reflection,
    ];

    /// Whether a profile falls in this axis bucket.
    pub fn matches(&self, profile: &UnifiedProfile) -> bool {
        match self {
            CompassAxis::SocialInteraction => {
                profile.jungian().letter(0) == 'E'
                    || profile.disc().dominant == DiscTrait::Influence
            }
            CompassAxis::Structure => {
                profile.jungian().letter(3) == 'J'
                    || profile.disc().dominant == DiscTrait::Conscientiousness
            }
            CompassAxis::ActionDrive => {
                profile.disc().dominant == DiscTrait::Dominance
                    || profile.vark().dominant == VarkStyle::Kinesthetic
            }
            CompassAxis::Reflection => {
                profile.jungian().letter(1) == 'N'
                    || profile.vark().dominant == VarkStyle::ReadingWriting
            }
        }
    }
}

impl fmt::Display for CompassAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Platform display labels are Portuguese.
        match self {
            CompassAxis::SocialInteraction => write!(f, "Interação Social"),
            CompassAxis::Structure => write!(f, "Estrutura e Planejamento"),
            CompassAxis::ActionDrive => write!(f, "Ritmo de Ação"),
            CompassAxis::Reflection => write!(f, "Reflexão e Abstração"),
        }
    }
}

/// One axis score in the class compass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompassAxisScore {
    pub axis: CompassAxis,
    pub label: String,
    pub percentage: Percentage,
    pub matching_count: usize,
}

/// Compass computation.
pub struct CompassCalculator;

impl CompassCalculator {
    /// Computes all four axis scores for a set of profiles.
    ///
    /// # Edge Cases
    /// - Empty profile set: every axis scores 0% (no division by zero)
    pub fn compute(profiles: &[UnifiedProfile]) -> Vec<CompassAxisScore> {
        CompassAxis::ALL
            .iter()
            .map(|axis| {
                let matching = profiles.iter().filter(|p| axis.matches(p)).count();
                CompassAxisScore {
                    axis: *axis,
                    label: axis.to_string(),
                    percentage: Percentage::from_ratio(matching, profiles.len()),
                    matching_count: matching,
                }
            })
            .collect()
    }
}
