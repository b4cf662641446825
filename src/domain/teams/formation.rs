//! Team formation heuristic.
//!
//! Partitions a class into teams of a requested size by one of four
//! criteria: mixed (complementary traits) or similarity on DISC, VARK, or
//! Jungian type. The random source is injected so tests can seed it; team
//! count and total membership are invariant under any shuffle.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;

use crate::domain::assessment::{DiscTrait, JungianType, UnifiedProfile, VarkStyle};
use crate::domain::classroom::Student;
use crate::domain::foundation::StudentId;

use super::complement::pair_score;

/// How teams are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingCriterion {
    /// Maximize complementary traits within each team.
    Mixed,
    /// Group students sharing the same dominant DISC trait.
    DiscSimilarity,
    /// Group students sharing the same dominant VARK style.
    VarkSimilarity,
    /// Group students sharing the same Jungian type.
    JungianSimilarity,
}

impl fmt::Display for GroupingCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingCriterion::Mixed => write!(f, "perfis complementares"),
            GroupingCriterion::DiscSimilarity => write!(f, "afinidade DISC"),
            GroupingCriterion::VarkSimilarity => write!(f, "afinidade VARK"),
            GroupingCriterion::JungianSimilarity => write!(f, "afinidade de tipo Jung"),
        }
    }
}

/// One student's slice of profile data carried into a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub student_id: StudentId,
    pub student_name: String,
    pub vark: VarkStyle,
    pub disc: DiscTrait,
    pub jungian: JungianType,
}

impl TeamMember {
    /// Projects a student and their profile into a team member.
    pub fn from_profile(student: &Student, profile: &UnifiedProfile) -> Self {
        Self {
            student_id: student.id(),
            student_name: student.name().to_string(),
            vark: profile.vark().dominant,
            disc: profile.disc().dominant,
            jungian: profile.jungian().clone(),
        }
    }
}

/// A formed team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// 1-based team number.
    pub number: usize,
    pub members: Vec<TeamMember>,
    /// Sum of pairwise complementary scores over all member pairs.
    pub complementary_score: i32,
    /// Templated description naming the traits represented.
    pub explanation: String,
}

impl Team {
    fn build(number: usize, members: Vec<TeamMember>, criterion: GroupingCriterion) -> Self {
        let complementary_score = Self::score_members(&members);
        let explanation = Self::explain(&members, criterion);
        Self {
            number,
            members,
            complementary_score,
            explanation,
        }
    }

    /// Sum of pairwise complementary scores over all member pairs.
    pub fn score_members(members: &[TeamMember]) -> i32 {
        let mut total = 0;
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                total += pair_score(a.disc, b.disc, &a.jungian, &b.jungian, a.vark, b.vark);
            }
        }
        total
    }

    fn explain(members: &[TeamMember], criterion: GroupingCriterion) -> String {
        let mut traits: Vec<String> = Vec::new();
        let mut seen = HashSet::new();
        for m in members {
            let label = m.disc.to_string();
            if seen.insert(label.clone()) {
                traits.push(label);
            }
        }
        format!(
            "Equipe formada por {}: perfis de {}.",
            criterion,
            traits.join(", ")
        )
    }
}

/// Team formation functions.
pub struct TeamFormer;

impl TeamFormer {
    /// Forms teams of up to `group_size` members by the given criterion.
    ///
    /// Team count is always `ceil(N / group_size)` and every student lands
    /// in exactly one team. A `group_size` of zero is treated as one.
    ///
    /// Mixed teams shuffle then deal round-robin, so sizes differ by at
    /// most one; similarity teams fill bucket by bucket, so the last team
    /// may be smaller.
    pub fn form(
        members: &[TeamMember],
        group_size: usize,
        criterion: GroupingCriterion,
        rng: &mut impl Rng,
    ) -> Vec<Team> {
        if members.is_empty() {
            return Vec::new();
        }
        let group_size = group_size.max(1);
        let team_count = (members.len() + group_size - 1) / group_size;

        match criterion {
            GroupingCriterion::Mixed => {
                let mut pool: Vec<TeamMember> = members.to_vec();
                pool.shuffle(rng);
                Self::deal_round_robin(pool, team_count, criterion)
            }
            _ => {
                let pool = Self::bucket_by_similarity(members, criterion);
                Self::deal_chunked(pool, group_size, criterion)
            }
        }
    }

    /// Redistributes the members of existing teams into the same number of
    /// teams, recomputing scores and explanations.
    pub fn reshuffle(
        teams: &[Team],
        criterion: GroupingCriterion,
        rng: &mut impl Rng,
    ) -> Vec<Team> {
        let mut pool: Vec<TeamMember> = teams
            .iter()
            .flat_map(|t| t.members.iter().cloned())
            .collect();
        if pool.is_empty() {
            return Vec::new();
        }
        pool.shuffle(rng);
        Self::deal_round_robin(pool, teams.len(), criterion)
    }

    /// Orders members so that those sharing the criterion's trait value
    /// are adjacent. Bucket order is the trait value's sort order, which
    /// keeps similarity grouping deterministic.
    fn bucket_by_similarity(
        members: &[TeamMember],
        criterion: GroupingCriterion,
    ) -> Vec<TeamMember> {
        let mut buckets: BTreeMap<String, Vec<TeamMember>> = BTreeMap::new();
        for m in members {
            let key = match criterion {
                GroupingCriterion::DiscSimilarity => m.disc.to_string(),
                GroupingCriterion::VarkSimilarity => m.vark.to_string(),
                GroupingCriterion::JungianSimilarity => m.jungian.to_string(),
                GroupingCriterion::Mixed => String::new(),
            };
            buckets.entry(key).or_default().push(m.clone());
        }
        buckets.into_values().flatten().collect()
    }

    fn deal_round_robin(
        pool: Vec<TeamMember>,
        team_count: usize,
        criterion: GroupingCriterion,
    ) -> Vec<Team> {
        let mut groups: Vec<Vec<TeamMember>> = vec![Vec::new(); team_count];
        for (i, member) in pool.into_iter().enumerate() {
            groups[i % team_count].push(member);
        }
        groups
            .into_iter()
            .enumerate()
            .map(|(i, members)| Team::build(i + 1, members, criterion))
            .collect()
    }

    fn deal_chunked(
        pool: Vec<TeamMember>,
        group_size: usize,
        criterion: GroupingCriterion,
    ) -> Vec<Team> {
        pool.chunks(group_size)
            .enumerate()
            .map(|(i, chunk)| Team::build(i + 1, chunk.to_vec(), criterion))
            .collect()
    }
}
