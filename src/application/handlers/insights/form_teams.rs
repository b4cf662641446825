//! FormTeams - Command handler for on-demand team suggestions.
//!
//! Joins students to their profiles, then runs the formation heuristic.
//! Production callers leave `seed` unset for a fresh shuffle; passing a
//! seed reproduces a previous arrangement.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::InsightsConfig;
use crate::domain::foundation::{ClassId, DomainError};
use crate::domain::teams::{GroupingCriterion, Team, TeamFormer, TeamMember};
use crate::ports::{ProfileStore, StudentStore};

/// Command to form teams for a class.
#[derive(Debug, Clone)]
pub struct FormTeamsCommand {
    pub class_id: ClassId,
    /// Desired members per team; falls back to the configured default.
    pub group_size: Option<usize>,
    pub criterion: GroupingCriterion,
    /// Fixed shuffle seed, for reproducing an arrangement.
    pub seed: Option<u64>,
}

/// Handler for team formation.
pub struct FormTeamsHandler {
    students: Arc<dyn StudentStore>,
    profiles: Arc<dyn ProfileStore>,
    config: InsightsConfig,
}

impl FormTeamsHandler {
    pub fn new(
        students: Arc<dyn StudentStore>,
        profiles: Arc<dyn ProfileStore>,
        config: InsightsConfig,
    ) -> Self {
        Self {
            students,
            profiles,
            config,
        }
    }

    pub async fn handle(&self, command: FormTeamsCommand) -> Result<Vec<Team>, DomainError> {
        let students = self.students.students_by_class(&command.class_id).await?;
        let profiles = self.profiles.profiles_by_class(&command.class_id).await?;

        // Only students who responded can be placed meaningfully.
        let members: Vec<TeamMember> = students
            .iter()
            .filter_map(|student| {
                profiles
                    .iter()
                    .find(|p| p.student_id() == student.id())
                    .map(|profile| TeamMember::from_profile(student, profile))
            })
            .collect();

        let group_size = command.group_size.unwrap_or(self.config.default_group_size);
        let mut rng = match command.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        debug!(
            class_id = %command.class_id,
            members = members.len(),
            group_size,
            criterion = %command.criterion,
            "forming teams"
        );

        Ok(TeamFormer::form(
            &members,
            group_size,
            command.criterion,
            &mut rng,
        ))
    }
}
