//! Insight query and team-formation handlers.

pub mod form_teams;
pub mod get_class_insights;

pub use form_teams::{FormTeamsCommand, FormTeamsHandler};
pub use get_class_insights::{GetClassInsightsHandler, GetClassInsightsQuery};
