//! Insight computation configuration.

use serde::Deserialize;

/// Tunable parameters for profile scoring and team formation.
///
/// Display contexts differ on how many top Schwartz values to surface, so
/// the count is configuration rather than a constant.
#[derive(Debug, Clone, Deserialize)]
pub struct InsightsConfig {
    /// How many top Schwartz values a profile keeps.
    #[serde(default = "default_schwartz_top_values")]
    pub schwartz_top_values: usize,

    /// Team size used when the caller does not specify one.
    #[serde(default = "default_group_size")]
    pub default_group_size: usize,
}

fn default_schwartz_top_values() -> usize {
    3
}

fn default_group_size() -> usize {
    4
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            schwartz_top_values: default_schwartz_top_values(),
            default_group_size: default_group_size(),
        }
    }
}
