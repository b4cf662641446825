//! GetClassInsights - Query handler for the class dashboard payload.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{ClassId, DomainError};
use crate::domain::insights::{ClassAggregator, ClassInsights};
use crate::ports::{ProfileStore, StudentStore};

/// Query for a class's aggregate insights.
#[derive(Debug, Clone)]
pub struct GetClassInsightsQuery {
    pub class_id: ClassId,
}

/// Handler computing insights on read.
///
/// Fetches a snapshot of students and profiles and hands it to the pure
/// aggregator; nothing is cached or persisted.
pub struct GetClassInsightsHandler {
    students: Arc<dyn StudentStore>,
    profiles: Arc<dyn ProfileStore>,
}

impl GetClassInsightsHandler {
    pub fn new(students: Arc<dyn StudentStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { students, profiles }
    }

    pub async fn handle(
        &self,
        query: GetClassInsightsQuery,
    ) -> Result<ClassInsights, DomainError> {
        let students = self.students.students_by_class(&query.class_id).await?;
        let profiles = self.profiles.profiles_by_class(&query.class_id).await?;

        debug!(
            class_id = %query.class_id,
            students = students.len(),
            profiles = profiles.len(),
            "aggregating class insights"
        );

        Ok(ClassAggregator::aggregate(&profiles, &students))
    }
}
