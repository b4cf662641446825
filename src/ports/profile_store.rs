//! ProfileStore port for unified-profile persistence operations.

use async_trait::async_trait;

use crate::domain::assessment::UnifiedProfile;
use crate::domain::foundation::{ClassId, DomainError, StudentId};

/// Persistence operations for unified profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// All profiles belonging to students of a class.
    async fn profiles_by_class(&self, class_id: &ClassId)
        -> Result<Vec<UnifiedProfile>, DomainError>;

    /// Persists a profile created at quiz submission.
    async fn save_profile(&self, profile: &UnifiedProfile) -> Result<(), DomainError>;

    /// Deletes the profile owned by a student, if any. Returns whether a
    /// profile existed.
    async fn delete_by_student(&self, student_id: &StudentId) -> Result<bool, DomainError>;
}
