//! ClassStore port for class persistence operations.

use async_trait::async_trait;

use crate::domain::classroom::Class;
use crate::domain::foundation::{ClassId, DomainError};

/// Persistence operations for classes.
#[async_trait]
pub trait ClassStore: Send + Sync {
    /// Fetches a class by id.
    async fn find_class(&self, class_id: &ClassId) -> Result<Option<Class>, DomainError>;

    /// Persists a class, counters included.
    async fn save_class(&self, class: &Class) -> Result<(), DomainError>;
}
