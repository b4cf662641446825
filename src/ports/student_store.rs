//! StudentStore port for student persistence operations.
//!
//! The hosted document database behind this trait is an external
//! collaborator; the core only ever sees the snapshot it returns.

use async_trait::async_trait;

use crate::domain::classroom::Student;
use crate::domain::foundation::{ClassId, DomainError, StudentId};

/// Persistence operations for students.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All students of a class.
    async fn students_by_class(&self, class_id: &ClassId) -> Result<Vec<Student>, DomainError>;

    /// Persists a student record.
    async fn save_student(&self, student: &Student) -> Result<(), DomainError>;

    /// Deletes a student. Profile cascade is the caller's responsibility.
    async fn delete_student(&self, student_id: &StudentId) -> Result<(), DomainError>;
}
