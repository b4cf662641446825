//! DeleteStudent - Command handler for removing a student.
//!
//! Cascades to the student's profile and keeps the class counters in step.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{ClassId, DomainError, ErrorCode, StudentId};
use crate::ports::{ClassStore, ProfileStore, StudentStore};

/// Command to delete a student from a class.
#[derive(Debug, Clone)]
pub struct DeleteStudentCommand {
    pub class_id: ClassId,
    pub student_id: StudentId,
}

/// Handler for student deletion.
pub struct DeleteStudentHandler {
    students: Arc<dyn StudentStore>,
    profiles: Arc<dyn ProfileStore>,
    classes: Arc<dyn ClassStore>,
}

impl DeleteStudentHandler {
    pub fn new(
        students: Arc<dyn StudentStore>,
        profiles: Arc<dyn ProfileStore>,
        classes: Arc<dyn ClassStore>,
    ) -> Self {
        Self {
            students,
            profiles,
            classes,
        }
    }

    pub async fn handle(&self, command: DeleteStudentCommand) -> Result<(), DomainError> {
        let mut class = self
            .classes
            .find_class(&command.class_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClassNotFound, "Class not found"))?;

        let enrolled = self.students.students_by_class(&command.class_id).await?;
        if !enrolled.iter().any(|s| s.id() == command.student_id) {
            return Err(DomainError::new(
                ErrorCode::StudentNotFound,
                "Student not found in class",
            )
            .with_detail("student_id", command.student_id.to_string()));
        }

        let had_profile = self.profiles.delete_by_student(&command.student_id).await?;
        self.students.delete_student(&command.student_id).await?;

        class.remove_student(had_profile);
        self.classes.save_class(&class).await?;

        info!(
            student_id = %command.student_id,
            class_id = %command.class_id,
            had_profile,
            "student deleted"
        );

        Ok(())
    }
}
