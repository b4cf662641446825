//! Class entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClassId, TeacherId, Timestamp, ValidationError};

/// A class owned by a teacher.
///
/// Holds its students by reference (they carry the class id) and keeps
/// denormalized counters. Aggregation results are always recomputed from
/// the current students and profiles, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    id: ClassId,
    teacher_id: TeacherId,
    name: String,
    grade: Option<String>,
    student_count: u32,
    responses_count: u32,
    created_at: Timestamp,
}

impl Class {
    /// Creates a new class with zeroed counters.
    pub fn new(
        teacher_id: TeacherId,
        name: impl Into<String>,
        grade: Option<String>,
        timestamp: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            id: ClassId::new(),
            teacher_id,
            name,
            grade,
            student_count: 0,
            responses_count: 0,
            created_at: timestamp,
        })
    }

    /// Records a quiz submission: one new student, one new response.
    pub fn record_submission(&mut self) {
        self.student_count += 1;
        self.responses_count += 1;
    }

    /// Removes a student from the counters.
    ///
    /// `had_response` is true when the student had a profile, so the
    /// response counter shrinks with it.
    pub fn remove_student(&mut self, had_response: bool) {
        self.student_count = self.student_count.saturating_sub(1);
        if had_response {
            self.responses_count = self.responses_count.saturating_sub(1);
        }
    }

    // Getters

    pub fn id(&self) -> ClassId {
        self.id
    }

    pub fn teacher_id(&self) -> TeacherId {
        self.teacher_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }

    pub fn student_count(&self) -> u32 {
        self.student_count
    }

    pub fn responses_count(&self) -> u32 {
        self.responses_count
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
