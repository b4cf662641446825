//! Student entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClassId, ProfileId, StudentId, Timestamp, ValidationError};

/// Bounds on a plausible student age.
const AGE_MIN: u8 = 4;
const AGE_MAX: u8 = 120;

/// A student enrolled in a class.
///
/// Created at quiz submission; references its profile by id rather than
/// owning it. Deleting a student cascades to the profile at the store
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    id: StudentId,
    class_id: ClassId,
    name: String,
    age: u8,
    email: Option<String>,
    gender: Option<String>,
    profile_id: Option<ProfileId>,
    created_at: Timestamp,
}

impl Student {
    /// Creates a new student.
    ///
    /// Name must be non-blank; age must be within plausible bounds.
    pub fn new(
        class_id: ClassId,
        name: impl Into<String>,
        age: u8,
        email: Option<String>,
        gender: Option<String>,
        timestamp: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !(AGE_MIN..=AGE_MAX).contains(&age) {
            return Err(ValidationError::out_of_range(
                "age",
                AGE_MIN as i32,
                AGE_MAX as i32,
                age as i32,
            ));
        }

        Ok(Self {
            id: StudentId::new(),
            class_id,
            name,
            age,
            email,
            gender,
            profile_id: None,
            created_at: timestamp,
        })
    }

    /// Links the student to their unified profile. Set once at submission.
    pub fn attach_profile(&mut self, profile_id: ProfileId) {
        self.profile_id = Some(profile_id);
    }

    // Getters

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn class_id(&self) -> ClassId {
        self.class_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }

    pub fn profile_id(&self) -> Option<ProfileId> {
        self.profile_id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
