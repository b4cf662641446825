//! SubmitQuiz - Command handler for a student's quiz submission.
//!
//! The one write path of the core: creates the student, scores all four
//! instruments into a unified profile, links the two, and bumps the class
//! counters.

use std::sync::Arc;

use tracing::info;

use crate::config::InsightsConfig;
use crate::domain::assessment::{QuizAnswers, UnifiedProfile};
use crate::domain::classroom::Student;
use crate::domain::foundation::{ClassId, DomainError, ErrorCode, ProfileId, StudentId, Timestamp};
use crate::ports::{ClassStore, ProfileStore, StudentStore};

/// Command to submit a completed questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub class_id: ClassId,
    pub student_name: String,
    pub student_age: u8,
    pub student_email: Option<String>,
    pub student_gender: Option<String>,
    pub answers: QuizAnswers,
}

/// Outcome of a submission.
#[derive(Debug, Clone)]
pub struct SubmitQuizResult {
    pub student_id: StudentId,
    pub profile_id: ProfileId,
    pub dissonance_alert: bool,
}

/// Handler for quiz submissions.
pub struct SubmitQuizHandler {
    students: Arc<dyn StudentStore>,
    profiles: Arc<dyn ProfileStore>,
    classes: Arc<dyn ClassStore>,
    config: InsightsConfig,
}

impl SubmitQuizHandler {
    pub fn new(
        students: Arc<dyn StudentStore>,
        profiles: Arc<dyn ProfileStore>,
        classes: Arc<dyn ClassStore>,
        config: InsightsConfig,
    ) -> Self {
        Self {
            students,
            profiles,
            classes,
            config,
        }
    }

    pub async fn handle(&self, command: SubmitQuizCommand) -> Result<SubmitQuizResult, DomainError> {
        let mut class = self
            .classes
            .find_class(&command.class_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::ClassNotFound, "Class not found"))?;

        let mut student = Student::new(
            command.class_id,
            command.student_name,
            command.student_age,
            command.student_email,
            command.student_gender,
            Timestamp::now(),
        )?;

        let profile = UnifiedProfile::from_answers(
            student.id(),
            &command.answers,
            self.config.schwartz_top_values,
            Timestamp::now(),
        );
        student.attach_profile(profile.id());

        self.students.save_student(&student).await?;
        self.profiles.save_profile(&profile).await?;

        class.record_submission();
        self.classes.save_class(&class).await?;

        info!(
            student_id = %student.id(),
            class_id = %command.class_id,
            dissonance = profile.dissonance_alert(),
            "quiz submitted"
        );

        Ok(SubmitQuizResult {
            student_id: student.id(),
            profile_id: profile.id(),
            dissonance_alert: profile.dissonance_alert(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classroom::Class;
    use crate::domain::foundation::TeacherId;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryStores {
        students: Mutex<Vec<Student>>,
        profiles: Mutex<Vec<UnifiedProfile>>,
        classes: Mutex<Vec<Class>>,
    }

    #[async_trait]
    impl StudentStore for InMemoryStores {
        async fn students_by_class(
            &self,
            class_id: &ClassId,
        ) -> Result<Vec<Student>, DomainError> {
            Ok(self
                .students
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.class_id() == *class_id)
                .cloned()
                .collect())
        }

        async fn save_student(&self, student: &Student) -> Result<(), DomainError> {
            self.students.lock().unwrap().push(student.clone());
            Ok(())
        }

        async fn delete_student(&self, student_id: &StudentId) -> Result<(), DomainError> {
            self.students.lock().unwrap().retain(|s| s.id() != *student_id);
            Ok(())
        }
    }

    #[async_trait]
    impl ProfileStore for InMemoryStores {
        async fn profiles_by_class(
            &self,
            _class_id: &ClassId,
        ) -> Result<Vec<UnifiedProfile>, DomainError> {
            Ok(self.profiles.lock().unwrap().clone())
        }

        async fn save_profile(&self, profile: &UnifiedProfile) -> Result<(), DomainError> {
            self.profiles.lock().unwrap().push(profile.clone());
            Ok(())
        }

        async fn delete_by_student(&self, student_id: &StudentId) -> Result<bool, DomainError> {
            let mut profiles = self.profiles.lock().unwrap();
            let before = profiles.len();
            profiles.retain(|p| p.student_id() != *student_id);
            Ok(profiles.len() < before)
        }
    }

    #[async_trait]
    impl ClassStore for InMemoryStores {
        async fn find_class(&self, class_id: &ClassId) -> Result<Option<Class>, DomainError> {
            Ok(self
                .classes
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id() == *class_id)
                .cloned())
        }

        async fn save_class(&self, class: &Class) -> Result<(), DomainError> {
            let mut classes = self.classes.lock().unwrap();
            classes.retain(|c| c.id() != class.id());
            classes.push(class.clone());
            Ok(())
        }
    }

    fn seeded_class(stores: &InMemoryStores) -> Class {
        let class = Class::new(TeacherId::new(), "8º Ano B", None, Timestamp::now()).unwrap();
        stores.classes.lock().unwrap().push(class.clone());
        class
    }

    fn command(class_id: ClassId) -> SubmitQuizCommand {
        let mut answers = QuizAnswers::new();
        answers.insert("vark_1", "V");
        answers.insert("vark_2", "V");
        answers.insert("jung_1", "I");
        answers.insert("disc_1_most", "decidido");
        SubmitQuizCommand {
            class_id,
            student_name: "Ana Souza".to_string(),
            student_age: 14,
            student_email: None,
            student_gender: None,
            answers,
        }
    }

    #[tokio::test]
    async fn submission_creates_student_and_profile() {
        let stores = Arc::new(InMemoryStores::default());
        let class = seeded_class(&stores);
        let handler = SubmitQuizHandler::new(
            stores.clone(),
            stores.clone(),
            stores.clone(),
            InsightsConfig::default(),
        );

        let result = handler.handle(command(class.id())).await.unwrap();

        let students = stores.students.lock().unwrap();
        let profiles = stores.profiles.lock().unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(profiles.len(), 1);
        assert_eq!(students[0].id(), result.student_id);
        assert_eq!(students[0].profile_id(), Some(result.profile_id));
        assert_eq!(profiles[0].student_id(), result.student_id);
    }

    #[tokio::test]
    async fn submission_bumps_class_counters() {
        let stores = Arc::new(InMemoryStores::default());
        let class = seeded_class(&stores);
        let handler = SubmitQuizHandler::new(
            stores.clone(),
            stores.clone(),
            stores.clone(),
            InsightsConfig::default(),
        );

        handler.handle(command(class.id())).await.unwrap();
        handler.handle(command(class.id())).await.unwrap();

        let classes = stores.classes.lock().unwrap();
        let stored = classes.iter().find(|c| c.id() == class.id()).unwrap();
        assert_eq!(stored.student_count(), 2);
        assert_eq!(stored.responses_count(), 2);
    }

    #[tokio::test]
    async fn unknown_class_is_rejected() {
        let stores = Arc::new(InMemoryStores::default());
        let handler = SubmitQuizHandler::new(
            stores.clone(),
            stores.clone(),
            stores.clone(),
            InsightsConfig::default(),
        );

        let err = handler.handle(command(ClassId::new())).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ClassNotFound);

        assert!(stores.students.lock().unwrap().is_empty());
        assert!(stores.profiles.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_student_data_is_rejected() {
        let stores = Arc::new(InMemoryStores::default());
        let class = seeded_class(&stores);
        let handler = SubmitQuizHandler::new(
            stores.clone(),
            stores.clone(),
            stores.clone(),
            InsightsConfig::default(),
        );

        let mut bad = command(class.id());
        bad.student_name = "  ".to_string();

        let err = handler.handle(bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }

    #[tokio::test]
    async fn dissonant_submission_reports_alert() {
        let stores = Arc::new(InMemoryStores::default());
        let class = seeded_class(&stores);
        let handler = SubmitQuizHandler::new(
            stores.clone(),
            stores.clone(),
            stores.clone(),
            InsightsConfig::default(),
        );

        // introvert typing plus dominance-heavy DISC picks
        let result = handler.handle(command(class.id())).await.unwrap();
        assert!(result.dissonance_alert);
    }
}
