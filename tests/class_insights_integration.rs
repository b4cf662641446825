//! End-to-end test of the scoring pipeline: quiz submissions through the
//! handlers, class aggregation, and team formation, all against in-memory
//! stores.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cognita_insights::application::handlers::assessment::{SubmitQuizCommand, SubmitQuizHandler};
use cognita_insights::application::handlers::insights::{
    FormTeamsCommand, FormTeamsHandler, GetClassInsightsHandler, GetClassInsightsQuery,
};
use cognita_insights::config::InsightsConfig;
use cognita_insights::domain::assessment::{QuizAnswers, UnifiedProfile};
use cognita_insights::domain::classroom::{Class, Student};
use cognita_insights::domain::foundation::{
    ClassId, DomainError, StudentId, TeacherId, Timestamp,
};
use cognita_insights::domain::teams::GroupingCriterion;
use cognita_insights::ports::{ClassStore, ProfileStore, StudentStore};

/// Single in-memory document store backing all three ports.
#[derive(Default)]
struct InMemoryStore {
    students: Mutex<Vec<Student>>,
    profiles: Mutex<Vec<UnifiedProfile>>,
    classes: Mutex<Vec<Class>>,
}

#[async_trait]
impl StudentStore for InMemoryStore {
    async fn students_by_class(&self, class_id: &ClassId) -> Result<Vec<Student>, DomainError> {
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
        self.students
            .lock()
            .unwrap()
            .retain(|s| s.id() != *student_id);
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn profiles_by_class(
        &self,
        class_id: &ClassId,
    ) -> Result<Vec<UnifiedProfile>, DomainError> {
        let students = self.students.lock().unwrap();
        let member_ids: Vec<StudentId> = students
            .iter()
            .filter(|s| s.class_id() == *class_id)
            .map(|s| s.id())
            .collect();
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| member_ids.contains(&p.student_id()))
            .cloned()
            .collect())
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
impl ClassStore for InMemoryStore {
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

fn seeded_class(store: &InMemoryStore) -> ClassId {
    let class = Class::new(
        TeacherId::new(),
        "8º Ano B",
        Some("8º ano".to_string()),
        Timestamp::now(),
    )
    .unwrap();
    let id = class.id();
    store.classes.lock().unwrap().push(class);
    id
}

/// A full answer sheet with the given leanings.
fn answer_sheet(vark: &str, jung: [&str; 4], disc_most: &str, disc_least: &str) -> QuizAnswers {
    let mut map = HashMap::new();
    for i in 1..=4 {
        map.insert(format!("vark_{}", i), vark.to_string());
    }
    for (i, v) in jung.iter().enumerate() {
        map.insert(format!("jung_{}", i + 1), v.to_string());
    }
    map.insert("disc_1_most".to_string(), disc_most.to_string());
    map.insert("disc_2_least".to_string(), disc_least.to_string());
    for i in 1..=10 {
        map.insert(format!("schwartz_{}", i), ((i % 4) + 1).to_string());
    }
    QuizAnswers::from_map(map)
}

fn submit_handler(store: &Arc<InMemoryStore>) -> SubmitQuizHandler {
    SubmitQuizHandler::new(
        store.clone(),
        store.clone(),
        store.clone(),
        InsightsConfig::default(),
    )
}

#[tokio::test]
async fn submissions_flow_into_class_insights() {
    let store = Arc::new(InMemoryStore::default());
    let class_id = seeded_class(&store);
    let submit = submit_handler(&store);

    let sheets = [
        ("V", ["E", "S", "T", "J"], "comunicativo", "paciente"),
        ("V", ["E", "N", "F", "P"], "animado", "preciso"),
        ("A", ["I", "S", "T", "J"], "decidido", "leal"),
        ("K", ["E", "S", "F", "P"], "sociável", "detalhista"),
    ];
    for (i, (vark, jung, most, least)) in sheets.into_iter().enumerate() {
        submit
            .handle(SubmitQuizCommand {
                class_id,
                student_name: format!("Aluno {}", i + 1),
                student_age: 13,
                student_email: None,
                student_gender: None,
                answers: answer_sheet(vark, jung, most, least),
            })
            .await
            .unwrap();
    }

    let insights = GetClassInsightsHandler::new(store.clone(), store.clone())
        .handle(GetClassInsightsQuery { class_id })
        .await
        .unwrap();

    assert!(insights.has_data);
    assert_eq!(insights.student_count, 4);
    assert_eq!(insights.respondent_count, 4);
    assert_eq!(insights.compass.len(), 4);
    assert_eq!(insights.insight_cards.len(), 3);
    assert!(insights.communication.is_some());
    assert!(insights.work_pace.is_some());

    // Aluno 3 is an introvert with dominance-heavy picks
    assert_eq!(insights.dissonance.alert_count, 1);
    assert_eq!(insights.dissonance.alerts[0].student_name, "Aluno 3");

    // class counters kept in step by the submit handler
    let class = store.find_class(&class_id).await.unwrap().unwrap();
    assert_eq!(class.student_count(), 4);
    assert_eq!(class.responses_count(), 4);
}

#[tokio::test]
async fn insights_on_fresh_class_are_empty_not_an_error() {
    let store = Arc::new(InMemoryStore::default());
    let class_id = seeded_class(&store);

    let insights = GetClassInsightsHandler::new(store.clone(), store.clone())
        .handle(GetClassInsightsQuery { class_id })
        .await
        .unwrap();

    assert!(!insights.has_data);
    assert_eq!(insights.respondent_count, 0);
    assert!(insights.compass.iter().all(|c| c.percentage.value() == 0));
    assert!(insights.insight_cards.is_empty());
    assert!(insights.communication.is_none());
}

#[tokio::test]
async fn submitted_class_can_form_teams() {
    let store = Arc::new(InMemoryStore::default());
    let class_id = seeded_class(&store);
    let submit = submit_handler(&store);

    for i in 0..10 {
        let vark = ["V", "A", "R", "K"][i % 4];
        let jung = if i % 2 == 0 {
            ["E", "S", "T", "J"]
        } else {
            ["I", "N", "F", "P"]
        };
        submit
            .handle(SubmitQuizCommand {
                class_id,
                student_name: format!("Aluno {}", i + 1),
                student_age: 13,
                student_email: None,
                student_gender: None,
                answers: answer_sheet(vark, jung, "decidido", "paciente"),
            })
            .await
            .unwrap();
    }

    let teams = FormTeamsHandler::new(store.clone(), store.clone(), InsightsConfig::default())
        .handle(FormTeamsCommand {
            class_id,
            group_size: Some(4),
            criterion: GroupingCriterion::Mixed,
            seed: Some(2024),
        })
        .await
        .unwrap();

    assert_eq!(teams.len(), 3);
    let total: usize = teams.iter().map(|t| t.members.len()).sum();
    assert_eq!(total, 10);
    assert!(teams.iter().all(|t| !t.explanation.is_empty()));
}
