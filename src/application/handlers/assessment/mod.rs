//! Assessment command handlers.

pub mod delete_student;
pub mod submit_quiz;

pub use delete_student::{DeleteStudentCommand, DeleteStudentHandler};
pub use submit_quiz::{SubmitQuizCommand, SubmitQuizHandler, SubmitQuizResult};
