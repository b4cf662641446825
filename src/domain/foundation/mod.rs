//! Foundation module - shared value objects for the domain layer.

pub mod errors;
pub mod ids;
pub mod percentage;
pub mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ClassId, ProfileId, StudentId, TeacherId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
