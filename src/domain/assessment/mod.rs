//! Assessment module - questionnaire scoring and the unified profile.
//!
//! Turns a student's raw quiz answers into a [`UnifiedProfile`]:
//!
//! - **VARK** - learning style counts, Multimodal on ties
//! - **DISC** - behavioral trait scores from most/least word picks
//! - **Jungian** - 4-letter type code, one letter per axis
//! - **Schwartz** - ranked value priorities from Likert answers
//! - **Dissonance** - flat rule list flagging conflicting trait pairs
//!
//! All scorers are total functions: missing or malformed answers contribute
//! zero and never raise errors.

pub mod answers;
pub mod disc;
pub mod dissonance;
pub mod jungian;
pub mod profile;
pub mod schwartz;
pub mod vark;

pub use answers::{AnswerKey, DiscFacet, Instrument, QuizAnswers};
pub use disc::{DiscProfile, DiscScorer, DiscScores, DiscTrait, DISC_TIE_PRECEDENCE};
pub use dissonance::{DissonanceDetector, DissonanceFinding};
pub use jungian::{JungianType, JungianTyper, JUNGIAN_AXES};
pub use profile::UnifiedProfile;
pub use schwartz::{SchwartzScorer, SchwartzValue, SchwartzValues, SCHWARTZ_VALUE_ORDER};
pub use vark::{VarkProfile, VarkScorer, VarkScores, VarkStyle};
