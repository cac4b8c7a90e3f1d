#![forbid(unsafe_code)]

pub mod error;
pub mod quiz_service;
pub mod sampler;
pub mod transcript;

pub use error::QuizError;
pub use quiz_service::{AnswerOutcome, Question, QuizService};
pub use sampler::Sampler;
pub use transcript::Transcript;
