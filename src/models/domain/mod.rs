pub mod quiz;
pub mod quiz_parameters;
pub mod quiz_question;
pub use quiz::{Difficulty, GenerationMode, Quiz, QuizMetadata};
pub use quiz_parameters::QuizParameters;
pub use quiz_question::{Choice, ChoiceId, Question, QuestionType};
