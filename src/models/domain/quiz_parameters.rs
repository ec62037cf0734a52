use crate::models::domain::quiz::Difficulty;

/// Validated inputs of one generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizParameters {
    pub topic: String,
    pub difficulty: Difficulty,
    pub num_questions: u32,
    pub source: Option<String>,
}

impl QuizParameters {
    pub fn new(topic: impl Into<String>, difficulty: Difficulty, num_questions: u32) -> Self {
        Self {
            topic: topic.into(),
            difficulty,
            num_questions,
            source: None,
        }
    }

    /// Blank sources are treated as absent.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }
}
