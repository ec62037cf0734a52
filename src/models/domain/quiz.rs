use std::fmt;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::quiz_question::Question;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct Quiz {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(nested)]
    pub metadata: QuizMetadata,
    #[validate(length(min = 1), nested)]
    pub questions: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizMetadata {
    #[validate(length(min = 1))]
    pub topic: String,
    pub difficulty: Difficulty,
    #[validate(range(min = 1, max = 25))]
    pub num_questions: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Which pipeline stage produced a quiz. Tells callers how far the payload
/// may have drifted from the original request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    Json,
    JsonFixed,
    PlainTemplate,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Json => write!(f, "json"),
            GenerationMode::JsonFixed => write!(f, "json-fixed"),
            GenerationMode::PlainTemplate => write!(f, "plain-template"),
        }
    }
}

impl Quiz {
    /// Presentation transform: every question's choices are shuffled and
    /// re-lettered. Returns a new quiz; `self` is left untouched.
    pub fn reshuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Quiz {
        Quiz {
            title: self.title.clone(),
            description: self.description.clone(),
            metadata: self.metadata.clone(),
            questions: self.questions.iter().map(|q| q.reshuffled(rng)).collect(),
        }
    }

    /// Topic with whitespace runs collapsed to `_`, used for export filenames.
    pub fn file_stem(&self) -> String {
        self.metadata
            .topic
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }
}
