use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{Difficulty, QuizParameters};

pub const DEFAULT_NUM_QUESTIONS: u32 = 8;
const MIN_TOPIC_CHARS: usize = 2;

/// Length is checked on the trimmed topic, which is what reaches the model.
fn validate_topic(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().chars().count() < MIN_TOPIC_CHARS {
        let mut err = ValidationError::new("topic_length");
        err.message = Some("Topic must be at least 2 characters".into());
        return Err(err);
    }
    Ok(())
}

fn default_num_questions() -> u32 {
    DEFAULT_NUM_QUESTIONS
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(custom(function = "validate_topic"))]
    pub topic: String,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 25, message = "numQuestions must be between 1 and 25"))]
    pub num_questions: u32,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[validate(length(max = 20000, message = "Source text must be at most 20000 characters"))]
    pub source: Option<String>,
}

impl GenerateQuizRequest {
    pub fn into_parameters(self) -> QuizParameters {
        QuizParameters::new(self.topic.trim(), self.difficulty, self.num_questions)
            .with_source(self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateQuizRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let request = parse(json!({ "topic": "Volcanoes" }));
        assert_eq!(request.num_questions, 8);
        assert_eq!(request.difficulty, Difficulty::Medium);
        assert!(request.source.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_camel_case_fields() {
        let request = parse(json!({
            "topic": "Volcanoes",
            "numQuestions": 12,
            "difficulty": "hard",
            "source": "Magma rises."
        }));
        assert_eq!(request.num_questions, 12);
        assert_eq!(request.difficulty, Difficulty::Hard);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_short_topic_rejected() {
        let request = parse(json!({ "topic": "V" }));
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("topic"));
    }

    #[test]
    fn test_blank_padded_topic_rejected() {
        for topic in ["   ", " a ", "\t\n"] {
            let request = parse(json!({ "topic": topic }));
            let errors = request.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("topic"), "{:?}", topic);
        }
        assert!(parse(json!({ "topic": "  ab  " })).validate().is_ok());
    }

    #[test]
    fn test_question_count_bounds() {
        for n in [0, 26] {
            let request = parse(json!({ "topic": "Volcanoes", "numQuestions": n }));
            let errors = request.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("num_questions"));
        }
        for n in [1, 25] {
            let request = parse(json!({ "topic": "Volcanoes", "numQuestions": n }));
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn test_oversized_source_rejected() {
        let request = parse(json!({ "topic": "Volcanoes", "source": "x".repeat(20_001) }));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_unknown_difficulty_fails_to_deserialize() {
        let result: Result<GenerateQuizRequest, _> =
            serde_json::from_value(json!({ "topic": "Volcanoes", "difficulty": "extreme" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_into_parameters() {
        let params = parse(json!({ "topic": "  Plate tectonics ", "numQuestions": 3, "source": "  " }))
            .into_parameters();
        assert_eq!(params.topic, "Plate tectonics");
        assert_eq!(params.num_questions, 3);
        assert_eq!(params.source, None);
    }
}
