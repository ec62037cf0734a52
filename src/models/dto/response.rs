use serde::Serialize;

use crate::{
    models::domain::{GenerationMode, Quiz},
    services::quiz_generation_service::GeneratedQuiz,
};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateQuizResponse {
    pub mode: GenerationMode,
    pub quiz: Quiz,
}

impl From<GeneratedQuiz> for GenerateQuizResponse {
    fn from(generated: GeneratedQuiz) -> Self {
        GenerateQuizResponse {
            mode: generated.mode,
            quiz: generated.quiz,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: String,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_quiz;

    #[test]
    fn test_generate_response_shape() {
        let response: GenerateQuizResponse = GeneratedQuiz {
            mode: GenerationMode::JsonFixed,
            quiz: sample_quiz(1),
        }
        .into();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mode"], "json-fixed");
        assert_eq!(json["quiz"]["metadata"]["numQuestions"], 1);
        assert_eq!(json["quiz"]["questions"][0]["correctChoiceId"], "B");
    }
}
