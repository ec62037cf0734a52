use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::{
    constants::prompts::{GENERATION_FAILED_HINT, GENERATION_FAILED_MESSAGE},
    errors::{GenerationError, GenerationFailure},
    models::domain::{GenerationMode, Quiz, QuizParameters},
    services::{
        lenient_repair::repair_json,
        model_service::ModelClient,
        plain_template::parse_plain_template,
        prompt_builder::{
            build_json_prompt, build_plain_template_prompt, build_repair_prompt, truncate_chars,
        },
        schema_validator::{deserialize_quiz, validate_quiz},
        text_extractor::{completion_text, extract_json_candidate},
    },
};

/// Maximum characters of the last reply echoed back in a failure payload.
pub const PREVIEW_CHAR_LIMIT: usize = 1_200;

/// One attempt of the escalation, pairing a prompt variant with a recovery
/// strategy. Each stage runs at most once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Json,
    JsonFixed,
    PlainTemplate,
}

impl GenerationStage {
    pub const ORDER: [GenerationStage; 3] = [
        GenerationStage::Json,
        GenerationStage::JsonFixed,
        GenerationStage::PlainTemplate,
    ];

    pub fn mode(self) -> GenerationMode {
        match self {
            GenerationStage::Json => GenerationMode::Json,
            GenerationStage::JsonFixed => GenerationMode::JsonFixed,
            GenerationStage::PlainTemplate => GenerationMode::PlainTemplate,
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mode())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuiz {
    pub mode: GenerationMode,
    pub quiz: Quiz,
}

pub struct QuizGenerationService {
    model: Arc<dyn ModelClient>,
}

impl QuizGenerationService {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }

    /// Runs the stages in order and returns the first success. Stage failures
    /// are logged and escalate; only the terminal failure reaches the caller.
    pub async fn generate(
        &self,
        params: &QuizParameters,
    ) -> Result<GeneratedQuiz, GenerationFailure> {
        let mut last_reply = String::new();

        for stage in GenerationStage::ORDER {
            log::info!(
                "Executing {} stage for topic '{}' ({} questions, {})",
                stage,
                params.topic,
                params.num_questions,
                params.difficulty
            );

            let prompt = match stage {
                GenerationStage::Json => build_json_prompt(params),
                GenerationStage::JsonFixed => build_repair_prompt(&last_reply),
                GenerationStage::PlainTemplate => build_plain_template_prompt(params),
            };

            let outcome = match self.model.complete(&prompt).await {
                Ok(raw) => {
                    last_reply = completion_text(&raw);
                    recover(stage, params, &last_reply)
                }
                Err(err) => Err(err),
            };

            match outcome {
                Ok(quiz) => {
                    log::info!(
                        "Generated {} questions for topic '{}' via {} stage",
                        quiz.questions.len(),
                        params.topic,
                        stage
                    );
                    return Ok(GeneratedQuiz {
                        mode: stage.mode(),
                        quiz,
                    });
                }
                Err(err) => log::warn!("{} stage failed: {}", stage, err),
            }
        }

        log::error!(
            "All generation stages failed for topic '{}'; last reply head: {}",
            params.topic,
            truncate_chars(&last_reply, 200)
        );
        Err(GenerationFailure {
            error: GENERATION_FAILED_MESSAGE.to_string(),
            hint: GENERATION_FAILED_HINT.to_string(),
            preview: truncate_chars(&last_reply, PREVIEW_CHAR_LIMIT).to_string(),
        })
    }
}

fn recover(
    stage: GenerationStage,
    params: &QuizParameters,
    text: &str,
) -> Result<Quiz, GenerationError> {
    match stage {
        GenerationStage::Json | GenerationStage::JsonFixed => parse_quiz_from_jsonish(text),
        GenerationStage::PlainTemplate => parse_plain_template(params, text),
    }
}

/// Extract, repair, parse, then validate a JSON-stage reply.
pub fn parse_quiz_from_jsonish(text: &str) -> Result<Quiz, GenerationError> {
    let candidate = extract_json_candidate(text);
    let repaired = repair_json(&candidate);
    log::debug!(
        "Reply {} chars, candidate {} chars, repaired {} chars",
        text.len(),
        candidate.len(),
        repaired.len()
    );

    let value: Value = serde_json::from_str(&repaired).map_err(|err| {
        log::debug!(
            "Repaired payload head: {}",
            truncate_chars(&repaired, PREVIEW_CHAR_LIMIT)
        );
        GenerationError::from(err)
    })?;

    let quiz = reconcile_question_count(deserialize_quiz(value)?);
    validate_quiz(quiz)
}

fn reconcile_question_count(mut quiz: Quiz) -> Quiz {
    let actual = quiz.questions.len() as u32;
    if quiz.metadata.num_questions != actual {
        log::warn!(
            "Model reported numQuestions={} but returned {} questions",
            quiz.metadata.num_questions,
            actual
        );
        quiz.metadata.num_questions = actual;
    }
    quiz
}
