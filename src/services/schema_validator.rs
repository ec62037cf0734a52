//! Trust boundary between model text and data the rest of the server renders
//! or exports. A value that leaves this module satisfies every quiz
//! invariant; anything else is reported with the first offending path.

use std::collections::HashSet;

use serde_json::Value;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::{
    errors::GenerationError,
    models::domain::{ChoiceId, Question, Quiz, QuizMetadata},
};

/// Deserializes and validates an arbitrary parsed value.
pub fn validate_quiz_value(value: Value) -> Result<Quiz, GenerationError> {
    validate_quiz(deserialize_quiz(value)?)
}

/// Structural typing only: wrong types, missing fields and unknown enum
/// members. Field constraints are left to [`validate_quiz`].
pub fn deserialize_quiz(value: Value) -> Result<Quiz, GenerationError> {
    serde_json::from_value(value.clone())
        .map_err(|err| GenerationError::validation(locate_type_error(&value), err.to_string()))
}

/// Checks field constraints and cross-field invariants of a typed quiz.
/// Returns the quiz unchanged when it is valid.
pub fn validate_quiz(quiz: Quiz) -> Result<Quiz, GenerationError> {
    if let Err(errors) = quiz.validate() {
        let (path, message) = first_violation(&errors, "")
            .unwrap_or_else(|| ("$".to_string(), errors.to_string()));
        return Err(GenerationError::validation(path, message));
    }

    let mut seen_ids = HashSet::new();
    for (index, question) in quiz.questions.iter().enumerate() {
        if !seen_ids.insert(question.id.as_str()) {
            return Err(GenerationError::validation(
                format!("questions[{}].id", index),
                format!("duplicate question id '{}'", question.id),
            ));
        }
        validate_question_invariants(question, index)?;
    }

    Ok(quiz)
}

fn validate_question_invariants(question: &Question, index: usize) -> Result<(), GenerationError> {
    let ids: HashSet<ChoiceId> = question.choices.iter().map(|c| c.id).collect();
    if ids.len() != question.choices.len() || !ChoiceId::ALL.iter().all(|id| ids.contains(id)) {
        return Err(GenerationError::validation(
            format!("questions[{}].choices", index),
            "choice ids must be A, B, C and D exactly once",
        ));
    }

    if question.correct_choice().is_none() {
        return Err(GenerationError::validation(
            format!("questions[{}].correctChoiceId", index),
            format!(
                "'{}' does not reference one of the choices",
                question.correct_choice_id
            ),
        ));
    }

    Ok(())
}

/// Narrows a deserialization failure to the section that caused it.
fn locate_type_error(value: &Value) -> String {
    if !value.is_object() {
        return "$".to_string();
    }
    if let Some(metadata) = value.get("metadata") {
        if serde_json::from_value::<QuizMetadata>(metadata.clone()).is_err() {
            return "metadata".to_string();
        }
    }
    if let Some(questions) = value.get("questions").and_then(Value::as_array) {
        for (index, question) in questions.iter().enumerate() {
            if serde_json::from_value::<Question>(question.clone()).is_err() {
                return format!("questions[{}]", index);
            }
        }
    }
    "$".to_string()
}

/// Validated fields of `Quiz`, `QuizMetadata`, `Question` and `Choice` in
/// declaration order.
const FIELD_ORDER: [&str; 10] = [
    "title",
    "description",
    "metadata",
    "questions",
    "topic",
    "num_questions",
    "id",
    "prompt",
    "choices",
    "text",
];

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|known| *known == field)
        .unwrap_or(FIELD_ORDER.len())
}

/// Depth-first search over validator errors with fields visited in
/// declaration order, so the reported path follows document order and does
/// not depend on hash map iteration.
fn first_violation(errors: &ValidationErrors, prefix: &str) -> Option<(String, String)> {
    let mut fields: Vec<(String, &ValidationErrorsKind)> = errors
        .errors()
        .iter()
        .map(|(field, kind)| (field.to_string(), kind))
        .collect();
    fields.sort_by(|a, b| {
        field_rank(&a.0)
            .cmp(&field_rank(&b.0))
            .then_with(|| a.0.cmp(&b.0))
    });

    for (field, kind) in fields {
        let path = if prefix.is_empty() {
            field
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                if let Some(err) = field_errors.first() {
                    return Some((path, err.to_string()));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                if let Some(found) = first_violation(nested, &path) {
                    return Some(found);
                }
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    if let Some(found) = first_violation(nested, &format!("{}[{}]", path, index)) {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}
