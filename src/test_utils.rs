use crate::models::domain::{Choice, ChoiceId, Difficulty, Question, QuestionType, Quiz, QuizMetadata};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A well-formed question whose correct answer is `B`.
    pub fn sample_question(index: usize) -> Question {
        Question {
            id: format!("Q{}", index),
            question_type: QuestionType::Mcq,
            prompt: format!("Which statement about topic {} is true?", index),
            choices: vec![
                Choice::new(ChoiceId::A, format!("Distractor one for {}", index)),
                Choice::new(ChoiceId::B, format!("Correct answer for {}", index)),
                Choice::new(ChoiceId::C, format!("Distractor two for {}", index)),
                Choice::new(ChoiceId::D, format!("Distractor three for {}", index)),
            ],
            correct_choice_id: ChoiceId::B,
            explanation: Some(format!("Explanation for {}", index)),
        }
    }

    /// A valid quiz with `count` questions and matching metadata.
    pub fn sample_quiz(count: usize) -> Quiz {
        Quiz {
            title: "Photosynthesis Basics".to_string(),
            description: "A short check on how plants make food.".to_string(),
            metadata: QuizMetadata {
                topic: "Photosynthesis".to_string(),
                difficulty: Difficulty::Medium,
                num_questions: count as u32,
            },
            questions: (1..=count).map(sample_question).collect(),
        }
    }

    pub fn sample_quiz_json(count: usize) -> String {
        serde_json::to_string(&sample_quiz(count)).expect("sample quiz should serialize")
    }

    /// One plain-template question block as the model is asked to emit it.
    pub fn plain_block(index: usize) -> String {
        format!(
            "Q{i}: What is fact number {i}?\nA) First option {i}\nB) Second option {i}\nC) Third option {i}\nD) Fourth option {i}\nCORRECT: C\nEXPLAIN: Because option three is right for {i}.\n",
            i = index
        )
    }

    pub fn plain_template(count: usize) -> String {
        let mut text = String::from(
            "TITLE: Cell Biology\nDESCRIPTION: Basics of the cell.\nQUESTION COUNT: 3\n\n",
        );
        for i in 1..=count {
            text.push_str(&plain_block(i));
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use validator::Validate;

    #[test]
    fn test_fixtures_sample_quiz_is_valid() {
        let quiz = sample_quiz(3);
        assert!(quiz.validate().is_ok());
        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.metadata.num_questions, 3);
    }

    #[test]
    fn test_fixtures_plain_template_has_blocks() {
        let text = plain_template(2);
        assert!(text.contains("Q1:"));
        assert!(text.contains("Q2:"));
        assert!(!text.contains("Q3:"));
    }
}
