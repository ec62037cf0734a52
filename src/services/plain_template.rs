//! Parser for the line-oriented fallback format:
//!
//! ```text
//! TITLE: <short title>
//! DESCRIPTION: <overview>
//! Q1: <prompt>
//! A) <choice>
//! B) <choice>
//! C) <choice>
//! D) <choice>
//! CORRECT: <A|B|C|D>
//! EXPLAIN: <explanation>
//! ```
//!
//! A short or malformed tail is dropped; only a reply with no complete
//! question at all is an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::GenerationError,
    models::domain::{Choice, ChoiceId, Question, QuestionType, Quiz, QuizMetadata, QuizParameters},
    services::schema_validator::validate_quiz,
};

static QUESTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Q(\d+):\s*(.*)$").expect("QUESTION_LINE is a valid regex pattern")
});

static CHOICE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([ABCD])\s*[).:]\s*(.*)$").expect("CHOICE_LINE is a valid regex pattern")
});

static CORRECT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^CORRECT:\s*\(?([ABCD])\b").expect("CORRECT_LINE is a valid regex pattern")
});

static EXPLAIN_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^EXPLAIN:\s*(.*)$").expect("EXPLAIN_LINE is a valid regex pattern")
});

/// Value after `label:` on the first line starting with it, case-insensitively.
fn labelled_value<'a>(lines: &[&'a str], label: &str) -> Option<&'a str> {
    lines.iter().find_map(|line| {
        let head = line.get(..label.len())?;
        if head.eq_ignore_ascii_case(label) {
            Some(line[label.len()..].trim())
        } else {
            None
        }
    })
}

fn question_number(line: &str) -> Option<(u32, &str)> {
    let caps = QUESTION_LINE.captures(line)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    Some((number, caps.get(2)?.as_str().trim()))
}

fn choice_text<'a>(line: Option<&&'a str>, expected: ChoiceId) -> Option<&'a str> {
    let caps = CHOICE_LINE.captures(line?)?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    if ChoiceId::from_letter(letter)? != expected {
        return None;
    }
    let text = caps.get(2)?.as_str().trim();
    (!text.is_empty()).then_some(text)
}

fn correct_choice(line: Option<&&str>) -> ChoiceId {
    line.and_then(|l| CORRECT_LINE.captures(l))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .and_then(ChoiceId::from_letter)
        .unwrap_or(ChoiceId::A)
}

fn explanation(line: Option<&&str>) -> Option<String> {
    let caps = EXPLAIN_LINE.captures(line?)?;
    let text = caps.get(1)?.as_str().trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Parses question `number` starting at its marker line, or `None` when the
/// block is incomplete.
fn parse_block(lines: &[&str], number: u32) -> Option<Question> {
    let marker_index = lines
        .iter()
        .position(|line| matches!(question_number(line), Some((n, _)) if n == number))?;
    let (_, prompt) = question_number(lines[marker_index])?;
    if prompt.is_empty() {
        return None;
    }

    let mut choices = Vec::with_capacity(ChoiceId::ALL.len());
    for (offset, id) in ChoiceId::ALL.iter().enumerate() {
        let text = choice_text(lines.get(marker_index + 1 + offset), *id)?;
        choices.push(Choice::new(*id, text));
    }

    Some(Question {
        id: format!("Q{}", number),
        question_type: QuestionType::Mcq,
        prompt: prompt.to_string(),
        choices,
        correct_choice_id: correct_choice(lines.get(marker_index + 5)),
        explanation: explanation(lines.get(marker_index + 6)),
    })
}

/// Extracts a quiz from plain-template text. `metadata.numQuestions` is set to
/// the number of questions actually recovered.
pub fn parse_plain_template(params: &QuizParameters, text: &str) -> Result<Quiz, GenerationError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let title = labelled_value(&lines, "TITLE:")
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} Quiz", params.topic));
    let description = labelled_value(&lines, "DESCRIPTION:")
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("A quick quiz on {}.", params.topic));

    let mut questions = Vec::new();
    for number in 1..=params.num_questions {
        match parse_block(&lines, number) {
            Some(question) => questions.push(question),
            None => break,
        }
    }

    if questions.is_empty() {
        return Err(GenerationError::NoQuestionsParsed);
    }
    if questions.len() < params.num_questions as usize {
        log::warn!(
            "Plain template yielded {} of {} requested questions",
            questions.len(),
            params.num_questions
        );
    }

    let quiz = Quiz {
        title,
        description,
        metadata: QuizMetadata {
            topic: params.topic.clone(),
            difficulty: params.difficulty,
            num_questions: questions.len() as u32,
        },
        questions,
    };
    validate_quiz(quiz)
}
