use crate::{
    constants::prompts::{
        BEGIN_JSON_MARKER, BEGIN_PREVIOUS_MARKER, END_JSON_MARKER, END_PREVIOUS_MARKER,
        JSON_NO_SOURCE_INSTRUCTION, JSON_SOURCE_INSTRUCTION, PLAIN_NO_SOURCE_INSTRUCTION,
        PLAIN_SOURCE_INSTRUCTION, PLAIN_TEMPLATE_INTRO, PREVIOUS_REPLY_CHAR_LIMIT, QUIZ_RULES,
        QUIZ_SYSTEM_PROMPT, REPAIR_INSTRUCTION, SOURCE_CHAR_LIMIT,
    },
    models::domain::QuizParameters,
};

/// First `limit` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

fn source_block(params: &QuizParameters, with_source: &str, without_source: &str) -> String {
    match params.source.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(source) => format!(
            "{}\n\nSOURCE START\n{}\nSOURCE END",
            with_source,
            truncate_chars(source, SOURCE_CHAR_LIMIT)
        ),
        None => without_source.to_string(),
    }
}

/// Stage one: the model must answer with a marker-wrapped JSON quiz.
pub fn build_json_prompt(params: &QuizParameters) -> String {
    let scope = source_block(params, JSON_SOURCE_INSTRUCTION, JSON_NO_SOURCE_INSTRUCTION);

    format!(
        "{system}\n\nCreate a quiz on: \"{topic}\"\nDifficulty: {difficulty}\nNumber of questions: {count}\n\n{rules}\n\n{scope}\n\nReturn:\n{begin}\n{{...}}\n{end}",
        system = QUIZ_SYSTEM_PROMPT,
        topic = params.topic,
        difficulty = params.difficulty,
        count = params.num_questions,
        rules = QUIZ_RULES,
        scope = scope,
        begin = BEGIN_JSON_MARKER,
        end = END_JSON_MARKER,
    )
}

/// Stage two: ask the model to restate its own previous reply as valid JSON.
pub fn build_repair_prompt(previous_reply: &str) -> String {
    format!(
        "{system}\n\n{instruction}\n{begin_prev}\n{previous}\n{end_prev}\n\nReturn only between markers.",
        system = QUIZ_SYSTEM_PROMPT,
        instruction = REPAIR_INSTRUCTION,
        begin_prev = BEGIN_PREVIOUS_MARKER,
        previous = truncate_chars(previous_reply, PREVIOUS_REPLY_CHAR_LIMIT),
        end_prev = END_PREVIOUS_MARKER,
    )
}

/// Stage three: a line-oriented format that needs no JSON balancing.
pub fn build_plain_template_prompt(params: &QuizParameters) -> String {
    let scope = source_block(params, PLAIN_SOURCE_INSTRUCTION, PLAIN_NO_SOURCE_INSTRUCTION);
    let count = params.num_questions;

    format!(
        "{intro}\n\nTITLE: <short title>\nDESCRIPTION: <1-2 sentence overview>\nQUESTION COUNT: {count}\n\nFor each question i = 1..{count} emit:\n\nQ{{i}}: <prompt>\nA) <choice>\nB) <choice>\nC) <choice>\nD) <choice>\nCORRECT: <A|B|C|D>\nEXPLAIN: <one-line explanation>\n\nTopic: {topic}\nDifficulty: {difficulty}\n{scope}",
        intro = PLAIN_TEMPLATE_INTRO,
        count = count,
        topic = params.topic,
        difficulty = params.difficulty,
        scope = scope,
    )
}
