use crate::models::domain::{ChoiceId, Question, Quiz};

pub const CSV_HEADER: [&str; 7] = ["Question", "A", "B", "C", "D", "Correct", "Explanation"];

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

fn question_row(question: &Question) -> Vec<String> {
    let mut row = Vec::with_capacity(CSV_HEADER.len());
    row.push(question.prompt.clone());
    for id in ChoiceId::ALL {
        let text = question
            .choices
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.text.clone())
            .unwrap_or_default();
        row.push(text);
    }
    row.push(question.correct_choice_id.to_string());
    row.push(question.explanation.clone().unwrap_or_default());
    row
}

/// One quoted row per question under the `Question,A,B,C,D,Correct,Explanation`
/// header.
pub fn quiz_to_csv(quiz: &Quiz) -> String {
    let header = CSV_HEADER.iter().map(|h| quote(h)).collect::<Vec<_>>().join(",");

    std::iter::once(header)
        .chain(quiz.questions.iter().map(|question| {
            question_row(question)
                .iter()
                .map(|cell| quote(cell))
                .collect::<Vec<_>>()
                .join(",")
        }))
        .collect::<Vec<_>>()
        .join("\n")
}
