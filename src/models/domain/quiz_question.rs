use std::fmt;

use rand::{seq::SliceRandom, Rng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Positional label of a choice. Re-lettering after a shuffle reassigns these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema)]
pub enum ChoiceId {
    A,
    B,
    C,
    D,
}

impl ChoiceId {
    pub const ALL: [ChoiceId; 4] = [ChoiceId::A, ChoiceId::B, ChoiceId::C, ChoiceId::D];

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(ChoiceId::A),
            'B' => Some(ChoiceId::B),
            'C' => Some(ChoiceId::C),
            'D' => Some(ChoiceId::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceId::A => "A",
            ChoiceId::B => "B",
            ChoiceId::C => "C",
            ChoiceId::D => "D",
        }
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct Choice {
    pub id: ChoiceId,
    #[validate(length(min = 1))]
    pub text: String,
}

impl Choice {
    pub fn new(id: ChoiceId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum QuestionType {
    #[default]
    #[serde(rename = "mcq")]
    Mcq, // single correct answer
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[validate(length(min = 3))]
    pub prompt: String,
    #[validate(length(equal = 4), nested)]
    pub choices: Vec<Choice>,
    pub correct_choice_id: ChoiceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Question {
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == self.correct_choice_id)
    }

    /// Shuffles the choices and re-letters them A..D, moving
    /// `correct_choice_id` along with the choice it pointed at.
    pub fn reshuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        let mut shuffled = self.choices.clone();
        shuffled.shuffle(rng);

        let correct_index = shuffled
            .iter()
            .position(|c| c.id == self.correct_choice_id)
            .unwrap_or(0);

        let choices = shuffled
            .into_iter()
            .zip(ChoiceId::ALL)
            .map(|(choice, id)| Choice::new(id, choice.text))
            .collect();

        Question {
            id: self.id.clone(),
            question_type: self.question_type,
            prompt: self.prompt.clone(),
            choices,
            correct_choice_id: ChoiceId::ALL[correct_index.min(ChoiceId::ALL.len() - 1)],
            explanation: self.explanation.clone(),
        }
    }
}
