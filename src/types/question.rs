use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i32);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(pub i32);

/// What a client is allowed to see of a question: no hint of which choice is correct.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: String,
    pub choices: Vec<ChoiceView>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ChoiceView {
    pub id: ChoiceId,
    pub text: String,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            id: question.id,
            text: question.text.clone(),
            choices: question
                .choices
                .iter()
                .map(|c| ChoiceView {
                    id: c.id,
                    text: c.text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewQuestion {
    pub text: String,
    pub choices: Vec<NewChoice>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewChoice {
    pub text: String,
    pub is_correct: bool,
}

impl NewChoice {
    pub fn new(text: &str, is_correct: bool) -> Self {
        NewChoice {
            text: text.to_string(),
            is_correct,
        }
    }
}
