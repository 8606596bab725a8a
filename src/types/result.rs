use serde::{Deserialize, Serialize};

use crate::types::question::QuestionId;

/// Shown in place of the user's answer when no choice of the question matches.
pub const UNANSWERED: &str = "Unanswered";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuestionResult {
    pub question_id: QuestionId,
    pub question_text: String,
    pub user_answer_text: String,
    pub correct_answer_text: String,
    pub is_correct: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub results: Vec<QuestionResult>,
}
