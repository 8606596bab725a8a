use std::collections::HashMap;

use crate::types::{
    question::{ChoiceId, Question, QuestionId},
    result::{QuestionResult, QuizResult, UNANSWERED},
    submission::UserAnswer,
};

/// Scores a submission against a full snapshot of the quiz.
///
/// One result is produced per question, in the order of `questions`.
/// If a question is answered more than once, the last answer counts.
/// When several choices are flagged correct, the first one in stored order
/// is the canonical answer.
pub fn grade(questions: &[Question], answers: &[UserAnswer]) -> QuizResult {
    let submitted: HashMap<QuestionId, ChoiceId> = answers
        .iter()
        .map(|a| (a.question_id, a.choice_id))
        .collect();

    let answer_key: HashMap<QuestionId, ChoiceId> = questions
        .iter()
        .filter_map(|q| {
            q.choices
                .iter()
                .find(|c| c.is_correct)
                .map(|c| (q.id, c.id))
        })
        .collect();

    let mut score = 0;
    let mut results = Vec::with_capacity(questions.len());

    for question in questions {
        let user_choice = submitted.get(&question.id).copied();
        let correct_choice = answer_key.get(&question.id).copied();

        let is_correct = user_choice.is_some() && user_choice == correct_choice;
        if is_correct {
            score += 1;
        }

        let text_of = |id: Option<ChoiceId>| {
            id.and_then(|id| question.choices.iter().find(|c| c.id == id))
                .map(|c| c.text.clone())
        };

        results.push(QuestionResult {
            question_id: question.id,
            question_text: question.text.clone(),
            user_answer_text: text_of(user_choice).unwrap_or_else(|| UNANSWERED.to_string()),
            correct_answer_text: text_of(correct_choice).unwrap_or_default(),
            is_correct,
        });
    }

    QuizResult {
        score,
        total: questions.len(),
        results,
    }
}
