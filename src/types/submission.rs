use serde::{Deserialize, Serialize};

use crate::types::question::{ChoiceId, QuestionId};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserAnswer {
    pub question_id: QuestionId,
    pub choice_id: ChoiceId,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnswerPayload {
    pub answers: Vec<UserAnswer>,
}

#[cfg(test)]
mod submission_tests {
    use super::*;

    #[test]
    fn missing_choice_id_is_rejected() {
        let parsed = serde_json::from_str::<AnswerPayload>(r#"{"answers": [{"question_id": 1}]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_answers_is_rejected() {
        let parsed = serde_json::from_str::<AnswerPayload>(r#"{"invalid": "payload"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload: AnswerPayload = serde_json::from_str(
            r#"{"answers": [{"question_id": 1, "choice_id": 2, "note": "x"}], "extra": 1}"#,
        )
        .unwrap();
        assert_eq!(payload.answers.len(), 1);
        assert_eq!(payload.answers[0].question_id, QuestionId(1));
    }

    #[test]
    fn string_ids_are_not_coerced() {
        let parsed = serde_json::from_str::<AnswerPayload>(
            r#"{"answers": [{"question_id": "1", "choice_id": 2}]}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn duplicate_questions_are_kept_as_sent() {
        let payload: AnswerPayload = serde_json::from_str(
            r#"{"answers": [
                {"question_id": 1, "choice_id": 1},
                {"question_id": 1, "choice_id": 2}
            ]}"#,
        )
        .unwrap();
        assert_eq!(payload.answers.len(), 2);
        assert_eq!(payload.answers[1].choice_id, ChoiceId(2));
    }
}
