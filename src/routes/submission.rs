use tracing::{Level, event, instrument};
use warp::{Rejection, Reply};

use crate::grader::grade;
use crate::store::QuestionStore;
use crate::types::submission::AnswerPayload;

#[instrument(skip(store, payload), fields(answers = payload.answers.len()))]
pub async fn submit_quiz<S: QuestionStore>(
    store: S,
    payload: AnswerPayload,
) -> Result<impl Reply, Rejection> {
    let questions = store
        .fetch_all_questions()
        .await
        .map_err(warp::reject::custom)?;

    let result = grade(&questions, &payload.answers);
    event!(
        target: "quiz",
        Level::INFO,
        score = result.score,
        total = result.total,
        "graded submission"
    );

    Ok(warp::reply::json(&result))
}
