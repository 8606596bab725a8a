use tracing::{Level, event, instrument};
use warp::{Rejection, Reply, http::StatusCode};

use crate::store::QuestionStore;
use crate::types::question::QuestionView;

#[instrument(skip(store))]
pub async fn get_questions<S: QuestionStore>(store: S) -> Result<impl Reply, Rejection> {
    event!(target: "quiz", Level::INFO, "querying questions");
    let questions = store
        .fetch_all_questions()
        .await
        .map_err(warp::reject::custom)?;

    let views: Vec<QuestionView> = questions.iter().map(QuestionView::from).collect();
    event!(target: "quiz", Level::DEBUG, count = views.len(), "serving questions");

    Ok(warp::reply::with_status(
        warp::reply::json(&views),
        StatusCode::OK,
    ))
}
