use serde::Serialize;
use warp::{Rejection, Reply};

#[derive(Debug, Serialize)]
struct Welcome {
    message: &'static str,
}

pub async fn welcome() -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&Welcome {
        message: "Welcome to the Quiz API",
    }))
}
