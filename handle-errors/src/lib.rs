use tracing::{Level, event, instrument};
use warp::{
    Rejection, Reply,
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::{MethodNotAllowed, PayloadTooLarge, Reject, UnsupportedMediaType},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot parse parameter: {0}")]
    ParseError(#[from] std::num::ParseIntError),
    #[error("Query could not be executed: {0}")]
    DatabaseQueryError(#[source] sqlx::Error),
    #[error("Cannot migrate data: {0}")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

impl Reject for Error {}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(e) = r.find::<Error>() {
        // Store details stay in the log, the client only learns it was our fault.
        event!(Level::ERROR, "{}", e);
        Ok(warp::reply::with_status(
            "Internal Server Error".to_string(),
            StatusCode::INTERNAL_SERVER_ERROR,
        ))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::WARN, "{}", error);
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::FORBIDDEN,
        ))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::WARN, "{}", error);
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else if let Some(error) = r.find::<UnsupportedMediaType>() {
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ))
    } else if let Some(error) = r.find::<PayloadTooLarge>() {
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::PAYLOAD_TOO_LARGE,
        ))
    } else if let Some(error) = r.find::<MethodNotAllowed>() {
        Ok(warp::reply::with_status(
            error.to_string(),
            StatusCode::METHOD_NOT_ALLOWED,
        ))
    } else {
        Ok(warp::reply::with_status(
            "Route not found".to_string(),
            StatusCode::NOT_FOUND,
        ))
    }
}
