#![warn(clippy::all)]
pub use handle_errors;
use tokio::sync::{oneshot, oneshot::Sender};
use tracing_subscriber::fmt::format::FmtSpan;
use warp::{Filter, Reply, http::Method};

pub mod config;
pub mod grader;
mod routes;
pub mod seed;
pub mod store;
pub mod types;
use routes::question::get_questions;
use routes::root::welcome;
use routes::submission::submit_quiz;
use store::{QuestionStore, Store};

pub struct OneshotHandler {
    pub sender: Sender<i32>,
    pub addr: std::net::SocketAddr,
}

pub fn build_routes<S>(store: S, cors_origins: Vec<String>) -> impl Filter<Extract = impl Reply> + Clone
where
    S: QuestionStore + Clone + 'static,
{
    let store_filter = warp::any().map(move || store.clone());

    let cors = warp::cors()
        .allow_origins(cors_origins.iter().map(String::as_str))
        .allow_credentials(true)
        .allow_header("content-type")
        .allow_methods(&[Method::GET, Method::POST, Method::OPTIONS]);

    // Paths are matched before methods so an unknown path is a 404, not a 405.
    let root = warp::path::end().and(warp::get()).and_then(welcome);

    let get_questions = warp::path("questions")
        .and(warp::path::end())
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_questions::<S>);

    let submit_quiz = warp::path("submit")
        .and(warp::path::end())
        .and(warp::post())
        .and(store_filter.clone())
        .and(warp::body::content_length_limit(1024 * 16))
        .and(warp::body::json())
        .and_then(submit_quiz::<S>);

    root.or(get_questions)
        .or(submit_quiz)
        .with(cors)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "quiz_request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }))
        .recover(handle_errors::return_error)
}

pub fn setup_tracing(config: &config::Config) {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!(
            "handle_errors={},quiz={},warp={}",
            config.log_level, config.log_level, config.log_level
        )
    });

    tracing_subscriber::fmt()
        // Use the filter we built above to determine which traces to record.
        .with_env_filter(log_filter)
        // Record an event when each span closes, which times every request.
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

pub async fn setup_store(config: &config::Config) -> Result<Store, handle_errors::Error> {
    let store = Store::new(&config.database_url)
        .await
        .map_err(handle_errors::Error::DatabaseQueryError)?;

    store.migrate().await?;

    Ok(store)
}

pub async fn run(config: config::Config, store: Store) {
    let routes = build_routes(store, config.cors_origins);
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;
}

/// Serves on an ephemeral localhost port until a value is sent on `sender`.
pub async fn oneshot<S>(store: S, cors_origins: Vec<String>) -> OneshotHandler
where
    S: QuestionStore + Clone + 'static,
{
    let routes = build_routes(store, cors_origins);
    let (tx, rx) = oneshot::channel::<i32>();

    let (addr, server) =
        warp::serve(routes).bind_with_graceful_shutdown(([127, 0, 0, 1], 0), async {
            rx.await.ok();
        });

    tokio::task::spawn(server);

    OneshotHandler { sender: tx, addr }
}
