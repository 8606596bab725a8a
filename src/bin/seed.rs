use quiz::{config, seed::default_questions, setup_store, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    dotenv::dotenv().ok();
    let config = config::Config::new()?;
    setup_tracing(&config);
    let store = setup_store(&config).await?;
    let count = store.seed(&default_questions()).await?;
    tracing::info!("Database {} seeded with {} questions", config.database_url, count);
    Ok(())
}
