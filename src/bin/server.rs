use quiz::{config, run, setup_store, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), handle_errors::Error> {
    dotenv::dotenv().ok();
    let config = config::Config::new()?;
    setup_tracing(&config);
    let store = setup_store(&config).await?;
    tracing::info!(
        "Quiz service {} listening on port {}",
        env!("CARGO_PKG_VERSION"),
        config.port
    );
    run(config, store).await;
    Ok(())
}
