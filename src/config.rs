use clap::Parser;
use handle_errors::Error;
use std::env;

/// Quiz web service API
#[derive(Parser, Debug, PartialEq)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Which errors we want to log (info, warn or error)
    #[clap(short, long, default_value = "warn")]
    pub log_level: String,
    /// Which PORT the server is listening to
    #[clap(short, long, default_value = "8080")]
    pub port: u16,
    /// URL of the SQLite database holding the questions
    #[clap(long, default_value = "sqlite://quiz.db")]
    pub database_url: String,
    /// Origins allowed to call the API from a browser
    #[clap(
        long,
        value_delimiter = ',',
        default_values = ["http://localhost", "http://localhost:3000"]
    )]
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn new() -> Result<Config, Error> {
        Config::parse().with_env()
    }

    /// Lets `PORT`, `DATABASE_URL` and `CORS_ORIGINS` override the command line.
    pub fn with_env(self) -> Result<Config, Error> {
        let port = env::var("PORT")
            .ok()
            .map(|val| val.parse::<u16>())
            .unwrap_or(Ok(self.port))
            .map_err(Error::ParseError)?;

        let database_url = env::var("DATABASE_URL").unwrap_or(self.database_url);

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(origins) => origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            Err(_) => self.cors_origins,
        };

        if let Some(bad) = cors_origins
            .iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(Error::InvalidOrigin(bad.clone()));
        }

        Ok(Config {
            log_level: self.log_level,
            port,
            database_url,
            cors_origins,
        })
    }
}
