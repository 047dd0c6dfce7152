use std::path::PathBuf;

use anyhow::Context;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
///
/// Constructed exactly once at startup and passed into components;
/// nothing reads the environment mid-call.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub port: u16,
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        // A missing model key is an auth failure, not a generic config error.
        let groq_api_key = std::env::var("GROQ_API_KEY").map_err(|_| AppError::Auth)?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            groq_api_key,
            port,
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "./output".to_string())
                .into(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
