use anyhow::{Context, Result};

/// Configuration loaded from environment variables
#[derive(Debug)]
pub struct Config {
    pub groq_api_key: String,
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
}

/// Load configuration from `.env` and environment.
/// All three secrets are required; a missing one is startup-fatal.
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    // Read variables
    let groq_api_key =
        std::env::var("GROQ_API_KEY").context("GROQ_API_KEY is not set")?;
    let spotify_client_id =
        std::env::var("SPOTIFY_CLIENT_ID").context("SPOTIFY_CLIENT_ID is not set")?;
    let spotify_client_secret =
        std::env::var("SPOTIFY_CLIENT_SECRET").context("SPOTIFY_CLIENT_SECRET is not set")?;
    Ok(Config {
        groq_api_key,
        spotify_client_id,
        spotify_client_secret,
    })
}
