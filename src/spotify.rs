use crate::config::Config;
use crate::models::TokenResponse;
use crate::pipeline::CatalogService;
use anyhow::Result;
use serde_json::Value;
use ureq::Agent;
use urlencoding::encode;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Spotify Web API client using the client-credentials flow
pub struct SpotifyClient {
    agent: Agent,
    access_token: String,
}

impl SpotifyClient {
    /// Exchange client credentials for an access token.
    /// Failing here means the credentials or connectivity are bad, so this
    /// doubles as the startup connection test.
    pub fn connect(config: &Config) -> Result<Self> {
        let agent = Agent::new();

        let response = agent
            .post(TOKEN_URL)
            .send_form(&[
                ("grant_type", "client_credentials"),
                ("client_id", config.spotify_client_id.as_str()),
                ("client_secret", config.spotify_client_secret.as_str()),
            ])
            .map_err(|e| anyhow::anyhow!("Spotify token request failed: {}", e))?;

        let response_text = response.into_string()?;
        let token: TokenResponse = serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse token response: {}", e))?;

        log::info!("Obtained Spotify access token");

        Ok(SpotifyClient {
            agent,
            access_token: token.access_token,
        })
    }

    /// Authenticated GET returning the raw JSON body
    fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .agent
            .get(url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .call()
            .map_err(|e| anyhow::anyhow!("HTTP request failed: {}", e))?;

        let response_text = response.into_string()?;

        serde_json::from_str(&response_text)
            .map_err(|e| anyhow::anyhow!("Failed to parse JSON response: {}", e))
    }
}

impl CatalogService for SpotifyClient {
    /// Search the catalog for playlists matching a free-text query.
    /// Items are returned raw; validation happens in the resolver.
    fn search_playlists(&self, query: &str, limit: u32) -> Result<Vec<Value>> {
        let url = format!(
            "{}/search?q={}&type=playlist&limit={}",
            API_BASE_URL,
            encode(query),
            limit
        );

        let body = self.get_json(&url)?;

        let items = body
            .get("playlists")
            .and_then(|playlists| playlists.get("items"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        log::debug!("Search '{}' returned {} raw items", query, items.len());

        Ok(items)
    }

    /// Fetch the first `limit` track items of a playlist
    fn playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Vec<Value>> {
        let url = format!(
            "{}/playlists/{}/tracks?limit={}",
            API_BASE_URL,
            encode(playlist_id),
            limit
        );

        let body = self.get_json(&url)?;

        let items = body
            .get("items")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(items)
    }
}
