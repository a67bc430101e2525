use crate::config::Config;
use crate::models::{ChatMessage, ChatRequest, ChatResponse};
use crate::pipeline::SuggestionService;
use anyhow::Result;
use ureq::Agent;

const CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const MODEL: &str = "openai/gpt-oss-20b";

/// Groq chat-completion client (OpenAI-compatible endpoint)
pub struct GroqClient {
    agent: Agent,
    api_key: String,
}

impl GroqClient {
    pub fn new(config: &Config) -> Self {
        GroqClient {
            agent: Agent::new(),
            api_key: config.groq_api_key.clone(),
        }
    }
}

impl SuggestionService for GroqClient {
    /// One synchronous chat-completion call. Network and non-2xx failures
    /// propagate; a 2xx body that does not match the expected shape decodes
    /// to the empty response so the caller can fall back.
    fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<ChatResponse> {
        let request = ChatRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
        };

        let response = self
            .agent
            .post(CHAT_URL)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(&request)
            .map_err(|e| anyhow::anyhow!("Chat completion request failed: {}", e))?;

        let response_text = response.into_string()?;

        let parsed = serde_json::from_str::<ChatResponse>(&response_text).unwrap_or_else(|e| {
            log::warn!("Malformed chat response: {}", e);
            ChatResponse::default()
        });

        Ok(parsed)
    }
}
