use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The six moods a user can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Relaxed,
    Romantic,
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Relaxed,
        Mood::Romantic,
        Mood::Angry,
    ];

    /// Plain label used in search queries, prompts and history
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Energetic => "Energetic",
            Mood::Relaxed => "Relaxed",
            Mood::Romantic => "Romantic",
            Mood::Angry => "Angry",
        }
    }

    /// Decorated label for the interactive menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy 😄",
            Mood::Sad => "Sad 😢",
            Mood::Energetic => "Energetic ⚡",
            Mood::Relaxed => "Relaxed 🌿",
            Mood::Romantic => "Romantic 💖",
            Mood::Angry => "Angry 😡",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five supported playlist languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Punjabi,
    Urdu,
    Hindi,
    English,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Punjabi,
        Language::Urdu,
        Language::Hindi,
        Language::English,
        Language::Arabic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::Punjabi => "Punjabi",
            Language::Urdu => "Urdu",
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::Arabic => "Arabic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user interaction: what to search for and how to show the suggestion
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub mood: Mood,
    pub language: Language,
    pub shuffle: bool,
}

/// Request body for the chat-completion endpoint
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        ChatMessage {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// Response from the chat-completion endpoint.
/// Every layer is optional so that a malformed body decodes to the
/// empty response instead of failing the run.
#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatMessageBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatMessageBody {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// First choice's message content, if the response carried one
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}

/// Response structure for the Spotify client-credentials token exchange
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// A playlist candidate that survived validation, with display defaults
/// already substituted for every optional field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub owner_name: String,
    pub external_url: String,
    pub image_url: Option<String>,
}

impl PlaylistSummary {
    /// Decode a raw search result item. Returns `None` for invalid
    /// candidates (null, non-object, or missing/empty id); every other
    /// field falls back to a display default. All missing-field policy
    /// for playlists lives here.
    pub fn from_value(value: &Value) -> Option<Self> {
        let record = value.as_object()?;
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())?
            .to_string();

        let name = record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("No Name")
            .to_string();
        let owner_name = record
            .get("owner")
            .and_then(|owner| owner.get("display_name"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();
        let external_url = record
            .get("external_urls")
            .and_then(|urls| urls.get("spotify"))
            .and_then(Value::as_str)
            .unwrap_or("#")
            .to_string();
        let image_url = record
            .get("images")
            .and_then(Value::as_array)
            .and_then(|images| images.first())
            .and_then(|image| image.get("url"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(String::from);

        Some(PlaylistSummary {
            id,
            name,
            owner_name,
            external_url,
            image_url,
        })
    }
}

/// A decoded track with display defaults substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    pub name: String,
    pub artist_name: String,
    pub preview_url: Option<String>,
}

/// One position in a playlist's track listing. An item whose nested
/// track record is absent keeps its position as `Missing` instead of
/// being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackSlot {
    Track(TrackSummary),
    Missing,
}

impl TrackSlot {
    /// Decode a raw playlist-tracks item. All missing-field policy for
    /// tracks lives here.
    pub fn from_item(item: &Value) -> Self {
        let track = match item.get("track") {
            Some(track) if track.is_object() => track,
            _ => return TrackSlot::Missing,
        };

        let name = track
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();
        let artist_name = track
            .get("artists")
            .and_then(Value::as_array)
            .and_then(|artists| artists.first())
            .and_then(|artist| artist.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();
        let preview_url = track
            .get("preview_url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(String::from);

        TrackSlot::Track(TrackSummary {
            name,
            artist_name,
            preview_url,
        })
    }
}
