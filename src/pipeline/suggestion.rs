use crate::models::Selection;
use anyhow::Result;

use super::runner::SuggestionService;

pub const SYSTEM_PROMPT: &str =
    "You are a music assistant. Suggest playlist descriptions in 1-2 sentences.";

/// Substituted when the chat response carries no usable content
pub const FALLBACK_SUGGESTION: &str = "No suggestion available.";

/// Ask the suggestion service for a short playlist description.
///
/// Connectivity and HTTP failures propagate; a response without the
/// expected `choices[0].message.content` yields the fallback text so a
/// bad AI reply never blocks the playlist results.
pub fn request_suggestion(
    service: &dyn SuggestionService,
    selection: &Selection,
) -> Result<String> {
    let user_prompt = format!(
        "Suggest a short, human-readable playlist description in {} for a {} mood. Make it clear and natural.",
        selection.language.label(),
        selection.mood.label().to_lowercase()
    );

    let response = service.complete(SYSTEM_PROMPT, &user_prompt)?;

    let text = response
        .first_content()
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_SUGGESTION.to_string());

    if selection.shuffle {
        Ok(reverse_text(&text))
    } else {
        Ok(text)
    }
}

/// Cosmetic "shuffle" transform: reverse the text character by character.
/// Reverses by scalar value, so combining sequences in non-Latin scripts
/// can render oddly. Known limitation, kept as-is.
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}
