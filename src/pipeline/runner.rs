use crate::models::{ChatResponse, Selection};
use anyhow::Result;
use serde_json::Value;
use thiserror::Error;

use super::history::SessionStore;
use super::resolver::{resolve_playlists, SEARCH_LIMIT};
use super::suggestion::request_suggestion;
use super::view::ViewModel;

/// Chat-completion collaborator, one call per run
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionService {
    fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<ChatResponse>;
}

/// Catalog search collaborator. Raw items are handed back as JSON values;
/// all validation and defaulting happens in the pipeline, not the client.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogService {
    fn search_playlists(&self, query: &str, limit: u32) -> Result<Vec<Value>>;
    fn playlist_tracks(&self, playlist_id: &str, limit: u32) -> Result<Vec<Value>>;
}

/// A failed run, one variant per upstream collaborator
#[derive(Debug, Error)]
pub enum RunError {
    #[error("playlist suggestion request failed: {0}")]
    Suggestion(#[source] anyhow::Error),
    #[error("catalog lookup failed: {0}")]
    Catalog(#[source] anyhow::Error),
}

/// Run one full pipeline pass for a selection.
///
/// The two external calls are sequential and blocking, suggestion first.
/// A malformed suggestion body is absorbed by its fallback text; only
/// connectivity or HTTP failures end the run. History is recorded exactly
/// once, after both calls have resolved.
pub fn run_pipeline(
    suggestions: &dyn SuggestionService,
    catalog: &dyn CatalogService,
    selection: &Selection,
    history: &mut SessionStore,
) -> Result<ViewModel, RunError> {
    let suggestion =
        request_suggestion(suggestions, selection).map_err(RunError::Suggestion)?;

    let playlists = resolve_playlists(catalog, selection.mood, selection.language, SEARCH_LIMIT)
        .map_err(RunError::Catalog)?;

    let view = ViewModel::assemble(suggestion, playlists);

    history.record(selection.mood.label(), selection.language.label());

    Ok(view)
}
