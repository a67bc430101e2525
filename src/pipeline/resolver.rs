use crate::models::{Language, Mood, PlaylistSummary, TrackSlot};
use anyhow::Result;

use super::runner::CatalogService;
use super::view::PlaylistView;

/// Maximum playlist results requested per search
pub const SEARCH_LIMIT: u32 = 10;

/// Tracks shown per playlist card
pub const TRACKS_PER_PLAYLIST: usize = 5;

/// Search the catalog for playlists matching the selection and resolve the
/// leading tracks of every valid candidate.
///
/// A raw result item is kept iff it decodes to a `PlaylistSummary` (an
/// object with a non-empty id); everything else is dropped. Order of the
/// survivors is the catalog-returned order. Zero survivors is a normal
/// outcome, not an error — the caller renders a distinct empty state.
pub fn resolve_playlists(
    catalog: &dyn CatalogService,
    mood: Mood,
    language: Language,
    limit: u32,
) -> Result<Vec<PlaylistView>> {
    let query = format!("{} {} music", mood.label(), language.label());

    let items = catalog.search_playlists(&query, limit)?;

    let mut resolved = Vec::new();
    for item in &items {
        let Some(summary) = PlaylistSummary::from_value(item) else {
            log::debug!("Dropping invalid playlist candidate");
            continue;
        };

        let raw_tracks = catalog.playlist_tracks(&summary.id, TRACKS_PER_PLAYLIST as u32)?;
        let tracks: Vec<TrackSlot> = raw_tracks
            .iter()
            .take(TRACKS_PER_PLAYLIST)
            .map(TrackSlot::from_item)
            .collect();

        resolved.push(PlaylistView { summary, tracks });
    }

    log::debug!(
        "Resolved {} valid playlists of {} candidates",
        resolved.len(),
        items.len()
    );

    Ok(resolved)
}
