use crate::models::{PlaylistSummary, TrackSlot};

/// One renderable playlist card: summary plus up to five track slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    pub summary: PlaylistSummary,
    pub tracks: Vec<TrackSlot>,
}

/// The merged result of one pipeline run, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub suggestion: String,
    pub playlists: Vec<PlaylistView>,
}

impl ViewModel {
    /// Pure merge; preserves the resolver's playlist order
    pub fn assemble(suggestion: String, playlists: Vec<PlaylistView>) -> Self {
        ViewModel {
            suggestion,
            playlists,
        }
    }
}
