// Scenario tests for the suggestion/resolver pipeline, driven by mocked
// service traits so no network is involved.

use crate::models::{
    ChatResponse, Language, Mood, PlaylistSummary, Selection, TrackSlot, TrackSummary,
};
use crate::pipeline::{
    request_suggestion, resolve_playlists, reverse_text, run_pipeline, MockCatalogService,
    MockSuggestionService, RunError, SessionStore, FALLBACK_SUGGESTION, SEARCH_LIMIT,
    SYSTEM_PROMPT,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn selection(mood: Mood, language: Language, shuffle: bool) -> Selection {
        Selection {
            mood,
            language,
            shuffle,
        }
    }

    fn playlist_value(id: &str, name: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "owner": { "display_name": "DJ Test" },
            "external_urls": { "spotify": format!("https://open.spotify.com/playlist/{id}") },
            "images": [ { "url": "https://i.scdn.co/image/cover.jpg" } ]
        })
    }

    fn track_item(name: &str, artist: &str, preview: Option<&str>) -> Value {
        json!({
            "track": {
                "name": name,
                "artists": [ { "name": artist } ],
                "preview_url": preview
            }
        })
    }

    fn chat_response(text: &str) -> ChatResponse {
        serde_json::from_value(json!({
            "choices": [ { "message": { "content": text } } ]
        }))
        .unwrap()
    }

    fn suggesting(text: &'static str) -> MockSuggestionService {
        let mut mock = MockSuggestionService::new();
        mock.expect_complete()
            .returning(move |_, _| Ok(chat_response(text)));
        mock
    }

    // --- candidate filtering ---

    #[test]
    fn test_drops_invalid_candidates_keeps_valid_in_order() {
        let items = vec![
            json!(null),
            playlist_value("aaa", "Morning Mix"),
            json!("not a record"),
            json!({ "name": "no id at all" }),
            json!({ "id": "" }),
            playlist_value("bbb", "Evening Mix"),
        ];

        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .withf(|query, limit| query == "Happy English music" && *limit == SEARCH_LIMIT)
            .returning(move |_, _| Ok(items.clone()));
        catalog
            .expect_playlist_tracks()
            .returning(|_, _| Ok(vec![]));

        let resolved =
            resolve_playlists(&catalog, Mood::Happy, Language::English, SEARCH_LIMIT).unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].summary.id, "aaa");
        assert_eq!(resolved[0].summary.name, "Morning Mix");
        assert_eq!(resolved[1].summary.id, "bbb");
        assert_eq!(resolved[1].summary.name, "Evening Mix");
    }

    #[test]
    fn test_track_list_capped_at_five() {
        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .returning(|_, _| Ok(vec![playlist_value("aaa", "Big Mix")]));
        catalog.expect_playlist_tracks().returning(|_, _| {
            Ok((0..7)
                .map(|i| track_item(&format!("Track {i}"), "Artist", None))
                .collect())
        });

        let resolved =
            resolve_playlists(&catalog, Mood::Sad, Language::Urdu, SEARCH_LIMIT).unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].tracks.len(), 5);
    }

    #[test]
    fn test_track_list_shorter_when_fewer_items_returned() {
        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .returning(|_, _| Ok(vec![playlist_value("aaa", "Short Mix")]));
        catalog
            .expect_playlist_tracks()
            .returning(|_, _| Ok(vec![track_item("Only One", "Artist", None)]));

        let resolved =
            resolve_playlists(&catalog, Mood::Sad, Language::Urdu, SEARCH_LIMIT).unwrap();

        assert_eq!(resolved[0].tracks.len(), 1);
    }

    #[test]
    fn test_missing_nested_track_keeps_position_as_marker() {
        let items = vec![
            track_item("First", "Artist A", None),
            json!({ "track": null }),
            json!(null),
            track_item("Last", "Artist B", None),
        ];

        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .returning(|_, _| Ok(vec![playlist_value("aaa", "Patchy Mix")]));
        catalog
            .expect_playlist_tracks()
            .returning(move |_, _| Ok(items.clone()));

        let resolved =
            resolve_playlists(&catalog, Mood::Angry, Language::Punjabi, SEARCH_LIMIT).unwrap();

        let tracks = &resolved[0].tracks;
        assert_eq!(tracks.len(), 4);
        assert!(matches!(&tracks[0], TrackSlot::Track(t) if t.name == "First"));
        assert_eq!(tracks[1], TrackSlot::Missing);
        assert_eq!(tracks[2], TrackSlot::Missing);
        assert!(matches!(&tracks[3], TrackSlot::Track(t) if t.name == "Last"));
    }

    #[test]
    fn test_track_without_preview_is_kept_and_marked() {
        let slot = TrackSlot::from_item(&track_item("Quiet Song", "Artist", None));

        assert_eq!(
            slot,
            TrackSlot::Track(TrackSummary {
                name: "Quiet Song".to_string(),
                artist_name: "Artist".to_string(),
                preview_url: None,
            })
        );
    }

    // --- decode-and-default behaviour ---

    #[test]
    fn test_playlist_field_defaults() {
        let summary = PlaylistSummary::from_value(&json!({ "id": "xyz" })).unwrap();

        assert_eq!(summary.name, "No Name");
        assert_eq!(summary.owner_name, "Unknown");
        assert_eq!(summary.external_url, "#");
        assert_eq!(summary.image_url, None);
    }

    #[test]
    fn test_empty_image_url_treated_as_absent() {
        let summary =
            PlaylistSummary::from_value(&json!({ "id": "xyz", "images": [ { "url": "" } ] }))
                .unwrap();

        assert_eq!(summary.image_url, None);
    }

    #[test]
    fn test_track_field_defaults() {
        let slot = TrackSlot::from_item(&json!({ "track": {} }));

        assert_eq!(
            slot,
            TrackSlot::Track(TrackSummary {
                name: "Unknown".to_string(),
                artist_name: "Unknown".to_string(),
                preview_url: None,
            })
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let raw_playlist = playlist_value("aaa", "Stable Mix");
        assert_eq!(
            PlaylistSummary::from_value(&raw_playlist),
            PlaylistSummary::from_value(&raw_playlist)
        );

        let raw_track = track_item("Stable Song", "Artist", Some("https://p.scdn.co/x.mp3"));
        assert_eq!(TrackSlot::from_item(&raw_track), TrackSlot::from_item(&raw_track));
    }

    // --- suggestion ---

    #[test]
    fn test_suggestion_prompt_parameters() {
        let mut suggestions = MockSuggestionService::new();
        suggestions
            .expect_complete()
            .withf(|system, user| {
                system == SYSTEM_PROMPT
                    && user.contains("in English")
                    && user.contains("for a happy mood")
            })
            .returning(|_, _| Ok(chat_response("A cheerful set of songs.")));

        let text = request_suggestion(
            &suggestions,
            &selection(Mood::Happy, Language::English, false),
        )
        .unwrap();

        assert_eq!(text, "A cheerful set of songs.");
    }

    #[test]
    fn test_shuffle_reverses_suggestion() {
        let suggestions = suggesting("abc def");

        let text = request_suggestion(
            &suggestions,
            &selection(Mood::Relaxed, Language::Hindi, true),
        )
        .unwrap();

        assert_eq!(text, "fed cba");
    }

    #[test]
    fn test_reverse_is_its_own_inverse() {
        let original = "Soft evening melodies for winding down.";
        assert_eq!(reverse_text(&reverse_text(original)), original);
    }

    // --- history ---

    #[test]
    fn test_recent_returns_reverse_chronological() {
        let mut history = SessionStore::new();
        history.record("Happy", "English");
        history.record("Sad", "Urdu");
        history.record("Angry", "Hindi");

        let recent: Vec<(&str, &str)> = history
            .recent(5)
            .iter()
            .map(|entry| (entry.mood.as_str(), entry.language.as_str()))
            .collect();

        assert_eq!(
            recent,
            vec![("Angry", "Hindi"), ("Sad", "Urdu"), ("Happy", "English")]
        );
    }

    #[test]
    fn test_recent_respects_limit_without_mutation() {
        let mut history = SessionStore::new();
        for _ in 0..8 {
            history.record("Happy", "English");
        }

        assert_eq!(history.recent(5).len(), 5);
        assert_eq!(history.len(), 8);
    }

    // --- end-to-end scenarios ---

    #[test]
    fn scenario_a_valid_and_null_candidates() {
        let items = vec![
            playlist_value("p1", "One"),
            json!(null),
            playlist_value("p2", "Two"),
            json!(null),
            playlist_value("p3", "Three"),
        ];

        let suggestions = suggesting("Happy English tunes.");
        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .returning(move |_, _| Ok(items.clone()));
        catalog
            .expect_playlist_tracks()
            .returning(|_, _| Ok(vec![track_item("Song", "Artist", None)]));

        let mut history = SessionStore::new();
        let view = run_pipeline(
            &suggestions,
            &catalog,
            &selection(Mood::Happy, Language::English, false),
            &mut history,
        )
        .unwrap();

        let ids: Vec<&str> = view
            .playlists
            .iter()
            .map(|p| p.summary.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn scenario_b_empty_chat_response_falls_back() {
        let mut suggestions = MockSuggestionService::new();
        suggestions
            .expect_complete()
            .returning(|_, _| Ok(ChatResponse::default()));

        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .returning(|_, _| Ok(vec![playlist_value("p1", "Still Works")]));
        catalog
            .expect_playlist_tracks()
            .returning(|_, _| Ok(vec![]));

        let mut history = SessionStore::new();
        let view = run_pipeline(
            &suggestions,
            &catalog,
            &selection(Mood::Romantic, Language::Arabic, false),
            &mut history,
        )
        .unwrap();

        assert_eq!(view.suggestion, FALLBACK_SUGGESTION);
        assert_eq!(view.playlists.len(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn scenario_c_zero_valid_playlists_is_empty_not_error() {
        let suggestions = suggesting("A set nobody can find.");
        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .returning(|_, _| Ok(vec![json!(null), json!({ "id": "" })]));

        let mut history = SessionStore::new();
        let view = run_pipeline(
            &suggestions,
            &catalog,
            &selection(Mood::Energetic, Language::Punjabi, false),
            &mut history,
        )
        .unwrap();

        assert!(view.playlists.is_empty());
        // an empty result set is still a successful run
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn scenario_d_suggestion_failure_ends_run_without_history() {
        let mut suggestions = MockSuggestionService::new();
        suggestions
            .expect_complete()
            .returning(|_, _| Err(anyhow::anyhow!("connection refused")));

        // no expectations: the catalog must not be reached
        let catalog = MockCatalogService::new();

        let mut history = SessionStore::new();
        let result = run_pipeline(
            &suggestions,
            &catalog,
            &selection(Mood::Happy, Language::English, false),
            &mut history,
        );

        assert!(matches!(result, Err(RunError::Suggestion(_))));
        assert!(history.is_empty());
    }

    #[test]
    fn test_catalog_failure_ends_run_without_history() {
        let suggestions = suggesting("Never rendered.");
        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .returning(|_, _| Err(anyhow::anyhow!("503 Service Unavailable")));

        let mut history = SessionStore::new();
        let result = run_pipeline(
            &suggestions,
            &catalog,
            &selection(Mood::Happy, Language::English, false),
            &mut history,
        );

        assert!(matches!(result, Err(RunError::Catalog(_))));
        assert!(history.is_empty());
    }

    #[test]
    fn test_successful_run_records_selection_once() {
        let suggestions = suggesting("Romantic Arabic tunes.");
        let mut catalog = MockCatalogService::new();
        catalog
            .expect_search_playlists()
            .returning(|_, _| Ok(vec![playlist_value("p1", "One")]));
        catalog
            .expect_playlist_tracks()
            .returning(|_, _| Ok(vec![]));

        let mut history = SessionStore::new();
        run_pipeline(
            &suggestions,
            &catalog,
            &selection(Mood::Romantic, Language::Arabic, false),
            &mut history,
        )
        .unwrap();

        assert_eq!(history.len(), 1);
        let recent = history.recent(5);
        assert_eq!(recent[0].mood, "Romantic");
        assert_eq!(recent[0].language, "Arabic");
    }
}
