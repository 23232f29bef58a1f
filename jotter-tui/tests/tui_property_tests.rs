use jotter_core::{FilterState, ListKey, Note, NotePage, Tag};
use jotter_tui::api_client::ApiClient;
use jotter_tui::cache::{CacheSnapshot, CachedValue, QueryCache, QueryKey};
use jotter_tui::config::{ThemeConfig, TuiConfig};
use jotter_tui::debounce::Debouncer;
use jotter_tui::keys::{map_key, Action};
use jotter_tui::nav::View;
use jotter_tui::persistence::{self, PersistedState};
use jotter_tui::state::{App, BoardViewState, FetchPhase, NoteFormState};
use chrono::{Duration as ChronoDuration, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;
use std::time::{Duration, Instant};

fn base_config() -> TuiConfig {
    TuiConfig {
        api_base_url: "http://localhost:8080".to_string(),
        request_timeout_ms: 5_000,
        tick_interval_ms: 100,
        debounce_ms: 500,
        cache_max_age_secs: 60,
        persistence_path: "tmp/jotter-tui.json".into(),
        log_path: "tmp/jotter-tui.log".into(),
        theme: ThemeConfig {
            name: "synthbrute".to_string(),
        },
    }
}

fn note(id: i64, title: &str, tag: Tag) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: String::new(),
        tag,
        created_at: "2025-01-01T00:00:00Z".to_string(),
        updated_at: "2025-01-01T00:00:00Z".to_string(),
    }
}

fn page(ids: &[i64], total_pages: u32) -> NotePage {
    NotePage {
        notes: ids.iter().map(|id| note(*id, "note", Tag::Todo)).collect(),
        total_pages,
    }
}

fn board(tag: Option<Tag>) -> BoardViewState {
    BoardViewState::new(tag, Duration::from_millis(500))
}

fn app() -> App {
    let config = base_config();
    let api = ApiClient::new(&config).expect("client");
    App::new(config, api, None)
}

fn tag_strategy() -> impl Strategy<Value = Option<Tag>> {
    prop_oneof![
        Just(None),
        (0usize..Tag::ALL.len()).prop_map(|i| Some(Tag::ALL[i])),
    ]
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_requires_base_url() {
    let mut config = base_config();
    config.api_base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_nonzero_intervals() {
    for field in 0..3 {
        let mut config = base_config();
        match field {
            0 => config.request_timeout_ms = 0,
            1 => config.tick_interval_ms = 0,
            _ => config.debounce_ms = 0,
        }
        assert!(config.validate().is_err());
    }
}

#[test]
fn config_requires_known_theme() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_accepts_base_values() {
    assert!(base_config().validate().is_ok());
}

// ============================================================================
// Property 1: fetch key changes iff query, tag, or page changes
// ============================================================================

proptest! {
    #[test]
    fn fetch_key_tracks_exactly_its_inputs(
        query_a in "[a-z]{0,8}", query_b in "[a-z]{0,8}",
        tag_a in tag_strategy(), tag_b in tag_strategy(),
        page_a in 1u32..9, page_b in 1u32..9,
    ) {
        let key_a = ListKey { query: query_a.clone(), tag: tag_a, page: page_a };
        let key_b = ListKey { query: query_b.clone(), tag: tag_b, page: page_b };
        let same_inputs = query_a == query_b && tag_a == tag_b && page_a == page_b;
        prop_assert_eq!(key_a == key_b, same_inputs);
    }

    #[test]
    fn query_change_always_resets_page(start_page in 1u32..20, query in "[a-z]{1,8}") {
        let mut filter = FilterState::new(None);
        filter.page = start_page;
        filter.set_query(query);
        prop_assert_eq!(filter.page, 1);
    }
}

// ============================================================================
// Property 3: stale data stays visible while a new key loads
// ============================================================================

#[test]
fn previous_page_kept_while_new_key_in_flight() {
    let mut board = board(None);
    let first_key = board.key();
    board.apply_page(&first_key, page(&[1, 2, 3], 2));
    assert_eq!(board.notes().len(), 3);

    board.next_page();
    let second_key = board.key();
    assert_ne!(first_key, second_key);
    board.mark_loading(second_key.clone());

    // The old page keeps rendering while the fetch is pending.
    assert_eq!(board.phase, FetchPhase::Loading);
    assert_eq!(board.notes().len(), 3);

    board.apply_page(&second_key, page(&[4, 5], 2));
    assert_eq!(board.notes().len(), 2);
    assert_eq!(board.phase, FetchPhase::Success);
}

#[test]
fn superseded_response_does_not_replace_display() {
    let mut board = board(None);
    let stale_key = board.key();
    board.mark_loading(stale_key.clone());

    // The query settles to something else before the response lands.
    board.apply_query("standup".to_string());
    board.apply_page(&stale_key, page(&[9], 1));

    // Stale result ignored for display; the in-flight marker is cleared.
    assert!(board.page.is_none());
    assert!(board.in_flight.is_none());
}

#[test]
fn error_for_superseded_key_is_ignored() {
    let mut board = board(None);
    let key = board.key();
    board.apply_page(&key, page(&[1], 3));
    board.next_page();
    board.apply_error(&key, "boom".to_string());
    assert_ne!(board.phase, FetchPhase::Error("boom".to_string()));
}

// ============================================================================
// Property 4: pagination only renders with more than one page
// ============================================================================

proptest! {
    #[test]
    fn pagination_visibility_follows_total_pages(total in 0u32..12) {
        let mut board = board(None);
        let key = board.key();
        board.apply_page(&key, page(&[1], total));
        prop_assert_eq!(board.show_pagination(), total > 1);
    }
}

#[test]
fn requested_page_beyond_total_snaps_back_and_refetches() {
    let mut board = board(None);
    let key = board.key();
    board.apply_page(&key, page(&[1], 9));
    for _ in 0..5 {
        board.next_page();
    }
    assert_eq!(board.filter.page, 6);

    // Notes shrank server-side; page 6 no longer exists.
    board.fetch_wanted = false;
    let key = board.key();
    board.apply_page(&key, page(&[], 3));
    assert_eq!(board.filter.page, 3);
    assert!(board.fetch_wanted);
}

// ============================================================================
// Property 5: creation invalidates list entries and closes the modal
// ============================================================================

#[test]
fn create_success_invalidates_lists_and_closes_form() {
    let mut app = app();
    let now = Utc::now();
    let key = app.board.key();
    app.cache.insert_page(key.clone(), page(&[1], 1), now);
    app.cache.insert_note(note(1, "kept", Tag::Work), now);
    app.form = Some(NoteFormState::new());

    app.record_create_result(Ok(note(2, "Standup", Tag::Meeting)));

    assert!(app.form.is_none());
    assert!(app.board.fetch_wanted);
    assert!(app
        .cache
        .get(&QueryKey::List(key))
        .is_none());
    // Note entries survive invalidation; the created note is cached.
    assert!(app.cache.get(&QueryKey::Note(1)).is_some());
    assert!(app.cache.get(&QueryKey::Note(2)).is_some());
}

#[test]
fn create_failure_keeps_form_and_values() {
    let mut app = app();
    let mut form = NoteFormState::new();
    form.title = "Standup".to_string();
    form.submitting = true;
    app.form = Some(form);

    app.record_create_result(Err("503".to_string()));

    let form = app.form.as_ref().expect("form stays open");
    assert_eq!(form.title, "Standup");
    assert!(!form.submitting);
}

// ============================================================================
// Property 6: draft validation policy
// ============================================================================

#[test]
fn form_blocks_submission_outside_policy() {
    let mut form = NoteFormState::new();
    form.title = "ab".to_string();
    assert!(!form.validate());
    assert!(!form.errors.is_empty());

    form.title = "abc".to_string();
    assert!(form.validate());
    assert!(form.errors.is_empty());
}

// ============================================================================
// Cache behavior
// ============================================================================

#[test]
fn cache_entries_expire_after_max_age() {
    let mut cache = QueryCache::new();
    let now = Utc::now();
    let fetched = now - ChronoDuration::seconds(61);
    cache.insert_note(note(1, "old", Tag::Todo), fetched);

    let key = QueryKey::Note(1);
    assert!(cache.get(&key).is_some());
    assert!(cache.get_fresh(&key, now, 60).is_none());
    assert!(cache.get_fresh(&key, now, 120).is_some());
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut cache = QueryCache::new();
    let now = Utc::now();
    cache.insert_note(note(7, "kept", Tag::Shopping), now);
    cache.insert_page(
        ListKey {
            query: "meeting".to_string(),
            tag: Some(Tag::Meeting),
            page: 1,
        },
        page(&[1, 2], 3),
        now,
    );

    let json = serde_json::to_string(&cache.dehydrate()).expect("serialize");
    let snapshot: CacheSnapshot = serde_json::from_str(&json).expect("deserialize");
    let hydrated = QueryCache::hydrate(snapshot);

    assert_eq!(hydrated.len(), 2);
    match &hydrated.get(&QueryKey::Note(7)).expect("note entry").value {
        CachedValue::Note(n) => assert_eq!(n.title, "kept"),
        other => panic!("unexpected value: {:?}", other),
    }
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn persisted_state_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("state/tui.json");
    assert!(persistence::load(&path).expect("load missing").is_none());

    let mut cache = QueryCache::new();
    cache.insert_note(note(3, "kept", Tag::Personal), Utc::now());
    let state = PersistedState {
        active_view: View::Detail,
        detail_note_id: Some(3),
        filter: FilterState {
            query: "m".to_string(),
            tag: None,
            page: 2,
        },
        cache: cache.dehydrate(),
    };
    persistence::save(&path, &state).expect("save");

    let loaded = persistence::load(&path).expect("load").expect("present");
    assert!(matches!(loaded.active_view, View::Detail));
    assert_eq!(loaded.detail_note_id, Some(3));
    assert_eq!(loaded.filter.page, 2);
    assert_eq!(QueryCache::hydrate(loaded.cache).len(), 1);
}

// ============================================================================
// Debouncer
// ============================================================================

#[test]
fn debouncer_settles_only_after_quiet_period() {
    let mut debouncer = Debouncer::new(Duration::from_millis(500));
    let t0 = Instant::now();
    debouncer.update("m", t0);
    debouncer.update("me", t0 + Duration::from_millis(200));

    assert_eq!(debouncer.poll(t0 + Duration::from_millis(400)), None);
    assert_eq!(debouncer.poll(t0 + Duration::from_millis(650)), None);
    assert_eq!(
        debouncer.poll(t0 + Duration::from_millis(700)),
        Some("me".to_string())
    );
    // Nothing pending once settled.
    assert_eq!(debouncer.poll(t0 + Duration::from_millis(2000)), None);
}

#[test]
fn settled_query_updates_board_once() {
    let mut board = board(None);
    let t0 = Instant::now();
    board.edit_query("meeting".to_string(), t0);
    assert_eq!(board.filter.query, "");

    let settled = board.debouncer.poll(t0 + Duration::from_millis(500)).unwrap();
    board.fetch_wanted = false;
    assert!(board.apply_query(settled.clone()));
    assert!(board.fetch_wanted);
    // Re-applying the same text is a no-op.
    board.fetch_wanted = false;
    assert!(!board.apply_query(settled));
    assert!(!board.fetch_wanted);
}

// ============================================================================
// Keybindings
// ============================================================================

proptest! {
    #[test]
    fn all_action_keys_mapped(key_char in "[qnr?/jkhl]") {
        let c = key_char.chars().next().unwrap();
        let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        prop_assert!(map_key(event).is_some(), "Key '{}' should map to an action", c);
    }
}

#[test]
fn navigation_keys_consistent() {
    for key in [
        KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
    ] {
        assert!(matches!(map_key(key), Some(Action::MoveDown)));
    }
    for key in [
        KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
    ] {
        assert!(matches!(map_key(key), Some(Action::NextPage)));
    }
}
