//! Application state and view state definitions.

use crate::api_client::ApiClient;
use crate::cache::{CachedValue, QueryCache, QueryKey};
use crate::config::TuiConfig;
use crate::debounce::Debouncer;
use crate::nav::View;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::SynthBruteTheme;
use chrono::Utc;
use jotter_core::{
    validate_draft, FilterState, ListKey, Note, NoteDraft, NoteId, NotePage, Tag, ValidationError,
};
use std::time::{Duration, Instant};
use tui_textarea::TextArea;

/// Observable phases of one fetch: loading, then success or error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Success,
    Error(String),
}

pub struct App {
    pub config: TuiConfig,
    pub theme: SynthBruteTheme,
    pub api: ApiClient,
    pub active_view: View,
    pub board: BoardViewState,
    pub detail: DetailViewState,
    /// Creation modal; `Some` while open.
    pub form: Option<NoteFormState>,
    pub cache: QueryCache,
    pub notifications: Vec<Notification>,
    /// Raw keystrokes route to the search box while set.
    pub searching: bool,
}

impl App {
    pub fn new(config: TuiConfig, api: ApiClient, tag: Option<Tag>) -> Self {
        let theme = SynthBruteTheme::synthbrute();
        let debounce = Duration::from_millis(config.debounce_ms);
        Self {
            theme,
            api,
            active_view: View::Board,
            board: BoardViewState::new(tag, debounce),
            detail: DetailViewState::new(),
            form: None,
            cache: QueryCache::new(),
            notifications: Vec::new(),
            searching: false,
            config,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Switch to the detail view for `id`. A fresh cache entry renders
    /// immediately with no network call; otherwise a fetch is requested.
    pub fn open_detail(&mut self, id: NoteId) {
        self.active_view = View::Detail;
        self.detail.note_id = Some(id);
        self.detail.note = None;
        let key = QueryKey::Note(id);
        if let Some(entry) = self
            .cache
            .get_fresh(&key, Utc::now(), self.config.cache_max_age_secs)
        {
            if let CachedValue::Note(note) = &entry.value {
                self.detail.note = Some(note.clone());
                self.detail.phase = FetchPhase::Success;
                self.detail.fetch_wanted = false;
                return;
            }
        }
        self.detail.phase = FetchPhase::Loading;
        self.detail.fetch_wanted = true;
    }

    pub fn back_to_board(&mut self) {
        self.active_view = View::Board;
    }

    /// A fresh cached page for `key`, if one exists.
    pub fn cached_board_page(&self, key: &ListKey) -> Option<NotePage> {
        let entry = self.cache.get_fresh(
            &QueryKey::List(key.clone()),
            Utc::now(),
            self.config.cache_max_age_secs,
        )?;
        match &entry.value {
            CachedValue::Page(page) => Some(page.clone()),
            _ => None,
        }
    }

    pub fn record_list_result(&mut self, key: ListKey, outcome: Result<NotePage, String>) {
        match outcome {
            Ok(page) => {
                self.cache.insert_page(key.clone(), page.clone(), Utc::now());
                self.board.apply_page(&key, page);
            }
            Err(message) => {
                tracing::warn!(%message, "list fetch failed");
                self.board.apply_error(&key, message);
            }
        }
    }

    pub fn record_note_result(&mut self, id: NoteId, outcome: Result<Note, String>) {
        match outcome {
            Ok(note) => {
                self.cache.insert_note(note.clone(), Utc::now());
                self.detail.apply_note(id, note);
            }
            Err(message) => {
                tracing::warn!(%message, note_id = id, "note fetch failed");
                self.detail.apply_error(id, message);
            }
        }
    }

    /// Creation outcome. Success invalidates every cached list entry,
    /// closes the modal, and schedules a board refetch. Failure keeps
    /// the form open with the entered values intact.
    pub fn record_create_result(&mut self, outcome: Result<Note, String>) {
        match outcome {
            Ok(note) => {
                self.cache.invalidate_lists();
                self.cache.insert_note(note, Utc::now());
                self.form = None;
                self.notify(NotificationLevel::Success, "Note saved.");
                self.board.fetch_wanted = true;
            }
            Err(message) => {
                tracing::warn!(%message, "note creation failed");
                if let Some(form) = &mut self.form {
                    form.submitting = false;
                }
                self.notify(NotificationLevel::Error, "The note couldn't be saved.");
            }
        }
    }
}

// ============================================================================
// VIEW STATE DEFINITIONS
// ============================================================================

#[derive(Debug, Clone)]
pub struct BoardViewState {
    pub filter: FilterState,
    /// Raw text in the search box; becomes the effective query after the
    /// debounce quiet period.
    pub search_input: String,
    pub debouncer: Debouncer,
    /// Last successfully fetched page. Stays on screen while a fetch for
    /// a different key is in flight.
    pub page: Option<NotePage>,
    pub phase: FetchPhase,
    pub in_flight: Option<ListKey>,
    pub selected: Option<usize>,
    /// Set when a state change made the current key's data missing or
    /// stale; the event loop turns it into a cache read or a fetch.
    pub fetch_wanted: bool,
}

impl BoardViewState {
    pub fn new(tag: Option<Tag>, debounce: Duration) -> Self {
        Self {
            filter: FilterState::new(tag),
            search_input: String::new(),
            debouncer: Debouncer::new(debounce),
            page: None,
            phase: FetchPhase::Idle,
            in_flight: None,
            selected: None,
            fetch_wanted: true,
        }
    }

    pub fn key(&self) -> ListKey {
        self.filter.key()
    }

    pub fn notes(&self) -> &[Note] {
        self.page.as_ref().map(|p| p.notes.as_slice()).unwrap_or(&[])
    }

    pub fn total_pages(&self) -> u32 {
        self.page.as_ref().map(|p| p.total_pages).unwrap_or(1)
    }

    /// Pagination only renders with more than one page.
    pub fn show_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// Record a search box keystroke at `now`; the effective query
    /// follows once the quiet period elapses.
    pub fn edit_query(&mut self, input: String, now: Instant) {
        self.debouncer.update(input.clone(), now);
        self.search_input = input;
    }

    /// Apply a settled query. Page snaps back to 1. Returns whether the
    /// effective query actually changed.
    pub fn apply_query(&mut self, query: String) -> bool {
        if query == self.filter.query {
            return false;
        }
        self.filter.set_query(query);
        self.fetch_wanted = true;
        true
    }

    pub fn next_page(&mut self) {
        let before = self.filter.page;
        self.filter.next_page(self.total_pages());
        if self.filter.page != before {
            self.fetch_wanted = true;
        }
    }

    pub fn prev_page(&mut self) {
        let before = self.filter.page;
        self.filter.prev_page();
        if self.filter.page != before {
            self.fetch_wanted = true;
        }
    }

    pub fn select_next(&mut self) {
        let len = self.notes().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % len,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let len = self.notes().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(index) => index - 1,
        });
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.and_then(|index| self.notes().get(index))
    }

    /// A fetch for `key` just went out.
    pub fn mark_loading(&mut self, key: ListKey) {
        self.phase = FetchPhase::Loading;
        self.in_flight = Some(key);
    }

    /// Apply a fetched page. Results for a key other than the current
    /// one are ignored for display; the previous page keeps rendering
    /// until fresh data for the current key arrives.
    pub fn apply_page(&mut self, key: &ListKey, page: NotePage) {
        if self.in_flight.as_ref() == Some(key) {
            self.in_flight = None;
        }
        if *key != self.key() {
            return;
        }
        self.phase = FetchPhase::Success;
        self.filter.clamp_page(page.total_pages);
        if self.filter.page != key.page {
            // The requested page no longer exists; refetch the clamped one.
            self.fetch_wanted = true;
        }
        if let Some(selected) = self.selected {
            if selected >= page.notes.len() {
                self.selected = page.notes.len().checked_sub(1);
            }
        }
        self.page = Some(page);
    }

    pub fn apply_error(&mut self, key: &ListKey, message: String) {
        if self.in_flight.as_ref() == Some(key) {
            self.in_flight = None;
        }
        if *key != self.key() {
            return;
        }
        self.phase = FetchPhase::Error(message);
    }
}

#[derive(Debug, Clone)]
pub struct DetailViewState {
    pub note_id: Option<NoteId>,
    pub note: Option<Note>,
    pub phase: FetchPhase,
    pub in_flight: Option<NoteId>,
    pub fetch_wanted: bool,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self {
            note_id: None,
            note: None,
            phase: FetchPhase::Idle,
            in_flight: None,
            fetch_wanted: false,
        }
    }

    pub fn mark_loading(&mut self, id: NoteId) {
        self.phase = FetchPhase::Loading;
        self.in_flight = Some(id);
    }

    pub fn apply_note(&mut self, id: NoteId, note: Note) {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }
        if self.note_id != Some(id) {
            return;
        }
        self.note = Some(note);
        self.phase = FetchPhase::Success;
    }

    pub fn apply_error(&mut self, id: NoteId, message: String) {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }
        if self.note_id != Some(id) {
            return;
        }
        self.phase = FetchPhase::Error(message);
    }
}

impl Default for DetailViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Tag,
}

/// Creation modal state. The content field is a full textarea; title is
/// a single line edited in place.
pub struct NoteFormState {
    pub title: String,
    pub content: TextArea<'static>,
    pub tag_index: usize,
    pub focus: FormField,
    pub errors: Vec<ValidationError>,
    pub submitting: bool,
}

impl NoteFormState {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: TextArea::default(),
            tag_index: Tag::ALL
                .iter()
                .position(|tag| *tag == Tag::Todo)
                .unwrap_or(0),
            focus: FormField::Title,
            errors: Vec::new(),
            submitting: false,
        }
    }

    pub fn tag(&self) -> Tag {
        Tag::ALL[self.tag_index]
    }

    pub fn cycle_tag_next(&mut self) {
        self.tag_index = (self.tag_index + 1) % Tag::ALL.len();
    }

    pub fn cycle_tag_prev(&mut self) {
        self.tag_index = if self.tag_index == 0 {
            Tag::ALL.len() - 1
        } else {
            self.tag_index - 1
        };
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Content,
            FormField::Content => FormField::Tag,
            FormField::Tag => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Tag,
            FormField::Content => FormField::Title,
            FormField::Tag => FormField::Content,
        };
    }

    pub fn draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.lines().join("\n"),
            tag: self.tag(),
        }
    }

    /// Run the creation policy; violations are stored for inline display
    /// and block submission.
    pub fn validate(&mut self) -> bool {
        match validate_draft(&self.draft()) {
            Ok(()) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }
}

impl Default for NoteFormState {
    fn default() -> Self {
        Self::new()
    }
}
