//! JOTTER TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use jotter_core::{parse_slug, ListKey, NoteDraft, NoteId};
use jotter_tui::api_client::ApiClient;
use jotter_tui::cache::{QueryCache, QueryKey};
use jotter_tui::config::{ConfigError, LaunchArgs, TuiConfig};
use jotter_tui::error::TuiError;
use jotter_tui::events::TuiEvent;
use jotter_tui::keys::{map_key, Action};
use jotter_tui::nav::View;
use jotter_tui::notifications::NotificationLevel;
use jotter_tui::persistence::{self, PersistedState};
use jotter_tui::state::{App, FormField, NoteFormState};
use jotter_tui::telemetry;
use jotter_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    telemetry::init(&config.log_path)?;
    let args = LaunchArgs::parse()?;
    let tag = parse_slug(&args.filter_slug).map_err(|reason| ConfigError::InvalidArgument {
        flag: "--filter",
        reason,
    })?;

    let api = ApiClient::new(&config)?;
    let mut app = App::new(config, api, tag);

    if let Ok(Some(state)) = persistence::load(&app.config.persistence_path) {
        app.cache = QueryCache::hydrate(state.cache);
        if state.filter.tag == app.board.filter.tag {
            app.board.search_input = state.filter.query.clone();
            app.board.filter = state.filter;
        }
        if args.note_id.is_none() {
            if let (View::Detail, Some(id)) = (state.active_view, state.detail_note_id) {
                app.open_detail(id);
            }
        }
    }
    if let Some(id) = args.note_id {
        app.open_detail(id);
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());
    pump_fetches(&mut app, &event_tx);

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                if let Some(query) = app.board.debouncer.poll(Instant::now()) {
                    app.board.apply_query(query);
                }
                pump_fetches(&mut app, &event_tx);
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event, &event_tx) {
                    break;
                }
                pump_fetches(&mut app, &event_tx);
            }
        }
    }

    let persisted = PersistedState {
        active_view: app.active_view,
        detail_note_id: app.detail.note_id,
        filter: app.board.filter.clone(),
        cache: app.cache.dehydrate(),
    };
    if let Err(err) = persistence::save(&app.config.persistence_path, &persisted) {
        tracing::warn!(%err, "failed to persist UI state");
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

/// Issue every fetch the current state wants: cache first, network
/// second. Called after each event so state changes turn into reads.
fn pump_fetches(app: &mut App, sender: &mpsc::Sender<TuiEvent>) {
    if app.board.fetch_wanted {
        app.board.fetch_wanted = false;
        let key = app.board.key();
        if let Some(page) = app.cached_board_page(&key) {
            app.board.apply_page(&key, page);
        } else if app.board.in_flight.as_ref() != Some(&key) {
            app.board.mark_loading(key.clone());
            spawn_list_fetch(app.api.clone(), key, sender.clone());
        }
    }
    if app.detail.fetch_wanted {
        app.detail.fetch_wanted = false;
        if let Some(id) = app.detail.note_id {
            if app.detail.in_flight != Some(id) {
                app.detail.mark_loading(id);
                spawn_note_fetch(app.api.clone(), id, sender.clone());
            }
        }
    }
}

fn spawn_list_fetch(api: ApiClient, key: ListKey, sender: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        let outcome = api.list_notes(&key).await.map_err(|err| err.to_string());
        let _ = sender.send(TuiEvent::NotesLoaded { key, outcome }).await;
    });
}

fn spawn_note_fetch(api: ApiClient, id: NoteId, sender: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        let outcome = api.get_note(id).await.map_err(|err| err.to_string());
        let _ = sender.send(TuiEvent::NoteLoaded { id, outcome }).await;
    });
}

fn spawn_create(api: ApiClient, draft: NoteDraft, sender: mpsc::Sender<TuiEvent>) {
    tokio::spawn(async move {
        let outcome = api.create_note(&draft).await.map_err(|err| err.to_string());
        let _ = sender.send(TuiEvent::NoteCreated { outcome }).await;
    });
}

fn handle_event(app: &mut App, event: TuiEvent, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match event {
        TuiEvent::Input(key) => return handle_input(app, key, sender),
        TuiEvent::NotesLoaded { key, outcome } => app.record_list_result(key, outcome),
        TuiEvent::NoteLoaded { id, outcome } => app.record_note_result(id, outcome),
        TuiEvent::NoteCreated { outcome } => app.record_create_result(outcome),
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
    false
}

fn handle_input(app: &mut App, key: KeyEvent, sender: &mpsc::Sender<TuiEvent>) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    if app.form.is_some() {
        handle_form_input(app, key, sender);
        return false;
    }
    if app.searching {
        handle_search_input(app, key);
        return false;
    }
    if let Some(action) = map_key(key) {
        return handle_action(app, action);
    }
    false
}

fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.searching = false,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut input = app.board.search_input.clone();
            input.push(c);
            app.board.edit_query(input, Instant::now());
        }
        KeyCode::Backspace => {
            let mut input = app.board.search_input.clone();
            input.pop();
            app.board.edit_query(input, Instant::now());
        }
        _ => {}
    }
}

fn handle_form_input(app: &mut App, key: KeyEvent, sender: &mpsc::Sender<TuiEvent>) {
    let mut submit = false;
    let mut close = false;
    if let Some(form) = app.form.as_mut() {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            submit = true;
        } else {
            match key.code {
                KeyCode::Esc => close = true,
                KeyCode::Tab => form.next_field(),
                KeyCode::BackTab => form.prev_field(),
                _ => match form.focus {
                    FormField::Title => match key.code {
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            form.title.push(c)
                        }
                        KeyCode::Backspace => {
                            form.title.pop();
                        }
                        KeyCode::Enter => submit = true,
                        _ => {}
                    },
                    FormField::Content => {
                        form.content.input(key);
                    }
                    FormField::Tag => match key.code {
                        KeyCode::Left | KeyCode::Char('h') => form.cycle_tag_prev(),
                        KeyCode::Right | KeyCode::Char('l') => form.cycle_tag_next(),
                        KeyCode::Enter => submit = true,
                        _ => {}
                    },
                },
            }
        }
    }
    if close {
        app.form = None;
        return;
    }
    if submit {
        submit_form(app, sender);
    }
}

/// Validate and dispatch the creation call. Re-submission while a call
/// is in flight is ignored; the form keeps its values either way.
fn submit_form(app: &mut App, sender: &mpsc::Sender<TuiEvent>) {
    let Some(form) = app.form.as_mut() else {
        return;
    };
    if form.submitting || !form.validate() {
        return;
    }
    form.submitting = true;
    let draft = form.draft();
    spawn_create(app.api.clone(), draft, sender.clone());
}

fn handle_action(app: &mut App, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::MoveDown => {
            if app.active_view == View::Board {
                app.board.select_next();
            }
        }
        Action::MoveUp => {
            if app.active_view == View::Board {
                app.board.select_previous();
            }
        }
        Action::NextPage => {
            if app.active_view == View::Board {
                app.board.next_page();
            }
        }
        Action::PrevPage => {
            if app.active_view == View::Board {
                app.board.prev_page();
            }
        }
        Action::OpenDetail => {
            if app.active_view == View::Board {
                if let Some(id) = app.board.selected_note().map(|note| note.id) {
                    app.open_detail(id);
                }
            }
        }
        Action::Back => app.back_to_board(),
        Action::NewNote => app.form = Some(NoteFormState::new()),
        Action::OpenSearch => {
            app.back_to_board();
            app.searching = true;
        }
        Action::Refresh => refresh_active_view(app),
        Action::OpenHelp => app.notify(
            NotificationLevel::Info,
            "j/k move, h/l page, Enter open, n new note, / search, r refresh, q quit",
        ),
    }
    false
}

/// Drop the active view's cache entry and refetch it.
fn refresh_active_view(app: &mut App) {
    match app.active_view {
        View::Board => {
            app.cache.remove(&QueryKey::List(app.board.key()));
            app.board.fetch_wanted = true;
        }
        View::Detail => {
            if let Some(id) = app.detail.note_id {
                app.cache.remove(&QueryKey::Note(id));
                app.detail.fetch_wanted = true;
            }
        }
    }
}
