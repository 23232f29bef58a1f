//! Note board view: search, tag filter, pagination, and the note list.

use crate::state::{App, FetchPhase};
use crate::views::helpers::message_panel;
use crate::widgets::{NoteMeta, PaginationBar, SearchBox, TagBar};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_toolbar(f, app, rows[0]);
    render_notes(f, app, rows[1]);
}

fn render_toolbar(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(area);

    let search = SearchBox {
        value: &app.board.search_input,
        focused: app.searching,
        pending: app.board.debouncer.pending().is_some(),
        text_style: Style::default().fg(app.theme.text),
        border_style: if app.searching {
            Style::default().fg(app.theme.border_focus)
        } else {
            Style::default().fg(app.theme.border)
        },
    };
    search.render(f, columns[0]);

    let tags = TagBar {
        active: app.board.filter.tag,
        active_style: Style::default().fg(app.theme.primary),
        inactive_style: Style::default().fg(app.theme.text_dim),
    };
    tags.render(f, columns[1]);

    // Pagination only exists with more than one page.
    if app.board.show_pagination() {
        let pagination = PaginationBar {
            current: app.board.filter.page,
            total: app.board.total_pages(),
            active_style: Style::default().fg(app.theme.primary),
            inactive_style: Style::default().fg(app.theme.text_dim),
        };
        pagination.render(f, columns[2]);
    } else {
        f.render_widget(Block::default().borders(Borders::ALL), columns[2]);
    }
}

fn render_notes(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    if let FetchPhase::Error(message) = &app.board.phase {
        message_panel(
            f,
            area,
            "Notes",
            &format!("Something went wrong: {}", message),
            Style::default().fg(app.theme.error),
        );
        return;
    }

    if app.board.page.is_none() {
        message_panel(
            f,
            area,
            "Notes",
            "Loading…",
            Style::default().fg(app.theme.text_dim),
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let items: Vec<ListItem> = app
        .board
        .notes()
        .iter()
        .map(|note| ListItem::new(format!("{} [{}]", note.title, note.tag)))
        .collect();

    let mut state = ListState::default();
    state.select(app.board.selected);

    // Stale data keeps rendering while a fetch for a new key is in
    // flight; only the title hints at the refresh.
    let title = if app.board.in_flight.is_some() {
        "Notes — loading…"
    } else {
        "Notes"
    };
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().fg(app.theme.primary));
    f.render_stateful_widget(list, chunks[0], &mut state);

    render_preview(f, app, chunks[1]);
}

fn render_preview(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let Some(note) = app.board.selected_note() else {
        f.render_widget(
            Block::default().title("Preview").borders(Borders::ALL),
            area,
        );
        return;
    };

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let meta = NoteMeta {
        title: "Preview",
        note,
        theme: &app.theme,
    };
    meta.render(f, right[0]);

    let content = Paragraph::new(note.content.clone())
        .block(Block::default().title("Content").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(content, right[1]);
}
