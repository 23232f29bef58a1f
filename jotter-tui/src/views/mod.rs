//! View rendering dispatch.

pub mod board;
pub mod detail;
pub mod form;
pub mod helpers;

use crate::nav::View;
use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::theme::notification_color;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::Board => board::render(f, app, layout[1]),
        View::Detail => detail::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    // The creation modal overlays whatever view is underneath.
    if let Some(form_state) = &app.form {
        let area = f.size();
        form::render(f, app, form_state, area);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let filter = match app.board.filter.tag {
        Some(tag) => tag.to_string(),
        None => "All".to_string(),
    };
    let title = format!(
        "JOTTER TUI | {} | Filter: {}",
        app.active_view.title(),
        filter
    );
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let help = if app.form.is_some() {
        "Tab field • ←/→ tag • Ctrl-S submit • Esc cancel"
    } else if app.searching {
        "type to search • Enter done • Esc cancel"
    } else {
        "j/k move • h/l page • Enter open • n new • / search • r refresh • q quit"
    };
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
