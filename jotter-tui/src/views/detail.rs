//! Single-note detail view.

use crate::state::{App, FetchPhase};
use crate::views::helpers::message_panel;
use crate::widgets::NoteMeta;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    if let FetchPhase::Error(message) = &app.detail.phase {
        message_panel(
            f,
            area,
            "Note",
            &format!("Something went wrong: {}", message),
            Style::default().fg(app.theme.error),
        );
        return;
    }

    let Some(note) = &app.detail.note else {
        message_panel(
            f,
            area,
            "Note",
            "Loading…",
            Style::default().fg(app.theme.text_dim),
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let meta = NoteMeta {
        title: "Details [Esc back]",
        note,
        theme: &app.theme,
    };
    meta.render(f, rows[0]);

    let content = Paragraph::new(note.content.clone())
        .block(
            Block::default()
                .title(note.title.as_str())
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(content, rows[1]);
}
