//! Note creation modal.

use crate::state::{App, FormField, NoteFormState};
use crate::views::helpers::centered_rect;
use jotter_core::Tag;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, form: &NoteFormState, area: Rect) {
    let modal = centered_rect(60, 70, area);
    f.render_widget(Clear, modal);

    let outer = Block::default()
        .title("Create note")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focus));
    let inner = outer.inner(modal);
    f.render_widget(outer, modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(inner);

    render_title_field(f, app, form, rows[0]);
    render_content_field(f, app, form, rows[1]);
    render_tag_field(f, app, form, rows[2]);
    render_status_line(f, app, form, rows[3]);
}

fn field_border(app: &App, form: &NoteFormState, field: FormField) -> Style {
    if form.focus == field {
        Style::default().fg(app.theme.border_focus)
    } else {
        Style::default().fg(app.theme.border)
    }
}

fn render_title_field(f: &mut Frame<'_>, app: &App, form: &NoteFormState, area: Rect) {
    let mut spans = vec![Span::styled(
        form.title.clone(),
        Style::default().fg(app.theme.text),
    )];
    if form.focus == FormField::Title {
        spans.push(Span::styled("_", Style::default().fg(app.theme.text)));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Title")
            .borders(Borders::ALL)
            .border_style(field_border(app, form, FormField::Title)),
    );
    f.render_widget(paragraph, area);
}

fn render_content_field(f: &mut Frame<'_>, app: &App, form: &NoteFormState, area: Rect) {
    let block = Block::default()
        .title("Content")
        .borders(Borders::ALL)
        .border_style(field_border(app, form, FormField::Content));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(&form.content, inner);
}

fn render_tag_field(f: &mut Frame<'_>, app: &App, form: &NoteFormState, area: Rect) {
    let mut spans = Vec::new();
    for tag in Tag::ALL {
        let style = if tag == form.tag() {
            Style::default().fg(app.theme.primary)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        spans.push(Span::styled(format!(" {} ", tag), style));
    }
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Tag")
            .borders(Borders::ALL)
            .border_style(field_border(app, form, FormField::Tag)),
    );
    f.render_widget(paragraph, area);
}

fn render_status_line(f: &mut Frame<'_>, app: &App, form: &NoteFormState, area: Rect) {
    let (text, style) = if let Some(error) = form.errors.first() {
        (error.to_string(), Style::default().fg(app.theme.error))
    } else if form.submitting {
        ("Saving…".to_string(), Style::default().fg(app.theme.text_dim))
    } else {
        (String::new(), Style::default())
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}
