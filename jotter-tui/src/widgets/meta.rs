//! Note metadata panel.

use crate::theme::{tag_color, SynthBruteTheme};
use jotter_core::Note;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct NoteMeta<'a> {
    pub title: &'a str,
    pub note: &'a Note,
    pub theme: &'a SynthBruteTheme,
}

impl<'a> NoteMeta<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let label = Style::default().fg(self.theme.secondary);
        let lines = vec![
            Line::from(vec![
                Span::styled("ID: ", label),
                Span::raw(self.note.id.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Tag: ", label),
                Span::styled(
                    self.note.tag.to_string(),
                    Style::default().fg(tag_color(self.note.tag, self.theme)),
                ),
            ]),
            Line::from(vec![
                Span::styled("Created: ", label),
                Span::raw(self.note.created_at.clone()),
            ]),
            Line::from(vec![
                Span::styled("Updated: ", label),
                Span::raw(self.note.updated_at.clone()),
            ]),
        ];
        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(widget, area);
    }
}
