//! Tag filter bar.
//!
//! Displays the session's tag filter. The filter is fixed at launch via
//! `--filter`, so the bar is read-only.

use jotter_core::Tag;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TagBar {
    pub active: Option<Tag>,
    pub active_style: Style,
    pub inactive_style: Style,
}

impl TagBar {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = Vec::new();
        let all_style = if self.active.is_none() {
            self.active_style
        } else {
            self.inactive_style
        };
        spans.push(Span::styled(" All ", all_style));
        for tag in Tag::ALL {
            let style = if self.active == Some(tag) {
                self.active_style
            } else {
                self.inactive_style
            };
            spans.push(Span::styled(format!(" {} ", tag), style));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Filter").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
