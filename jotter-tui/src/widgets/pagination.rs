//! Pagination bar widget.
//!
//! Only meaningful with more than one page; callers skip rendering it
//! otherwise.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PaginationBar {
    pub current: u32,
    pub total: u32,
    pub active_style: Style,
    pub inactive_style: Style,
}

impl PaginationBar {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let line = if self.total <= 9 {
            let mut spans = Vec::new();
            for page in 1..=self.total {
                let style = if page == self.current {
                    self.active_style
                } else {
                    self.inactive_style
                };
                spans.push(Span::styled(format!(" {} ", page), style));
            }
            Line::from(spans)
        } else {
            Line::from(Span::styled(
                format!(" page {} / {} ", self.current, self.total),
                self.active_style,
            ))
        };
        let paragraph = Paragraph::new(line).block(
            Block::default()
                .title("Pages [h/l]")
                .borders(Borders::ALL),
        );
        f.render_widget(paragraph, area);
    }
}
