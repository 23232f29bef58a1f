//! Search box widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SearchBox<'a> {
    pub value: &'a str,
    pub focused: bool,
    /// An edit is still inside the debounce quiet period.
    pub pending: bool,
    pub text_style: Style,
    pub border_style: Style,
}

impl<'a> SearchBox<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![Span::styled(self.value.to_string(), self.text_style)];
        if self.focused {
            spans.push(Span::styled("_", self.text_style));
        }
        let title = if self.pending {
            "Search [/] …"
        } else {
            "Search [/]"
        };
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}
