use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Base16Palette;

const HINTS: [(&str, &str); 3] = [
    ("drag", "select words"),
    ("t", "toggle labels"),
    ("q", "quit"),
];

pub struct HelpBar<'a> {
    palette: &'a Base16Palette,
}

impl<'a> HelpBar<'a> {
    pub fn new(palette: &'a Base16Palette) -> Self {
        Self { palette }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default()
            .fg(self.palette.base_0d)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(self.palette.base_03);

        let mut spans = Vec::with_capacity(HINTS.len() * 3);
        for (i, (key, action)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", text_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {action}"), text_style));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.palette.base_00))
            .render(area, buf);
    }
}
