use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::geometry::SelectionRect;
use crate::theme::Base16Palette;

pub fn format_rect(rect: &SelectionRect) -> String {
    format!(
        "x: {}, y: {}, width: {}, height: {}",
        rect.x, rect.y, rect.w, rect.h
    )
}

/// Shows the coordinates of the most recently completed selection
pub struct SelectionPanel<'a> {
    last_completed: Option<SelectionRect>,
    selected_count: usize,
    dragging: bool,
    palette: &'a Base16Palette,
}

impl<'a> SelectionPanel<'a> {
    pub fn new(
        last_completed: Option<SelectionRect>,
        selected_count: usize,
        palette: &'a Base16Palette,
    ) -> Self {
        Self {
            last_completed,
            selected_count,
            dragging: false,
            palette,
        }
    }

    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    fn line(&self) -> Line<'static> {
        let (text_color, _, _) = self.palette.panel_colors();
        let Some(rect) = self.last_completed else {
            return Line::from(Span::styled(
                "Drag over the page to select words",
                Style::default().fg(self.palette.base_03),
            ));
        };

        let noun = if self.selected_count == 1 {
            "word"
        } else {
            "words"
        };
        let mut spans = vec![
            Span::styled(
                format_rect(&rect),
                Style::default().fg(text_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} {noun} selected)", self.selected_count),
                Style::default().fg(self.palette.base_04),
            ),
        ];
        if self.dragging {
            spans.push(Span::styled(
                "  selecting…",
                Style::default().fg(self.palette.selection_border()),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for SelectionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (_, border_color, bg) = self.palette.panel_colors();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Selection ")
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg));
        Paragraph::new(self.line()).block(block).render(area, buf);
    }
}
