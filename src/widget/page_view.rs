//! Word regions and the live selection rectangle drawn over the page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
};

use crate::selector::Selector;
use crate::theme::Base16Palette;
use crate::viewport::Viewport;

/// Paints every word region into the overlay area. The viewport's area is
/// the overlay; the `area` passed to `render` only bounds the background.
pub struct PageView<'a> {
    selector: &'a Selector,
    viewport: Viewport,
    palette: &'a Base16Palette,
    show_word_text: bool,
}

impl<'a> PageView<'a> {
    pub fn new(selector: &'a Selector, viewport: Viewport, palette: &'a Base16Palette) -> Self {
        Self {
            selector,
            viewport,
            palette,
            show_word_text: true,
        }
    }

    pub fn show_word_text(mut self, show: bool) -> Self {
        self.show_word_text = show;
        self
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        buf.set_style(area, Style::default().bg(self.palette.base_00));

        let words = self.selector.words();
        for region in self.selector.regions() {
            let Some(cells) = self.viewport.rect_to_cells(&region.display) else {
                continue;
            };
            let cells = cells.intersection(area);
            if cells.is_empty() {
                continue;
            }

            let (fg, bg) = self.palette.region_colors(region.selected);
            let style = Style::default().fg(fg).bg(bg);
            for y in cells.top()..cells.bottom() {
                for x in cells.left()..cells.right() {
                    buf[(x, y)].set_symbol(" ").set_style(style);
                }
            }

            let text = &words[region.word_index].text;
            if self.show_word_text && !text.is_empty() {
                buf.set_stringn(cells.x, cells.y, text, usize::from(cells.width), style);
            }
        }

        if let Some(rect) = self.selector.live_rect() {
            if let Some(cells) = self.viewport.rect_to_cells(&rect) {
                let cells = cells.intersection(area);
                if !cells.is_empty() {
                    Block::bordered()
                        .border_style(Style::default().fg(self.palette.selection_border()))
                        .render(cells, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Word};
    use crate::theme::ThemeId;

    // 10x10 page pixels per cell
    fn setup() -> (Selector, Viewport) {
        let words = vec![
            Word::new(0.0, 0.0, 42.0, 22.0).with_text("alpha"),
            Word::new(100.0, 50.0, 32.0, 12.0).with_text("beta"),
        ];
        let viewport = Viewport::new(Rect::new(0, 0, 20, 10), 200.0, 100.0);
        (Selector::new(words), viewport)
    }

    fn render(selector: &Selector, viewport: Viewport, show_text: bool) -> Buffer {
        let palette = ThemeId::OceanicNext.palette();
        let mut buf = Buffer::empty(viewport.area);
        PageView::new(selector, viewport, palette)
            .show_word_text(show_text)
            .render(viewport.area, &mut buf);
        buf
    }

    #[test]
    fn test_regions_painted_with_labels() {
        let (selector, viewport) = setup();
        let palette = ThemeId::OceanicNext.palette();
        let (_, idle_bg) = palette.region_colors(false);

        let buf = render(&selector, viewport, true);

        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(3, 0)].symbol(), "h");
        assert_eq!(buf[(0, 0)].bg, idle_bg);
        assert_eq!(buf[(10, 5)].symbol(), "b");
        assert_eq!(buf[(15, 8)].bg, palette.base_00);
    }

    #[test]
    fn test_labels_can_be_hidden() {
        let (selector, viewport) = setup();
        let buf = render(&selector, viewport, false);

        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_selected_regions_highlighted() {
        let (mut selector, viewport) = setup();
        selector.on_press(Point::new(90.0, 40.0));
        selector.on_move(Point::new(150.0, 70.0));
        selector.on_release();

        let palette = ThemeId::OceanicNext.palette();
        let (_, selected_bg) = palette.region_colors(true);
        let (_, idle_bg) = palette.region_colors(false);
        let buf = render(&selector, viewport, true);

        assert_eq!(buf[(11, 5)].bg, selected_bg);
        assert_eq!(buf[(1, 1)].bg, idle_bg);
    }

    #[test]
    fn test_live_rect_drawn_as_border() {
        let (mut selector, viewport) = setup();
        selector.on_press(Point::new(50.0, 30.0));
        selector.on_move(Point::new(90.0, 80.0));

        let palette = ThemeId::OceanicNext.palette();
        let buf = render(&selector, viewport, true);

        assert_eq!(buf[(5, 3)].symbol(), "┌");
        assert_eq!(buf[(8, 7)].symbol(), "┘");
        assert_eq!(buf[(5, 3)].fg, palette.selection_border());

        selector.on_release();
        let buf = render(&selector, viewport, true);
        assert_eq!(buf[(5, 3)].symbol(), " ");
    }
}
