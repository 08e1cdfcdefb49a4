//! Mapping between terminal cells and image pixels
//!
//! The page image is stretched over the overlay area; every cell covers
//! `page_width / area.width` by `page_height / area.height` pixels.

use ratatui::layout::Rect;

use crate::geometry::{PixelRect, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Overlay area in terminal cells
    pub area: Rect,
    pub page_width: f64,
    pub page_height: f64,
}

impl Viewport {
    pub fn new(area: Rect, page_width: f64, page_height: f64) -> Self {
        Self {
            area,
            page_width,
            page_height,
        }
    }

    fn px_per_col(&self) -> f64 {
        self.page_width / f64::from(self.area.width.max(1))
    }

    fn px_per_row(&self) -> f64 {
        self.page_height / f64::from(self.area.height.max(1))
    }

    pub fn contains_cell(&self, col: u16, row: u16) -> bool {
        self.area.contains((col, row).into())
    }

    /// Top-left pixel of the cell, or `None` if the cell is outside the area
    pub fn cell_to_point(&self, col: u16, row: u16) -> Option<Point> {
        if !self.contains_cell(col, row) {
            return None;
        }
        Some(self.point_at(col, row))
    }

    /// Like `cell_to_point`, but cells outside the area are pulled onto its
    /// nearest edge. The edge past the last cell maps to the page's width
    /// and height, so a drag leaving the page covers it completely.
    pub fn clamped_cell_to_point(&self, col: u16, row: u16) -> Point {
        let col = col.clamp(self.area.x, self.area.right());
        let row = row.clamp(self.area.y, self.area.bottom());
        self.point_at(col, row)
    }

    fn point_at(&self, col: u16, row: u16) -> Point {
        Point::new(
            f64::from(col - self.area.x) * self.px_per_col(),
            f64::from(row - self.area.y) * self.px_per_row(),
        )
    }

    /// Cells covering a pixel rectangle, clipped to the area. Degenerate
    /// rectangles have no cells; zero-size ones still get a single cell so
    /// a fresh press stays visible.
    pub fn rect_to_cells(&self, rect: &PixelRect) -> Option<Rect> {
        if rect.is_degenerate() || self.area.is_empty() {
            return None;
        }
        let sx = self.px_per_col();
        let sy = self.px_per_row();
        if sx <= 0.0 || sy <= 0.0 {
            return None;
        }

        let col0 = (rect.x / sx).floor();
        let row0 = (rect.y / sy).floor();
        let col1 = (rect.right() / sx).ceil().max(col0 + 1.0);
        let row1 = (rect.bottom() / sy).ceil().max(row0 + 1.0);

        let max_col = f64::from(self.area.width);
        let max_row = f64::from(self.area.height);
        let col0 = col0.clamp(0.0, max_col);
        let row0 = row0.clamp(0.0, max_row);
        let col1 = col1.clamp(0.0, max_col);
        let row1 = row1.clamp(0.0, max_row);
        if col1 <= col0 || row1 <= row0 {
            return None;
        }

        Some(Rect::new(
            self.area.x + col0 as u16,
            self.area.y + row0 as u16,
            (col1 - col0) as u16,
            (row1 - row0) as u16,
        ))
    }
}
