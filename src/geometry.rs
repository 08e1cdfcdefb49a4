//! Pixel-space geometry shared by the page model and the selector
//!
//! All coordinates are image-relative pixels with the origin at the
//! top-left corner of the page image, y growing downwards.

use serde::{Deserialize, Serialize};

/// A point in image pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// The rectangle a user drags out to select words
pub type SelectionRect = PixelRect;

impl PixelRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Zero-size rectangle anchored at `p`
    pub const fn at(p: Point) -> Self {
        Self::new(p.x, p.y, 0.0, 0.0)
    }

    /// Smallest rectangle covering both points, in any drag direction
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (b.x - a.x).abs(),
            h: (b.y - a.y).abs(),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Closed-interval containment: points on any edge count as inside
    pub fn contains_point(&self, p: Point) -> bool {
        self.x <= p.x && p.x <= self.right() && self.y <= p.y && p.y <= self.bottom()
    }

    /// True if the two rectangles share at least one point, edges included
    pub fn touches(&self, other: &PixelRect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Shrink width and height by `amount`, keeping the top-left corner.
    /// Sizes may go negative; callers treat those as invisible.
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            w: self.w - amount,
            h: self.h - amount,
            ..*self
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.w.is_finite() && self.h.is_finite()) || self.w < 0.0 || self.h < 0.0
    }
}

/// One recognized text token on the page image
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Recognized text, empty when the extractor only produced a box
    #[serde(default, rename = "t", skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl Word {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            text: String::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(self.x, self.y, self.w, self.h)
    }

    /// Center of the box, using real division
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}
