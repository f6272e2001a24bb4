// File: crates/chart-layout/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (rects, sizes, unbounded maxima).

use crate::types::Margins;

/// Integer rectangle with exclusive right/bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
    pub const fn size(&self) -> Size { Size::new(self.width(), self.height()) }
    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }

    /// Extent along one orientation (width for horizontal, height for vertical).
    pub const fn extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width(),
            Orientation::Vertical => self.height(),
        }
    }

    /// Rect moved inward by `margins` on each side.
    pub const fn shrink(&self, margins: &Margins) -> Self {
        Self {
            left: self.left + margins.left,
            top: self.top + margins.top,
            right: self.right - margins.right,
            bottom: self.bottom - margins.bottom,
        }
    }

    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left && other.top >= self.top && other.right <= self.right && other.bottom <= self.bottom
    }
}

/// Integer width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
    pub const fn along(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Upper size bound per axis; `None` means unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaxSize {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl MaxSize {
    pub const UNBOUNDED: Self = Self { width: None, height: None };

    pub const fn new(width: Option<i32>, height: Option<i32>) -> Self {
        Self { width, height }
    }
    pub const fn bounded(width: i32, height: i32) -> Self {
        Self { width: Some(width), height: Some(height) }
    }
    pub const fn along(&self, orientation: Orientation) -> Option<i32> {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

impl Default for MaxSize {
    fn default() -> Self { Self::UNBOUNDED }
}

impl From<Size> for MaxSize {
    fn from(size: Size) -> Self { Self::bounded(size.width, size.height) }
}

/// Fractional rect relative to a parent rect (0.0..=1.0 covers the parent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Clamp `v` into `[lo, hi]` where `hi` may be unbounded. The upper bound wins on conflict.
#[inline]
pub fn clamp_to_bounds(v: i32, lo: i32, hi: Option<i32>) -> i32 {
    let v = v.max(lo);
    match hi {
        Some(hi) => v.min(hi),
        None => v,
    }
}
