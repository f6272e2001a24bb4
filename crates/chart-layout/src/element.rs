// File: crates/chart-layout/src/element.rs
// Summary: Element handles, the per-element geometry/margin state, and the leaf content contract.

use std::any::Any;
use std::fmt;

use crate::geometry::{MaxSize, Rect, Size};
use crate::types::{MarginSide, MarginSides, Margins, SizeConstraintRect, UpdatePhase};

/// Generational handle into a `LayoutTree`. A handle to a removed element never
/// resolves again, even after its slot is reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

/// Geometry and margin configuration shared by every element (leaves and layouts).
///
/// Contract: `rect()` is always `outer_rect()` shrunk by `margins()`.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementBase {
    outer_rect: Rect,
    rect: Rect,
    margins: Margins,
    minimum_margins: Margins,
    auto_margins: MarginSides,
    minimum_size: Size,
    maximum_size: MaxSize,
    size_constraint_rect: SizeConstraintRect,
}

impl Default for ElementBase {
    fn default() -> Self {
        Self {
            outer_rect: Rect::default(),
            rect: Rect::default(),
            margins: Margins::ZERO,
            minimum_margins: Margins::ZERO,
            auto_margins: MarginSides::ALL,
            minimum_size: Size::ZERO,
            maximum_size: MaxSize::UNBOUNDED,
            size_constraint_rect: SizeConstraintRect::InnerRect,
        }
    }
}

impl ElementBase {
    pub fn new() -> Self { Self::default() }

    /// Full allocated rect, margins included.
    pub fn outer_rect(&self) -> Rect { self.outer_rect }
    /// Content rect (outer rect minus margins).
    pub fn rect(&self) -> Rect { self.rect }
    pub fn margins(&self) -> Margins { self.margins }
    pub fn minimum_margins(&self) -> Margins { self.minimum_margins }
    pub fn auto_margins(&self) -> MarginSides { self.auto_margins }
    pub fn minimum_size(&self) -> Size { self.minimum_size }
    pub fn maximum_size(&self) -> MaxSize { self.maximum_size }
    pub fn size_constraint_rect(&self) -> SizeConstraintRect { self.size_constraint_rect }

    pub fn set_outer_rect(&mut self, rect: Rect) {
        self.outer_rect = rect;
        self.rect = rect.shrink(&self.margins);
    }

    /// Override the margins. Sides listed in `auto_margins` are recomputed on the
    /// next margins phase.
    pub fn set_margins(&mut self, margins: Margins) {
        if margins != self.margins {
            self.margins = margins;
            self.rect = self.outer_rect.shrink(&self.margins);
        }
    }

    /// Floor applied to automatically computed margins.
    pub fn set_minimum_margins(&mut self, margins: Margins) {
        self.minimum_margins = margins;
    }

    pub fn set_auto_margins(&mut self, sides: MarginSides) {
        self.auto_margins = sides;
    }

    /// Minimum size; a zero component means "no constraint on that axis".
    pub fn set_minimum_size(&mut self, size: Size) {
        self.minimum_size = size;
    }

    pub fn set_maximum_size(&mut self, size: MaxSize) {
        self.maximum_size = size;
    }

    pub fn set_size_constraint_rect(&mut self, constraint: SizeConstraintRect) {
        self.size_constraint_rect = constraint;
    }

    /// Margin an element reports when it has nothing to measure:
    /// the larger of its current and minimum margin on `side`.
    pub fn default_auto_margin(&self, side: MarginSide) -> i32 {
        self.margins.get(side).max(self.minimum_margins.get(side))
    }

    /// Outer size of nothing but the margins.
    pub fn margin_size(&self) -> Size {
        Size::new(self.margins.hsum(), self.margins.vsum())
    }
}

/// Object-safe downcasting for leaf content.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}

/// Content of a leaf element (plot area, title, legend item, color scale...).
///
/// All size and margin queries must be pure functions of the current content.
pub trait LeafContent: AsAny + fmt::Debug {
    /// Seed the element's base when it is inserted into a tree.
    fn init(&self, _base: &mut ElementBase) {}

    fn minimum_outer_size_hint(&self, base: &ElementBase) -> Size {
        base.margin_size()
    }

    fn maximum_outer_size_hint(&self, _base: &ElementBase) -> MaxSize {
        MaxSize::UNBOUNDED
    }

    /// Natural margin requirement of `side`.
    fn calculate_auto_margin(&self, side: MarginSide, base: &ElementBase) -> i32 {
        base.default_auto_margin(side)
    }

    /// Called once per phase, after the element's own margins/rect for that phase are final.
    fn update(&mut self, _phase: UpdatePhase, _base: &ElementBase) {}
}

/// Element without content; reserves space and otherwise uses the default contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spacer;

impl LeafContent for Spacer {}
