// File: crates/chart-layout/src/color_scale.rs
// Summary: Color-scale bar; fixed thickness plus room for its axis, stretches only along its length.

use std::fmt;
use std::rc::Rc;

use crate::axis::Axis;
use crate::element::{ElementBase, LeafContent};
use crate::geometry::{MaxSize, Size};
use crate::text::TextMetrics;
use crate::types::MarginSide;

#[derive(Clone)]
pub struct ColorScale {
    /// Side of the bar that carries the axis. Left/right give a vertical bar.
    pub axis_side: MarginSide,
    pub bar_width: i32,
    pub axis: Axis,
    metrics: Rc<dyn TextMetrics>,
}

impl ColorScale {
    pub fn new(axis_side: MarginSide, axis: Axis, metrics: Rc<dyn TextMetrics>) -> Self {
        Self { axis_side, bar_width: 20, axis, metrics }
    }

    pub fn is_vertical(&self) -> bool { !self.axis_side.is_horizontal_edge() }

    fn thickness(&self) -> i32 {
        self.bar_width + self.axis.calculate_margin(self.axis_side, self.metrics.as_ref())
    }
}

impl fmt::Debug for ColorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorScale")
            .field("axis_side", &self.axis_side)
            .field("bar_width", &self.bar_width)
            .field("axis", &self.axis)
            .finish_non_exhaustive()
    }
}

impl LeafContent for ColorScale {
    fn minimum_outer_size_hint(&self, base: &ElementBase) -> Size {
        let margins = base.margins();
        if self.is_vertical() {
            Size::new(self.thickness() + margins.hsum(), margins.vsum())
        } else {
            Size::new(margins.hsum(), self.thickness() + margins.vsum())
        }
    }

    fn maximum_outer_size_hint(&self, base: &ElementBase) -> MaxSize {
        let min = self.minimum_outer_size_hint(base);
        if self.is_vertical() {
            MaxSize::new(Some(min.width), None)
        } else {
            MaxSize::new(None, Some(min.height))
        }
    }
}
