// File: crates/chart-layout/src/axis.rs
// Summary: Axis decorations and the axis rect (plot area) whose auto margins make room for them.

use std::fmt;
use std::rc::Rc;

use crate::element::{ElementBase, LeafContent};
use crate::geometry::Size;
use crate::text::{text_size, TextMetrics};
use crate::types::{MarginSide, AXIS_RECT_MIN_SIZE};

/// One axis attached to a side of an axis rect. Tick values come from the
/// application; only their rendered labels matter for layout.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub label_point_size: f32,
    pub tick_labels: Vec<String>,
    pub tick_label_point_size: f32,
    /// Gap between the axis line and the plot content edge.
    pub padding: i32,
    pub tick_length_out: i32,
    pub tick_label_padding: i32,
    pub label_padding: i32,
    /// Extra gap to the axis stacked inside this one on the same side.
    pub offset: i32,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            label_point_size: 12.0,
            tick_labels: Vec::new(),
            tick_label_point_size: 10.0,
            padding: 0,
            tick_length_out: 2,
            tick_label_padding: 2,
            label_padding: 5,
            offset: 0,
        }
    }

    pub fn with_tick_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tick_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Pixels this axis needs outside the plot content on `side`.
    pub fn calculate_margin(&self, side: MarginSide, metrics: &dyn TextMetrics) -> i32 {
        let mut margin = self.padding + self.tick_length_out.max(0);
        if !self.tick_labels.is_empty() {
            let extent = self
                .tick_labels
                .iter()
                .map(|label| {
                    let size = text_size(metrics, label, self.tick_label_point_size);
                    // horizontal edges stack labels vertically and vice versa
                    if side.is_horizontal_edge() { size.height } else { size.width }
                })
                .max()
                .unwrap_or(0);
            margin += self.tick_label_padding + extent;
        }
        if !self.label.is_empty() {
            // left/right labels are rotated, so the line height always applies
            margin += self.label_padding + text_size(metrics, &self.label, self.label_point_size).height;
        }
        margin
    }
}

/// Plot area. Each side holds a stack of axes, innermost first; the auto margin
/// of a side is what the whole stack needs.
#[derive(Clone)]
pub struct AxisRect {
    axes: [Vec<Axis>; 4],
    metrics: Rc<dyn TextMetrics>,
}

impl AxisRect {
    pub fn new(metrics: Rc<dyn TextMetrics>) -> Self {
        Self { axes: Default::default(), metrics }
    }

    /// Bottom and left axes, the usual 2-D plot setup.
    pub fn with_default_axes(metrics: Rc<dyn TextMetrics>, x_label: &str, y_label: &str) -> Self {
        let mut rect = Self::new(metrics);
        rect.add_axis(MarginSide::Bottom, Axis::new(x_label));
        rect.add_axis(MarginSide::Left, Axis::new(y_label));
        rect
    }

    pub fn axes(&self, side: MarginSide) -> &[Axis] {
        &self.axes[side.index()]
    }

    pub fn axes_mut(&mut self, side: MarginSide) -> &mut Vec<Axis> {
        &mut self.axes[side.index()]
    }

    /// Stack a new outermost axis on `side`; returns its position in the stack.
    pub fn add_axis(&mut self, side: MarginSide, axis: Axis) -> usize {
        let stack = &mut self.axes[side.index()];
        stack.push(axis);
        stack.len() - 1
    }

    pub fn remove_axis(&mut self, side: MarginSide, index: usize) -> Option<Axis> {
        let stack = &mut self.axes[side.index()];
        (index < stack.len()).then(|| stack.remove(index))
    }
}

impl fmt::Debug for AxisRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisRect").field("axes", &self.axes).finish_non_exhaustive()
    }
}

impl LeafContent for AxisRect {
    fn init(&self, base: &mut ElementBase) {
        base.set_minimum_size(Size::new(AXIS_RECT_MIN_SIZE, AXIS_RECT_MIN_SIZE));
    }

    fn calculate_auto_margin(&self, side: MarginSide, _base: &ElementBase) -> i32 {
        self.axes[side.index()]
            .iter()
            .map(|axis| axis.offset + axis.calculate_margin(side, self.metrics.as_ref()))
            .sum()
    }
}
