// File: crates/chart-layout/src/chart.rs
// Summary: Chart struct; owns the element tree and root grid and runs one layout pass per redraw.

use std::rc::Rc;

use crate::axis::AxisRect;
use crate::element::ElementId;
use crate::error::LayoutError;
use crate::geometry::Rect;
use crate::text::{FixedAdvanceMetrics, TextElement, TextMetrics};
use crate::tree::LayoutTree;
use crate::types::{DEFAULT_SPACING, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub width: i32,
    pub height: i32,
    /// Row and column spacing of the root grid.
    pub spacing: i32,
    pub title_point_size: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            spacing: DEFAULT_SPACING,
            title_point_size: 16.0,
        }
    }
}

/// A figure: a root grid filling the drawing surface plus the elements placed in it.
///
/// Passes are synchronous; callers coalesce redraw requests so only one
/// `relayout` runs at a time.
pub struct Chart {
    pub tree: LayoutTree,
    root: ElementId,
    title: Option<ElementId>,
    options: LayoutOptions,
    metrics: Rc<dyn TextMetrics>,
}

impl Chart {
    pub fn new() -> Self {
        Self::with_options(LayoutOptions::default(), Rc::new(FixedAdvanceMetrics::default()))
    }

    pub fn with_options(options: LayoutOptions, metrics: Rc<dyn TextMetrics>) -> Self {
        let mut tree = LayoutTree::new();
        let root = tree.add_grid();
        if let Some(grid) = tree.grid_mut(root) {
            grid.set_spacing(options.spacing);
        }
        Self { tree, root, title: None, options, metrics }
    }

    pub fn root(&self) -> ElementId { self.root }
    pub fn title(&self) -> Option<ElementId> { self.title }
    pub fn options(&self) -> &LayoutOptions { &self.options }
    pub fn metrics(&self) -> Rc<dyn TextMetrics> { Rc::clone(&self.metrics) }

    pub fn viewport(&self) -> Rect {
        Rect::from_ltwh(0, 0, self.options.width, self.options.height)
    }

    /// Add a plot area with bottom/left axes at (`row`, `column`) of the root grid.
    pub fn add_axis_rect(&mut self, row: usize, column: usize, x_label: &str, y_label: &str) -> Result<ElementId, LayoutError> {
        let rect = self.tree.add_leaf(AxisRect::with_default_axes(self.metrics(), x_label, y_label));
        if let Err(err) = self.tree.add_to_grid(self.root, row, column, rect) {
            self.tree.remove(rect);
            return Err(err);
        }
        Ok(rect)
    }

    /// Set the title text. The first call inserts a new top row and puts the title
    /// in its first column; later calls only replace the text.
    pub fn set_title(&mut self, text: &str) -> Result<ElementId, LayoutError> {
        if let Some(title) = self.title {
            if let Some(element) = self.tree.leaf_mut::<TextElement>(title) {
                element.text = text.to_string();
                return Ok(title);
            }
        }
        let title = self.tree.add_leaf(TextElement::new(text, self.options.title_point_size, self.metrics()));
        if let Some(grid) = self.tree.grid_mut(self.root) {
            grid.insert_row(0);
        }
        if let Err(err) = self.tree.add_to_grid(self.root, 0, 0, title) {
            self.tree.remove(title);
            return Err(err);
        }
        self.title = Some(title);
        Ok(title)
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.options.width = width;
        self.options.height = height;
    }

    /// Run preparation, margins and layout over the whole tree for the current surface size.
    pub fn relayout(&mut self) {
        let viewport = self.viewport();
        log::debug!("relayout {}x{}", viewport.width(), viewport.height());
        self.tree.layout(self.root, viewport);
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}
