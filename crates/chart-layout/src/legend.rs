// File: crates/chart-layout/src/legend.rs
// Summary: Legend built from a grid of icon+text items.

use std::fmt;
use std::rc::Rc;

use crate::element::{ElementBase, ElementId, LeafContent};
use crate::error::LayoutError;
use crate::geometry::Size;
use crate::grid::FillOrder;
use crate::text::{text_size, TextMetrics};
use crate::tree::LayoutTree;
use crate::types::{MarginSides, Margins, LEGEND_MARGINS};

/// One legend row: a series icon followed by its name.
#[derive(Clone)]
pub struct LegendItem {
    pub text: String,
    pub point_size: f32,
    pub icon_size: Size,
    pub icon_text_padding: i32,
    metrics: Rc<dyn TextMetrics>,
}

impl LegendItem {
    pub fn new(text: impl Into<String>, metrics: Rc<dyn TextMetrics>) -> Self {
        Self {
            text: text.into(),
            point_size: 10.0,
            icon_size: Size::new(32, 18),
            icon_text_padding: 7,
            metrics,
        }
    }

    fn content_size(&self) -> Size {
        let text = text_size(self.metrics.as_ref(), &self.text, self.point_size);
        Size::new(
            self.icon_size.width + self.icon_text_padding + text.width,
            self.icon_size.height.max(text.height),
        )
    }
}

impl fmt::Debug for LegendItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegendItem")
            .field("text", &self.text)
            .field("point_size", &self.point_size)
            .field("icon_size", &self.icon_size)
            .finish_non_exhaustive()
    }
}

impl LeafContent for LegendItem {
    fn init(&self, base: &mut ElementBase) {
        base.set_auto_margins(MarginSides::empty());
        base.set_margins(Margins::new(8, 2, 8, 2));
    }

    fn minimum_outer_size_hint(&self, base: &ElementBase) -> Size {
        let content = self.content_size();
        let margins = base.margins();
        Size::new(content.width + margins.hsum(), content.height + margins.vsum())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendOptions {
    pub fill_order: FillOrder,
    /// Items per column (rows-first) or per row (columns-first); 0 = single column/row.
    pub wrap: usize,
    pub spacing: i32,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self { fill_order: FillOrder::RowsFirst, wrap: 0, spacing: 0 }
    }
}

/// Build a detached legend grid with one item per entry. The caller places it,
/// usually in an axis rect's overlay inset.
pub fn build_legend(
    tree: &mut LayoutTree,
    entries: &[&str],
    metrics: Rc<dyn TextMetrics>,
    options: LegendOptions,
) -> Result<ElementId, LayoutError> {
    let legend = tree.add_grid();
    if let Some(grid) = tree.grid_mut(legend) {
        grid.set_spacing(options.spacing);
        grid.set_wrap(options.wrap);
    }
    tree.set_fill_order(legend, options.fill_order, false)?;
    if let Some(base) = tree.base_mut(legend) {
        base.set_auto_margins(MarginSides::empty());
        base.set_margins(LEGEND_MARGINS);
    }
    for entry in entries {
        let item = tree.add_leaf(LegendItem::new(*entry, Rc::clone(&metrics)));
        tree.add_to_grid_next(legend, item)?;
    }
    log::debug!("legend {legend:?} built with {} items", entries.len());
    Ok(legend)
}
