// File: crates/chart-layout/src/layout.rs
// Summary: Layout variants (grid, inset) behind one container contract.

use crate::element::ElementId;
use crate::geometry::{MaxSize, Rect, Size};
use crate::grid::GridLayout;
use crate::inset::InsetLayout;

/// Final outer-size bounds of children, as seen by their parent layout.
pub(crate) trait SizeSource {
    fn final_minimum_outer_size(&self, element: ElementId) -> Size;
    fn final_maximum_outer_size(&self, element: ElementId) -> MaxSize;
}

/// Container of child elements.
///
/// Index semantics: grids follow their fill order, insets follow insertion order.
#[derive(Clone, Debug)]
pub enum Layout {
    Grid(GridLayout),
    Inset(InsetLayout),
}

impl Layout {
    /// Number of addressable slots (for grids this counts empty cells too).
    pub fn element_count(&self) -> usize {
        match self {
            Layout::Grid(grid) => grid.element_count(),
            Layout::Inset(inset) => inset.element_count(),
        }
    }

    pub fn element_at(&self, index: usize) -> Option<ElementId> {
        match self {
            Layout::Grid(grid) => grid.element_at(index),
            Layout::Inset(inset) => inset.element_at(index),
        }
    }

    /// Occupied slots in index order.
    pub fn elements(&self) -> Vec<ElementId> {
        (0..self.element_count()).filter_map(|i| self.element_at(i)).collect()
    }

    pub fn index_of(&self, element: ElementId) -> Option<usize> {
        (0..self.element_count()).find(|&i| self.element_at(i) == Some(element))
    }

    /// Container-side removal only; the tree clears the parent link.
    pub(crate) fn take_at(&mut self, index: usize) -> Option<ElementId> {
        match self {
            Layout::Grid(grid) => grid.take_at(index),
            Layout::Inset(inset) => inset.take_at(index),
        }
    }

    pub(crate) fn simplify(&mut self) {
        match self {
            Layout::Grid(grid) => grid.simplify(),
            // inset children are independent, nothing to compact
            Layout::Inset(_) => {}
        }
    }

    /// Outer rects for every child, given this layout's inner rect.
    pub(crate) fn arrange(&self, rect: Rect, sizes: &dyn SizeSource) -> Vec<(ElementId, Rect)> {
        match self {
            Layout::Grid(grid) => grid.arrange(rect, sizes),
            Layout::Inset(inset) => inset.arrange(rect, sizes),
        }
    }

    /// Minimum inner size needed by the children (margins not included).
    pub(crate) fn minimum_content_size(&self, sizes: &dyn SizeSource) -> Size {
        match self {
            Layout::Grid(grid) => grid.minimum_content_size(sizes),
            Layout::Inset(_) => Size::ZERO,
        }
    }

    pub(crate) fn maximum_content_size(&self, sizes: &dyn SizeSource) -> MaxSize {
        match self {
            Layout::Grid(grid) => grid.maximum_content_size(sizes),
            Layout::Inset(_) => MaxSize::UNBOUNDED,
        }
    }

    pub fn as_grid(&self) -> Option<&GridLayout> {
        match self {
            Layout::Grid(grid) => Some(grid),
            Layout::Inset(_) => None,
        }
    }

    pub fn as_inset(&self) -> Option<&InsetLayout> {
        match self {
            Layout::Inset(inset) => Some(inset),
            Layout::Grid(_) => None,
        }
    }
}
