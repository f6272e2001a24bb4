// File: crates/chart-layout/src/inset.rs
// Summary: Inset layout; free-floating or edge-aligned overlays placed independently of each other.

use bitflags::bitflags;

use crate::element::ElementId;
use crate::error::{reject, LayoutError};
use crate::geometry::{clamp_to_bounds, Rect, RectF};
use crate::layout::SizeSource;

bitflags! {
    /// Edge alignment of a border-aligned inset. Missing horizontal or vertical
    /// flags mean centered on that axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Alignment: u8 {
        const LEFT     = 0b00_0001;
        const RIGHT    = 0b00_0010;
        const H_CENTER = 0b00_0100;
        const TOP      = 0b00_1000;
        const BOTTOM   = 0b01_0000;
        const V_CENTER = 0b10_0000;
        const CENTER = Self::H_CENTER.bits() | Self::V_CENTER.bits();
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InsetPlacement {
    /// Fractional rect of the host rect, clamped to the element's min/max outer size.
    Free(RectF),
    /// Minimum outer size, snapped to the given edges.
    BorderAligned(Alignment),
}

impl Default for InsetPlacement {
    fn default() -> Self { InsetPlacement::BorderAligned(Alignment::TOP_RIGHT) }
}

#[derive(Clone, Copy, Debug)]
struct InsetItem {
    element: ElementId,
    placement: InsetPlacement,
}

/// Overlay container. Children may overlap; later children paint on top.
#[derive(Clone, Debug, Default)]
pub struct InsetLayout {
    items: Vec<InsetItem>,
}

impl InsetLayout {
    pub fn new() -> Self { Self::default() }

    pub fn element_count(&self) -> usize { self.items.len() }

    pub fn element_at(&self, index: usize) -> Option<ElementId> {
        self.items.get(index).map(|item| item.element)
    }

    pub fn placement(&self, index: usize) -> Option<InsetPlacement> {
        self.items.get(index).map(|item| item.placement)
    }

    pub fn set_placement(&mut self, index: usize, placement: InsetPlacement) -> Result<(), LayoutError> {
        let count = self.items.len();
        match self.items.get_mut(index) {
            Some(item) => {
                item.placement = placement;
                Ok(())
            }
            None => reject(LayoutError::IndexOutOfRange { index, count }),
        }
    }

    pub(crate) fn push(&mut self, element: ElementId, placement: InsetPlacement) {
        self.items.push(InsetItem { element, placement });
    }

    pub(crate) fn take_at(&mut self, index: usize) -> Option<ElementId> {
        if index >= self.items.len() {
            log::debug!("attempt to take invalid inset index {index}");
            return None;
        }
        Some(self.items.remove(index).element)
    }

    pub(crate) fn arrange(&self, rect: Rect, sizes: &dyn SizeSource) -> Vec<(ElementId, Rect)> {
        self.items
            .iter()
            .map(|item| {
                let min = sizes.final_minimum_outer_size(item.element);
                let max = sizes.final_maximum_outer_size(item.element);
                let placed = match item.placement {
                    InsetPlacement::Free(frac) => {
                        let width = f64::from(rect.width());
                        let height = f64::from(rect.height());
                        let left = rect.left + (width * frac.x) as i32;
                        let top = rect.top + (height * frac.y) as i32;
                        let w = clamp_to_bounds((width * frac.width) as i32, min.width, max.width);
                        let h = clamp_to_bounds((height * frac.height) as i32, min.height, max.height);
                        Rect::from_ltwh(left, top, w, h)
                    }
                    InsetPlacement::BorderAligned(align) => {
                        let left = if align.contains(Alignment::LEFT) {
                            rect.left
                        } else if align.contains(Alignment::RIGHT) {
                            rect.right - min.width
                        } else {
                            rect.left + (rect.width() - min.width) / 2
                        };
                        let top = if align.contains(Alignment::TOP) {
                            rect.top
                        } else if align.contains(Alignment::BOTTOM) {
                            rect.bottom - min.height
                        } else {
                            rect.top + (rect.height() - min.height) / 2
                        };
                        Rect::from_ltwh(left, top, min.width, min.height)
                    }
                };
                (item.element, placed)
            })
            .collect()
    }
}
