// File: crates/chart-layout/src/margin_group.rs
// Summary: Margin groups keep one margin side equal across a set of sibling elements.

use crate::element::ElementId;
use crate::error::LayoutError;
use crate::types::MarginSide;

/// Generational handle to a margin group owned by a `LayoutTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarginGroupId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

/// Per-side membership lists. A group never owns its members; elements join and
/// leave through `LayoutTree::set_margin_group`.
///
/// Typical use: stacked subplots share their left (and right) side so their axes line up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarginGroup {
    children: [Vec<ElementId>; 4],
}

impl MarginGroup {
    pub fn new() -> Self { Self::default() }

    /// Members on `side`, in join order.
    pub fn elements(&self, side: MarginSide) -> &[ElementId] {
        &self.children[side.index()]
    }

    pub fn contains(&self, side: MarginSide, element: ElementId) -> bool {
        self.children[side.index()].contains(&element)
    }

    /// True once every side has lost all members. An empty group stays valid and can be refilled.
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(Vec::is_empty)
    }

    pub(crate) fn add_child(&mut self, id: MarginGroupId, side: MarginSide, element: ElementId) -> Result<(), LayoutError> {
        let members = &mut self.children[side.index()];
        if members.contains(&element) {
            let err = LayoutError::AlreadyInGroup { group: id, side, element };
            log::debug!("{err}");
            return Err(err);
        }
        members.push(element);
        Ok(())
    }

    pub(crate) fn remove_child(&mut self, id: MarginGroupId, side: MarginSide, element: ElementId) -> Result<(), LayoutError> {
        let members = &mut self.children[side.index()];
        match members.iter().position(|&e| e == element) {
            Some(pos) => {
                members.remove(pos);
                Ok(())
            }
            None => {
                let err = LayoutError::NotInGroup { group: id, side, element };
                log::debug!("{err}");
                Err(err)
            }
        }
    }

    /// Drain every membership, returning `(side, element)` pairs.
    pub(crate) fn take_all(&mut self) -> Vec<(MarginSide, ElementId)> {
        let mut out = Vec::new();
        for side in MarginSide::ALL {
            for element in self.children[side.index()].drain(..) {
                out.push((side, element));
            }
        }
        out
    }
}
