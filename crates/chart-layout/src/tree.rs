// File: crates/chart-layout/src/tree.rs
// Summary: Arena owning every element and margin group; ownership moves, size queries and the three-phase update pass.

use crate::element::{ElementBase, ElementId, LeafContent};
use crate::error::{reject, LayoutError};
use crate::geometry::{MaxSize, Rect, Size};
use crate::grid::{FillOrder, GridLayout};
use crate::inset::{InsetLayout, InsetPlacement};
use crate::layout::{Layout, SizeSource};
use crate::margin_group::{MarginGroup, MarginGroupId};
use crate::types::{MarginSide, MarginSides, SizeConstraintRect, UpdatePhase};

#[derive(Debug)]
pub enum ElementKind {
    Leaf(Box<dyn LeafContent>),
    Layout(Layout),
}

#[derive(Debug)]
struct Node {
    base: ElementBase,
    kind: ElementKind,
    /// Lookup only; the parent's container is what owns this node.
    parent: Option<ElementId>,
    margin_groups: [Option<MarginGroupId>; 4],
    overlay: Option<ElementId>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Owns all elements of one figure. Layouts hold child handles; every child
/// keeps a weak handle to its parent for lookups.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<Slot<Node>>,
    free_nodes: Vec<u32>,
    groups: Vec<Slot<MarginGroup>>,
    free_groups: Vec<u32>,
}

fn alloc<T>(slots: &mut Vec<Slot<T>>, free: &mut Vec<u32>, value: T) -> (u32, u32) {
    if let Some(index) = free.pop() {
        let slot = &mut slots[index as usize];
        slot.value = Some(value);
        return (index, slot.generation);
    }
    let index = slots.len() as u32;
    slots.push(Slot { generation: 0, value: Some(value) });
    (index, 0)
}

fn release<T>(slots: &mut [Slot<T>], free: &mut Vec<u32>, index: u32) -> Option<T> {
    let slot = slots.get_mut(index as usize)?;
    let value = slot.value.take()?;
    slot.generation = slot.generation.wrapping_add(1);
    free.push(index);
    Some(value)
}

impl LayoutTree {
    pub fn new() -> Self { Self::default() }

    // ---- element storage -------------------------------------------------------

    fn insert(&mut self, base: ElementBase, kind: ElementKind) -> ElementId {
        let node = Node { base, kind, parent: None, margin_groups: [None; 4], overlay: None };
        let (index, generation) = alloc(&mut self.nodes, &mut self.free_nodes, node);
        ElementId { index, generation }
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.nodes
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    fn require(&self, id: ElementId) -> Result<&Node, LayoutError> {
        match self.node(id) {
            Some(node) => Ok(node),
            None => reject(LayoutError::UnknownElement(id)),
        }
    }

    fn require_layout_mut(&mut self, id: ElementId) -> Result<&mut Layout, LayoutError> {
        if self.node(id).is_none() {
            return reject(LayoutError::UnknownElement(id));
        }
        match self.node_mut(id).map(|node| &mut node.kind) {
            Some(ElementKind::Layout(layout)) => Ok(layout),
            _ => reject(LayoutError::NotALayout(id)),
        }
    }

    fn require_grid_mut(&mut self, id: ElementId) -> Result<&mut GridLayout, LayoutError> {
        match self.require_layout_mut(id)? {
            Layout::Grid(grid) => Ok(grid),
            Layout::Inset(_) => reject(LayoutError::NotAGrid(id)),
        }
    }

    fn require_inset_mut(&mut self, id: ElementId) -> Result<&mut InsetLayout, LayoutError> {
        match self.require_layout_mut(id)? {
            Layout::Inset(inset) => Ok(inset),
            Layout::Grid(_) => reject(LayoutError::NotAnInset(id)),
        }
    }

    /// Insert a detached leaf; the content may seed the element's base first.
    pub fn add_leaf(&mut self, content: impl LeafContent + 'static) -> ElementId {
        let mut base = ElementBase::new();
        content.init(&mut base);
        self.insert(base, ElementKind::Leaf(Box::new(content)))
    }

    /// Insert a detached layout element.
    pub fn add_layout(&mut self, layout: Layout) -> ElementId {
        self.insert(ElementBase::new(), ElementKind::Layout(layout))
    }

    pub fn add_grid(&mut self) -> ElementId {
        self.add_layout(Layout::Grid(GridLayout::new()))
    }

    pub fn add_inset(&mut self) -> ElementId {
        self.add_layout(Layout::Inset(InsetLayout::new()))
    }

    pub fn contains(&self, id: ElementId) -> bool { self.node(id).is_some() }

    /// Number of live elements, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.value.is_some()).count()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn base(&self, id: ElementId) -> Option<&ElementBase> {
        self.node(id).map(|node| &node.base)
    }

    pub fn base_mut(&mut self, id: ElementId) -> Option<&mut ElementBase> {
        self.node_mut(id).map(|node| &mut node.base)
    }

    /// Inner rect after the last completed pass.
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.base(id).map(ElementBase::rect)
    }

    pub fn outer_rect(&self, id: ElementId) -> Option<Rect> {
        self.base(id).map(ElementBase::outer_rect)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub fn kind(&self, id: ElementId) -> Option<&ElementKind> {
        self.node(id).map(|node| &node.kind)
    }

    /// Container of a layout element; `None` for leaves.
    pub fn container(&self, id: ElementId) -> Option<&Layout> {
        match &self.node(id)?.kind {
            ElementKind::Layout(layout) => Some(layout),
            ElementKind::Leaf(_) => None,
        }
    }

    pub fn grid(&self, id: ElementId) -> Option<&GridLayout> {
        self.container(id).and_then(Layout::as_grid)
    }

    /// Grid configuration (spacing, stretch factors, wrap, row/column insertion).
    pub fn grid_mut(&mut self, id: ElementId) -> Option<&mut GridLayout> {
        match &mut self.node_mut(id)?.kind {
            ElementKind::Layout(Layout::Grid(grid)) => Some(grid),
            _ => None,
        }
    }

    pub fn inset(&self, id: ElementId) -> Option<&InsetLayout> {
        self.container(id).and_then(Layout::as_inset)
    }

    pub fn inset_mut(&mut self, id: ElementId) -> Option<&mut InsetLayout> {
        match &mut self.node_mut(id)?.kind {
            ElementKind::Layout(Layout::Inset(inset)) => Some(inset),
            _ => None,
        }
    }

    pub fn leaf<T: LeafContent + 'static>(&self, id: ElementId) -> Option<&T> {
        match &self.node(id)?.kind {
            ElementKind::Leaf(content) => {
                let content: &dyn LeafContent = &**content;
                content.as_any().downcast_ref::<T>()
            }
            ElementKind::Layout(_) => None,
        }
    }

    pub fn leaf_mut<T: LeafContent + 'static>(&mut self, id: ElementId) -> Option<&mut T> {
        match &mut self.node_mut(id)?.kind {
            ElementKind::Leaf(content) => {
                let content: &mut dyn LeafContent = &mut **content;
                content.as_any_mut().downcast_mut::<T>()
            }
            ElementKind::Layout(_) => None,
        }
    }

    // ---- ownership ---------------------------------------------------------------

    fn is_ancestor(&self, ancestor: ElementId, mut of: ElementId) -> bool {
        while let Some(parent) = self.parent(of) {
            if parent == ancestor {
                return true;
            }
            of = parent;
        }
        false
    }

    /// Checks shared by every insertion: both handles live, no cycle.
    fn check_adoption(&self, layout: ElementId, element: ElementId) -> Result<(), LayoutError> {
        self.require(layout)?;
        self.require(element)?;
        if layout == element || self.is_ancestor(element, layout) {
            return reject(LayoutError::WouldCycle { layout, element });
        }
        Ok(())
    }

    fn adopt_element(&mut self, layout: ElementId, element: ElementId) {
        if let Some(node) = self.node_mut(element) {
            node.parent = Some(layout);
        }
    }

    fn release_element(&mut self, element: ElementId) {
        if let Some(node) = self.node_mut(element) {
            node.parent = None;
        }
    }

    /// Remove `element` from whatever holds it (layout slot or overlay link).
    fn detach(&mut self, element: ElementId) {
        let Some(parent) = self.parent(element) else { return };
        if let Some(host) = self.node_mut(parent) {
            if host.overlay == Some(element) {
                host.overlay = None;
            } else if let ElementKind::Layout(layout) = &mut host.kind {
                if let Some(index) = layout.index_of(element) {
                    layout.take_at(index);
                }
            }
        }
        self.release_element(element);
    }

    /// Put `element` into cell (`row`, `column`), growing the grid as needed.
    /// An element that lives in another layout is moved.
    pub fn add_to_grid(&mut self, grid: ElementId, row: usize, column: usize, element: ElementId) -> Result<(), LayoutError> {
        self.check_adoption(grid, element)?;
        if self.require_grid_mut(grid)?.has_element(row, column) {
            return reject(LayoutError::CellOccupied { row, column });
        }
        self.detach(element);
        self.require_grid_mut(grid)?.place(row, column, element)?;
        self.adopt_element(grid, element);
        Ok(())
    }

    /// Put `element` into the next free cell in fill order; returns the cell.
    pub fn add_to_grid_next(&mut self, grid: ElementId, element: ElementId) -> Result<(usize, usize), LayoutError> {
        self.check_adoption(grid, element)?;
        self.require_grid_mut(grid)?;
        self.detach(element);
        let target = self.require_grid_mut(grid)?;
        let (row, column) = target.next_free_cell();
        target.place(row, column, element)?;
        self.adopt_element(grid, element);
        Ok((row, column))
    }

    /// Append `element` to an inset layout with the given placement.
    pub fn add_to_inset(&mut self, inset: ElementId, element: ElementId, placement: InsetPlacement) -> Result<(), LayoutError> {
        self.check_adoption(inset, element)?;
        self.require_inset_mut(inset)?;
        self.detach(element);
        self.require_inset_mut(inset)?.push(element, placement);
        self.adopt_element(inset, element);
        Ok(())
    }

    /// Switch the grid's fill order. With `rearrange`, elements are taken out in the
    /// old index order and re-added sequentially under the new order.
    pub fn set_fill_order(&mut self, grid: ElementId, order: FillOrder, rearrange: bool) -> Result<(), LayoutError> {
        let target = self.require_grid_mut(grid)?;
        if !rearrange {
            target.set_fill_order_in_place(order);
            return Ok(());
        }
        let taken: Vec<ElementId> = (0..target.element_count()).filter_map(|i| target.take_at(i)).collect();
        target.simplify();
        target.set_fill_order_in_place(order);
        for element in taken {
            let (row, column) = target.next_free_cell();
            target.place(row, column, element)?;
        }
        Ok(())
    }

    /// Detach the element at `index`; it stays alive without a parent.
    pub fn take_at(&mut self, layout: ElementId, index: usize) -> Option<ElementId> {
        let taken = match self.require_layout_mut(layout) {
            Ok(container) => container.take_at(index),
            Err(_) => return None,
        };
        match taken {
            Some(element) => {
                self.release_element(element);
                Some(element)
            }
            None => {
                log::warn!("attempt to take empty or invalid index {index} from {layout:?}");
                None
            }
        }
    }

    /// Detach `element` from its layout; it stays alive without a parent.
    pub fn take(&mut self, element: ElementId) -> Result<(), LayoutError> {
        let node = self.require(element)?;
        if node.parent.is_none() {
            return reject(LayoutError::NotInLayout(element));
        }
        self.detach(element);
        Ok(())
    }

    /// Destroy the element at `index` and compact the layout.
    pub fn remove_at(&mut self, layout: ElementId, index: usize) -> bool {
        match self.take_at(layout, index) {
            Some(element) => {
                self.destroy(element);
                self.simplify(layout);
                true
            }
            None => false,
        }
    }

    /// Destroy `element` with its whole subtree and compact its former parent.
    pub fn remove(&mut self, element: ElementId) -> bool {
        if self.node(element).is_none() {
            log::warn!("{}", LayoutError::UnknownElement(element));
            return false;
        }
        let parent = self.parent(element);
        self.detach(element);
        self.destroy(element);
        if let Some(parent) = parent {
            self.simplify(parent);
        }
        true
    }

    /// Destroy every child of `layout`.
    pub fn clear(&mut self, layout: ElementId) {
        let children = self.container(layout).map(Layout::elements).unwrap_or_default();
        for child in children {
            self.detach(child);
            self.destroy(child);
        }
        self.simplify(layout);
    }

    /// Drop empty rows/columns of a grid (no-op for other elements).
    pub fn simplify(&mut self, layout: ElementId) {
        if let Some(ElementKind::Layout(container)) = self.node_mut(layout).map(|node| &mut node.kind) {
            container.simplify();
        }
    }

    /// Delete a grid row together with the elements in it.
    pub fn remove_row(&mut self, grid: ElementId, row: usize) -> Result<(), LayoutError> {
        let removed = self.require_grid_mut(grid)?.remove_row(row)?;
        for element in removed {
            self.release_element(element);
            self.destroy(element);
        }
        Ok(())
    }

    /// Delete a grid column together with the elements in it.
    pub fn remove_column(&mut self, grid: ElementId, column: usize) -> Result<(), LayoutError> {
        let removed = self.require_grid_mut(grid)?.remove_column(column)?;
        for element in removed {
            self.release_element(element);
            self.destroy(element);
        }
        Ok(())
    }

    /// Free a detached element and everything below it.
    fn destroy(&mut self, element: ElementId) {
        let mut stack = vec![element];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            if let ElementKind::Layout(layout) = &node.kind {
                stack.extend(layout.elements());
            }
            stack.extend(node.overlay);
            let groups = node.margin_groups;
            for (side, group) in MarginSide::ALL.into_iter().zip(groups) {
                if let Some(group) = group {
                    if let Some(g) = self.group_mut(group) {
                        let _ = g.remove_child(group, side, id);
                    }
                }
            }
            release(&mut self.nodes, &mut self.free_nodes, id.index);
        }
    }

    /// Overlay inset layout of `host`, created on first use. It covers the host's
    /// inner rect and is laid out after the host's own children.
    pub fn inset_layout(&mut self, host: ElementId) -> Option<ElementId> {
        let existing = self.node(host)?.overlay;
        if existing.is_some() {
            return existing;
        }
        let overlay = self.add_inset();
        self.adopt_element(host, overlay);
        if let Some(node) = self.node_mut(host) {
            node.overlay = Some(overlay);
        }
        Some(overlay)
    }

    pub fn overlay(&self, host: ElementId) -> Option<ElementId> {
        self.node(host).and_then(|node| node.overlay)
    }

    /// `root` and all its descendants in depth-first order, with their depth.
    pub fn walk(&self, root: ElementId) -> Vec<(ElementId, usize)> {
        let mut out = Vec::new();
        let mut stack = vec![(root, 0)];
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            out.push((id, depth));
            if let Some(overlay) = node.overlay {
                stack.push((overlay, depth + 1));
            }
            if let ElementKind::Layout(layout) = &node.kind {
                stack.extend(layout.elements().into_iter().rev().map(|child| (child, depth + 1)));
            }
        }
        out
    }

    // ---- margin groups -----------------------------------------------------------

    pub fn add_margin_group(&mut self) -> MarginGroupId {
        let (index, generation) = alloc(&mut self.groups, &mut self.free_groups, MarginGroup::new());
        MarginGroupId { index, generation }
    }

    pub fn margin_group(&self, id: MarginGroupId) -> Option<&MarginGroup> {
        self.groups
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    fn group_mut(&mut self, id: MarginGroupId) -> Option<&mut MarginGroup> {
        self.groups
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.value.as_mut())
    }

    /// Group of `element` on `side`, if any.
    pub fn element_margin_group(&self, element: ElementId, side: MarginSide) -> Option<MarginGroupId> {
        self.node(element).and_then(|node| node.margin_groups[side.index()])
    }

    /// Assign (or with `None`, clear) the margin group of `element` on each of `sides`.
    /// An element leaves its previous group on a side before joining the new one.
    pub fn set_margin_group(&mut self, element: ElementId, sides: MarginSides, group: Option<MarginGroupId>) -> Result<(), LayoutError> {
        self.require(element)?;
        if let Some(group) = group {
            if self.margin_group(group).is_none() {
                return reject(LayoutError::UnknownMarginGroup(group));
            }
        }
        for side in sides.sides() {
            let current = self.element_margin_group(element, side);
            if current == group {
                // duplicate join: logged, membership unchanged
                if let Some(same) = group {
                    if let Some(g) = self.group_mut(same) {
                        let _ = g.add_child(same, side, element);
                    }
                }
                continue;
            }
            if let Some(old) = current {
                if let Some(g) = self.group_mut(old) {
                    let _ = g.remove_child(old, side, element);
                }
            }
            if let Some(node) = self.node_mut(element) {
                node.margin_groups[side.index()] = group;
            }
            if let Some(new) = group {
                if let Some(g) = self.group_mut(new) {
                    let _ = g.add_child(new, side, element);
                }
            }
        }
        Ok(())
    }

    /// Remove every member from `group`; the group stays valid.
    pub fn clear_margin_group(&mut self, group: MarginGroupId) {
        let Some(g) = self.group_mut(group) else { return };
        for (side, element) in g.take_all() {
            if let Some(node) = self.node_mut(element) {
                node.margin_groups[side.index()] = None;
            }
        }
    }

    /// Clear and free `group`; its handle stops resolving.
    pub fn remove_margin_group(&mut self, group: MarginGroupId) -> bool {
        self.clear_margin_group(group);
        release(&mut self.groups, &mut self.free_groups, group.index).is_some()
    }

    /// Largest auto margin requested on `side` by members that compute that side automatically.
    pub fn common_margin(&self, group: MarginGroupId, side: MarginSide) -> i32 {
        let Some(g) = self.margin_group(group) else { return 0 };
        g.elements(side)
            .iter()
            .filter_map(|&element| {
                let base = self.base(element)?;
                if !base.auto_margins().contains_side(side) {
                    return None;
                }
                Some(self.calculate_auto_margin(element, side).max(base.minimum_margins().get(side)))
            })
            .fold(0, i32::max)
    }

    // ---- size queries ------------------------------------------------------------

    pub fn calculate_auto_margin(&self, element: ElementId, side: MarginSide) -> i32 {
        match self.node(element) {
            Some(Node { base, kind: ElementKind::Leaf(content), .. }) => content.calculate_auto_margin(side, base),
            Some(Node { base, .. }) => base.default_auto_margin(side),
            None => 0,
        }
    }

    pub fn minimum_outer_size_hint(&self, element: ElementId) -> Size {
        match self.node(element) {
            Some(Node { base, kind: ElementKind::Leaf(content), .. }) => content.minimum_outer_size_hint(base),
            Some(Node { base, kind: ElementKind::Layout(layout), .. }) => {
                let content = layout.minimum_content_size(self);
                let margins = base.margins();
                Size::new(
                    content.width.saturating_add(margins.hsum()),
                    content.height.saturating_add(margins.vsum()),
                )
            }
            None => Size::ZERO,
        }
    }

    pub fn maximum_outer_size_hint(&self, element: ElementId) -> MaxSize {
        match self.node(element) {
            Some(Node { base, kind: ElementKind::Leaf(content), .. }) => content.maximum_outer_size_hint(base),
            Some(Node { base, kind: ElementKind::Layout(layout), .. }) => {
                let content = layout.maximum_content_size(self);
                let margins = base.margins();
                MaxSize::new(
                    content.width.map(|w| w.saturating_add(margins.hsum())),
                    content.height.map(|h| h.saturating_add(margins.vsum())),
                )
            }
            None => MaxSize::UNBOUNDED,
        }
    }

    /// Outer-rect lower bound used by parent layouts: an explicit minimum size
    /// (translated to the outer rect) overrides the content hint on its axis.
    pub fn final_minimum_outer_size(&self, element: ElementId) -> Size {
        let Some(base) = self.base(element) else { return Size::ZERO };
        let hint = self.minimum_outer_size_hint(element);
        let mut min = base.minimum_size();
        if base.size_constraint_rect() == SizeConstraintRect::InnerRect {
            let margins = base.margins();
            if min.width > 0 {
                min.width = min.width.saturating_add(margins.hsum());
            }
            if min.height > 0 {
                min.height = min.height.saturating_add(margins.vsum());
            }
        }
        Size::new(
            if min.width > 0 { min.width } else { hint.width },
            if min.height > 0 { min.height } else { hint.height },
        )
    }

    /// Outer-rect upper bound used by parent layouts: an explicit maximum size
    /// (translated to the outer rect) overrides the content hint on its axis.
    pub fn final_maximum_outer_size(&self, element: ElementId) -> MaxSize {
        let Some(base) = self.base(element) else { return MaxSize::UNBOUNDED };
        let hint = self.maximum_outer_size_hint(element);
        let mut max = base.maximum_size();
        if base.size_constraint_rect() == SizeConstraintRect::InnerRect {
            let margins = base.margins();
            max.width = max.width.map(|w| w.saturating_add(margins.hsum()));
            max.height = max.height.map(|h| h.saturating_add(margins.vsum()));
        }
        MaxSize::new(max.width.or(hint.width), max.height.or(hint.height))
    }

    // ---- update pass -------------------------------------------------------------

    /// One full pass: give `root` the viewport, then run preparation, margins and layout.
    pub fn layout(&mut self, root: ElementId, viewport: Rect) {
        let Some(node) = self.node_mut(root) else {
            log::warn!("{}", LayoutError::UnknownElement(root));
            return;
        };
        node.base.set_outer_rect(viewport);
        for phase in UpdatePhase::ORDER {
            log::trace!("{phase:?} pass from {root:?} over {viewport:?}");
            self.update(root, phase);
        }
    }

    /// Run `phase` on `element` and then, depth-first, on its children and overlay.
    pub fn update(&mut self, element: ElementId, phase: UpdatePhase) {
        if self.node(element).is_none() {
            log::debug!("update on stale element {element:?}");
            return;
        }
        match phase {
            UpdatePhase::Margins => self.update_margins(element),
            UpdatePhase::Layout => self.update_layout(element),
            UpdatePhase::Preparation => {}
        }
        if let Some(Node { base, kind: ElementKind::Leaf(content), .. }) = self.node_mut(element) {
            content.update(phase, base);
        }

        let children = self.container(element).map(Layout::elements).unwrap_or_default();
        for child in children {
            self.update(child, phase);
        }

        if let Some(overlay) = self.overlay(element) {
            if phase == UpdatePhase::Layout {
                let host_rect = self.rect(element).unwrap_or_default();
                if let Some(node) = self.node_mut(overlay) {
                    node.base.set_outer_rect(host_rect);
                }
            }
            self.update(overlay, phase);
        }
    }

    fn update_margins(&mut self, element: ElementId) {
        let Some(node) = self.node(element) else { return };
        let auto = node.base.auto_margins();
        if auto.is_empty() {
            return;
        }
        let mut margins = node.base.margins();
        for side in auto.sides() {
            let value = match node.margin_groups[side.index()] {
                Some(group) => self.common_margin(group, side),
                None => self.calculate_auto_margin(element, side),
            };
            margins.set(side, value.max(node.base.minimum_margins().get(side)));
        }
        if let Some(node) = self.node_mut(element) {
            node.base.set_margins(margins);
        }
    }

    fn update_layout(&mut self, element: ElementId) {
        let Some(node) = self.node(element) else { return };
        let ElementKind::Layout(layout) = &node.kind else { return };
        let placed = layout.arrange(node.base.rect(), &*self);
        for (child, rect) in placed {
            if let Some(child) = self.node_mut(child) {
                child.base.set_outer_rect(rect);
            }
        }
    }
}

impl SizeSource for LayoutTree {
    fn final_minimum_outer_size(&self, element: ElementId) -> Size {
        LayoutTree::final_minimum_outer_size(self, element)
    }

    fn final_maximum_outer_size(&self, element: ElementId) -> MaxSize {
        LayoutTree::final_maximum_outer_size(self, element)
    }
}
