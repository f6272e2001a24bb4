// File: crates/chart-layout/tests/margins.rs
// Purpose: Element margin contract, auto margins from axes, margin groups and phase ordering.

use std::cell::RefCell;
use std::rc::Rc;

use chart_layout::{
    Axis, AxisRect, ElementBase, FixedAdvanceMetrics, LayoutError, LayoutTree, LeafContent, MarginSide, MarginSides,
    Margins, Rect, Spacer, TextMetrics, UpdatePhase,
};

fn metrics() -> Rc<dyn TextMetrics> {
    Rc::new(FixedAdvanceMetrics { advance: 0.5, line_height: 1.0 })
}

fn axis_rect(left_ticks: &[&str]) -> AxisRect {
    let mut rect = AxisRect::new(metrics());
    rect.add_axis(MarginSide::Bottom, Axis::new("Time"));
    rect.add_axis(MarginSide::Left, Axis::new("Price").with_tick_labels(left_ticks.iter().copied()));
    rect
}

#[test]
fn inner_rect_is_outer_rect_minus_margins() {
    let mut base = ElementBase::new();
    base.set_outer_rect(Rect::from_ltwh(10, 10, 100, 50));
    base.set_margins(Margins::new(5, 6, 7, 8));
    assert_eq!(base.rect(), Rect::from_ltrb(15, 16, 103, 52));

    base.set_outer_rect(Rect::from_ltwh(0, 0, 40, 40));
    assert_eq!(base.rect(), Rect::from_ltrb(5, 6, 33, 32));
}

#[test]
fn axis_margin_accounts_for_ticks_and_label() {
    let m = metrics();
    let left = Axis::new("Price").with_tick_labels(["0", "100"]);
    assert_eq!(left.calculate_margin(MarginSide::Left, m.as_ref()), 36);

    let bottom = Axis::new("Time");
    assert_eq!(bottom.calculate_margin(MarginSide::Bottom, m.as_ref()), 19);

    let bare = Axis::new("");
    assert_eq!(bare.calculate_margin(MarginSide::Top, m.as_ref()), 2);
}

#[test]
fn axis_rect_auto_margins_are_applied() {
    let mut tree = LayoutTree::new();
    let grid = tree.add_grid();
    let plot = tree.add_leaf(axis_rect(&["0", "100"]));
    tree.add_to_grid(grid, 0, 0, plot).unwrap();

    tree.layout(grid, Rect::from_ltwh(0, 0, 400, 300));

    let base = tree.base(plot).unwrap();
    assert_eq!(base.margins(), Margins::new(36, 0, 0, 19));
    assert_eq!(base.rect(), Rect::from_ltrb(36, 0, 400, 281));
}

#[test]
fn stacked_axes_add_their_offsets() {
    let mut rect = axis_rect(&["0", "100"]);
    let mut outer = Axis::new("");
    outer.offset = 4;
    rect.add_axis(MarginSide::Left, outer);
    assert_eq!(rect.axes(MarginSide::Left).len(), 2);

    let mut tree = LayoutTree::new();
    let plot = tree.add_leaf(rect);
    assert_eq!(tree.calculate_auto_margin(plot, MarginSide::Left), 36 + 4 + 2);

    tree.leaf_mut::<AxisRect>(plot).unwrap().remove_axis(MarginSide::Left, 1);
    assert_eq!(tree.calculate_auto_margin(plot, MarginSide::Left), 36);
}

#[test]
fn minimum_margins_floor_auto_margins() {
    let mut tree = LayoutTree::new();
    let plot = tree.add_leaf(axis_rect(&["0"]));
    tree.base_mut(plot).unwrap().set_minimum_margins(Margins::new(50, 3, 0, 0));

    tree.layout(plot, Rect::from_ltwh(0, 0, 300, 200));

    let margins = tree.base(plot).unwrap().margins();
    assert_eq!(margins.left, 50);
    assert_eq!(margins.top, 3);
    assert_eq!(margins.bottom, 19);
}

#[test]
fn manual_sides_keep_their_margins() {
    let mut tree = LayoutTree::new();
    let plot = tree.add_leaf(axis_rect(&["0", "100"]));
    {
        let base = tree.base_mut(plot).unwrap();
        base.set_auto_margins(MarginSides::LEFT);
        base.set_margins(Margins::new(0, 4, 9, 4));
    }

    tree.layout(plot, Rect::from_ltwh(0, 0, 300, 200));

    assert_eq!(tree.base(plot).unwrap().margins(), Margins::new(36, 4, 9, 4));
}

#[test]
fn margin_group_aligns_left_sides() {
    let mut tree = LayoutTree::new();
    let grid = tree.add_grid();
    let narrow = tree.add_leaf(axis_rect(&["1"]));
    let wide = tree.add_leaf(axis_rect(&["10000"]));
    tree.add_to_grid(grid, 0, 0, narrow).unwrap();
    tree.add_to_grid(grid, 1, 0, wide).unwrap();
    assert_eq!(tree.calculate_auto_margin(narrow, MarginSide::Left), 26);
    assert_eq!(tree.calculate_auto_margin(wide, MarginSide::Left), 46);

    let group = tree.add_margin_group();
    tree.set_margin_group(narrow, MarginSides::LEFT | MarginSides::RIGHT, Some(group)).unwrap();
    tree.set_margin_group(wide, MarginSides::LEFT | MarginSides::RIGHT, Some(group)).unwrap();
    assert_eq!(tree.common_margin(group, MarginSide::Left), 46);

    tree.layout(grid, Rect::from_ltwh(0, 0, 400, 405));

    assert_eq!(tree.rect(narrow).unwrap().left, 46);
    assert_eq!(tree.rect(wide).unwrap().left, 46);
    assert_eq!(tree.base(narrow).unwrap().margins().right, 0);
}

#[test]
fn margin_group_ignores_members_without_auto_side() {
    let mut tree = LayoutTree::new();
    let auto = tree.add_leaf(axis_rect(&["0", "100"]));
    let manual = tree.add_leaf(axis_rect(&["1000000"]));
    {
        let base = tree.base_mut(manual).unwrap();
        base.set_auto_margins(MarginSides::BOTTOM);
        base.set_margins(Margins::new(10, 0, 0, 0));
    }
    let group = tree.add_margin_group();
    tree.set_margin_group(auto, MarginSides::LEFT, Some(group)).unwrap();
    tree.set_margin_group(manual, MarginSides::LEFT, Some(group)).unwrap();

    assert_eq!(tree.common_margin(group, MarginSide::Left), 36);

    tree.layout(manual, Rect::from_ltwh(0, 0, 200, 200));
    assert_eq!(tree.base(manual).unwrap().margins().left, 10);
}

#[test]
fn group_membership_is_unique_per_side() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = LayoutTree::new();
    let element = tree.add_leaf(Spacer);
    let first = tree.add_margin_group();
    let second = tree.add_margin_group();

    tree.set_margin_group(element, MarginSides::LEFT, Some(first)).unwrap();
    tree.set_margin_group(element, MarginSides::LEFT, Some(first)).unwrap();
    assert_eq!(tree.margin_group(first).unwrap().elements(MarginSide::Left), &[element]);

    tree.set_margin_group(element, MarginSides::LEFT, Some(second)).unwrap();
    assert!(tree.margin_group(first).unwrap().is_empty());
    assert!(tree.margin_group(second).unwrap().contains(MarginSide::Left, element));
    assert_eq!(tree.element_margin_group(element, MarginSide::Left), Some(second));

    tree.set_margin_group(element, MarginSides::LEFT, None).unwrap();
    assert!(tree.margin_group(second).unwrap().is_empty());
    assert_eq!(tree.element_margin_group(element, MarginSide::Left), None);
}

#[test]
fn clearing_and_removing_groups() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = LayoutTree::new();
    let a = tree.add_leaf(Spacer);
    let b = tree.add_leaf(Spacer);
    let group = tree.add_margin_group();
    tree.set_margin_group(a, MarginSides::ALL, Some(group)).unwrap();
    tree.set_margin_group(b, MarginSides::TOP, Some(group)).unwrap();

    tree.clear_margin_group(group);
    assert!(tree.margin_group(group).unwrap().is_empty());
    assert!(MarginSide::ALL.iter().all(|&side| tree.element_margin_group(a, side).is_none()));
    assert_eq!(tree.element_margin_group(b, MarginSide::Top), None);

    tree.set_margin_group(a, MarginSides::LEFT, Some(group)).unwrap();
    assert!(tree.remove_margin_group(group));
    assert_eq!(tree.margin_group(group), None);
    assert_eq!(tree.element_margin_group(a, MarginSide::Left), None);
    assert_eq!(
        tree.set_margin_group(a, MarginSides::LEFT, Some(group)),
        Err(LayoutError::UnknownMarginGroup(group))
    );
    assert_eq!(tree.common_margin(group, MarginSide::Left), 0);
}

#[test]
fn removed_element_leaves_its_groups() {
    let mut tree = LayoutTree::new();
    let grid = tree.add_grid();
    let a = tree.add_leaf(Spacer);
    tree.add_to_grid(grid, 0, 0, a).unwrap();
    let group = tree.add_margin_group();
    tree.set_margin_group(a, MarginSides::LEFT | MarginSides::TOP, Some(group)).unwrap();

    assert!(tree.remove(grid));

    assert!(!tree.contains(a));
    assert!(tree.margin_group(group).unwrap().is_empty());
}

#[derive(Debug)]
struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<(&'static str, UpdatePhase, Rect)>>>,
}

impl LeafContent for Recorder {
    fn update(&mut self, phase: UpdatePhase, base: &ElementBase) {
        self.log.borrow_mut().push((self.name, phase, base.outer_rect()));
    }
}

#[test]
fn phases_run_in_order_parents_before_children_overlay_last() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut tree = LayoutTree::new();
    let root = tree.add_grid();
    let a = tree.add_leaf(Recorder { name: "a", log: Rc::clone(&log) });
    let nested = tree.add_grid();
    let b = tree.add_leaf(Recorder { name: "b", log: Rc::clone(&log) });
    let c = tree.add_leaf(Recorder { name: "c", log: Rc::clone(&log) });
    tree.add_to_grid(root, 0, 0, a).unwrap();
    tree.add_to_grid(root, 0, 1, nested).unwrap();
    tree.add_to_grid(nested, 0, 0, b).unwrap();
    let overlay = tree.inset_layout(a).unwrap();
    tree.add_to_inset(overlay, c, Default::default()).unwrap();

    tree.layout(root, Rect::from_ltwh(0, 0, 205, 100));

    let entries = log.borrow();
    let order: Vec<_> = entries.iter().map(|(name, phase, _)| (*name, *phase)).collect();
    let mut expected = Vec::new();
    for phase in UpdatePhase::ORDER {
        expected.extend([("a", phase), ("c", phase), ("b", phase)]);
    }
    assert_eq!(order, expected);

    for (name, phase, rect) in entries.iter() {
        if *phase != UpdatePhase::Layout {
            continue;
        }
        let id = match *name {
            "a" => a,
            "b" => b,
            _ => c,
        };
        assert_eq!(Some(*rect), tree.outer_rect(id), "{name} saw a stale rect");
    }
    assert_eq!(tree.outer_rect(a), Some(Rect::from_ltwh(0, 0, 100, 100)));
    assert_eq!(tree.outer_rect(b), Some(Rect::from_ltwh(105, 0, 100, 100)));
    assert_eq!(tree.outer_rect(overlay), tree.rect(a));
}
