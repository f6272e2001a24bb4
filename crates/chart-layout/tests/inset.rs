// File: crates/chart-layout/tests/inset.rs
// Purpose: Inset layout placement (border-aligned and free) inside a host rect.

use chart_layout::{
    Alignment, InsetPlacement, LayoutError, LayoutTree, MaxSize, Rect, RectF, Size, SizeConstraintRect, Spacer,
};

const HOST: Rect = Rect::from_ltwh(0, 0, 200, 100);

fn place(placement: InsetPlacement, configure: impl FnOnce(&mut chart_layout::ElementBase)) -> Rect {
    let mut tree = LayoutTree::new();
    let inset = tree.add_inset();
    let leaf = tree.add_leaf(Spacer);
    {
        let base = tree.base_mut(leaf).unwrap();
        base.set_minimum_size(Size::new(40, 20));
        configure(base);
    }
    tree.add_to_inset(inset, leaf, placement).unwrap();
    tree.layout(inset, HOST);
    tree.outer_rect(leaf).unwrap()
}

#[test]
fn border_aligned_snaps_minimum_size_to_edges() {
    let aligned = |a| place(InsetPlacement::BorderAligned(a), |_| {});
    assert_eq!(aligned(Alignment::TOP_RIGHT), Rect::from_ltwh(160, 0, 40, 20));
    assert_eq!(aligned(Alignment::TOP_LEFT), Rect::from_ltwh(0, 0, 40, 20));
    assert_eq!(aligned(Alignment::BOTTOM_LEFT), Rect::from_ltwh(0, 80, 40, 20));
    assert_eq!(aligned(Alignment::BOTTOM_RIGHT), Rect::from_ltwh(160, 80, 40, 20));
    assert_eq!(aligned(Alignment::CENTER), Rect::from_ltwh(80, 40, 40, 20));
    assert_eq!(aligned(Alignment::TOP | Alignment::H_CENTER), Rect::from_ltwh(80, 0, 40, 20));
}

#[test]
fn default_placement_is_top_right() {
    assert_eq!(place(InsetPlacement::default(), |_| {}), Rect::from_ltwh(160, 0, 40, 20));
}

#[test]
fn free_placement_scales_with_host() {
    let free = InsetPlacement::Free(RectF::new(0.5, 0.5, 0.25, 0.25));
    assert_eq!(place(free, |_| {}), Rect::from_ltwh(100, 50, 50, 25));
}

#[test]
fn free_placement_respects_size_bounds() {
    let free = InsetPlacement::Free(RectF::new(0.5, 0.5, 0.25, 0.25));
    let capped = place(free, |base| {
        base.set_minimum_size(Size::new(0, 40));
        base.set_maximum_size(MaxSize::new(Some(30), None));
    });
    assert_eq!(capped, Rect::from_ltwh(100, 50, 30, 40));

    // a maximum below the minimum wins
    let conflicting = place(free, |base| {
        base.set_size_constraint_rect(SizeConstraintRect::OuterRect);
        base.set_maximum_size(MaxSize::new(Some(10), None));
    });
    assert_eq!(conflicting.width(), 10);
}

#[test]
fn placement_can_be_changed_by_index() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = LayoutTree::new();
    let inset = tree.add_inset();
    let leaf = tree.add_leaf(Spacer);
    tree.base_mut(leaf).unwrap().set_minimum_size(Size::new(40, 20));
    tree.add_to_inset(inset, leaf, InsetPlacement::default()).unwrap();

    let layout = tree.inset_mut(inset).unwrap();
    layout.set_placement(0, InsetPlacement::BorderAligned(Alignment::BOTTOM_LEFT)).unwrap();
    assert_eq!(
        layout.set_placement(3, InsetPlacement::default()),
        Err(LayoutError::IndexOutOfRange { index: 3, count: 1 })
    );
    assert_eq!(layout.placement(0), Some(InsetPlacement::BorderAligned(Alignment::BOTTOM_LEFT)));

    tree.layout(inset, HOST);
    assert_eq!(tree.outer_rect(leaf), Some(Rect::from_ltwh(0, 80, 40, 20)));
}

#[test]
fn overlay_follows_host_inner_rect() {
    let mut tree = LayoutTree::new();
    let grid = tree.add_grid();
    let host = tree.add_leaf(Spacer);
    tree.base_mut(host).unwrap().set_minimum_margins(chart_layout::Margins::uniform(10));
    tree.add_to_grid(grid, 0, 0, host).unwrap();
    let overlay = tree.inset_layout(host).unwrap();
    let badge = tree.add_leaf(Spacer);
    tree.base_mut(badge).unwrap().set_minimum_size(Size::new(40, 20));
    tree.add_to_inset(overlay, badge, InsetPlacement::BorderAligned(Alignment::BOTTOM_RIGHT)).unwrap();

    tree.layout(grid, HOST);

    assert_eq!(tree.rect(host), Some(Rect::from_ltrb(10, 10, 190, 90)));
    assert_eq!(tree.outer_rect(overlay), tree.rect(host));
    assert_eq!(tree.outer_rect(badge), Some(Rect::from_ltrb(150, 70, 190, 90)));
    // overlays never count towards the host's size
    assert_eq!(tree.minimum_outer_size_hint(host), chart_layout::Size::new(20, 20));
}
