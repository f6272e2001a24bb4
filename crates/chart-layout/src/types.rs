// File: crates/chart-layout/src/types.rs
// Summary: Shared types and constants (margins, sides, phases, default sizes and spacings).

use bitflags::bitflags;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;
/// Default gap between neighbouring grid rows/columns, in pixels.
pub const DEFAULT_SPACING: i32 = 5;
/// Axis rects never shrink below this outer size unless the surface forces it.
pub const AXIS_RECT_MIN_SIZE: i32 = 50;
/// Fixed legend margins (left, top, right, bottom).
pub const LEGEND_MARGINS: Margins = Margins::new(7, 5, 7, 4);

/// Four independent integer insets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> i32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> i32 { self.top + self.bottom }

    pub const fn get(&self, side: MarginSide) -> i32 {
        match side {
            MarginSide::Left => self.left,
            MarginSide::Right => self.right,
            MarginSide::Top => self.top,
            MarginSide::Bottom => self.bottom,
        }
    }

    pub fn set(&mut self, side: MarginSide, value: i32) {
        match side {
            MarginSide::Left => self.left = value,
            MarginSide::Right => self.right = value,
            MarginSide::Top => self.top = value,
            MarginSide::Bottom => self.bottom = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarginSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl MarginSide {
    pub const ALL: [MarginSide; 4] = [MarginSide::Left, MarginSide::Right, MarginSide::Top, MarginSide::Bottom];

    /// Stable slot for per-side arrays.
    pub const fn index(self) -> usize {
        match self {
            MarginSide::Left => 0,
            MarginSide::Right => 1,
            MarginSide::Top => 2,
            MarginSide::Bottom => 3,
        }
    }

    pub const fn is_horizontal_edge(self) -> bool {
        matches!(self, MarginSide::Top | MarginSide::Bottom)
    }
}

bitflags! {
    /// Set of margin sides, e.g. the sides whose margin is computed automatically.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MarginSides: u8 {
        const LEFT   = 0b0001;
        const RIGHT  = 0b0010;
        const TOP    = 0b0100;
        const BOTTOM = 0b1000;
        const ALL = Self::LEFT.bits() | Self::RIGHT.bits() | Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for MarginSides {
    fn default() -> Self { Self::ALL }
}

impl MarginSides {
    pub const fn contains_side(self, side: MarginSide) -> bool {
        self.contains(Self::from_side(side))
    }

    pub const fn from_side(side: MarginSide) -> Self {
        match side {
            MarginSide::Left => Self::LEFT,
            MarginSide::Right => Self::RIGHT,
            MarginSide::Top => Self::TOP,
            MarginSide::Bottom => Self::BOTTOM,
        }
    }

    /// Sides in the set, in `MarginSide::ALL` order.
    pub fn sides(self) -> impl Iterator<Item = MarginSide> {
        MarginSide::ALL.into_iter().filter(move |side| self.contains_side(*side))
    }
}

impl From<MarginSide> for MarginSides {
    fn from(side: MarginSide) -> Self { Self::from_side(side) }
}

/// Whether minimum/maximum sizes constrain the inner rect (margins added on top)
/// or the outer rect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeConstraintRect {
    #[default]
    InnerRect,
    OuterRect,
}

/// The three ordered phases of one layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdatePhase {
    /// Content refresh before any geometry is computed.
    Preparation,
    /// Auto margins are resolved (directly or through margin groups).
    Margins,
    /// Layouts assign outer rects to their children.
    Layout,
}

impl UpdatePhase {
    pub const ORDER: [UpdatePhase; 3] = [UpdatePhase::Preparation, UpdatePhase::Margins, UpdatePhase::Layout];
}
