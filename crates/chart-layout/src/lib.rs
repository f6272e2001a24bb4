// File: crates/chart-layout/src/lib.rs
// Summary: Layout engine entry point; element tree, margin groups, grid/inset layouts and the section solver.

pub mod axis;
pub mod chart;
pub mod color_scale;
pub mod element;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod inset;
pub mod layout;
pub mod legend;
pub mod margin_group;
pub mod solver;
pub mod text;
pub mod tree;
pub mod types;

pub use axis::{Axis, AxisRect};
pub use chart::{Chart, LayoutOptions};
pub use color_scale::ColorScale;
pub use element::{ElementBase, ElementId, LeafContent, Spacer};
pub use error::LayoutError;
pub use geometry::{MaxSize, Orientation, Rect, RectF, Size};
pub use grid::{FillOrder, GridLayout};
pub use inset::{Alignment, InsetLayout, InsetPlacement};
pub use layout::Layout;
pub use legend::{build_legend, LegendItem, LegendOptions};
pub use margin_group::{MarginGroup, MarginGroupId};
pub use solver::section_sizes;
pub use text::{FixedAdvanceMetrics, TextElement, TextMetrics};
pub use tree::{ElementKind, LayoutTree};
pub use types::{MarginSide, MarginSides, Margins, SizeConstraintRect, UpdatePhase};
