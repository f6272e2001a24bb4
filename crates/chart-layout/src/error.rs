// File: crates/chart-layout/src/error.rs
// Summary: Error type for fail-soft layout operations.

use thiserror::Error;

use crate::element::ElementId;
use crate::margin_group::MarginGroupId;
use crate::types::MarginSide;

/// Every rejected operation leaves the tree unchanged and logs the error once.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("no live element for handle {0:?}")]
    UnknownElement(ElementId),
    #[error("element {0:?} is not a layout")]
    NotALayout(ElementId),
    #[error("element {0:?} is not a grid layout")]
    NotAGrid(ElementId),
    #[error("element {0:?} is not an inset layout")]
    NotAnInset(ElementId),
    #[error("cell ({row}, {column}) is already occupied")]
    CellOccupied { row: usize, column: usize },
    #[error("row {index} is out of range for a grid with {count} rows")]
    RowOutOfRange { index: usize, count: usize },
    #[error("column {index} is out of range for a grid with {count} columns")]
    ColumnOutOfRange { index: usize, count: usize },
    #[error("index {index} is out of range for a layout with {count} elements")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("stretch factor {0} must be positive")]
    InvalidStretchFactor(f64),
    #[error("expected {expected} stretch factors, got {actual}")]
    StretchFactorCount { expected: usize, actual: usize },
    #[error("section inputs differ in length: {max} maxima, {min} minima, {stretch} stretch factors")]
    SectionCountMismatch { max: usize, min: usize, stretch: usize },
    #[error("element {0:?} is not part of any layout")]
    NotInLayout(ElementId),
    #[error("inserting {element:?} into {layout:?} would make the layout its own descendant")]
    WouldCycle { layout: ElementId, element: ElementId },
    #[error("no live margin group for handle {0:?}")]
    UnknownMarginGroup(MarginGroupId),
    #[error("element {element:?} is already in margin group {group:?} on side {side:?}")]
    AlreadyInGroup { group: MarginGroupId, side: MarginSide, element: ElementId },
    #[error("element {element:?} is not in margin group {group:?} on side {side:?}")]
    NotInGroup { group: MarginGroupId, side: MarginSide, element: ElementId },
}

/// Log `err` as a diagnostic and hand it back as an `Err`.
pub(crate) fn reject<T>(err: LayoutError) -> Result<T, LayoutError> {
    log::warn!("{err}");
    Err(err)
}
