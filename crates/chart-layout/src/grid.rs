// File: crates/chart-layout/src/grid.rs
// Summary: Grid layout; rows/columns of optional cells sized by the section solver.

use crate::element::ElementId;
use crate::error::{reject, LayoutError};
use crate::geometry::{MaxSize, Orientation, Rect, Size};
use crate::layout::SizeSource;
use crate::solver::section_sizes;
use crate::types::DEFAULT_SPACING;

/// How sequential insertion and linear indices walk the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FillOrder {
    /// Fill down a column first; `wrap` limits the rows per column.
    RowsFirst,
    /// Fill along a row first; `wrap` limits the columns per row.
    #[default]
    ColumnsFirst,
}

/// 2-D arrangement of elements. Stretch-factor arrays always match the row and
/// column counts, and every factor is positive.
#[derive(Clone, Debug)]
pub struct GridLayout {
    cells: Vec<Vec<Option<ElementId>>>,
    row_stretch: Vec<f64>,
    column_stretch: Vec<f64>,
    row_spacing: i32,
    column_spacing: i32,
    wrap: usize,
    fill_order: FillOrder,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            row_stretch: Vec::new(),
            column_stretch: Vec::new(),
            row_spacing: DEFAULT_SPACING,
            column_spacing: DEFAULT_SPACING,
            wrap: 0,
            fill_order: FillOrder::default(),
        }
    }
}

impl GridLayout {
    pub fn new() -> Self { Self::default() }

    pub fn row_count(&self) -> usize { self.cells.len() }
    pub fn column_count(&self) -> usize { self.cells.first().map_or(0, Vec::len) }

    pub fn element(&self, row: usize, column: usize) -> Option<ElementId> {
        self.cells.get(row).and_then(|r| r.get(column)).copied().flatten()
    }

    pub fn has_element(&self, row: usize, column: usize) -> bool {
        self.element(row, column).is_some()
    }

    pub fn row_spacing(&self) -> i32 { self.row_spacing }
    pub fn column_spacing(&self) -> i32 { self.column_spacing }
    pub fn set_row_spacing(&mut self, pixels: i32) { self.row_spacing = pixels; }
    pub fn set_column_spacing(&mut self, pixels: i32) { self.column_spacing = pixels; }

    /// Same gap between rows and between columns.
    pub fn set_spacing(&mut self, pixels: i32) {
        self.row_spacing = pixels;
        self.column_spacing = pixels;
    }

    pub fn wrap(&self) -> usize { self.wrap }
    /// Cells per row (or column, see `FillOrder`) before sequential insertion wraps; 0 = never.
    pub fn set_wrap(&mut self, count: usize) { self.wrap = count; }

    pub fn fill_order(&self) -> FillOrder { self.fill_order }
    /// Switching without rearranging keeps every element in its cell; only linear
    /// indices change. Rearranging goes through `LayoutTree::set_fill_order`.
    pub(crate) fn set_fill_order_in_place(&mut self, order: FillOrder) { self.fill_order = order; }

    pub fn row_stretch_factors(&self) -> &[f64] { &self.row_stretch }
    pub fn column_stretch_factors(&self) -> &[f64] { &self.column_stretch }

    pub fn set_row_stretch_factor(&mut self, row: usize, factor: f64) -> Result<(), LayoutError> {
        let count = self.row_count();
        let Some(slot) = self.row_stretch.get_mut(row) else {
            return reject(LayoutError::RowOutOfRange { index: row, count });
        };
        if !(factor > 0.0 && factor.is_finite()) {
            return reject(LayoutError::InvalidStretchFactor(factor));
        }
        *slot = factor;
        Ok(())
    }

    pub fn set_column_stretch_factor(&mut self, column: usize, factor: f64) -> Result<(), LayoutError> {
        let count = self.column_count();
        let Some(slot) = self.column_stretch.get_mut(column) else {
            return reject(LayoutError::ColumnOutOfRange { index: column, count });
        };
        if !(factor > 0.0 && factor.is_finite()) {
            return reject(LayoutError::InvalidStretchFactor(factor));
        }
        *slot = factor;
        Ok(())
    }

    /// Replace all row factors; non-positive entries fall back to 1.0.
    pub fn set_row_stretch_factors(&mut self, factors: &[f64]) -> Result<(), LayoutError> {
        self.row_stretch = validated_factors(factors, self.row_stretch.len())?;
        Ok(())
    }

    /// Replace all column factors; non-positive entries fall back to 1.0.
    pub fn set_column_stretch_factors(&mut self, factors: &[f64]) -> Result<(), LayoutError> {
        self.column_stretch = validated_factors(factors, self.column_stretch.len())?;
        Ok(())
    }

    /// Grow to at least `rows` x `columns`; new cells are empty, new factors 1.0.
    pub fn expand_to(&mut self, rows: usize, columns: usize) {
        while self.cells.len() < rows {
            self.cells.push(Vec::new());
            self.row_stretch.push(1.0);
        }
        let columns = columns.max(self.column_count());
        for row in &mut self.cells {
            row.resize(columns, None);
        }
        self.column_stretch.resize(columns, 1.0);
    }

    /// Insert an empty row before `index` (clamped to the row count).
    pub fn insert_row(&mut self, index: usize) {
        if self.column_count() == 0 {
            self.expand_to(1, 1);
            return;
        }
        let index = index.min(self.row_count());
        self.row_stretch.insert(index, 1.0);
        self.cells.insert(index, vec![None; self.column_count()]);
    }

    /// Insert an empty column before `index` (clamped to the column count).
    pub fn insert_column(&mut self, index: usize) {
        if self.column_count() == 0 {
            self.expand_to(1, 1);
            return;
        }
        let index = index.min(self.column_count());
        self.column_stretch.insert(index, 1.0);
        for row in &mut self.cells {
            row.insert(index, None);
        }
    }

    pub fn element_count(&self) -> usize { self.row_count() * self.column_count() }

    /// Linear index of a cell: column-major for `RowsFirst`, row-major for `ColumnsFirst`.
    pub fn row_col_to_index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.row_count() || column >= self.column_count() {
            log::debug!("cell ({row}, {column}) is outside the {}x{} grid", self.row_count(), self.column_count());
            return None;
        }
        Some(match self.fill_order {
            FillOrder::RowsFirst => column * self.row_count() + row,
            FillOrder::ColumnsFirst => row * self.column_count() + column,
        })
    }

    pub fn index_to_row_col(&self, index: usize) -> Option<(usize, usize)> {
        let (rows, columns) = (self.row_count(), self.column_count());
        if rows == 0 || columns == 0 {
            return None;
        }
        if index >= self.element_count() {
            log::debug!("index {index} is out of range for a grid with {} cells", self.element_count());
            return None;
        }
        Some(match self.fill_order {
            FillOrder::RowsFirst => (index % rows, index / rows),
            FillOrder::ColumnsFirst => (index / columns, index % columns),
        })
    }

    pub fn element_at(&self, index: usize) -> Option<ElementId> {
        let (row, column) = self.index_to_row_col(index)?;
        self.element(row, column)
    }

    /// First free cell walking in fill order, wrapping after `wrap` cells.
    pub fn next_free_cell(&self) -> (usize, usize) {
        let (mut row, mut column) = (0, 0);
        match self.fill_order {
            FillOrder::ColumnsFirst => {
                while self.has_element(row, column) {
                    column += 1;
                    if self.wrap > 0 && column >= self.wrap {
                        column = 0;
                        row += 1;
                    }
                }
            }
            FillOrder::RowsFirst => {
                while self.has_element(row, column) {
                    row += 1;
                    if self.wrap > 0 && row >= self.wrap {
                        row = 0;
                        column += 1;
                    }
                }
            }
        }
        (row, column)
    }

    /// Occupy a free cell, growing the grid as needed.
    pub(crate) fn place(&mut self, row: usize, column: usize, element: ElementId) -> Result<(), LayoutError> {
        if self.has_element(row, column) {
            return reject(LayoutError::CellOccupied { row, column });
        }
        self.expand_to(row + 1, column + 1);
        self.cells[row][column] = Some(element);
        Ok(())
    }

    pub(crate) fn take_at(&mut self, index: usize) -> Option<ElementId> {
        let (row, column) = self.index_to_row_col(index)?;
        self.cells[row][column].take()
    }

    /// Cell holding `element`, if it is in this grid.
    pub fn position_of(&self, element: ElementId) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&cell| cell == Some(element)).map(|c| (r, c))
        })
    }

    /// Drop a row; the returned elements are no longer in the grid.
    pub(crate) fn remove_row(&mut self, row: usize) -> Result<Vec<ElementId>, LayoutError> {
        if row >= self.row_count() {
            return reject(LayoutError::RowOutOfRange { index: row, count: self.row_count() });
        }
        self.row_stretch.remove(row);
        let removed = self.cells.remove(row).into_iter().flatten().collect();
        if self.cells.is_empty() {
            self.column_stretch.clear();
        }
        Ok(removed)
    }

    /// Drop a column; the returned elements are no longer in the grid.
    pub(crate) fn remove_column(&mut self, column: usize) -> Result<Vec<ElementId>, LayoutError> {
        if column >= self.column_count() {
            return reject(LayoutError::ColumnOutOfRange { index: column, count: self.column_count() });
        }
        self.column_stretch.remove(column);
        let removed = self.cells.iter_mut().filter_map(|row| row.remove(column)).collect();
        if self.column_count() == 0 {
            self.cells.clear();
            self.row_stretch.clear();
        }
        Ok(removed)
    }

    /// Remove every row and column that holds no element, compacting the
    /// stretch factors in lockstep.
    pub fn simplify(&mut self) {
        for row in (0..self.row_count()).rev() {
            if self.cells[row].iter().all(Option::is_none) {
                self.row_stretch.remove(row);
                self.cells.remove(row);
            }
        }
        if self.cells.is_empty() {
            self.column_stretch.clear();
            return;
        }
        for column in (0..self.column_count()).rev() {
            if self.cells.iter().all(|row| row[column].is_none()) {
                self.column_stretch.remove(column);
                for row in &mut self.cells {
                    row.remove(column);
                }
            }
        }
        if self.column_count() == 0 {
            self.cells.clear();
            self.row_stretch.clear();
        }
    }

    fn occupied(&self) -> impl Iterator<Item = (usize, usize, ElementId)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| cell.map(|id| (r, c, id)))
        })
    }

    /// Per-section minima: (column widths, row heights).
    fn section_minimums(&self, sizes: &dyn SizeSource) -> (Vec<i32>, Vec<i32>) {
        let mut widths = vec![0; self.column_count()];
        let mut heights = vec![0; self.row_count()];
        for (r, c, id) in self.occupied() {
            let min = sizes.final_minimum_outer_size(id);
            widths[c] = widths[c].max(min.width);
            heights[r] = heights[r].max(min.height);
        }
        (widths, heights)
    }

    /// Per-section maxima: (column widths, row heights); `None` = unbounded.
    fn section_maximums(&self, sizes: &dyn SizeSource) -> (Vec<Option<i32>>, Vec<Option<i32>>) {
        let mut widths: Vec<Option<i32>> = vec![None; self.column_count()];
        let mut heights: Vec<Option<i32>> = vec![None; self.row_count()];
        for (r, c, id) in self.occupied() {
            let max = sizes.final_maximum_outer_size(id);
            widths[c] = tighter(widths[c], max.width);
            heights[r] = tighter(heights[r], max.height);
        }
        (widths, heights)
    }

    fn total_spacing(&self, orientation: Orientation) -> i32 {
        let (count, spacing) = match orientation {
            Orientation::Horizontal => (self.column_count(), self.column_spacing),
            Orientation::Vertical => (self.row_count(), self.row_spacing),
        };
        i32::try_from(count.saturating_sub(1)).unwrap_or(i32::MAX).saturating_mul(spacing)
    }

    pub(crate) fn minimum_content_size(&self, sizes: &dyn SizeSource) -> Size {
        let (widths, heights) = self.section_minimums(sizes);
        Size::new(
            widths.iter().fold(self.total_spacing(Orientation::Horizontal), |acc, &w| acc.saturating_add(w)),
            heights.iter().fold(self.total_spacing(Orientation::Vertical), |acc, &h| acc.saturating_add(h)),
        )
    }

    pub(crate) fn maximum_content_size(&self, sizes: &dyn SizeSource) -> MaxSize {
        let (widths, heights) = self.section_maximums(sizes);
        let sum = |values: &[Option<i32>], spacing: i32| -> Option<i32> {
            values.iter().try_fold(spacing, |acc, v| v.map(|v| acc.saturating_add(v)))
        };
        MaxSize::new(
            sum(&widths, self.total_spacing(Orientation::Horizontal)),
            sum(&heights, self.total_spacing(Orientation::Vertical)),
        )
    }

    /// Solve rows and columns independently and hand each occupied cell its outer rect.
    pub(crate) fn arrange(&self, rect: Rect, sizes: &dyn SizeSource) -> Vec<(ElementId, Rect)> {
        if self.element_count() == 0 {
            return Vec::new();
        }
        let (min_widths, min_heights) = self.section_minimums(sizes);
        let (max_widths, max_heights) = self.section_maximums(sizes);

        let available_width = rect.width().saturating_sub(self.total_spacing(Orientation::Horizontal));
        let available_height = rect.height().saturating_sub(self.total_spacing(Orientation::Vertical));
        let solved = section_sizes(&max_widths, &min_widths, &self.column_stretch, available_width).and_then(
            |widths| section_sizes(&max_heights, &min_heights, &self.row_stretch, available_height).map(|h| (widths, h)),
        );
        let Ok((widths, heights)) = solved else {
            return Vec::new();
        };
        log::trace!("grid sections in {rect:?}: columns={widths:?} rows={heights:?}");

        let mut placed = Vec::new();
        let mut y = rect.top;
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                y = y.saturating_add(heights[r - 1]).saturating_add(self.row_spacing);
            }
            let mut x = rect.left;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    x = x.saturating_add(widths[c - 1]).saturating_add(self.column_spacing);
                }
                if let Some(id) = cell {
                    placed.push((*id, Rect::from_ltwh(x, y, widths[c], heights[r])));
                }
            }
        }
        placed
    }
}

fn tighter(current: Option<i32>, candidate: Option<i32>) -> Option<i32> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

fn validated_factors(factors: &[f64], expected: usize) -> Result<Vec<f64>, LayoutError> {
    if factors.len() != expected {
        return reject(LayoutError::StretchFactorCount { expected, actual: factors.len() });
    }
    Ok(factors
        .iter()
        .map(|&f| {
            if f > 0.0 && f.is_finite() {
                f
            } else {
                log::warn!("{}; using 1.0", LayoutError::InvalidStretchFactor(f));
                1.0
            }
        })
        .collect())
}
