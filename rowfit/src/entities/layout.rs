use std::ops::Range;

use crate::entities::LayoutItem;

/// Result of a layout call: items arranged in justified rows.
/// Borrows the items it was built from, cells are in the same order as the input items.
#[derive(Debug, Clone)]
pub struct Layout<'a, T> {
    pub rows: Vec<Row>,
    /// All cells, flattened, in input order
    pub cells: Vec<Cell<'a, T>>,
    /// Width of the container used to build the layout
    pub width: f64,
    /// Height of the container used to build the layout
    pub height: f64,
}

/// A contiguous run of cells sharing the same height.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Final height of the row (whole units)
    pub height: f64,
    /// Sum of the cell widths plus the gaps between them
    pub width: f64,
    /// Distance between the top of the container and the top of this row
    pub top: f64,
    /// Indices into [`Layout::cells`] of the cells in this row
    pub cells: Range<usize>,
}

/// An item placed in a row.
#[derive(Debug, Clone)]
pub struct Cell<'a, T> {
    pub item: &'a T,
    /// Position of the item in the input sequence
    pub index: usize,
    /// One-based number of the row containing this cell
    pub row: usize,
    /// One-based position of this cell within its row
    pub order: usize,
    pub width: f64,
    pub height: f64,
    /// Distance between the left edge of the container and the left edge of this cell
    pub left: f64,
    pub top: f64,
}

impl<'a, T> Layout<'a, T> {
    pub fn row_cells(&self, row: &Row) -> &[Cell<'a, T>] {
        &self.cells[row.cells.clone()]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = (&Row, &[Cell<'a, T>])> {
        self.rows.iter().map(|r| (r, self.row_cells(r)))
    }

    /// Vertical extent of the rows, from the top of the first to the bottom of the last
    pub fn used_height(&self) -> f64 {
        self.rows.last().map_or(0.0, |r| r.top + r.height)
    }

    /// Fraction of the container area covered by cells
    pub fn fill_ratio(&self) -> f64 {
        let cell_area = self.cells.iter().map(|c| c.width * c.height).sum::<f64>();
        cell_area / (self.width * self.height)
    }
}

impl<T: LayoutItem> Layout<'_, T> {
    /// Keys of the items in cell order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|c| c.item.key())
    }
}
