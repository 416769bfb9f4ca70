use std::collections::HashSet;

use itertools::Itertools;
use log::error;

use crate::entities::{Layout, LayoutItem};
use crate::util::FPA;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn item_keys_unique<T: LayoutItem>(items: &[T]) -> bool {
    let mut seen = HashSet::new();
    match items.iter().find(|i| !seen.insert(i.key())) {
        Some(dup) => {
            error!("duplicate item key: {}", dup.key());
            false
        }
        None => true,
    }
}

/// Every item appears in exactly one cell, in input order.
pub fn layout_preserves_order<T>(items: &[T], layout: &Layout<T>) -> bool {
    layout.cells.len() == items.len()
        && layout
            .cells
            .iter()
            .zip(items)
            .enumerate()
            .all(|(i, (cell, item))| cell.index == i && std::ptr::eq(cell.item, item))
}

/// Rows cover consecutive, non-empty ranges of cells and every cell knows its row and position.
pub fn rows_are_contiguous<T>(layout: &Layout<T>) -> bool {
    let ranges_chain = layout.rows.first().is_none_or(|r| r.cells.start == 0)
        && layout.rows.last().is_none_or(|r| r.cells.end == layout.cells.len())
        && layout
            .rows
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.cells.end == b.cells.start);
    if !ranges_chain {
        return false;
    }

    layout.rows.iter().enumerate().all(|(row_idx, row)| {
        !row.cells.is_empty()
            && layout
                .row_cells(row)
                .iter()
                .enumerate()
                .all(|(order, c)| c.row == row_idx + 1 && c.order == order + 1 && c.top == row.top)
    })
}

/// The rows and the gaps between them fit in the container height.
pub fn layout_fits_height<T>(layout: &Layout<T>, gap: f64) -> bool {
    let n_rows = layout.rows.len() as f64;
    let total = layout.rows.iter().map(|r| r.height).sum::<f64>() + gap * (n_rows - 1.0).max(0.0);
    if FPA(total) > FPA(layout.height) {
        error!(
            "rows use {total} of the available height {}",
            layout.height
        );
        return false;
    }
    true
}
