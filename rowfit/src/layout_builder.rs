use itertools::Itertools;
use log::debug;

use crate::config::LayoutConfig;
use crate::entities::{Cell, Layout, LayoutItem, LayoutOptions, Row};
use crate::geometry::scale_width_to_target_height;
use crate::graph::{BreakpointGraph, shortest_path};
use crate::row::RowMetrics;
use crate::util::assertions;

/// Arranges `items` in justified rows filling the container described by `options`,
/// using the default [`LayoutConfig`].
///
/// Returns `None` if `items` is empty or if no partition into rows fits the container height.
/// Panics if any item or option dimension is not positive and finite.
pub fn build_layout<'a, T: LayoutItem>(
    items: &'a [T],
    options: &LayoutOptions,
) -> Option<Layout<'a, T>> {
    build_layout_with_config(items, options, &LayoutConfig::default())
}

/// See [`build_layout`].
pub fn build_layout_with_config<'a, T: LayoutItem>(
    items: &'a [T],
    options: &LayoutOptions,
    config: &LayoutConfig,
) -> Option<Layout<'a, T>> {
    if let Err(e) = options.validate() {
        panic!("{e}");
    }
    debug_assert!(assertions::item_keys_unique(items));

    let graph = BreakpointGraph::build(items, options, config)?;
    let path = shortest_path(&graph)?;
    let breakpoints = graph.breakpoints(&path.states);
    debug!(
        "[LAYOUT] {} items broken into {} rows at {:?}",
        items.len(),
        breakpoints.len(),
        breakpoints
    );

    let layout = materialize(items, &breakpoints, options);

    debug_assert!(assertions::layout_preserves_order(items, &layout));
    debug_assert!(assertions::rows_are_contiguous(&layout));
    debug_assert!(assertions::layout_fits_height(&layout, options.gap));

    Some(layout)
}

/// Dimensions of a single row needed to size its cells.
struct RowContext {
    unscaled_row_height: f64,
    row_height: f64,
    /// Sum of the natural widths of the items in the row
    unscaled_row_width: f64,
    n_flexible: usize,
}

impl RowContext {
    fn new<T: LayoutItem>(row_items: &[T], options: &LayoutOptions) -> Self {
        let metrics = RowMetrics::from_items(options.gap, row_items);
        RowContext {
            unscaled_row_height: metrics.unscaled_row_height(),
            row_height: metrics.row_height_for_width(options.container_width),
            unscaled_row_width: row_items.iter().map(|i| i.width()).sum(),
            n_flexible: row_items
                .iter()
                .filter(|i| i.flexible_aspect_ratio())
                .count(),
        }
    }

    /// Extra width granted to every flexible cell of the row to use up unallocated horizontal space
    fn flexible_bonus_width(&self, container_width: f64) -> f64 {
        if self.n_flexible == 0 {
            return 0.0;
        }
        let scaled_row_width = scale_width_to_target_height(
            self.unscaled_row_width,
            self.unscaled_row_height,
            self.row_height,
        );
        match scaled_row_width < container_width {
            true => ((container_width - scaled_row_width) / self.n_flexible as f64).floor(),
            false => 0.0,
        }
    }
}

/// Converts the row start indices into cell and row geometry.
/// `breakpoints` must start with 0 and be strictly increasing.
pub fn materialize<'a, T: LayoutItem>(
    items: &'a [T],
    breakpoints: &[usize],
    options: &LayoutOptions,
) -> Layout<'a, T> {
    assert_eq!(breakpoints.first(), Some(&0), "first row must start at item 0");
    assert!(
        breakpoints.iter().tuple_windows().all(|(a, b)| a < b),
        "breakpoints must be strictly increasing: {breakpoints:?}"
    );
    let LayoutOptions {
        container_width,
        container_height,
        gap,
    } = *options;

    let row_ranges = breakpoints
        .iter()
        .copied()
        .chain(std::iter::once(items.len()))
        .tuple_windows()
        .map(|(start, end)| start..end)
        .collect_vec();

    let mut rows = Vec::with_capacity(row_ranges.len());
    let mut cells = Vec::with_capacity(items.len());
    let mut row_top = 0.0;

    for (row_idx, range) in row_ranges.into_iter().enumerate() {
        let ctx = RowContext::new(&items[range.clone()], options);
        let bonus_width = ctx.flexible_bonus_width(container_width);
        let cell_height = ctx.row_height.floor();

        let mut left = 0.0;
        for (order, index) in range.clone().enumerate() {
            let item = &items[index];
            let width = match item.flexible_aspect_ratio() {
                true => {
                    let item_height = f64::max(item.height(), ctx.unscaled_row_height);
                    scale_width_to_target_height(item.width(), item_height, ctx.row_height)
                        + bonus_width
                }
                false => scale_width_to_target_height(item.width(), item.height(), ctx.row_height),
            }
            .floor();

            cells.push(Cell {
                item,
                index,
                row: row_idx + 1,
                order: order + 1,
                width,
                height: cell_height,
                left,
                top: row_top,
            });
            left += width + gap;
        }

        //trim the trailing gap
        let row_width = match left > gap {
            true => left - gap,
            false => left,
        };
        rows.push(Row {
            height: cell_height,
            width: row_width,
            top: row_top,
            cells: range,
        });
        row_top += ctx.row_height + gap;
    }

    Layout {
        rows,
        cells,
        width: container_width,
        height: container_height,
    }
}
