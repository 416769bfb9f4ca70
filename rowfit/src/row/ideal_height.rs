use crate::entities::{LayoutItem, LayoutOptions};

/// Estimates how many rows are needed to fill the container with `items`, assuming every item
/// has the average aspect ratio. Returns 0 for an empty slice.
pub fn estimate_row_count<T: LayoutItem>(items: &[T], options: &LayoutOptions) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let n_items = items.len() as f64;
    let avg_aspect_ratio = items.iter().map(|i| i.width() / i.height()).sum::<f64>() / n_items;
    f64::sqrt(avg_aspect_ratio * n_items * options.container_height / options.container_width)
}

/// Target row height used to score candidate rows, in whole units.
/// Returns `None` for an empty slice.
pub fn estimate_ideal_row_height<T: LayoutItem>(
    items: &[T],
    options: &LayoutOptions,
) -> Option<f64> {
    match items.is_empty() {
        true => None,
        false => {
            let n_rows = estimate_row_count(items, options);
            Some((options.container_height / n_rows).floor())
        }
    }
}
