use crate::entities::LayoutItem;
use crate::geometry::{scale_height_to_target_width, scale_width_to_target_height};

/// Incrementally tracks the dimensions of a row while items are appended to it.
///
/// The row height is the height all items are scaled to before the row is fitted to a container width.
/// Flexible items that are not taller than the current row do not participate in the scaling,
/// their width is accumulated separately and only accounted for in [`RowMetrics::row_height_for_width`].
#[derive(Clone, Debug)]
pub struct RowMetrics {
    gap: f64,
    item_count: usize,
    /// Width of the (non-deferred) items, scaled to `row_height`
    row_width: f64,
    /// Nominal height of the row
    row_height: f64,
    /// Width of flexible items which did not affect the row height
    flexible_row_width: f64,
    /// True if the row height was set by a flexible item and can still be overridden by a taller one
    row_height_flexible: bool,
}

impl RowMetrics {
    pub fn new(gap: f64) -> Self {
        assert!(gap.is_finite() && gap >= 0.0, "invalid gap: {gap}");
        Self {
            gap,
            item_count: 0,
            row_width: 0.0,
            row_height: 0.0,
            flexible_row_width: 0.0,
            row_height_flexible: false,
        }
    }

    /// Builds the metrics of a row containing exactly `items`
    pub fn from_items<'a, T: LayoutItem + 'a>(
        gap: f64,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Self {
        let mut metrics = RowMetrics::new(gap);
        for item in items {
            metrics.add(item);
        }
        metrics
    }

    pub fn add(&mut self, item: &impl LayoutItem) {
        self.add_item(item.width(), item.height(), item.flexible_aspect_ratio());
    }

    pub fn add_item(&mut self, width: f64, height: f64, flexible: bool) {
        assert!(width.is_finite() && width > 0.0, "invalid width: {width}");
        assert!(height.is_finite() && height > 0.0, "invalid height: {height}");

        if self.item_count == 0 {
            self.row_width = width;
            self.row_height = height;
            self.row_height_flexible = flexible;
        } else if flexible && height <= self.row_height {
            self.flexible_row_width += width;
        } else {
            if height < self.row_height {
                //a shorter item forces the entire row down to its height
                self.row_width = scale_width_to_target_height(self.row_width, self.row_height, height);
                self.row_height = height;
            } else if self.row_height_flexible {
                self.row_height = height;
                self.row_height_flexible = false;
            }
            self.row_width += scale_width_to_target_height(width, height, self.row_height);
        }
        self.item_count += 1;
    }

    /// Height of the row once it is scaled down to fit `container_width`, including the gaps.
    /// A row that already fits keeps its nominal height, rows are never scaled up.
    pub fn row_height_for_width(&self, container_width: f64) -> f64 {
        assert!(
            container_width.is_finite(),
            "invalid container width: {container_width}"
        );
        let mut row_width = self.row_width;
        if self.flexible_row_width > 0.0 {
            //reserve extra room for flexible items in crowded rows, so they are not squeezed to nothing
            let log_count = f64::log2(self.item_count as f64).max(1.0);
            row_width += (self.flexible_row_width * log_count).ceil();
        }
        let allowed_width = container_width - self.gap * self.item_count as f64;
        if row_width <= allowed_width {
            self.row_height
        } else {
            scale_height_to_target_width(row_width, self.row_height, allowed_width)
        }
    }

    /// Nominal height of the row, before any scaling to a container width
    pub fn unscaled_row_height(&self) -> f64 {
        self.row_height
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn gap(&self) -> f64 {
        self.gap
    }

    pub fn reset(&mut self) {
        *self = RowMetrics::new(self.gap);
    }
}
