use std::fmt::{Display, Formatter};

use ordered_float::NotNan;

use crate::entities::LayoutItem;
use crate::geometry::scale_width_to_target_height;

/// Multiplier of the ideal row height for rows with a single featured item.
const FEATURED_BASE_BOOST: f64 = 2.0;
/// Cap on the additional, logarithmic boost for rows with several featured items.
const FEATURED_MAX_EXTRA_BOOST: f64 = 0.5;

/// Cost assigned to a candidate row. Smaller is better.
///
/// The height component penalizes deviation from the (possibly boosted) ideal row height:
/// rows taller than ideal are penalized cubically, shorter rows only quadratically, which favors denser rows.
/// The width component penalizes flexible items being compressed below their natural width.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug, Default)]
pub struct RowCost {
    pub height_weight: f64,
    pub width_weight: f64,
}

impl RowCost {
    /// Scores a row of height `row_height` containing `items`.
    ///
    /// * `ideal_row_height` - Target height before any featured boost
    /// * `unscaled_row_height` - Nominal height of the row before it was fitted to the container
    pub fn new<'a, T: LayoutItem + 'a>(
        items: impl IntoIterator<Item = &'a T> + Clone,
        ideal_row_height: f64,
        row_height: f64,
        unscaled_row_height: f64,
        container_width: f64,
    ) -> Self {
        let n_featured = items.clone().into_iter().filter(|i| i.featured()).count();
        let target_height = ideal_row_height * featured_boost(n_featured);

        let height_weight = match target_height < row_height {
            true => (target_height - row_height).abs().powi(3),
            false => (target_height - row_height).powi(2),
        };

        let width_weight = items
            .into_iter()
            .filter(|i| i.flexible_aspect_ratio())
            .map(|i| {
                let preferred_width = f64::min(i.width(), container_width);
                let item_height = f64::max(i.height(), unscaled_row_height);
                let scaled_width = scale_width_to_target_height(i.width(), item_height, row_height);
                compression_penalty(preferred_width - scaled_width)
            })
            .sum();

        RowCost {
            height_weight,
            width_weight,
        }
    }

    pub fn total(&self) -> NotNan<f64> {
        NotNan::new(self.height_weight + self.width_weight).expect("row cost is NaN")
    }
}

impl Display for RowCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(h: {:.3}, w: {:.3})", self.height_weight, self.width_weight)
    }
}

/// Multiplier applied to the ideal row height for a row containing `n_featured` featured items.
pub fn featured_boost(n_featured: usize) -> f64 {
    match n_featured {
        0 => 1.0,
        n => FEATURED_BASE_BOOST + f64::min(f64::log10(n as f64), FEATURED_MAX_EXTRA_BOOST),
    }
}

/// Cost of ending the layout with `remaining_height` of unused vertical space.
pub fn end_cost(remaining_height: f64) -> NotNan<f64> {
    NotNan::new(remaining_height.powi(2)).expect("end cost is NaN")
}

/// Super-linear penalty for compressing a flexible item `width_loss` below its preferred width.
fn compression_penalty(width_loss: f64) -> f64 {
    match width_loss > 0.0 {
        true => width_loss * f64::log2(width_loss),
        false => 0.0,
    }
}
