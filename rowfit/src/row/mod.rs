mod ideal_height;
mod row_metrics;

#[doc(inline)]
pub use ideal_height::estimate_ideal_row_height;
#[doc(inline)]
pub use ideal_height::estimate_row_count;
#[doc(inline)]
pub use row_metrics::RowMetrics;
