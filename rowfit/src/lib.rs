//! Justified row layout engine.
//!
//! Breaks an ordered sequence of rectangular items into rows that fill a container of known
//! width and height. Every possible row break is modelled as a state in a weighted graph and
//! the globally cheapest set of breakpoints is selected with a shortest path search.

/// Tunable parameters of the layout engine
pub mod config;

/// Entities to model the input (items, options) and the output (layout, rows, cells)
pub mod entities;

/// Aspect ratio preserving scaling functions
pub mod geometry;

/// Row breakpoint graph and the search for the cheapest path through it
pub mod graph;

/// Importing instances into and exporting layouts out of this library
pub mod io;

/// Assembly of the final layout
pub mod layout_builder;

/// Metrics of a single row under construction
pub mod row;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use layout_builder::{build_layout, build_layout_with_config};
