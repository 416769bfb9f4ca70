mod builder;
mod cost;
mod shortest_path;
mod state;

#[doc(inline)]
pub use builder::BreakpointGraph;
#[doc(inline)]
pub use cost::RowCost;
#[doc(inline)]
pub use shortest_path::ShortestPath;
#[doc(inline)]
pub use shortest_path::shortest_path;
#[doc(inline)]
pub use state::BreakEdge;
#[doc(inline)]
pub use state::BreakState;
#[doc(inline)]
pub use state::StateKey;
