use slotmap::new_key_type;

new_key_type! {
    /// Unique key for each [`BreakState`] in a [`BreakpointGraph`](crate::graph::BreakpointGraph)
    pub struct StateKey;
}

/// Node of the breakpoint graph.
#[derive(Clone, Debug)]
pub struct BreakState {
    /// Index of the first item of the next row, `None` for the terminal state (all items placed)
    pub first_item: Option<usize>,
    /// Vertical space left for the next row and all rows after it
    pub remaining_height: f64,
    pub edges: Vec<BreakEdge>,
}

/// Directed edge of the breakpoint graph, a candidate row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakEdge {
    pub to: StateKey,
    /// Cost of the row, smaller is better
    pub weight: f64,
}

impl BreakState {
    pub fn new(first_item: Option<usize>, remaining_height: f64) -> Self {
        Self {
            first_item,
            remaining_height,
            edges: vec![],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.first_item.is_none()
    }
}
