use std::collections::HashMap;

use log::{debug, trace};
use slotmap::SlotMap;
use thousands::Separable;

use crate::config::LayoutConfig;
use crate::entities::{LayoutItem, LayoutOptions};
use crate::graph::cost::end_cost;
use crate::graph::{BreakEdge, BreakState, RowCost, StateKey};
use crate::row::{RowMetrics, estimate_ideal_row_height};

/// Directed acyclic graph of all reachable row breaking states.
///
/// A state is a pair of (first item of the next row, remaining height budget).
/// Every edge is a candidate row, leading either to the state where the row after it starts
/// or to the terminal state if the row contains all remaining items.
/// The first item index strictly increases along every edge.
#[derive(Clone, Debug)]
pub struct BreakpointGraph {
    pub states: SlotMap<StateKey, BreakState>,
    /// The state before the first row
    pub source: StateKey,
    /// Terminal state, all items placed
    pub end: StateKey,
    /// Target height of a row, shared by all candidate rows
    pub ideal_row_height: f64,
}

impl BreakpointGraph {
    /// Explores all states reachable from the initial one.
    /// Returns `None` if there are no items.
    pub fn build<T: LayoutItem>(
        items: &[T],
        options: &LayoutOptions,
        config: &LayoutConfig,
    ) -> Option<Self> {
        let ideal_row_height = estimate_ideal_row_height(items, options)?;
        let LayoutOptions {
            container_width,
            container_height,
            gap,
        } = *options;

        let mut builder = StateRegistry::new(*config);
        let end = builder.states.insert(BreakState::new(None, 0.0));
        let source = builder.get_or_insert(0, container_height - gap);

        while let Some(from_key) = builder.queue.pop() {
            let from = &builder.states[from_key];
            let first = from.first_item.expect("terminal state should never be queued");
            let budget = from.remaining_height;

            let mut edges = vec![];
            let mut metrics = RowMetrics::new(gap);
            metrics.add(&items[first]);

            //the row spans items[first..next]
            for next in (first + 1)..=items.len() {
                let row_height = metrics.row_height_for_width(container_width);
                let remaining_height = budget - row_height - gap;

                if next == items.len() {
                    if remaining_height >= 0.0 {
                        edges.push(BreakEdge {
                            to: end,
                            weight: end_cost(remaining_height).into_inner(),
                        });
                    }
                } else {
                    if remaining_height >= 0.0 {
                        let cost = RowCost::new(
                            &items[first..next],
                            ideal_row_height,
                            row_height,
                            metrics.unscaled_row_height(),
                            container_width,
                        );
                        let to = builder.get_or_insert(next, remaining_height);
                        edges.push(BreakEdge {
                            to,
                            weight: cost.total().into_inner(),
                        });
                    }
                    metrics.add(&items[next]);
                }
            }
            trace!(
                "[GRAPH] state (item: {first}, budget: {budget:.3}) has {} outgoing edges",
                edges.len()
            );
            builder.states[from_key].edges = edges;
        }

        let graph = BreakpointGraph {
            states: builder.states,
            source,
            end,
            ideal_row_height,
        };
        debug!(
            "[GRAPH] built graph for {} items with {} states and {} edges (ideal row height: {})",
            items.len(),
            graph.states.len().separate_with_commas(),
            graph.n_edges().separate_with_commas(),
            ideal_row_height
        );
        Some(graph)
    }

    pub fn state(&self, key: StateKey) -> &BreakState {
        &self.states[key]
    }

    pub fn n_edges(&self) -> usize {
        self.states.values().map(|s| s.edges.len()).sum()
    }

    /// Converts a path of states into the indices of the items starting each row
    pub fn breakpoints(&self, path: &[StateKey]) -> Vec<usize> {
        path.iter()
            .filter_map(|k| self.states[*k].first_item)
            .collect()
    }
}

/// Deduplicates states by their first item and bucketed remaining height,
/// and keeps track of states that still need to be expanded.
struct StateRegistry {
    config: LayoutConfig,
    states: SlotMap<StateKey, BreakState>,
    state_map: HashMap<(usize, i64), StateKey>,
    queue: Vec<StateKey>,
}

impl StateRegistry {
    fn new(config: LayoutConfig) -> Self {
        assert!(
            config.budget_resolution.is_finite() && config.budget_resolution > 0.0,
            "invalid budget resolution: {}",
            config.budget_resolution
        );
        Self {
            config,
            states: SlotMap::with_key(),
            state_map: HashMap::new(),
            queue: vec![],
        }
    }

    fn get_or_insert(&mut self, first_item: usize, remaining_height: f64) -> StateKey {
        let id = (first_item, self.config.budget_bucket(remaining_height));
        match self.state_map.get(&id) {
            Some(key) => *key,
            None => {
                let key = self
                    .states
                    .insert(BreakState::new(Some(first_item), remaining_height));
                self.state_map.insert(id, key);
                self.queue.push(key);
                key
            }
        }
    }
}
