use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;
use ordered_float::NotNan;
use slotmap::SecondaryMap;

use crate::graph::{BreakpointGraph, StateKey};

/// Cheapest path from the source to the terminal state of a [`BreakpointGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    /// All states on the path, starting with the source and ending with the terminal state
    pub states: Vec<StateKey>,
    pub cost: f64,
}

/// Dijkstra's algorithm from `graph.source` to `graph.end`.
/// Returns `None` if the terminal state is unreachable.
pub fn shortest_path(graph: &BreakpointGraph) -> Option<ShortestPath> {
    let mut dist: SecondaryMap<StateKey, NotNan<f64>> = SecondaryMap::new();
    let mut prev: SecondaryMap<StateKey, StateKey> = SecondaryMap::new();
    let mut heap = BinaryHeap::new();

    let zero = NotNan::new(0.0).expect("zero is not NaN");
    dist.insert(graph.source, zero);
    heap.push(Reverse((zero, graph.source)));

    while let Some(Reverse((d, key))) = heap.pop() {
        if key == graph.end {
            break;
        }
        if dist.get(key).is_some_and(|best| d > *best) {
            //stale entry
            continue;
        }
        for edge in &graph.state(key).edges {
            let candidate = d + NotNan::new(edge.weight).expect("edge weight is NaN");
            let improves = dist.get(edge.to).is_none_or(|best| candidate < *best);
            if improves {
                dist.insert(edge.to, candidate);
                prev.insert(edge.to, key);
                heap.push(Reverse((candidate, edge.to)));
            }
        }
    }

    let Some(cost) = dist.get(graph.end).copied() else {
        debug!("[PATH] terminal state is unreachable");
        return None;
    };

    let mut states = vec![graph.end];
    let mut current = graph.end;
    while let Some(&p) = prev.get(current) {
        states.push(p);
        current = p;
    }
    states.reverse();
    debug_assert!(states.first() == Some(&graph.source));

    debug!(
        "[PATH] found path through {} states with cost {:.3}",
        states.len(),
        cost
    );
    Some(ShortestPath {
        states,
        cost: cost.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::entities::{Item, LayoutOptions};
    use crate::graph::{BreakEdge, BreakState};
    use float_cmp::approx_eq;
    use slotmap::SlotMap;

    #[test]
    fn sample_path() {
        let items = [
            Item::new("1", 800.0, 600.0),
            Item::new("2", 1024.0, 768.0),
            Item::new("3", 500.0, 500.0),
        ];
        let options = LayoutOptions::new(800.0, 812.0, 5.0);
        let graph = BreakpointGraph::build(&items, &options, &LayoutConfig::default()).unwrap();
        let path = shortest_path(&graph).unwrap();

        assert_eq!(graph.breakpoints(&path.states), vec![0, 2]);
        //(420 - 296.25)^2 for the first row + 0.75^2 for the unused space
        assert!(approx_eq!(f64, path.cost, 15314.625, epsilon = 1e-6));
    }

    #[test]
    fn prefers_cheaper_detour() {
        let mut states = SlotMap::with_key();
        let end = states.insert(BreakState::new(None, 0.0));
        let mid = states.insert(BreakState::new(Some(1), 10.0));
        let source = states.insert(BreakState::new(Some(0), 20.0));
        states[source].edges = vec![
            BreakEdge { to: end, weight: 10.0 },
            BreakEdge { to: mid, weight: 3.0 },
        ];
        states[mid].edges = vec![BreakEdge { to: end, weight: 4.0 }];
        let graph = BreakpointGraph {
            states,
            source,
            end,
            ideal_row_height: 0.0,
        };

        let path = shortest_path(&graph).unwrap();
        assert_eq!(path.states, vec![source, mid, end]);
        assert_eq!(path.cost, 7.0);
    }

    #[test]
    fn unreachable_end() {
        let mut states = SlotMap::with_key();
        let end = states.insert(BreakState::new(None, 0.0));
        let source = states.insert(BreakState::new(Some(0), 20.0));
        let graph = BreakpointGraph {
            states,
            source,
            end,
            ideal_row_height: 0.0,
        };
        assert!(shortest_path(&graph).is_none());
    }
}
