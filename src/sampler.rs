//! Bounded sampling of the state graph for display.
//!
//! This sits outside the solvers: it only needs [`State::neighbors`] and
//! produces a small [`TransitionGraph`] that can be rendered as Graphviz DOT.
use crate::engine::State;
use log::debug;
use std::collections::{HashSet, VecDeque};
use std::fmt::Write;

/// A fragment of the 8-puzzle transition graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionGraph {
    /// States in the order they were discovered; the sample's start comes first.
    pub nodes: Vec<State>,
    /// Directed `(from, to)` moves, grouped by source in expansion order.
    pub edges: Vec<(State, State)>,
}

impl TransitionGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Renders the graph as a Graphviz `digraph`.
    ///
    /// Nodes are keyed by their compact digit form and labelled with the 3x3
    /// grid. The first node is filled to mark where sampling started. Edges are
    /// drawn without arrowheads since every move can be undone.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph transitions {\n");
        out.push_str("    node [shape=box, fontname=\"monospace\"];\n");
        out.push_str("    edge [dir=none];\n");

        for (i, state) in self.nodes.iter().enumerate() {
            let label = state.to_string().replace('\n', "\\n");
            let style = if i == 0 { ", style=filled" } else { "" };
            // Writing into a String cannot fail.
            let _ = writeln!(
                out,
                "    \"{}\" [label=\"{}\"{}];",
                state.to_compact(),
                label,
                style
            );
        }
        for (from, to) in &self.edges {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\";",
                from.to_compact(),
                to.to_compact()
            );
        }

        out.push_str("}\n");
        out
    }
}

/// Breadth-first sample of the states around `start`.
///
/// States are expanded in FIFO order while the queue is non-empty and fewer
/// than `limit` new states have been discovered. Every expanded state
/// contributes an edge to each of its neighbors, and each neighbor not seen
/// before is counted and queued. The check happens between expansions, so the
/// final expansion may push the discovery count somewhat past `limit`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::State;
/// use eight_puzzle_solver::sampler::sample_graph;
///
/// let graph = sample_graph(&State::goal(), 20);
/// assert!(graph.node_count() > 20);
/// assert!(graph.to_dot().starts_with("digraph"));
/// ```
pub fn sample_graph(start: &State, limit: usize) -> TransitionGraph {
    let mut graph = TransitionGraph {
        nodes: vec![*start],
        edges: Vec::new(),
    };
    let mut visited = HashSet::from([*start]);
    let mut queue = VecDeque::from([*start]);
    let mut count = 0;

    while count < limit {
        let Some(current) = queue.pop_front() else {
            break;
        };
        for next in current.neighbors() {
            graph.edges.push((current, next));
            if visited.insert(next) {
                graph.nodes.push(next);
                queue.push_back(next);
                count += 1;
            }
        }
    }

    debug!(
        "sample_graph: {} nodes, {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        start.to_compact()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_zero_limit() {
        let start = State::goal();
        let graph = sample_graph(&start, 0);
        assert_eq!(graph.nodes, vec![start]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_sample_single_expansion() {
        let start = State::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let graph = sample_graph(&start, 1);
        // One expansion of a centre blank reaches all four neighbors.
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(&graph.nodes[1..], start.neighbors().as_slice());
        assert!(graph.edges.iter().all(|(from, _)| *from == start));
    }

    #[test]
    fn test_sample_respects_limit() {
        let start = State::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        for limit in [5, 20, 50] {
            let graph = sample_graph(&start, limit);
            let discovered = graph.node_count() - 1;
            assert!(discovered >= limit);
            // At most one expansion overshoots, adding at most 3 new states.
            assert!(discovered < limit + 4, "limit {} gave {}", limit, discovered);
        }
    }

    #[test]
    fn test_sample_edges_are_moves_between_nodes() {
        let graph = sample_graph(&State::goal(), 20);
        let nodes: HashSet<State> = graph.nodes.iter().copied().collect();
        assert_eq!(nodes.len(), graph.node_count(), "nodes must be distinct");
        for (from, to) in &graph.edges {
            assert!(nodes.contains(from) && nodes.contains(to));
            assert!(from.neighbors().contains(to));
        }
    }

    #[test]
    fn test_to_dot() {
        let start = State::goal();
        let graph = sample_graph(&start, 1);
        let dot = graph.to_dot();
        assert!(dot.starts_with("digraph transitions {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("\"123456780\" [label=\"1 2 3\\n4 5 6\\n7 8 .\", style=filled];"));
        assert!(dot.contains("\"123456780\" -> \"123450786\";"));
        assert!(dot.contains("\"123456780\" -> \"123456708\";"));
        assert_eq!(dot.matches(" -> ").count(), graph.edge_count());
    }
}
