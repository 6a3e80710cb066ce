//! petgraph-based read-only view over a graph snapshot.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{GraphEdge, GraphNode};

/// Read-only queries over one snapshot of the canvas.
///
/// Rebuilt from the supplied collections on every validation call; holds no
/// state of its own. Edges whose endpoints do not resolve to a node in the
/// snapshot are skipped — the validator judges only the candidate edge, and
/// a stale edge in the committed graph must not poison every later call.
pub struct GraphView<'a> {
    graph: DiGraph<&'a GraphNode, ()>,
    indices: HashMap<&'a str, NodeIndex>,
}

impl<'a> GraphView<'a> {
    pub fn build(nodes: &'a [GraphNode], edges: &'a [GraphEdge]) -> Self {
        let mut graph = DiGraph::new();
        let mut indices = HashMap::new();

        for node in nodes {
            let idx = graph.add_node(node);
            indices.insert(node.id.as_str(), idx);
        }

        for edge in edges {
            if let (Some(&s), Some(&t)) = (
                indices.get(edge.source.as_str()),
                indices.get(edge.target.as_str()),
            ) {
                graph.add_edge(s, t, ());
            }
        }

        GraphView { graph, indices }
    }

    pub fn node(&self, node_id: &str) -> Option<&'a GraphNode> {
        self.indices.get(node_id).map(|&idx| self.graph[idx])
    }

    /// Number of committed edges whose target is `node_id`.
    pub fn incoming_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.indices.get(node_id) else {
            return 0;
        };
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// Number of committed edges whose source is `node_id`.
    pub fn outgoing_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.indices.get(node_id) else {
            return 0;
        };
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.indices.get(source), self.indices.get(target)) {
            (Some(&s), Some(&t)) => self.graph.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    pub fn predecessors(&self, node_id: &str) -> Vec<&'a GraphNode> {
        let Some(&idx) = self.indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .map(|n| self.graph[n])
            .collect()
    }

    pub fn successors(&self, node_id: &str) -> Vec<&'a GraphNode> {
        let Some(&idx) = self.indices.get(node_id) else {
            return vec![];
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n])
            .collect()
    }

    /// All nodes connected to `node_id` in either direction.
    pub fn neighbors(&self, node_id: &str) -> Vec<&'a GraphNode> {
        let mut all = self.predecessors(node_id);
        all.extend(self.successors(node_id));
        all
    }
}
