use validator::graph::{GraphEdge, GraphNode};
use validator::validate::Verdict;
use validator::validate::check_connection;

pub fn node(id: &str, node_type: &str) -> GraphNode {
    GraphNode {
        id: id.into(),
        node_type: node_type.into(),
    }
}

pub fn edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge {
        source: source.into(),
        target: target.into(),
    }
}

/// Validate `source -> target` against the given snapshot.
pub fn check(source: &str, target: &str, nodes: &[GraphNode], edges: &[GraphEdge]) -> Verdict {
    check_connection(&edge(source, target), nodes, edges)
}

pub fn assert_admitted(verdict: &Verdict) {
    assert!(verdict.valid, "Expected admit, got: {:?}", verdict.reason);
    assert!(verdict.reason.is_none());
}

pub fn assert_rejected(verdict: &Verdict, expected_fragment: &str) {
    assert!(!verdict.valid, "Expected rejection, got admit");
    let reason = verdict.reason.as_deref().unwrap_or_default();
    assert!(
        reason.contains(expected_fragment),
        "Expected reason containing '{}', got: '{}'",
        expected_fragment,
        reason
    );
}
