//! Cardinality checks, shared between the validator and the UI predicates.
//!
//! `can_accept_input`/`can_accept_output` drive handle dimming on the
//! canvas. Both go through the same `check` routine as the validator's
//! capacity steps, so the affordance logic cannot drift from the
//! authoritative decision.

use crate::graph::types::{GraphEdge, GraphNode, NodeType};
use crate::graph::view::GraphView;
use crate::rules::{self, Cap};
use crate::validate::connection::Rejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Input,
    Output,
}

/// Would one more edge on the given side of `node_id` stay within its
/// type's bound?
pub fn check(
    view: &GraphView,
    node_id: &str,
    node_type: NodeType,
    flow: Flow,
) -> Result<(), Rejection> {
    let rule = rules::rule_for(node_type);
    let (cap, count) = match flow {
        Flow::Input => (rule.max_inputs, view.incoming_count(node_id)),
        Flow::Output => (rule.max_outputs, view.outgoing_count(node_id)),
    };

    match cap {
        Cap::Unbounded => Ok(()),
        Cap::Bounded(max) if count < max as usize => Ok(()),
        Cap::Bounded(max) => Err(match flow {
            Flow::Input => Rejection::InputCapacity {
                label: node_type.label(),
                max,
            },
            Flow::Output => Rejection::OutputCapacity {
                label: node_type.label(),
                max,
            },
        }),
    }
}

/// True iff a hypothetical edge targeting `node_id` would not fail on
/// input-capacity grounds. Missing nodes and unrecognized types answer
/// false (fail-closed).
pub fn can_accept_input(node_id: &str, nodes: &[GraphNode], edges: &[GraphEdge]) -> bool {
    accepts(node_id, nodes, edges, Flow::Input)
}

/// Output-side counterpart of [`can_accept_input`].
pub fn can_accept_output(node_id: &str, nodes: &[GraphNode], edges: &[GraphEdge]) -> bool {
    accepts(node_id, nodes, edges, Flow::Output)
}

fn accepts(node_id: &str, nodes: &[GraphNode], edges: &[GraphEdge], flow: Flow) -> bool {
    let view = GraphView::build(nodes, edges);
    let Some(node) = view.node(node_id) else {
        return false;
    };
    let Some(node_type) = NodeType::parse(&node.node_type) else {
        return false;
    };
    check(&view, node_id, node_type, flow).is_ok()
}
