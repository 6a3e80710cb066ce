//! The connection decision procedure.
//!
//! Checks run in a fixed order and the first failure wins, so the reason a
//! user sees is stable: existence, duplicate, output capacity, input
//! capacity, target whitelist, source whitelist, connector exclusivity on
//! streams, self-loop. A resubmitted edge always reads as a duplicate even
//! when its endpoints sit at a cardinality bound, and capacity violations
//! are reported before whitelist violations; the ordering is an observable
//! contract, covered by tests.

use serde::Serialize;

use crate::graph::types::{GraphEdge, GraphNode, NodeType};
use crate::graph::view::GraphView;
use crate::rules;
use crate::validate::capacity::{self, Flow};

/// Outcome of validating one candidate edge. `reason` is populated only on
/// rejection, for display to the user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Verdict {
    pub fn admit() -> Self {
        Verdict {
            valid: true,
            reason: None,
        }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Verdict {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

impl From<Result<(), Rejection>> for Verdict {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Verdict::admit(),
            Err(rejection) => Verdict::reject(rejection.to_string()),
        }
    }
}

/// Every way a candidate edge can be refused. All rejections are
/// recoverable, user-visible decisions; none is a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    SourceNotFound(String),
    TargetNotFound(String),
    UnknownType {
        node_id: String,
        type_tag: String,
    },
    OutputCapacity {
        label: &'static str,
        max: u32,
    },
    InputCapacity {
        label: &'static str,
        max: u32,
    },
    TargetNotAllowed {
        source_label: &'static str,
        target_label: &'static str,
    },
    SourceNotAllowed {
        source_label: &'static str,
        target_label: &'static str,
    },
    Duplicate,
    /// A stream already paired with one external connector refuses another.
    ConnectorConflict {
        attached_label: &'static str,
    },
    SelfLoop,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::SourceNotFound(id) => {
                write!(f, "Source element '{}' does not exist", id)
            }
            Rejection::TargetNotFound(id) => {
                write!(f, "Target element '{}' does not exist", id)
            }
            Rejection::UnknownType { node_id, type_tag } => {
                write!(f, "Element '{}' has unrecognized type '{}'", node_id, type_tag)
            }
            Rejection::OutputCapacity { label, max: 0 } => {
                write!(f, "{} cannot have output connections", label)
            }
            Rejection::OutputCapacity { label, max: 1 } => {
                write!(f, "{} can only have 1 output connection", label)
            }
            Rejection::OutputCapacity { label, max } => {
                write!(f, "{} can only have {} output connections", label, max)
            }
            Rejection::InputCapacity { label, max: 0 } => {
                write!(f, "{} cannot have input connections", label)
            }
            Rejection::InputCapacity { label, max: 1 } => {
                write!(f, "{} can only have 1 input connection", label)
            }
            Rejection::InputCapacity { label, max } => {
                write!(f, "{} can only have {} input connections", label, max)
            }
            Rejection::TargetNotAllowed {
                source_label,
                target_label,
            } => {
                write!(f, "{} cannot connect to {}", source_label, target_label)
            }
            Rejection::SourceNotAllowed {
                source_label,
                target_label,
            } => {
                write!(
                    f,
                    "{} cannot accept a connection from {}",
                    target_label, source_label
                )
            }
            Rejection::Duplicate => write!(f, "These elements are already connected"),
            Rejection::ConnectorConflict { attached_label } => {
                write!(f, "Stream already has a {} connected", attached_label)
            }
            Rejection::SelfLoop => write!(f, "Cannot connect an element to itself"),
        }
    }
}

/// Decide whether `candidate` may be added to the graph described by
/// `nodes` and `edges`. Pure; the snapshot is never mutated.
pub fn check_connection(
    candidate: &GraphEdge,
    nodes: &[GraphNode],
    edges: &[GraphEdge],
) -> Verdict {
    let view = GraphView::build(nodes, edges);
    Verdict::from(run_checks(candidate, &view))
}

fn run_checks(candidate: &GraphEdge, view: &GraphView) -> Result<(), Rejection> {
    // 1. Both endpoints must exist in the snapshot.
    let source = view
        .node(&candidate.source)
        .ok_or_else(|| Rejection::SourceNotFound(candidate.source.clone()))?;
    let target = view
        .node(&candidate.target)
        .ok_or_else(|| Rejection::TargetNotFound(candidate.target.clone()))?;

    // Unrecognized type tags reject unconditionally (fail-closed).
    let source_type = resolve_type(source)?;
    let target_type = resolve_type(target)?;

    // 2. No duplicate (source, target) pair. Checked before the capacity
    //    steps: a committed edge counts toward its endpoints' bounds, and a
    //    resubmission must read as a duplicate, not as exhausted capacity.
    if view.has_edge(&candidate.source, &candidate.target) {
        return Err(Rejection::Duplicate);
    }

    // 3–4. Cardinality bounds, output side first.
    capacity::check(view, &candidate.source, source_type, Flow::Output)?;
    capacity::check(view, &candidate.target, target_type, Flow::Input)?;

    // 5. Source type's target whitelist.
    if let Some(allowed) = rules::rule_for(source_type).allowed_targets {
        if !allowed.contains(&target_type) {
            return Err(Rejection::TargetNotAllowed {
                source_label: source_type.label(),
                target_label: target_type.label(),
            });
        }
    }

    // 6. Target type's source whitelist.
    if let Some(allowed) = rules::rule_for(target_type).allowed_sources {
        if !allowed.contains(&source_type) {
            return Err(Rejection::SourceNotAllowed {
                source_label: source_type.label(),
                target_label: target_type.label(),
            });
        }
    }

    // 7. Connector exclusivity, checked from both endpoints since the edge
    //    can be proposed in either direction.
    connector_exclusivity(candidate, view, source_type, target_type)?;

    // 8. No self-loops.
    if candidate.source == candidate.target {
        return Err(Rejection::SelfLoop);
    }

    Ok(())
}

fn resolve_type(node: &GraphNode) -> Result<NodeType, Rejection> {
    NodeType::parse(&node.node_type).ok_or_else(|| Rejection::UnknownType {
        node_id: node.id.clone(),
        type_tag: node.node_type.clone(),
    })
}

/// A stream pairs with at most one external connector, and that connector
/// is exclusively a Source or exclusively a Sink.
fn connector_exclusivity(
    candidate: &GraphEdge,
    view: &GraphView,
    source_type: NodeType,
    target_type: NodeType,
) -> Result<(), Rejection> {
    let stream_id = if source_type.is_connector() && target_type == NodeType::Stream {
        &candidate.target
    } else if source_type == NodeType::Stream && target_type.is_connector() {
        &candidate.source
    } else {
        return Ok(());
    };

    let attached = view
        .neighbors(stream_id)
        .into_iter()
        .filter_map(|n| NodeType::parse(&n.node_type))
        .find(|t| t.is_connector());

    match attached {
        Some(connector) => Err(Rejection::ConnectorConflict {
            attached_label: connector.label(),
        }),
        None => Ok(()),
    }
}
