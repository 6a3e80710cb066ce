//! Rust types mirroring the editor's graph model.
//!
//! These types are the serde target for the frontend graph JSON.
//! SYNC NOTE: Keep the type tags aligned with the editor's node palette.
//! When element kinds change, also review `rules.rs` and the frontend
//! registry.

use serde::{Deserialize, Serialize};

// =============================================================================
// SNAPSHOT MODEL
// =============================================================================

/// One element on the canvas.
///
/// The type tag stays a `String` on the wire so an unrecognized tag still
/// deserializes and can be rejected fail-closed by the validator, instead of
/// failing the whole snapshot parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

/// A directed connection between two elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// Whole-graph snapshot as sent by the frontend on every validation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

// =============================================================================
// NODE TYPE — closed enumeration over 13 element kinds
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    // External connectors
    Source,
    Sink,
    // Data carriers
    Stream,
    Table,
    Trigger,
    // Processing stages
    Window,
    Filter,
    Projection,
    Aggregation,
    GroupBy,
    Join,
    Pattern,
    Partition,
}

impl NodeType {
    pub const ALL: [NodeType; 13] = [
        NodeType::Source,
        NodeType::Sink,
        NodeType::Stream,
        NodeType::Table,
        NodeType::Trigger,
        NodeType::Window,
        NodeType::Filter,
        NodeType::Projection,
        NodeType::Aggregation,
        NodeType::GroupBy,
        NodeType::Join,
        NodeType::Pattern,
        NodeType::Partition,
    ];

    /// Resolve a wire-level type tag. `None` for tags outside the palette;
    /// callers must treat that as an unconditional rejection.
    pub fn parse(tag: &str) -> Option<NodeType> {
        match tag {
            "source" => Some(NodeType::Source),
            "sink" => Some(NodeType::Sink),
            "stream" => Some(NodeType::Stream),
            "table" => Some(NodeType::Table),
            "trigger" => Some(NodeType::Trigger),
            "window" => Some(NodeType::Window),
            "filter" => Some(NodeType::Filter),
            "projection" => Some(NodeType::Projection),
            "aggregation" => Some(NodeType::Aggregation),
            "groupBy" => Some(NodeType::GroupBy),
            "join" => Some(NodeType::Join),
            "pattern" => Some(NodeType::Pattern),
            "partition" => Some(NodeType::Partition),
            _ => None,
        }
    }

    /// Wire-level tag, as the frontend serializes it.
    pub fn tag(self) -> &'static str {
        match self {
            NodeType::Source => "source",
            NodeType::Sink => "sink",
            NodeType::Stream => "stream",
            NodeType::Table => "table",
            NodeType::Trigger => "trigger",
            NodeType::Window => "window",
            NodeType::Filter => "filter",
            NodeType::Projection => "projection",
            NodeType::Aggregation => "aggregation",
            NodeType::GroupBy => "groupBy",
            NodeType::Join => "join",
            NodeType::Pattern => "pattern",
            NodeType::Partition => "partition",
        }
    }

    /// Display name used in user-facing rejection reasons.
    pub fn label(self) -> &'static str {
        match self {
            NodeType::Source => "Source",
            NodeType::Sink => "Sink",
            NodeType::Stream => "Stream",
            NodeType::Table => "Table",
            NodeType::Trigger => "Trigger",
            NodeType::Window => "Window",
            NodeType::Filter => "Filter",
            NodeType::Projection => "Projection",
            NodeType::Aggregation => "Aggregation",
            NodeType::GroupBy => "Group By",
            NodeType::Join => "Join",
            NodeType::Pattern => "Pattern",
            NodeType::Partition => "Partition",
        }
    }

    /// External connectors carry data across the pipeline boundary and obey
    /// the one-connector-per-stream exclusivity rule.
    pub fn is_connector(self) -> bool {
        matches!(self, NodeType::Source | NodeType::Sink)
    }
}
