//! Static structural contract per element type.
//! SYNC NOTE: Rows here must track `NodeType` in `src/graph/types.rs` and
//! the frontend node palette.

use crate::graph::types::NodeType;

/// Cardinality bound on one side of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Bounded(u32),
    Unbounded,
}

impl Cap {
    pub fn bound(self) -> Option<u32> {
        match self {
            Cap::Bounded(n) => Some(n),
            Cap::Unbounded => None,
        }
    }
}

/// Structural contract for one element type.
///
/// `can_be_source`/`can_be_sink` describe whether the type may legitimately
/// begin or terminate a pipeline; they inform the palette, not the
/// connection checks. `None` whitelists mean "no restriction beyond
/// cardinality".
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    pub max_inputs: Cap,
    pub max_outputs: Cap,
    pub can_be_source: bool,
    pub can_be_sink: bool,
    pub allowed_sources: Option<&'static [NodeType]>,
    pub allowed_targets: Option<&'static [NodeType]>,
}

static SOURCE: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(0),
    max_outputs: Cap::Bounded(1),
    can_be_source: true,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: Some(&[NodeType::Stream]),
};

static SINK: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(1),
    max_outputs: Cap::Bounded(0),
    can_be_source: false,
    can_be_sink: true,
    allowed_sources: Some(&[NodeType::Stream]),
    allowed_targets: None,
};

static STREAM: TypeRule = TypeRule {
    max_inputs: Cap::Unbounded,
    max_outputs: Cap::Unbounded,
    can_be_source: true,
    can_be_sink: true,
    allowed_sources: None,
    allowed_targets: None,
};

static TABLE: TypeRule = TypeRule {
    max_inputs: Cap::Unbounded,
    max_outputs: Cap::Unbounded,
    can_be_source: true,
    can_be_sink: true,
    allowed_sources: None,
    allowed_targets: Some(&[NodeType::Join]),
};

static TRIGGER: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(0),
    max_outputs: Cap::Unbounded,
    can_be_source: true,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: None,
};

static WINDOW: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(1),
    max_outputs: Cap::Unbounded,
    can_be_source: false,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: None,
};

static FILTER: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(1),
    max_outputs: Cap::Bounded(1),
    can_be_source: false,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: None,
};

static PROJECTION: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(1),
    max_outputs: Cap::Bounded(1),
    can_be_source: false,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: None,
};

static AGGREGATION: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(1),
    max_outputs: Cap::Unbounded,
    can_be_source: false,
    can_be_sink: true,
    allowed_sources: None,
    allowed_targets: None,
};

static GROUP_BY: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(1),
    max_outputs: Cap::Bounded(1),
    can_be_source: false,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: None,
};

static JOIN: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(2),
    max_outputs: Cap::Bounded(1),
    can_be_source: false,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: None,
};

static PATTERN: TypeRule = TypeRule {
    max_inputs: Cap::Unbounded,
    max_outputs: Cap::Bounded(1),
    can_be_source: false,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: None,
};

static PARTITION: TypeRule = TypeRule {
    max_inputs: Cap::Bounded(1),
    max_outputs: Cap::Unbounded,
    can_be_source: false,
    can_be_sink: false,
    allowed_sources: None,
    allowed_targets: None,
};

/// Look up the structural contract for an element type. Total over
/// `NodeType`; the exhaustive match keeps it that way at compile time.
pub fn rule_for(node_type: NodeType) -> &'static TypeRule {
    match node_type {
        NodeType::Source => &SOURCE,
        NodeType::Sink => &SINK,
        NodeType::Stream => &STREAM,
        NodeType::Table => &TABLE,
        NodeType::Trigger => &TRIGGER,
        NodeType::Window => &WINDOW,
        NodeType::Filter => &FILTER,
        NodeType::Projection => &PROJECTION,
        NodeType::Aggregation => &AGGREGATION,
        NodeType::GroupBy => &GROUP_BY,
        NodeType::Join => &JOIN,
        NodeType::Pattern => &PATTERN,
        NodeType::Partition => &PARTITION,
    }
}
