//! WASM entry points for the editor frontend.

use wasm_bindgen::prelude::*;

use crate::graph::{self, GraphEdge};
use crate::graph::types::NodeType;
use crate::rules;
use crate::validate;
use crate::validate::connection::Verdict;

/// Validate a candidate connection against a graph snapshot JSON.
/// Returns a Verdict object `{valid, reason?}`. A snapshot that fails to
/// parse yields an invalid Verdict carrying the parse message, never a
/// thrown error.
#[wasm_bindgen]
pub fn validate_connection(source_id: &str, target_id: &str, graph_json: &str) -> JsValue {
    let verdict = validate_connection_inner(source_id, target_id, graph_json);
    serde_wasm_bindgen::to_value(&verdict).unwrap_or(JsValue::NULL)
}

fn validate_connection_inner(source_id: &str, target_id: &str, graph_json: &str) -> Verdict {
    let snapshot = match graph::parse_snapshot(graph_json) {
        Ok(s) => s,
        Err(e) => return Verdict::reject(e.to_string()),
    };

    let candidate = GraphEdge {
        source: source_id.to_string(),
        target: target_id.to_string(),
    };
    validate::check_connection(&candidate, &snapshot.nodes, &snapshot.edges)
}

/// True iff the node can accept one more incoming connection. False for
/// unparseable snapshots, missing nodes, and unrecognized types.
#[wasm_bindgen]
pub fn can_accept_input(node_id: &str, graph_json: &str) -> bool {
    let Ok(snapshot) = graph::parse_snapshot(graph_json) else {
        return false;
    };
    validate::can_accept_input(node_id, &snapshot.nodes, &snapshot.edges)
}

/// True iff the node can accept one more outgoing connection.
#[wasm_bindgen]
pub fn can_accept_output(node_id: &str, graph_json: &str) -> bool {
    let Ok(snapshot) = graph::parse_snapshot(graph_json) else {
        return false;
    };
    validate::can_accept_output(node_id, &snapshot.nodes, &snapshot.edges)
}

/// Describe one element type for the palette: display label, cardinality
/// bounds (null = unbounded), and whether it may begin/terminate a
/// pipeline. Returns null for tags outside the palette.
#[wasm_bindgen]
pub fn describe_type(type_tag: &str) -> JsValue {
    match NodeType::parse(type_tag) {
        Some(t) => serde_wasm_bindgen::to_value(&TypeRuleDto::from(t)).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}

/// Descriptors for every element type, in palette order.
#[wasm_bindgen]
pub fn element_types() -> JsValue {
    let all: Vec<TypeRuleDto> = NodeType::ALL.iter().map(|&t| TypeRuleDto::from(t)).collect();
    serde_wasm_bindgen::to_value(&all).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TypeRuleDto {
    #[serde(rename = "type")]
    type_tag: &'static str,
    label: &'static str,
    max_inputs: Option<u32>,
    max_outputs: Option<u32>,
    can_be_source: bool,
    can_be_sink: bool,
}

impl From<NodeType> for TypeRuleDto {
    fn from(t: NodeType) -> Self {
        let rule = rules::rule_for(t);
        TypeRuleDto {
            type_tag: t.tag(),
            label: t.label(),
            max_inputs: rule.max_inputs.bound(),
            max_outputs: rule.max_outputs.bound(),
            can_be_source: rule.can_be_source,
            can_be_sink: rule.can_be_sink,
        }
    }
}
