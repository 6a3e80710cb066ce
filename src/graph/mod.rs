//! Graph snapshot model and read-only accessor.

pub mod types;
pub mod view;

pub use types::*;
pub use view::GraphView;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to parse graph snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deserialize a graph snapshot JSON string into a `GraphSnapshot`.
pub fn parse_snapshot(json: &str) -> Result<GraphSnapshot, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}
