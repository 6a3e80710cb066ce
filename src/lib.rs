pub mod graph;
pub mod rules;
pub mod validate;
pub mod wasm;
