//! Connection admissibility checks for the editor canvas.
//!
//! Every check is a pure function of (candidate edge, node snapshot, edge
//! snapshot); nothing here holds graph state between calls.

pub mod capacity;
pub mod connection;

pub use capacity::{can_accept_input, can_accept_output};
pub use connection::{Rejection, Verdict, check_connection};
